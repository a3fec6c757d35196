//! Single-threaded shared ownership of a controller for event callbacks.
//!
//! Browser callbacks each hold a clone of [`SharedController`]. A callback
//! that fires while another transition is still running (a listener toggling
//! from inside a change notification) is refused with [`ThemeError::Busy`]
//! instead of panicking on the `RefCell`.

#[cfg(test)]
#[path = "shared_test.rs"]
mod shared_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;

use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::host::{MediaPreference, PreferenceStorage, ThemeDocument, ThemeEventSink};
use crate::input::{InputOutcome, ThemeInput};
use crate::theme::{Theme, ThemeChange};

pub struct SharedController<S, M, D> {
    inner: Rc<RefCell<ThemeController<S, M, D>>>,
}

impl<S, M, D> Clone for SharedController<S, M, D> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S, M, D> SharedController<S, M, D>
where
    S: PreferenceStorage,
    M: MediaPreference,
    D: ThemeDocument + ThemeEventSink,
{
    pub fn new(controller: ThemeController<S, M, D>) -> Self {
        Self { inner: Rc::new(RefCell::new(controller)) }
    }

    /// Run `f` with exclusive access, or fail with `Busy` if a transition is
    /// already in progress further up the stack.
    pub fn with<T>(&self, f: impl FnOnce(&mut ThemeController<S, M, D>) -> T) -> Result<T, ThemeError> {
        let mut controller = self.inner.try_borrow_mut().map_err(|_| ThemeError::Busy)?;
        Ok(f(&mut controller))
    }

    /// Feed an input event; a refused event is logged and ignored.
    pub fn handle_input(&self, input: ThemeInput) -> InputOutcome {
        match self.with(|c| c.handle_input(input)) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("theme input dropped: {e}");
                InputOutcome::ignored()
            }
        }
    }

    pub fn toggle(&self) -> Result<ThemeChange, ThemeError> {
        self.with(ThemeController::toggle)
    }

    pub fn set(&self, theme: Theme) -> Result<ThemeChange, ThemeError> {
        self.with(|c| c.set(theme))
    }

    pub fn current(&self) -> Result<Theme, ThemeError> {
        let controller = self.inner.try_borrow().map_err(|_| ThemeError::Busy)?;
        Ok(controller.current())
    }
}
