use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::config::ThemeConfig;
use crate::host::memory::{MemoryDocument, MemoryMedia, MemoryStorage};

type MemoryShared = SharedController<MemoryStorage, MemoryMedia, MemoryDocument>;

fn shared() -> MemoryShared {
    let controller = ThemeController::from_host(
        MemoryStorage::new(),
        MemoryMedia::new(),
        MemoryDocument::new(),
        ThemeConfig::default(),
    );
    SharedController::new(controller)
}

#[test]
fn clones_drive_the_same_controller() {
    let a = shared();
    let b = a.clone();
    a.toggle().unwrap();
    assert_eq!(b.current().unwrap(), Theme::Dark);
}

#[test]
fn reentrant_toggle_is_refused() {
    let shared = shared();
    let nested: Rc<RefCell<Option<Result<ThemeChange, ThemeError>>>> = Rc::new(RefCell::new(None));

    let inner = shared.clone();
    let slot = Rc::clone(&nested);
    shared
        .with(|c| {
            c.subscribe(move |_| {
                *slot.borrow_mut() = Some(inner.toggle());
            })
        })
        .unwrap();

    let change = shared.toggle().unwrap();
    assert_eq!(change.theme, Theme::Dark);
    assert!(matches!(*nested.borrow(), Some(Err(ThemeError::Busy))));
    assert_eq!(shared.current().unwrap(), Theme::Dark);
}

#[test]
fn refused_input_is_ignored() {
    let shared = shared();
    let outcome = Rc::new(RefCell::new(None));

    let inner = shared.clone();
    let slot = Rc::clone(&outcome);
    shared
        .with(|c| {
            c.subscribe(move |_| {
                *slot.borrow_mut() = Some(inner.handle_input(ThemeInput::ToggleControlClick));
            })
        })
        .unwrap();

    shared.set(Theme::Dark).unwrap();
    assert_eq!(*outcome.borrow(), Some(InputOutcome::ignored()));
}
