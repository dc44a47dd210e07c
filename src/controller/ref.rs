use std::{cell::RefCell, rc::Rc};

use super::Controller;

/// Late bound reference to the [`Controller`]. The event registry has to exist before the
/// controller does, so its dispatch closure holds one of these, which is filled in once the
/// controller has been constructed.
#[derive(Clone, Default)]
pub struct ControllerRef(Rc<RefCell<Option<Rc<Controller>>>>);

impl ControllerRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_with(&self, controller: &Rc<Controller>) {
        *self.0.borrow_mut() = Some(Rc::clone(controller));
    }

    /// The controller, once constructed. The inner borrow is released before returning, so the
    /// caller may freely re-enter.
    pub fn get_ref(&self) -> Option<Rc<Controller>> {
        self.0.borrow().as_ref().map(Rc::clone)
    }
}
