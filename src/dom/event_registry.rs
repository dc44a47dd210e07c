use js_sys::Function;
use std::{cell::RefCell, collections::HashMap, hash::Hash, rc::Rc};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

use crate::error::Result;

/// Callback invoked with the action bound to a fired listener.
pub type DispatchFn<A> = Rc<dyn Fn(A)>;

/// A registry of [`js_sys::Function`]s, caching created closures for a given event type and
/// action. Re-rendering a list re-binds the same actions, so the closures are created once and
/// shared between every node that triggers them.
///
/// Entries are never evicted. Actions that carry record ids add one closure per record shown
/// during the page session, so the cache grows with the number of distinct records rather than
/// with the number of renders.
pub struct EventRegistry<A> {
    /// Cached closures.
    closures: RefCell<HashMap<(String, A), Function>>,

    /// Shared reference to a callback function, which will be called when one of the closures is
    /// called.
    dispatch: DispatchFn<A>,
}

impl<A> EventRegistry<A>
where
    A: 'static + Clone + Eq + Hash,
{
    /// Create a new registry, returning a shared reference.
    pub fn new<F>(dispatch: F) -> Rc<Self>
    where
        F: 'static + Fn(A),
    {
        Rc::new(Self {
            closures: RefCell::new(HashMap::new()),
            dispatch: Rc::new(dispatch),
        })
    }

    /// Get or create a closure for the provided event type and action. The closure cancels the
    /// browser's default handling (link navigation, form submission) before dispatching.
    pub fn get(&self, event_type: &str, action: A) -> Function {
        self.closures
            .borrow_mut()
            .entry((event_type.to_string(), action.clone()))
            .or_insert_with(|| {
                let dispatch = Rc::clone(&self.dispatch);

                Closure::<dyn Fn(Event)>::new(move |event: Event| {
                    event.prevent_default();
                    dispatch(action.clone());
                })
                .into_js_value()
                .unchecked_into()
            })
            .clone()
    }

    /// Attach the listener for `action` to `target`. Binding the same action twice to one target
    /// is a no-op, as the browser de-duplicates identical listeners.
    pub fn bind(&self, target: &EventTarget, event_type: &str, action: A) -> Result<()> {
        let listener = self.get(event_type, action);
        target.add_event_listener_with_callback(event_type, &listener)?;

        Ok(())
    }
}
