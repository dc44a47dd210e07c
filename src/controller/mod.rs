mod mutate;
mod r#ref;
mod render;

pub use self::r#ref::ControllerRef;

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal, Document, Window};

use crate::{
    api::ApiClient,
    config::Config,
    dom::{EventRegistry, Page},
    error::{Error, Result},
    view::{ids, plan, Action, FormSlot, Navigation, Step, Ticket, View},
};

/// The view controller. Owns the navigation state and turns [`Action`]s coming from the DOM
/// into requests and renders.
///
/// Work started for a view carries the [`Ticket`] of that transition. Once a newer transition
/// begins, the old ticket is stale: its fetches are aborted and whatever still completes is
/// dropped without touching the page.
pub struct Controller {
    page: Page,
    client: ApiClient,
    config: Rc<Config>,

    navigation: RefCell<Navigation>,

    /// Aborts the fetches of the current transition.
    inflight: RefCell<Option<AbortController>>,

    /// Shared by every listener the controller binds. Cached closures make re-rendering a list
    /// cheap.
    event_registry: Rc<EventRegistry<Action>>,
}

impl Controller {
    /// Create a new controller, returning a shared reference to the controller.
    pub fn new(window: &Window, document: &Document, config: Config) -> Rc<Self> {
        let config = Rc::new(config);

        // Initially empty, the controller is swapped in once constructed.
        let controller_reference = ControllerRef::new();

        let event_registry = EventRegistry::new({
            let controller_reference = controller_reference.clone();

            move |action| {
                if let Some(controller) = controller_reference.get_ref() {
                    controller.dispatch(action);
                }
            }
        });

        let controller = Rc::new(Self {
            page: Page::new(window, document),
            client: ApiClient::new(window, Rc::clone(&config)),
            config,
            navigation: RefCell::new(Navigation::new()),
            inflight: RefCell::new(None),
            event_registry,
        });

        controller_reference.replace_with(&controller);

        controller
    }

    /// Bind the persistent controls and the static forms of the template. Controls missing from
    /// the template are reported and skipped.
    pub fn bind(&self) -> Result<()> {
        let controls = [
            (ids::HOME_BUTTON, Action::Home),
            (ids::BACK_BUTTON, Action::Back),
            (ids::REFRESH_BUTTON, Action::Refresh),
            (ids::SETTINGS_BUTTON, Action::Show(View::Settings)),
            (ids::XML_BUTTON, Action::Show(View::Xml)),
            (ids::HELP_BUTTON, Action::Help),
            (ids::COURSE_NEW_BUTTON, Action::Show(View::CourseNew)),
            (ids::EXERCISE_NEW_BUTTON, Action::NewExercise),
            (ids::CONNECTION_NEW_BUTTON, Action::Show(View::ConnectionNew)),
        ];

        for (selector, action) in controls {
            if self
                .page
                .bind(&self.event_registry, selector, "click", action)?
                == 0
            {
                log::warn!("template has no `{selector}`");
            }
        }

        for slot in FormSlot::ALL {
            match self.page.form(slot.panel()) {
                Ok(form) => self
                    .event_registry
                    .bind(&form, "submit", Action::Submit(slot))?,
                Err(error) => log::warn!("{error}"),
            }
        }

        Ok(())
    }

    /// Entry point of every listener.
    pub fn dispatch(self: &Rc<Self>, action: Action) {
        log::debug!("{action:?}");

        if action.shows_loading() {
            self.set_loading(true);
        }

        let step = plan(&self.navigation.borrow(), action);

        match step {
            Step::Render(view) => self.show(view),
            Step::Delete(target) => self.delete(target),
            Step::Submit(request) => self.submit(request),
            Step::Open(endpoint) => self.open(&self.client.url(endpoint)),
            Step::Help => self.open(&self.config.documentation),
            Step::Ignore => {
                log::warn!(
                    "{action:?} does not apply to {}",
                    self.navigation.borrow().current()
                );
                self.set_loading(false);
            }
        }
    }

    /// Transition to `view`: supersede whatever is in flight, then fetch and render.
    pub fn show(self: &Rc<Self>, view: View) {
        let ticket = self.navigation.borrow_mut().begin(view);
        let signal = self.restart_inflight();

        log::debug!("showing {view} (#{})", ticket.generation());
        self.set_loading(true);

        let controller = Rc::clone(self);
        spawn_local(async move {
            let result = controller.render(ticket, signal.as_ref()).await;
            controller.finish(&ticket, result);
        });
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.navigation.borrow().is_current(ticket)
    }

    /// Abort the fetches of the previous transition and hand out the signal for the next one.
    fn restart_inflight(&self) -> Option<AbortSignal> {
        let mut inflight = self.inflight.borrow_mut();

        if let Some(previous) = inflight.take() {
            previous.abort();
        }

        match AbortController::new() {
            Ok(controller) => {
                let signal = controller.signal();
                *inflight = Some(controller);
                Some(signal)
            }
            Err(error) => {
                log::warn!("requests cannot be cancelled: {error:?}");
                None
            }
        }
    }

    /// Route the outcome of the render started under `ticket`.
    fn finish(&self, ticket: &Ticket, result: Result<()>) {
        self.settle(ticket, result, false);
    }

    /// Route the outcome of a create, update or delete started under `ticket`.
    fn finish_mutation(&self, ticket: &Ticket, result: Result<()>) {
        self.settle(ticket, result, true);
    }

    fn settle(&self, ticket: &Ticket, result: Result<()>, mutation: bool) {
        let Err(error) = result else {
            return;
        };

        if error.is_aborted() {
            log::debug!("{} aborted", ticket.view());
            return;
        }

        if !self.navigation.borrow().should_alert(ticket, mutation) {
            log::warn!("dropping failure of stale {}: {error}", ticket.view());
            return;
        }

        if self.is_current(ticket) {
            self.fail(&error);
        } else {
            // The overlays now belong to the view the user moved on to.
            self.report(&error);
        }
    }

    /// The one failure handler: tell the user, take every overlay down.
    fn fail(&self, error: &Error) {
        self.report(error);
        self.hide_overlays();
    }

    fn report(&self, error: &Error) {
        log::error!("{error}");

        let message = match error {
            Error::Api(error) => error.alert_message(),
            error => error.to_string(),
        };
        self.page.alert(&message);
    }

    fn open(&self, url: &str) {
        if let Err(error) = self.page.open(url) {
            self.fail(&error);
        }
    }

    fn set_overlay(&self, id: &str, visible: bool) {
        if let Err(error) = self.page.set_display_by_id(id, visible) {
            log::warn!("{error}");
        }
    }

    fn set_loading(&self, visible: bool) {
        self.set_overlay(ids::OVERLAY_LOADING, visible);
    }

    fn hide_overlays(&self) {
        let result = self
            .page
            .select_all(ids::OVERLAYS)
            .and_then(|overlays| {
                overlays
                    .iter()
                    .try_for_each(|overlay| self.page.set_display(overlay, false))
            });

        if let Err(error) = result {
            log::warn!("{error}");
        }
    }
}
