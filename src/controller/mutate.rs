use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, UrlSearchParams};

use super::Controller;
use crate::{
    api::Body,
    error::Result,
    model::{Connection, Course, Exercise},
    view::{ids, Encoding, FormRequest, Target, Ticket, View},
};

impl Controller {
    /// Warn, delete `target`, report the deleted record by name and show the list it was in.
    pub(super) fn delete(self: &Rc<Self>, target: Target) {
        let Some(ticket) = self.navigation.borrow_mut().begin_mutation() else {
            log::warn!("ignoring delete of {target:?}, another change is pending");
            return;
        };

        // Advisory only: acknowledging the alert proceeds.
        self.page.alert(target.warning());
        self.set_loading(true);

        let controller = Rc::clone(self);
        spawn_local(async move {
            let result = controller.remove(target).await;
            controller.navigation.borrow_mut().end_mutation(&ticket);

            match result {
                Ok(name) => {
                    controller.page.alert(&target.deleted_message(&name));
                    controller.after_mutation(&ticket, target.then());
                }
                Err(error) => controller.finish_mutation(&ticket, Err(error)),
            }
        });
    }

    /// Send the delete request, returning the name of the deleted record.
    async fn remove(&self, target: Target) -> Result<String> {
        let endpoint = target.endpoint();

        // Never aborted: the backend may already have acted on it.
        Ok(match target {
            Target::Course(_) => self.fetch::<Course>(endpoint, None).await?.name,
            Target::Exercise { .. } => self.fetch::<Exercise>(endpoint, None).await?.context.name,
            Target::Connection(_) => self.fetch::<Connection>(endpoint, None).await?.name,
        })
    }

    /// Post the form described by `request` and show its follow-up view once accepted.
    pub(super) fn submit(self: &Rc<Self>, request: FormRequest) {
        let Some(ticket) = self.navigation.borrow_mut().begin_mutation() else {
            log::warn!("ignoring {:?} submit, another change is pending", request.slot);
            return;
        };

        let body = match self.form_body(&request) {
            Ok(body) => body,
            Err(error) => {
                self.navigation.borrow_mut().end_mutation(&ticket);
                self.finish_mutation(&ticket, Err(error));
                return;
            }
        };

        if request.reboot {
            self.set_overlay(ids::OVERLAY_REBOOT, true);
        } else {
            self.set_loading(true);
        }

        let controller = Rc::clone(self);
        spawn_local(async move {
            let result = controller.client.post(request.endpoint, &body, None).await;
            controller.navigation.borrow_mut().end_mutation(&ticket);

            match result {
                Ok(_) => controller.after_mutation(&ticket, request.then),
                Err(error) => controller.finish_mutation(&ticket, Err(error.into())),
            }
        });
    }

    fn form_body(&self, request: &FormRequest) -> Result<Body> {
        let form = self.page.form(request.slot.panel())?;
        let data = FormData::new_with_form(&form)?;

        Ok(match request.encoding {
            Encoding::Multipart => Body::Multipart(data),
            Encoding::UrlEncoded => {
                Body::UrlEncoded(UrlSearchParams::new_with_str_sequence_sequence(&data)?)
            }
        })
    }

    /// Follow a successful change with `then`, unless the user has since moved on.
    fn after_mutation(self: &Rc<Self>, ticket: &Ticket, then: View) {
        if self.is_current(ticket) {
            self.show(then);
        } else {
            log::debug!("change from {} done, staying on current view", ticket.view());
        }
    }
}
