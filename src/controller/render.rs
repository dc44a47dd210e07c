use serde::de::DeserializeOwned;
use web_sys::{AbortSignal, Element};

use super::Controller;
use crate::{
    api::Endpoint,
    dom::{render_list, FragmentBuilder},
    error::Result,
    model::{Connection, ConnectionId, Course, CourseId, Exercise, ExerciseId, XmlDocuments},
    view::{
        connection_fields, course_fields, exercise_fields, ids, rows, Action, FieldValues, Ticket,
        View,
    },
};

const XML_WARNING: &str = "Warning:\nModifying the raw XML can lead to a corrupted state or \
    configuration, resulting in a non-functioning grit.\nBe careful!";

impl Controller {
    /// Fetch what `ticket`'s view needs and, if the ticket is still current, put it on the page.
    pub(super) async fn render(&self, ticket: Ticket, signal: Option<&AbortSignal>) -> Result<()> {
        match ticket.view() {
            View::CourseList => self.course_list(ticket, signal).await,
            View::CourseNew => self.course_form(ticket, None, signal).await,
            View::CourseEdit { course } => self.course_form(ticket, Some(course), signal).await,
            View::Course { course } => self.course_show(ticket, course, signal).await,
            View::ExerciseNew { course } => self.exercise_form(ticket, course, None, signal).await,
            View::ExerciseEdit { course, exercise } => {
                self.exercise_form(ticket, course, Some(exercise), signal).await
            }
            View::Settings => self.connection_list(ticket, signal).await,
            View::ConnectionNew => self.connection_form(ticket, None, signal).await,
            View::ConnectionEdit { connection } => {
                self.connection_form(ticket, Some(connection), signal).await
            }
            View::Xml => self.xml(ticket, signal).await,
        }
    }

    pub(super) async fn fetch<T>(
        &self,
        endpoint: Endpoint,
        signal: Option<&AbortSignal>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(self.client.get_json(endpoint, signal).await?)
    }

    async fn course_list(&self, ticket: Ticket, signal: Option<&AbortSignal>) -> Result<()> {
        let courses: Vec<Course> = self.fetch(Endpoint::CourseList, signal).await?;

        if !self.is_current(&ticket) {
            return Ok(());
        }

        let count = self.render_rows(
            &self.page.element(ids::COURSES)?,
            rows::course_entries(&courses),
        )?;
        log::debug!("{count} courses");

        self.present(&ticket, ticket.view().sub_panel())
    }

    async fn course_form(
        &self,
        ticket: Ticket,
        course: Option<CourseId>,
        signal: Option<&AbortSignal>,
    ) -> Result<()> {
        let course: Option<Course> = match course {
            Some(course) => Some(self.fetch(Endpoint::CourseRead(course), signal).await?),
            None => None,
        };

        if !self.is_current(&ticket) {
            return Ok(());
        }

        let form = ticket.view().panel();
        self.fill(course_fields(form, course.as_ref()))?;

        self.present(&ticket, ticket.view().sub_panel())
    }

    /// Heading of the course plus its exercise table.
    async fn course_show(
        &self,
        ticket: Ticket,
        course: CourseId,
        signal: Option<&AbortSignal>,
    ) -> Result<()> {
        let heading: Course = self.fetch(Endpoint::CourseRead(course), signal).await?;
        let exercises: Vec<Exercise> = self.fetch(Endpoint::ExerciseList(course), signal).await?;

        if !self.is_current(&ticket) {
            return Ok(());
        }

        self.page.set_text(ids::COURSE_SHOW_NAME, &heading.name)?;

        let count = self.render_rows(
            &self.page.select(&ids::table(ids::EXERCISE_LIST))?,
            rows::exercise_table(course, &exercises),
        )?;
        log::debug!("{} exercises in course {course}", count - 1);

        self.present(&ticket, ticket.view().sub_panel())
    }

    async fn exercise_form(
        &self,
        ticket: Ticket,
        course: CourseId,
        exercise: Option<ExerciseId>,
        signal: Option<&AbortSignal>,
    ) -> Result<()> {
        let connections: Vec<Connection> = self.fetch(Endpoint::ConnectionList, signal).await?;
        let types: Vec<String> = self.fetch(Endpoint::ExerciseTypes, signal).await?;
        let exercise: Option<Exercise> = match exercise {
            Some(exercise) => {
                let endpoint = Endpoint::ExerciseRead(course, exercise);
                Some(self.fetch(endpoint, signal).await?)
            }
            None => None,
        };

        if !self.is_current(&ticket) {
            return Ok(());
        }

        let form = ticket.view().sub_panel().unwrap_or(ids::EXERCISE_NEW);

        self.render_rows(
            &self.page.element(&ids::field(form, "languageType"))?,
            rows::type_options(&types),
        )?;
        self.render_rows(
            &self.page.element(&ids::field(form, "connectionId"))?,
            rows::connection_options(&connections),
        )?;
        self.fill(exercise_fields(
            form,
            exercise.as_ref().map(|exercise| &exercise.context),
        ))?;

        let view = ticket.view();
        self.present(&ticket, view.visible_sub_panel(!connections.is_empty()))
    }

    async fn connection_list(&self, ticket: Ticket, signal: Option<&AbortSignal>) -> Result<()> {
        let connections: Vec<Connection> = self.fetch(Endpoint::ConnectionList, signal).await?;

        if !self.is_current(&ticket) {
            return Ok(());
        }

        let count = self.render_rows(
            &self.page.select(&ids::table(ids::CONNECTION_LIST))?,
            rows::connection_table(&connections),
        )?;
        log::debug!("{} connections", count - 1);

        self.present(&ticket, ticket.view().sub_panel())
    }

    async fn connection_form(
        &self,
        ticket: Ticket,
        connection: Option<ConnectionId>,
        signal: Option<&AbortSignal>,
    ) -> Result<()> {
        let types: Vec<String> = self.fetch(Endpoint::ConnectionTypes, signal).await?;
        let connection: Option<Connection> = match connection {
            Some(connection) => {
                let endpoint = Endpoint::ConnectionRead(connection);
                Some(self.fetch(endpoint, signal).await?)
            }
            None => None,
        };

        if !self.is_current(&ticket) {
            return Ok(());
        }

        let form = ticket.view().sub_panel().unwrap_or(ids::CONNECTION_NEW);
        let select = ids::field(form, "connectionType");

        self.render_rows(&self.page.element(&select)?, rows::type_options(&types))?;
        self.fill(connection_fields(form, connection.as_ref()))?;

        if let Some(connection) = &connection {
            self.page.set_value(&select, &connection.connection_type)?;
        }

        self.present(&ticket, ticket.view().sub_panel())
    }

    async fn xml(&self, ticket: Ticket, signal: Option<&AbortSignal>) -> Result<()> {
        self.set_overlay(ids::OVERLAY_REBOOT, false);

        let xml: XmlDocuments = self.fetch(Endpoint::XmlRead, signal).await?;

        if !self.is_current(&ticket) {
            return Ok(());
        }

        self.page.alert(XML_WARNING);

        self.page.set_value(ids::XML_CONFIG_FIELD, &xml.config)?;
        self.page.set_value(ids::XML_STATE_FIELD, &xml.state)?;

        self.present(&ticket, ticket.view().sub_panel())
    }

    fn render_rows<I>(&self, container: &Element, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = FragmentBuilder<Action>>,
    {
        render_list(
            self.page.document(),
            &self.event_registry,
            container,
            items,
        )
    }

    fn fill(&self, fields: FieldValues) -> Result<()> {
        fields
            .iter()
            .try_for_each(|(id, value)| self.page.set_value(id, value))
    }

    /// Make the ticket's view the only visible panel, with `sub_panel` the only visible child
    /// within it, then take the loading overlay down.
    fn present(&self, ticket: &Ticket, sub_panel: Option<&'static str>) -> Result<()> {
        let view = ticket.view();

        self.page.show_only(ids::CONTENT_BODY, view.panel())?;

        if let Some(sub_panel) = sub_panel {
            self.page.show_only(view.panel(), sub_panel)?;
        }

        self.set_loading(false);

        Ok(())
    }
}
