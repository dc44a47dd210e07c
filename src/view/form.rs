use super::{ids, View};
use crate::{
    api::Endpoint,
    model::{Connection, Course, ExerciseContext},
};

/// Default polling period of a new exercise.
pub const DEFAULT_PERIOD: &str = "00:30";

/// The static forms of the template. Each is bound once at start up; the record it targets is
/// resolved from the current [`View`] at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSlot {
    CourseNew,
    CourseEdit,
    ExerciseNew,
    ExerciseEdit,
    ConnectionNew,
    ConnectionEdit,
    XmlConfig,
    XmlState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `multipart/form-data`, carrying file inputs.
    Multipart,
    /// `application/x-www-form-urlencoded`.
    UrlEncoded,
}

/// A resolved submission: where the form goes and what to show once the backend accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRequest {
    pub slot: FormSlot,
    pub endpoint: Endpoint,
    pub encoding: Encoding,
    pub then: View,

    /// The backend restarts after accepting the form; the reboot overlay covers the page.
    pub reboot: bool,
}

impl FormSlot {
    pub const ALL: [FormSlot; 8] = [
        FormSlot::CourseNew,
        FormSlot::CourseEdit,
        FormSlot::ExerciseNew,
        FormSlot::ExerciseEdit,
        FormSlot::ConnectionNew,
        FormSlot::ConnectionEdit,
        FormSlot::XmlConfig,
        FormSlot::XmlState,
    ];

    /// Id of the panel wrapping the form.
    pub fn panel(self) -> &'static str {
        use FormSlot::*;

        match self {
            CourseNew => ids::COURSE_NEW,
            CourseEdit => ids::COURSE_EDIT,
            ExerciseNew => ids::EXERCISE_NEW,
            ExerciseEdit => ids::EXERCISE_EDIT,
            ConnectionNew => ids::CONNECTION_NEW,
            ConnectionEdit => ids::CONNECTION_EDIT,
            XmlConfig => ids::XML_CONFIG,
            XmlState => ids::XML_STATE,
        }
    }

    /// Resolve the submission against the view currently showing. [`None`] when the form does
    /// not belong to that view.
    pub fn request(self, current: View) -> Option<FormRequest> {
        use Endpoint as E;
        use FormSlot::*;

        let (endpoint, then) = match (self, current) {
            (CourseNew, View::CourseNew) => (E::CourseCreate, View::CourseList),
            (CourseEdit, View::CourseEdit { course }) => {
                (E::CourseUpdate(course), View::CourseList)
            }
            (ExerciseNew, View::ExerciseNew { course }) => {
                (E::ExerciseCreate(course), View::Course { course })
            }
            (ExerciseEdit, View::ExerciseEdit { course, exercise }) => {
                (E::ExerciseUpdate(course, exercise), View::Course { course })
            }
            (ConnectionNew, View::ConnectionNew) => (E::ConnectionCreate, View::Settings),
            (ConnectionEdit, View::ConnectionEdit { connection }) => {
                (E::ConnectionUpdate(connection), View::Settings)
            }
            (XmlConfig, View::Xml) => (E::XmlUpdateConfig, View::Xml),
            (XmlState, View::Xml) => (E::XmlUpdateState, View::Xml),
            _ => return None,
        };

        let xml = matches!(self, XmlConfig | XmlState);

        Some(FormRequest {
            slot: self,
            endpoint,
            encoding: if xml {
                Encoding::UrlEncoded
            } else {
                Encoding::Multipart
            },
            then,
            reboot: xml,
        })
    }
}

/// `(field id, value)` pairs written into a form before it is shown.
pub type FieldValues = Vec<(String, String)>;

/// Values of the course form: cleared for a new course, the stored name when editing.
pub fn course_fields(form: &str, course: Option<&Course>) -> FieldValues {
    vec![(
        ids::field(form, "courseName"),
        course.map(|course| course.name.clone()).unwrap_or_default(),
    )]
}

/// Values of the exercise form. The test file input is always cleared; a new exercise starts
/// with the default period.
pub fn exercise_fields(form: &str, context: Option<&ExerciseContext>) -> FieldValues {
    let (name, start, deadline, period) = match context {
        Some(context) => (
            context.name.clone(),
            context.start_time_string.clone(),
            context.deadline_string.clone(),
            context.period_string.clone(),
        ),
        None => (
            String::new(),
            String::new(),
            String::new(),
            DEFAULT_PERIOD.to_string(),
        ),
    };

    vec![
        (ids::field(form, "exerciseName"), name),
        (ids::field(form, "start"), start),
        (ids::field(form, "deadline"), deadline),
        (ids::field(form, "period"), period),
        (ids::field(form, "testfile"), String::new()),
    ]
}

/// Values of the connection form. Secrets (password, key file) are never prefilled.
pub fn connection_fields(form: &str, connection: Option<&Connection>) -> FieldValues {
    let value = |pick: fn(&Connection) -> &String| {
        connection.map(|connection| pick(connection).clone()).unwrap_or_default()
    };

    vec![
        (ids::field(form, "connectionName"), value(|c| &c.name)),
        (ids::field(form, "location"), value(|c| &c.location)),
        (ids::field(form, "username"), value(|c| &c.username)),
        (ids::field(form, "password"), String::new()),
        (ids::field(form, "sshUsername"), value(|c| &c.ssh_username)),
        (ids::field(form, "sshKeyFile"), String::new()),
        (ids::field(form, "structure"), value(|c| &c.structure_string)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(fields: &'a FieldValues, id: &str) -> &'a str {
        fields
            .iter()
            .find(|(field, _)| field == id)
            .map(|(_, value)| value.as_str())
            .unwrap_or_else(|| panic!("no field {id}"))
    }

    #[test]
    fn forms_resolve_only_in_their_own_view() {
        let request = FormSlot::ExerciseEdit
            .request(View::ExerciseEdit {
                course: 2,
                exercise: 5,
            })
            .unwrap();

        assert_eq!(request.endpoint, Endpoint::ExerciseUpdate(2, 5));
        assert_eq!(request.then, View::Course { course: 2 });
        assert_eq!(request.encoding, Encoding::Multipart);
        assert!(!request.reboot);

        assert!(FormSlot::ExerciseEdit.request(View::Course { course: 2 }).is_none());
        assert!(FormSlot::CourseNew.request(View::CourseList).is_none());
    }

    #[test]
    fn entity_forms_are_multipart_and_xml_forms_reboot() {
        let views = [
            View::CourseNew,
            View::CourseEdit { course: 1 },
            View::ExerciseNew { course: 1 },
            View::ExerciseEdit {
                course: 1,
                exercise: 1,
            },
            View::ConnectionNew,
            View::ConnectionEdit { connection: 1 },
            View::Xml,
            View::Xml,
        ];

        for (slot, view) in FormSlot::ALL.into_iter().zip(views) {
            let request = slot.request(view).unwrap();

            match slot {
                FormSlot::XmlConfig | FormSlot::XmlState => {
                    assert_eq!(request.encoding, Encoding::UrlEncoded);
                    assert!(request.reboot);
                    assert_eq!(request.then, View::Xml);
                }
                _ => {
                    assert_eq!(request.encoding, Encoding::Multipart);
                    assert!(!request.reboot);
                }
            }
        }
    }

    #[test]
    fn course_edit_returns_to_course_list() {
        let request = FormSlot::CourseEdit
            .request(View::CourseEdit { course: 3 })
            .unwrap();

        assert_eq!(request.endpoint, Endpoint::CourseUpdate(3));
        assert_eq!(request.then, View::CourseList);
    }

    #[test]
    fn new_exercise_fields_are_reset() {
        let fields = exercise_fields(ids::EXERCISE_NEW, None);

        assert_eq!(lookup(&fields, "exercise-new-exerciseName"), "");
        assert_eq!(lookup(&fields, "exercise-new-period"), "00:30");
        assert_eq!(lookup(&fields, "exercise-new-testfile"), "");
    }

    #[test]
    fn edit_exercise_fields_are_prefilled() {
        let context = ExerciseContext {
            name: "Sheet 2".into(),
            start_time_string: "2014-05-01 08:00".into(),
            deadline_string: "2014-05-08 08:00".into(),
            period_string: "01:00".into(),
        };
        let fields = exercise_fields(ids::EXERCISE_EDIT, Some(&context));

        assert_eq!(lookup(&fields, "exercise-edit-exerciseName"), "Sheet 2");
        assert_eq!(lookup(&fields, "exercise-edit-deadline"), "2014-05-08 08:00");
        assert_eq!(lookup(&fields, "exercise-edit-period"), "01:00");
        assert_eq!(lookup(&fields, "exercise-edit-testfile"), "");
    }

    #[test]
    fn connection_secrets_are_never_prefilled() {
        let connection = Connection {
            id: 1,
            name: "ilias".into(),
            connection_type: "ILIAS".into(),
            location: "https://ilias.example.org".into(),
            username: "tutor".into(),
            ssh_username: "tutor-ssh".into(),
            structure_string: "TOPLEVEL".into(),
            ..Connection::default()
        };
        let fields = connection_fields(ids::CONNECTION_EDIT, Some(&connection));

        assert_eq!(lookup(&fields, "connection-edit-connectionName"), "ilias");
        assert_eq!(lookup(&fields, "connection-edit-sshUsername"), "tutor-ssh");
        assert_eq!(lookup(&fields, "connection-edit-structure"), "TOPLEVEL");
        assert_eq!(lookup(&fields, "connection-edit-password"), "");
        assert_eq!(lookup(&fields, "connection-edit-sshKeyFile"), "");

        let fields = connection_fields(ids::CONNECTION_NEW, None);
        assert!(fields.iter().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn course_fields_follow_course() {
        let course = Course {
            id: 1,
            name: "Algebra".into(),
        };

        assert_eq!(
            course_fields(ids::COURSE_EDIT, Some(&course)),
            vec![("course-edit-courseName".to_string(), "Algebra".to_string())]
        );
        assert_eq!(
            course_fields(ids::COURSE_NEW, None),
            vec![("course-new-courseName".to_string(), String::new())]
        );
    }
}
