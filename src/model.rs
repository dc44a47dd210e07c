//! Shapes of the JSON documents served by the grit backend. None of these are mutated by the
//! client; they are decoded, displayed and dropped.

use std::fmt;

use serde::Deserialize;

pub type CourseId = u32;
pub type ExerciseId = u32;
pub type ConnectionId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    #[serde(default)]
    pub status: ExerciseStatus,
    pub context: ExerciseContext,
}

impl Exercise {
    /// Whether the PDF report of this exercise can be downloaded.
    pub fn report_available(&self) -> bool {
        self.status == ExerciseStatus::ReadyForDownload
    }
}

/// Scheduling window of an exercise. The backend pre-formats every time as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseContext {
    pub name: String,
    pub start_time_string: String,
    pub deadline_string: String,
    pub period_string: String,
}

/// Processing state of an exercise as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ExerciseStatus {
    NotStarted,
    CreationAborted,
    Fetching,
    FetchFailed,
    Processing,
    PdfFailed,
    SendingMail,
    MailFailed,
    Waiting,
    ReadyForDownload,
    /// Anything the backend sends that is not one of the above, kept verbatim.
    Other(String),
    #[default]
    Unknown,
}

impl ExerciseStatus {
    const KNOWN: [(&'static str, ExerciseStatus); 10] = [
        ("not started yet", ExerciseStatus::NotStarted),
        ("aborted exercise creation", ExerciseStatus::CreationAborted),
        ("fetching submissions", ExerciseStatus::Fetching),
        ("error while fetching submissions", ExerciseStatus::FetchFailed),
        ("processing submissions", ExerciseStatus::Processing),
        ("error while generating pdf for printout", ExerciseStatus::PdfFailed),
        ("sending emails", ExerciseStatus::SendingMail),
        ("Error while sending Mail", ExerciseStatus::MailFailed),
        ("waiting", ExerciseStatus::Waiting),
        ("ready for download", ExerciseStatus::ReadyForDownload),
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(status) => status,
            Self::Unknown => "",
            known => Self::KNOWN
                .iter()
                .find(|(_, status)| status == known)
                .map(|(label, _)| *label)
                .unwrap_or_default(),
        }
    }
}

impl From<String> for ExerciseStatus {
    fn from(status: String) -> Self {
        if status.is_empty() {
            return Self::Unknown;
        }

        Self::KNOWN
            .iter()
            .find(|(label, _)| *label == status)
            .map(|(_, known)| known.clone())
            .unwrap_or(Self::Other(status))
    }
}

impl fmt::Display for ExerciseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured remote target submissions are fetched from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: String,
    pub connection_type: String,
    pub location: String,
    pub username: String,
    pub ssh_username: String,
    pub structure_string: String,
    pub protocol: String,
    pub allowed_domain: String,
}

/// Response of `xml/read`: the raw config and state documents, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct XmlDocuments {
    pub config: String,
    pub state: String,
}

impl From<(String, String)> for XmlDocuments {
    fn from((config, state): (String, String)) -> Self {
        Self { config, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_decodes_backend_shape() {
        let exercise: Exercise = serde_json::from_str(
            r#"{
                "id": 5,
                "status": "ready for download",
                "context": {
                    "name": "Sheet 3",
                    "startTimeString": "2014-05-01 08:00",
                    "deadlineString": "2014-05-08 08:00",
                    "periodString": "00:30"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(exercise.id, 5);
        assert_eq!(exercise.context.name, "Sheet 3");
        assert_eq!(exercise.context.period_string, "00:30");
        assert!(exercise.report_available());
    }

    #[test]
    fn unknown_status_is_kept_and_not_downloadable() {
        let exercise: Exercise =
            serde_json::from_str(r#"{"id": 1, "status": "compiling", "context": {"name": "A"}}"#)
                .unwrap();

        assert_eq!(exercise.status, ExerciseStatus::Other("compiling".into()));
        assert_eq!(exercise.status.to_string(), "compiling");
        assert!(!exercise.report_available());
    }

    #[test]
    fn status_strings_are_matched_exactly() {
        assert_eq!(
            ExerciseStatus::from("Error while sending Mail".to_string()),
            ExerciseStatus::MailFailed
        );
        assert_eq!(
            ExerciseStatus::from("Ready for download".to_string()),
            ExerciseStatus::Other("Ready for download".into())
        );
        assert_eq!(ExerciseStatus::from(String::new()), ExerciseStatus::Unknown);
        assert_eq!(ExerciseStatus::Waiting.as_str(), "waiting");
    }

    #[test]
    fn connection_tolerates_missing_optional_fields() {
        let connection: Connection = serde_json::from_str(
            r#"{
                "id": 2,
                "name": "uni svn",
                "connectionType": "SVN",
                "location": "svn://svn.example.org/course",
                "username": "grader",
                "sshUsername": "",
                "structureString": "TOPLEVEL,SUBMISSION"
            }"#,
        )
        .unwrap();

        assert_eq!(connection.connection_type, "SVN");
        assert_eq!(connection.structure_string, "TOPLEVEL,SUBMISSION");
        assert!(connection.allowed_domain.is_empty());
    }

    #[test]
    fn xml_documents_decode_from_pair() {
        let xml: XmlDocuments =
            serde_json::from_str(r#"["<config/>", "<state/>"]"#).unwrap();

        assert_eq!(xml.config, "<config/>");
        assert_eq!(xml.state, "<state/>");
    }
}
