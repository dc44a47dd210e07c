use std::fmt;

use crate::model::{ConnectionId, CourseId, ExerciseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Every REST resource the view layer talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CourseList,
    CourseRead(CourseId),
    CourseCreate,
    CourseUpdate(CourseId),
    CourseDelete(CourseId),

    ExerciseList(CourseId),
    ExerciseTypes,
    ExerciseRead(CourseId, ExerciseId),
    ExerciseCreate(CourseId),
    ExerciseUpdate(CourseId, ExerciseId),
    ExerciseDelete(CourseId, ExerciseId),

    ConnectionList,
    ConnectionTypes,
    ConnectionRead(ConnectionId),
    ConnectionCreate,
    ConnectionUpdate(ConnectionId),
    ConnectionDelete(ConnectionId),

    XmlRead,
    XmlUpdateConfig,
    XmlUpdateState,

    /// Generated PDF report of an exercise. Opened in a new window, never fetched.
    Report(CourseId, ExerciseId),
}

impl Endpoint {
    /// Deletions are plain GETs on the backend.
    pub fn method(self) -> Method {
        use Endpoint::*;

        match self {
            CourseCreate | CourseUpdate(_) | ExerciseCreate(_) | ExerciseUpdate(..)
            | ConnectionCreate | ConnectionUpdate(_) | XmlUpdateConfig | XmlUpdateState => {
                Method::Post
            }
            _ => Method::Get,
        }
    }

    /// Path relative to the API base.
    pub fn path(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Endpoint::*;

        match self {
            CourseList => write!(f, "course/list"),
            CourseRead(course) => write!(f, "course/read/{course}"),
            CourseCreate => write!(f, "course/create"),
            CourseUpdate(course) => write!(f, "course/update/{course}"),
            CourseDelete(course) => write!(f, "course/delete/{course}"),

            ExerciseList(course) => write!(f, "exercise/list/{course}"),
            ExerciseTypes => write!(f, "exercise/types"),
            ExerciseRead(course, exercise) => write!(f, "exercise/read/{course}/{exercise}"),
            ExerciseCreate(course) => write!(f, "exercise/create/{course}"),
            ExerciseUpdate(course, exercise) => write!(f, "exercise/update/{course}/{exercise}"),
            ExerciseDelete(course, exercise) => write!(f, "exercise/delete/{course}/{exercise}"),

            ConnectionList => write!(f, "connection/list"),
            ConnectionTypes => write!(f, "connection/types"),
            ConnectionRead(connection) => write!(f, "connection/read/{connection}"),
            ConnectionCreate => write!(f, "connection/create"),
            ConnectionUpdate(connection) => write!(f, "connection/update/{connection}"),
            ConnectionDelete(connection) => write!(f, "connection/delete/{connection}"),

            XmlRead => write!(f, "xml/read"),
            XmlUpdateConfig => write!(f, "xml/update/config"),
            XmlUpdateState => write!(f, "xml/update/state"),

            Report(course, exercise) => {
                write!(f, "pdf/course-{course}/exercise-{exercise}/report.pdf")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_backend_routes() {
        assert_eq!(Endpoint::CourseList.path(), "course/list");
        assert_eq!(Endpoint::CourseUpdate(3).path(), "course/update/3");
        assert_eq!(Endpoint::ExerciseRead(2, 5).path(), "exercise/read/2/5");
        assert_eq!(Endpoint::ExerciseDelete(2, 5).path(), "exercise/delete/2/5");
        assert_eq!(Endpoint::ConnectionTypes.path(), "connection/types");
        assert_eq!(Endpoint::XmlUpdateState.path(), "xml/update/state");
        assert_eq!(
            Endpoint::Report(1, 7).path(),
            "pdf/course-1/exercise-7/report.pdf"
        );
    }

    #[test]
    fn only_create_and_update_are_posts() {
        assert_eq!(Endpoint::CourseCreate.method(), Method::Post);
        assert_eq!(Endpoint::ExerciseUpdate(1, 1).method(), Method::Post);
        assert_eq!(Endpoint::XmlUpdateConfig.method(), Method::Post);

        assert_eq!(Endpoint::CourseDelete(1).method(), Method::Get);
        assert_eq!(Endpoint::ConnectionDelete(1).method(), Method::Get);
        assert_eq!(Endpoint::XmlRead.method(), Method::Get);
    }
}
