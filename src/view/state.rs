use std::fmt;

use super::ids;
use crate::model::{ConnectionId, CourseId, ExerciseId};

/// Every screen of the UI. The current value lives in [`super::Navigation`] and is the single
/// source of truth for what back, refresh and the static forms refer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    CourseList,
    CourseNew,
    CourseEdit {
        course: CourseId,
    },
    /// A course with its exercise list.
    Course {
        course: CourseId,
    },
    ExerciseNew {
        course: CourseId,
    },
    ExerciseEdit {
        course: CourseId,
        exercise: ExerciseId,
    },
    /// Connection list.
    Settings,
    ConnectionNew,
    ConnectionEdit {
        connection: ConnectionId,
    },
    Xml,
}

impl View {
    /// The child of `#content-body` showing this view.
    pub fn panel(self) -> &'static str {
        use View::*;

        match self {
            CourseList => ids::COURSE_LIST,
            CourseNew => ids::COURSE_NEW,
            CourseEdit { .. } => ids::COURSE_EDIT,
            Course { .. } | ExerciseNew { .. } | ExerciseEdit { .. } => ids::COURSE_SHOW,
            Settings | ConnectionNew | ConnectionEdit { .. } => ids::SETTINGS,
            Xml => ids::XML,
        }
    }

    /// The child of [`View::panel()`] showing this view, for panels hosting several views.
    pub fn sub_panel(self) -> Option<&'static str> {
        use View::*;

        match self {
            Course { .. } => Some(ids::EXERCISE_LIST),
            ExerciseNew { .. } => Some(ids::EXERCISE_NEW),
            ExerciseEdit { .. } => Some(ids::EXERCISE_EDIT),
            Settings => Some(ids::CONNECTION_LIST),
            ConnectionNew => Some(ids::CONNECTION_NEW),
            ConnectionEdit { .. } => Some(ids::CONNECTION_EDIT),
            CourseList | CourseNew | CourseEdit { .. } | Xml => None,
        }
    }

    /// The sub-panel to reveal once the view's data is loaded. Exercises cannot be created or
    /// edited without a connection to fetch submissions from, so the exercise forms give way to
    /// the no-connection notice while none exist.
    pub fn visible_sub_panel(self, has_connections: bool) -> Option<&'static str> {
        match self {
            View::ExerciseNew { .. } | View::ExerciseEdit { .. } if !has_connections => {
                Some(ids::NO_CONNECTION_ERROR)
            }
            view => view.sub_panel(),
        }
    }

    /// Where the back button leads from this view.
    pub fn parent(self) -> View {
        use View::*;

        match self {
            ExerciseNew { course } | ExerciseEdit { course, .. } => Course { course },
            ConnectionNew | ConnectionEdit { .. } => Settings,
            CourseList | CourseNew | CourseEdit { .. } | Course { .. } | Settings | Xml => {
                CourseList
            }
        }
    }

    /// The course this view is scoped to, if any.
    pub fn course(self) -> Option<CourseId> {
        use View::*;

        match self {
            CourseEdit { course }
            | Course { course }
            | ExerciseNew { course }
            | ExerciseEdit { course, .. } => Some(course),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use View::*;

        match self {
            CourseList => write!(f, "course list"),
            CourseNew => write!(f, "new course"),
            CourseEdit { course } => write!(f, "edit course {course}"),
            Course { course } => write!(f, "course {course}"),
            ExerciseNew { course } => write!(f, "new exercise in course {course}"),
            ExerciseEdit { course, exercise } => {
                write!(f, "edit exercise {exercise} in course {course}")
            }
            Settings => write!(f, "settings"),
            ConnectionNew => write!(f, "new connection"),
            ConnectionEdit { connection } => write!(f, "edit connection {connection}"),
            Xml => write!(f, "raw xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [View; 10] = [
        View::CourseList,
        View::CourseNew,
        View::CourseEdit { course: 1 },
        View::Course { course: 1 },
        View::ExerciseNew { course: 1 },
        View::ExerciseEdit {
            course: 1,
            exercise: 2,
        },
        View::Settings,
        View::ConnectionNew,
        View::ConnectionEdit { connection: 3 },
        View::Xml,
    ];

    const TOP_LEVEL: [&str; 6] = [
        ids::COURSE_LIST,
        ids::COURSE_NEW,
        ids::COURSE_EDIT,
        ids::COURSE_SHOW,
        ids::SETTINGS,
        ids::XML,
    ];

    #[test]
    fn every_view_has_exactly_one_top_level_panel() {
        for view in ALL {
            let matching = TOP_LEVEL
                .iter()
                .filter(|panel| **panel == view.panel())
                .count();

            assert_eq!(matching, 1, "{view}");
        }
    }

    #[test]
    fn sub_panels_belong_to_hosting_panels() {
        for view in ALL {
            match view.sub_panel() {
                Some(ids::EXERCISE_LIST | ids::EXERCISE_NEW | ids::EXERCISE_EDIT) => {
                    assert_eq!(view.panel(), ids::COURSE_SHOW)
                }
                Some(_) => assert_eq!(view.panel(), ids::SETTINGS),
                None => assert!(![ids::COURSE_SHOW, ids::SETTINGS].contains(&view.panel())),
            }
        }
    }

    #[test]
    fn exercise_forms_need_a_connection() {
        let edit = View::ExerciseEdit {
            course: 1,
            exercise: 2,
        };

        for view in [View::ExerciseNew { course: 1 }, edit] {
            assert_eq!(view.visible_sub_panel(true), view.sub_panel(), "{view}");
            assert_eq!(
                view.visible_sub_panel(false),
                Some(ids::NO_CONNECTION_ERROR),
                "{view}"
            );
        }
    }

    #[test]
    fn other_views_ignore_connections() {
        for view in ALL {
            if matches!(view, View::ExerciseNew { .. } | View::ExerciseEdit { .. }) {
                continue;
            }

            assert_eq!(view.visible_sub_panel(false), view.sub_panel(), "{view}");
            assert_eq!(view.visible_sub_panel(true), view.sub_panel(), "{view}");
        }
    }

    #[test]
    fn back_targets() {
        assert_eq!(View::CourseList.parent(), View::CourseList);
        assert_eq!(View::Course { course: 4 }.parent(), View::CourseList);
        assert_eq!(
            View::ExerciseEdit {
                course: 4,
                exercise: 9
            }
            .parent(),
            View::Course { course: 4 }
        );
        assert_eq!(View::ConnectionEdit { connection: 1 }.parent(), View::Settings);
        assert_eq!(View::Settings.parent(), View::CourseList);
        assert_eq!(View::Xml.parent(), View::CourseList);
    }

    #[test]
    fn every_chain_of_backs_ends_at_the_course_list() {
        for view in ALL {
            let mut current = view;
            for _ in 0..3 {
                current = current.parent();
            }

            assert_eq!(current, View::CourseList, "{view}");
        }
    }
}
