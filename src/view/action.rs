use super::{FormRequest, FormSlot, Navigation, View};
use crate::{
    api::Endpoint,
    model::{ConnectionId, CourseId, ExerciseId},
};

/// Everything a DOM event can ask the controller to do. Bound to nodes through the event
/// registry, so it must be cheap to clone and hashable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Home,
    Back,
    Refresh,
    Show(View),
    /// New exercise in the course currently showing.
    NewExercise,
    Delete(Target),
    Submit(FormSlot),
    Report {
        course: CourseId,
        exercise: ExerciseId,
    },
    Help,
}

impl Action {
    /// Whether the loading overlay goes up as soon as the action is triggered.
    pub fn shows_loading(self) -> bool {
        matches!(
            self,
            Action::Home | Action::Back | Action::Refresh | Action::Show(_) | Action::NewExercise
        )
    }
}

/// A record that can be deleted from one of the list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Course(CourseId),
    Exercise {
        course: CourseId,
        exercise: ExerciseId,
    },
    Connection(ConnectionId),
}

impl Target {
    pub fn endpoint(self) -> Endpoint {
        match self {
            Target::Course(course) => Endpoint::CourseDelete(course),
            Target::Exercise { course, exercise } => Endpoint::ExerciseDelete(course, exercise),
            Target::Connection(connection) => Endpoint::ConnectionDelete(connection),
        }
    }

    /// Advisory warning shown before the request goes out.
    pub fn warning(self) -> &'static str {
        match self {
            Target::Course(_) => {
                "Warning:\nThe course including all its exercises will be deleted and will no \
                 longer be available!"
            }
            Target::Exercise { .. } => {
                "Warning:\nThe exercise will be deleted and will no longer be available!"
            }
            Target::Connection(_) => {
                "Warning:\nThe connection will be deleted and will no longer be available!"
            }
        }
    }

    /// Confirmation shown once the backend returned the deleted record.
    pub fn deleted_message(self, name: &str) -> String {
        let noun = match self {
            Target::Course(_) => "course",
            Target::Exercise { .. } => "exercise",
            Target::Connection(_) => "connection",
        };

        format!("The {noun} \"{name}\" was successfully deleted")
    }

    /// The list the record was shown in.
    pub fn then(self) -> View {
        match self {
            Target::Course(_) => View::CourseList,
            Target::Exercise { course, .. } => View::Course { course },
            Target::Connection(_) => View::Settings,
        }
    }
}

/// What the controller does in response to an [`Action`], given the current navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Render(View),
    Delete(Target),
    Submit(FormRequest),
    /// Open a document in a new window.
    Open(Endpoint),
    Help,
    /// The action does not apply to the current view.
    Ignore,
}

/// Resolve `action` against `navigation`. Pure, so every transition can be checked without a
/// browser.
pub fn plan(navigation: &Navigation, action: Action) -> Step {
    match action {
        Action::Home => Step::Render(View::CourseList),
        Action::Back => Step::Render(navigation.back()),
        Action::Refresh => Step::Render(navigation.current()),
        Action::Show(view) => Step::Render(view),
        Action::NewExercise => match navigation.current().course() {
            Some(course) => Step::Render(View::ExerciseNew { course }),
            None => Step::Ignore,
        },
        Action::Delete(target) => Step::Delete(target),
        Action::Submit(slot) => match slot.request(navigation.current()) {
            Some(request) => Step::Submit(request),
            None => Step::Ignore,
        },
        Action::Report { course, exercise } => Step::Open(Endpoint::Report(course, exercise)),
        Action::Help => Step::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(view: View) -> Navigation {
        let mut navigation = Navigation::new();
        navigation.begin(view);
        navigation
    }

    #[test]
    fn back_and_refresh_follow_current_view() {
        let navigation = at(View::ExerciseEdit {
            course: 2,
            exercise: 5,
        });

        assert_eq!(
            plan(&navigation, Action::Back),
            Step::Render(View::Course { course: 2 })
        );
        assert_eq!(
            plan(&navigation, Action::Refresh),
            Step::Render(View::ExerciseEdit {
                course: 2,
                exercise: 5
            })
        );
        assert_eq!(plan(&navigation, Action::Home), Step::Render(View::CourseList));
    }

    #[test]
    fn new_exercise_needs_a_course() {
        assert_eq!(
            plan(&at(View::Course { course: 3 }), Action::NewExercise),
            Step::Render(View::ExerciseNew { course: 3 })
        );
        assert_eq!(plan(&at(View::Settings), Action::NewExercise), Step::Ignore);
    }

    #[test]
    fn submit_outside_its_view_is_ignored() {
        assert_eq!(
            plan(&at(View::CourseList), Action::Submit(FormSlot::CourseEdit)),
            Step::Ignore
        );

        match plan(&at(View::CourseNew), Action::Submit(FormSlot::CourseNew)) {
            Step::Submit(request) => assert_eq!(request.endpoint, Endpoint::CourseCreate),
            step => panic!("unexpected {step:?}"),
        }
    }

    #[test]
    fn report_opens_pdf() {
        assert_eq!(
            plan(
                &at(View::Course { course: 1 }),
                Action::Report {
                    course: 1,
                    exercise: 4
                }
            ),
            Step::Open(Endpoint::Report(1, 4))
        );
    }

    #[test]
    fn deleting_an_exercise_returns_to_its_course() {
        let target = Target::Exercise {
            course: 2,
            exercise: 5,
        };

        assert_eq!(
            plan(&at(View::Course { course: 2 }), Action::Delete(target)),
            Step::Delete(target)
        );
        assert_eq!(target.endpoint(), Endpoint::ExerciseDelete(2, 5));
        assert_eq!(target.then(), View::Course { course: 2 });
        assert_eq!(
            target.deleted_message("Sheet 3"),
            "The exercise \"Sheet 3\" was successfully deleted"
        );
        assert!(target.warning().starts_with("Warning:\n"));
    }

    #[test]
    fn only_navigation_raises_loading_overlay() {
        assert!(Action::Back.shows_loading());
        assert!(Action::Show(View::Xml).shows_loading());
        assert!(!Action::Help.shows_loading());
        assert!(!Action::Delete(Target::Course(1)).shows_loading());
        assert!(!Action::Submit(FormSlot::CourseNew).shows_loading());
    }
}
