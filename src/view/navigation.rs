use super::View;

/// Proof that a piece of work was started for a particular transition. Completions compare
/// their ticket against [`Navigation::is_current()`] and are dropped once the user has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    view: View,
}

impl Ticket {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Navigation state of the page session: which view is showing, and which transition is the
/// latest one.
#[derive(Debug, Default)]
pub struct Navigation {
    current: View,

    /// Bumped on every transition. Tickets from older generations are stale.
    generation: u64,

    /// Generation of a pending create/update/delete, if one is running.
    mutation: Option<u64>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Ticket of the current transition.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
            view: self.current,
        }
    }

    /// Start a transition to `view`. Every earlier ticket becomes stale, including the one of a
    /// pending mutation.
    pub fn begin(&mut self, view: View) -> Ticket {
        self.generation += 1;
        self.current = view;
        self.mutation = None;

        self.ticket()
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
    }

    /// Claim the mutation slot of the current view. Returns [`None`] while another mutation of
    /// this view is still pending.
    pub fn begin_mutation(&mut self) -> Option<Ticket> {
        if self.mutation == Some(self.generation) {
            return None;
        }

        self.mutation = Some(self.generation);
        Some(self.ticket())
    }

    /// Release the mutation slot claimed with `ticket`. Stale tickets release nothing.
    pub fn end_mutation(&mut self, ticket: &Ticket) {
        if self.mutation == Some(ticket.generation) {
            self.mutation = None;
        }
    }

    /// Whether a failure of work started under `ticket` is reported to the user. A failed view
    /// fetch only matters while its view is showing. A failed create, update or delete always
    /// does: the user has to learn the change was not applied, wherever they are now.
    pub fn should_alert(&self, ticket: &Ticket, mutation: bool) -> bool {
        mutation || self.is_current(ticket)
    }

    /// Target of the back button.
    pub fn back(&self) -> View {
        self.current.parent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_course_list() {
        let navigation = Navigation::new();

        assert_eq!(navigation.current(), View::CourseList);
        assert_eq!(navigation.back(), View::CourseList);
    }

    #[test]
    fn newer_transition_makes_older_ticket_stale() {
        let mut navigation = Navigation::new();

        let first = navigation.begin(View::Course { course: 2 });
        assert!(navigation.is_current(&first));

        let second = navigation.begin(View::Settings);
        assert!(!navigation.is_current(&first));
        assert!(navigation.is_current(&second));
        assert_eq!(second.view(), View::Settings);
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn refreshing_the_same_view_still_supersedes() {
        let mut navigation = Navigation::new();

        let first = navigation.begin(View::Xml);
        let second = navigation.begin(View::Xml);

        assert!(!navigation.is_current(&first));
        assert!(navigation.is_current(&second));
    }

    #[test]
    fn second_mutation_is_refused_until_first_ends() {
        let mut navigation = Navigation::new();
        navigation.begin(View::CourseNew);

        let ticket = navigation.begin_mutation().expect("slot free");
        assert!(navigation.begin_mutation().is_none());

        navigation.end_mutation(&ticket);
        assert!(navigation.begin_mutation().is_some());
    }

    #[test]
    fn leaving_the_view_frees_the_mutation_slot() {
        let mut navigation = Navigation::new();
        navigation.begin(View::Settings);

        let stale = navigation.begin_mutation().expect("slot free");
        navigation.begin(View::ConnectionNew);

        let fresh = navigation.begin_mutation().expect("slot freed by transition");
        navigation.end_mutation(&stale);

        assert!(navigation.begin_mutation().is_none(), "stale end must not free {fresh:?}");
    }

    #[test]
    fn stale_fetch_failures_are_silent() {
        let mut navigation = Navigation::new();

        let fetch = navigation.begin(View::Course { course: 3 });
        assert!(navigation.should_alert(&fetch, false));

        navigation.begin(View::CourseList);
        assert!(!navigation.should_alert(&fetch, false));
    }

    #[test]
    fn mutation_failures_are_reported_after_leaving_the_view() {
        let mut navigation = Navigation::new();
        navigation.begin(View::CourseNew);

        let submit = navigation.begin_mutation().expect("slot free");
        assert!(navigation.should_alert(&submit, true));

        // Back to the course list while the create request is still pending.
        navigation.begin(View::CourseList);
        assert!(!navigation.is_current(&submit));
        assert!(navigation.should_alert(&submit, true));
    }

    #[test]
    fn back_follows_current_view() {
        let mut navigation = Navigation::new();
        navigation.begin(View::ExerciseNew { course: 7 });

        assert_eq!(navigation.back(), View::Course { course: 7 });
    }
}
