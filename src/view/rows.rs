//! Fragments for the list views and select boxes. Every builder here is a plain description, so
//! the shape of a rendered row can be checked without a document.

use std::iter;

use super::{Action, Target, View};
use crate::{
    dom::{display, FragmentBuilder, Node},
    model::{Connection, Course, CourseId, Exercise},
};

const ICON_EDIT: &str = "img/32/pen.png";
const ICON_DELETE: &str = "img/32/del.png";
const ICON_REPORT: &str = "img/32/dlpdf.png";
const ICON_FOLDER: &str = "img/folder.png";

const EXERCISE_COLUMNS: [&str; 5] = ["exercise name", "start", "deadline", "status", ""];
const CONNECTION_COLUMNS: [&str; 6] = [
    "connection name",
    "type",
    "location",
    "username",
    "SSH username",
    "",
];

/// Description of one rendered list item, table row or option.
pub type Row = FragmentBuilder<Action>;

/// Append a link wrapping an icon within `parent`.
fn icon_link(fragment: Row, parent: usize, link: Node<Action>, icon: &str) -> Row {
    let index = fragment.next_index();

    fragment
        .with_node(link, Some(parent))
        .with_node(Node::element("img").with_attribute("src", icon), Some(index))
}

/// An `a.icon-button` whose id doubles as its `href`, as the template's stylesheet expects.
fn icon_button(id: String, class: &str, action: Action) -> Node<Action> {
    Node::element("a")
        .with_class(format!("icon-button {class}"))
        .with_attribute("href", &id)
        .with_id(id)
        .with_event("click", action)
}

/// A `tr` with one text cell per value, followed by an empty cell for controls. Returns the
/// fragment and the index of the control cell.
fn table_row<I, S>(cell: &str, values: I) -> (Row, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fragment = Row::new().with_element("tr", None);

    for value in values {
        let index = fragment.next_index();
        fragment = fragment
            .with_element(cell, Some(0))
            .with_text(value, Some(index));
    }

    let controls = fragment.next_index();
    (fragment.with_element(cell, Some(0)), controls)
}

fn header_row(columns: &[&str]) -> Row {
    let (fragment, last) = table_row("th", &columns[..columns.len() - 1]);
    fragment.with_text(columns[columns.len() - 1], Some(last))
}

/// Tile of the course overview, with edit, delete and show controls.
pub fn course_entry(course: &Course) -> Row {
    let id = course.id;

    let fragment = Row::new()
        .with_node(Node::element("div").with_class("course"), None)
        .with_node(Node::element("div").with_class("course-buttons"), Some(0));

    let fragment = icon_link(
        fragment,
        1,
        icon_button(
            format!("course-{id}-edit"),
            "edit",
            Action::Show(View::CourseEdit { course: id }),
        ),
        ICON_EDIT,
    );
    let fragment = icon_link(
        fragment,
        1,
        icon_button(
            format!("course-{id}-delete"),
            "delete",
            Action::Delete(Target::Course(id)),
        ),
        ICON_DELETE,
    );

    let show = format!("course-{id}-show");
    let link = fragment.next_index();
    let fragment = icon_link(
        fragment,
        0,
        Node::element("a")
            .with_class("show")
            .with_attribute("href", &show)
            .with_id(show)
            .with_event("click", Action::Show(View::Course { course: id })),
        ICON_FOLDER,
    );

    let label = fragment.next_index();
    fragment
        .with_node(Node::element("p").with_class("course_text"), Some(link))
        .with_text(&course.name, Some(label))
}

/// Course overview: one tile per course.
pub fn course_entries(courses: &[Course]) -> impl Iterator<Item = Row> + '_ {
    courses.iter().map(course_entry)
}

pub fn exercise_header() -> Row {
    header_row(&EXERCISE_COLUMNS)
}

/// Row of the exercise table. The report link is only displayed once the report exists.
pub fn exercise_row(course: CourseId, exercise: &Exercise) -> Row {
    let id = exercise.id;
    let status = exercise.status.to_string();

    let (fragment, controls) = table_row(
        "td",
        [
            exercise.context.name.as_str(),
            exercise.context.start_time_string.as_str(),
            exercise.context.deadline_string.as_str(),
            status.as_str(),
        ],
    );

    let fragment = icon_link(
        fragment,
        controls,
        icon_button(
            format!("exercise-{id}-edit"),
            "edit",
            Action::Show(View::ExerciseEdit {
                course,
                exercise: id,
            }),
        ),
        ICON_EDIT,
    );
    let fragment = icon_link(
        fragment,
        controls,
        icon_button(
            format!("exercise-{id}-delete"),
            "delete",
            Action::Delete(Target::Exercise {
                course,
                exercise: id,
            }),
        ),
        ICON_DELETE,
    );

    icon_link(
        fragment,
        controls,
        icon_button(
            format!("exercise-{id}-download"),
            "download",
            Action::Report {
                course,
                exercise: id,
            },
        )
        .with_attribute(
            "style",
            format!("display: {}", display(exercise.report_available())),
        ),
        ICON_REPORT,
    )
}

/// Exercise table of `course`: the header row, then one row per exercise.
pub fn exercise_table(
    course: CourseId,
    exercises: &[Exercise],
) -> impl Iterator<Item = Row> + '_ {
    iter::once(exercise_header()).chain(
        exercises
            .iter()
            .map(move |exercise| exercise_row(course, exercise)),
    )
}

pub fn connection_header() -> Row {
    header_row(&CONNECTION_COLUMNS)
}

pub fn connection_row(connection: &Connection) -> Row {
    let id = connection.id;

    let (fragment, controls) = table_row(
        "td",
        [
            &connection.name,
            &connection.connection_type,
            &connection.location,
            &connection.username,
            &connection.ssh_username,
        ],
    );

    let fragment = icon_link(
        fragment,
        controls,
        icon_button(
            format!("connection-{id}-edit"),
            "edit",
            Action::Show(View::ConnectionEdit { connection: id }),
        ),
        ICON_EDIT,
    );

    icon_link(
        fragment,
        controls,
        icon_button(
            format!("connection-{id}-delete"),
            "delete",
            Action::Delete(Target::Connection(id)),
        ),
        ICON_DELETE,
    )
}

/// Connection table: the header row, then one row per connection.
pub fn connection_table(connections: &[Connection]) -> impl Iterator<Item = Row> + '_ {
    iter::once(connection_header()).chain(connections.iter().map(connection_row))
}

/// `<option value="value">label</option>`
pub fn option(value: &str, label: &str) -> Row {
    Row::new()
        .with_node(Node::element("option").with_attribute("value", value), None)
        .with_text(label, Some(0))
}

/// One option per type name, labelled with the name itself.
pub fn type_options(types: &[String]) -> impl Iterator<Item = Row> + '_ {
    types.iter().map(|name| option(name, name))
}

/// One option per connection, valued by id and labelled by name.
pub fn connection_options(connections: &[Connection]) -> impl Iterator<Item = Row> + '_ {
    connections
        .iter()
        .map(|connection| option(&connection.id.to_string(), &connection.name))
}
