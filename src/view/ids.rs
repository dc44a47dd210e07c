//! Element ids and selectors of the HTML template.

pub const CONTENT_BODY: &str = "content-body";

pub const OVERLAY_LOADING: &str = "overlay-loading";
pub const OVERLAY_REBOOT: &str = "overlay-reboot";
pub const OVERLAYS: &str = ".overlay";

pub const COURSE_LIST: &str = "course-list";
pub const COURSES: &str = "courses";
pub const COURSE_NEW: &str = "course-new";
pub const COURSE_EDIT: &str = "course-edit";
pub const COURSE_SHOW: &str = "course-show";
pub const COURSE_SHOW_NAME: &str = "course-show-courseName";

pub const EXERCISE_LIST: &str = "exercise-list";
pub const EXERCISE_NEW: &str = "exercise-new";
pub const EXERCISE_EDIT: &str = "exercise-edit";
pub const NO_CONNECTION_ERROR: &str = "no-connection-error";

pub const SETTINGS: &str = "settings";
pub const CONNECTION_LIST: &str = "connection-list";
pub const CONNECTION_NEW: &str = "connection-new";
pub const CONNECTION_EDIT: &str = "connection-edit";

pub const XML: &str = "xml";
pub const XML_CONFIG: &str = "xml-config";
pub const XML_STATE: &str = "xml-state";
pub const XML_CONFIG_FIELD: &str = "xml-config-field";
pub const XML_STATE_FIELD: &str = "xml-state-field";

pub const HOME_BUTTON: &str = ".home-button";
pub const BACK_BUTTON: &str = ".back-button";
pub const REFRESH_BUTTON: &str = ".refresh-button";
pub const SETTINGS_BUTTON: &str = ".settings-button";
pub const XML_BUTTON: &str = ".xml-button";
pub const HELP_BUTTON: &str = ".help-button";
pub const COURSE_NEW_BUTTON: &str = "#course-new-button";
pub const EXERCISE_NEW_BUTTON: &str = "#exercise-new-button";
pub const CONNECTION_NEW_BUTTON: &str = "#connection-new-button";

/// Id of a field inside one of the entity forms, e.g. `exercise-edit-period`.
pub fn field(form: &str, name: &str) -> String {
    format!("{form}-{name}")
}

/// Table body id of a list panel, e.g. `#exercise-list table`.
pub fn table(panel: &str) -> String {
    format!("#{panel} table")
}
