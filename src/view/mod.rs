mod action;
mod form;
pub mod ids;
mod navigation;
pub mod rows;
mod state;

pub use action::{plan, Action, Step, Target};
pub use form::{
    connection_fields, course_fields, exercise_fields, Encoding, FieldValues, FormRequest,
    FormSlot,
};
pub use navigation::{Navigation, Ticket};
pub use state::View;
