pub mod editor;
pub mod models;
pub mod time;
pub mod validator;

pub use editor::ScheduleEditor;
pub use models::{DayOfWeek, ScheduleCollection, ScheduleGroup, Shift};
pub use validator::{is_day_claimed_elsewhere, validate, ValidationError};
