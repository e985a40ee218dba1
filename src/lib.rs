pub mod config;
pub mod error;
pub mod schedule;

pub use config::Config;
pub use error::{Error, ScheduleResult};
pub use schedule::{
    is_day_claimed_elsewhere, validate, DayOfWeek, ScheduleCollection, ScheduleEditor,
    ScheduleGroup, Shift, ValidationError,
};
