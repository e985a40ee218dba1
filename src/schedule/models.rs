use crate::schedule::time::time_to_minutes;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Calendar days a schedule group can be assigned to.
///
/// Ordering follows the ISO week (Monday first) so day sets iterate in
/// week order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days in week order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Upper-case name used on the wire and in validation messages
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
            DayOfWeek::Sunday => chrono::Weekday::Sun,
        }
    }
}

/// A contiguous time-of-day interval worked within a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Start of the shift (HH:MM, 24-hour)
    pub start_time: String,
    /// End of the shift (HH:MM, 24-hour), must fall after the start
    pub end_time: String,
    /// Free-text label shown next to the shift
    pub description: Option<String>,
}

impl Shift {
    /// Create a new shift
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            description,
        }
    }

    /// Start time as minutes since midnight, if well-formed
    pub fn start_minutes(&self) -> Option<u32> {
        time_to_minutes(&self.start_time)
    }

    /// End time as minutes since midnight, if well-formed
    pub fn end_minutes(&self) -> Option<u32> {
        time_to_minutes(&self.end_time)
    }

    /// Length of the shift in minutes; None when either time is malformed
    /// or the end does not fall after the start
    pub fn duration_minutes(&self) -> Option<u32> {
        let start = self.start_minutes()?;
        let end = self.end_minutes()?;
        end.checked_sub(start)
    }

    /// Format the shift as a human-readable string
    pub fn format(&self) -> String {
        match self.description.as_deref() {
            Some(description) => format!("{} - {} ({})", self.start_time, self.end_time, description),
            None => format!("{} - {}", self.start_time, self.end_time),
        }
    }
}

/// A named working-hours pattern: the shifts worked on a set of week days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGroup {
    /// Days this pattern applies to; the set type rules out duplicates
    pub days_of_week: BTreeSet<DayOfWeek>,
    /// Shifts worked on each of those days, in insertion order
    pub shifts: Vec<Shift>,
}

impl ScheduleGroup {
    /// Create an empty schedule group
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this group's pattern applies to the given day
    pub fn covers(&self, day: DayOfWeek) -> bool {
        self.days_of_week.contains(&day)
    }
}

/// An employee's full set of schedule groups.
///
/// This is the unit the validator operates on and the unit an employee
/// record owns; it is replaced wholesale on every edit. Serializes as a
/// bare array to match the `workingHoursRequests` wire shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ScheduleCollection {
    pub groups: Vec<ScheduleGroup>,
}

impl ScheduleCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from existing groups
    pub fn from_groups(groups: Vec<ScheduleGroup>) -> Self {
        Self { groups }
    }

    /// Number of schedule groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the collection has no groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
