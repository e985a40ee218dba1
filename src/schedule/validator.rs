use crate::schedule::models::{DayOfWeek, ScheduleCollection};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Index value marking an error that concerns the whole collection
/// rather than one shift
pub const COLLECTION_LEVEL: i32 = -1;

/// A single validation violation, attributable to the shift that caused it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Position of the schedule group in the collection, -1 for
    /// collection-level errors
    pub request_index: i32,
    /// Position of the shift within the group, -1 for collection-level errors
    pub shift_index: i32,
    /// Human-readable message for display next to the shift
    pub message: String,
}

impl ValidationError {
    /// Create an error attributed to one shift
    pub fn for_shift(request_index: usize, shift_index: usize, message: impl Into<String>) -> Self {
        Self {
            request_index: request_index as i32,
            shift_index: shift_index as i32,
            message: message.into(),
        }
    }

    /// Create an error that concerns the whole collection
    pub fn collection_level(message: impl Into<String>) -> Self {
        Self {
            request_index: COLLECTION_LEVEL,
            shift_index: COLLECTION_LEVEL,
            message: message.into(),
        }
    }

    /// Whether this error concerns the whole collection
    pub fn is_collection_level(&self) -> bool {
        self.request_index == COLLECTION_LEVEL
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_collection_level() {
            f.write_str(&self.message)
        } else {
            write!(
                f,
                "group {}, shift {}: {}",
                self.request_index, self.shift_index, self.message
            )
        }
    }
}

/// A shift tagged with its position in the collection, flattened out for
/// the per-day overlap walk
struct TaggedShift {
    request_index: usize,
    shift_index: usize,
    start: u32,
    end: u32,
}

/// Validate a full schedule collection.
///
/// Returns every violation found, in an order that is deterministic for a
/// given collection. Two shifts assigned to the same day must not
/// intersect in time, whether they live in the same group or not; a day
/// shared between groups can still arrive in persisted data, so the scan
/// always covers the whole collection. Shifts with malformed times take
/// part in no interval check; rejecting the format is the form
/// validator's job.
pub fn validate(collection: &ScheduleCollection) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut checked_days: BTreeSet<DayOfWeek> = BTreeSet::new();

    for (request_index, group) in collection.groups.iter().enumerate() {
        // Overlap check for each day this group touches. Every day is
        // checked once even when several groups share it, so one physical
        // overlap is reported exactly once.
        for day in &group.days_of_week {
            if checked_days.insert(*day) {
                check_day_overlaps(collection, *day, &mut errors);
            }
        }

        // Each shift must end strictly after it starts
        for (shift_index, shift) in group.shifts.iter().enumerate() {
            if let (Some(start), Some(end)) = (shift.start_minutes(), shift.end_minutes()) {
                if end <= start {
                    errors.push(ValidationError::for_shift(
                        request_index,
                        shift_index,
                        "End time must be after start time",
                    ));
                }
            }
        }
    }

    errors
}

/// Report overlaps between the shifts assigned to one day, across all groups.
///
/// Sorting by start time makes the adjacent-pair walk sufficient: any
/// intersecting pair leaves at least one adjacent pair where the earlier
/// shift runs past the later one's start. A shift ending exactly when the
/// next begins is not an overlap.
fn check_day_overlaps(collection: &ScheduleCollection, day: DayOfWeek, errors: &mut Vec<ValidationError>) {
    let mut on_day: Vec<TaggedShift> = Vec::new();
    for (request_index, group) in collection.groups.iter().enumerate() {
        if !group.covers(day) {
            continue;
        }
        for (shift_index, shift) in group.shifts.iter().enumerate() {
            if let (Some(start), Some(end)) = (shift.start_minutes(), shift.end_minutes()) {
                on_day.push(TaggedShift {
                    request_index,
                    shift_index,
                    start,
                    end,
                });
            }
        }
    }

    // Stable sort keeps collection order between shifts starting together
    on_day.sort_by_key(|tagged| tagged.start);

    for pair in on_day.windows(2) {
        if pair[0].end > pair[1].start {
            errors.push(ValidationError::for_shift(
                pair[1].request_index,
                pair[1].shift_index,
                format!("Overlaps with another shift on {}", day),
            ));
        }
    }
}

/// Whether `day` is already assigned to a group other than the one at
/// `request_index`.
///
/// Existence check used to block a day toggle at interaction time; it
/// reports nothing and produces no [`ValidationError`].
pub fn is_day_claimed_elsewhere(
    collection: &ScheduleCollection,
    request_index: usize,
    day: DayOfWeek,
) -> bool {
    collection
        .groups
        .iter()
        .enumerate()
        .any(|(index, group)| index != request_index && group.covers(day))
}
