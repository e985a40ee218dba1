use crate::config::Config;
use crate::error::{schedule_error, ScheduleResult};
use crate::schedule::models::{DayOfWeek, ScheduleCollection, ScheduleGroup, Shift};
use crate::schedule::validator::{is_day_claimed_elsewhere, validate, ValidationError};
use tracing::{debug, warn};

/// Message shown when a schedule group has no day selected
pub const NO_DAYS_SELECTED: &str = "At least one day must be selected for each schedule group";

/// Editing surface over one employee's schedule collection.
///
/// Holds the collection being edited and the violations found in its
/// current state. Every mutation revalidates the whole collection
/// synchronously, so `errors()` always describes the state a caller is
/// looking at; nothing is recomputed lazily or in the background. Saving
/// is the caller's move, gated on [`ScheduleEditor::can_save`].
pub struct ScheduleEditor {
    collection: ScheduleCollection,
    default_shift: Shift,
    errors: Vec<ValidationError>,
}

impl ScheduleEditor {
    /// Start editing a collection loaded from an employee record
    pub fn new(collection: ScheduleCollection) -> Self {
        Self::with_config(collection, &Config::default())
    }

    /// Start editing with a configured shift template
    pub fn with_config(collection: ScheduleCollection, config: &Config) -> Self {
        let mut editor = Self {
            collection,
            default_shift: config.default_shift(),
            errors: Vec::new(),
        };
        editor.revalidate();
        editor
    }

    /// Start a schedule for an employee with no persisted working hours:
    /// one group, no days selected yet, one template shift
    pub fn for_new_employee(config: &Config) -> Self {
        let group = ScheduleGroup {
            days_of_week: Default::default(),
            shifts: vec![config.default_shift()],
        };
        Self::with_config(ScheduleCollection::from_groups(vec![group]), config)
    }

    /// Append an empty schedule group seeded with the template shift.
    /// Returns the new group's index.
    pub fn add_group(&mut self) -> usize {
        let group = ScheduleGroup {
            days_of_week: Default::default(),
            shifts: vec![self.default_shift.clone()],
        };
        self.collection.groups.push(group);
        let index = self.collection.groups.len() - 1;
        debug!("Added schedule group {}", index);
        self.revalidate();
        index
    }

    /// Remove the schedule group at `index`
    pub fn remove_group(&mut self, index: usize) -> ScheduleResult<()> {
        self.check_group(index)?;
        self.collection.groups.remove(index);
        debug!("Removed schedule group {}", index);
        self.revalidate();
        Ok(())
    }

    /// Toggle a day on or off for the group at `index`.
    ///
    /// A day can belong to at most one group in the collection, so turning
    /// a day on that another group already claims is rejected here, at the
    /// point of assignment, and the collection is left untouched. Turning
    /// a day off is always allowed. Returns the day's new selected state.
    pub fn toggle_day(&mut self, index: usize, day: DayOfWeek) -> ScheduleResult<bool> {
        self.check_group(index)?;

        if self.collection.groups[index].covers(day) {
            self.collection.groups[index].days_of_week.remove(&day);
            debug!("Removed {} from schedule group {}", day, index);
            self.revalidate();
            return Ok(false);
        }

        if is_day_claimed_elsewhere(&self.collection, index, day) {
            warn!("Rejected toggle of {} for group {}: day already assigned", day, index);
            return Err(schedule_error(&format!(
                "{} is already assigned to another schedule group",
                day
            )));
        }

        self.collection.groups[index].days_of_week.insert(day);
        debug!("Added {} to schedule group {}", day, index);
        self.revalidate();
        Ok(true)
    }

    /// Append a template shift to the group at `index`.
    /// Returns the new shift's index within the group.
    pub fn add_shift(&mut self, index: usize) -> ScheduleResult<usize> {
        self.check_group(index)?;
        self.collection.groups[index]
            .shifts
            .push(self.default_shift.clone());
        let shift_index = self.collection.groups[index].shifts.len() - 1;
        debug!("Added shift {} to schedule group {}", shift_index, index);
        self.revalidate();
        Ok(shift_index)
    }

    /// Remove a shift from the group at `index`
    pub fn remove_shift(&mut self, index: usize, shift_index: usize) -> ScheduleResult<()> {
        self.check_shift(index, shift_index)?;
        self.collection.groups[index].shifts.remove(shift_index);
        debug!("Removed shift {} from schedule group {}", shift_index, index);
        self.revalidate();
        Ok(())
    }

    /// Replace the times and label of a shift
    pub fn update_shift(
        &mut self,
        index: usize,
        shift_index: usize,
        shift: Shift,
    ) -> ScheduleResult<()> {
        self.check_shift(index, shift_index)?;
        debug!(
            "Updating shift {} of schedule group {} to {}",
            shift_index,
            index,
            shift.format()
        );
        self.collection.groups[index].shifts[shift_index] = shift;
        self.revalidate();
        Ok(())
    }

    /// Violations in the collection's current state, in the order the
    /// validator reports them
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether the current state may be submitted to the employee API
    pub fn can_save(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collection being edited
    pub fn collection(&self) -> &ScheduleCollection {
        &self.collection
    }

    /// Give up the editor and keep the edited collection
    pub fn into_collection(self) -> ScheduleCollection {
        self.collection
    }

    /// Recompute the error list from the full current collection.
    ///
    /// A group with no day selected is nonsensical, so that single
    /// collection-level message short-circuits the interval checks.
    fn revalidate(&mut self) {
        let missing_days = self
            .collection
            .groups
            .iter()
            .any(|group| group.days_of_week.is_empty());

        self.errors = if missing_days {
            vec![ValidationError::collection_level(NO_DAYS_SELECTED)]
        } else {
            validate(&self.collection)
        };
    }

    fn check_group(&self, index: usize) -> ScheduleResult<()> {
        if index >= self.collection.groups.len() {
            return Err(schedule_error(&format!(
                "No schedule group at index {}",
                index
            )));
        }
        Ok(())
    }

    fn check_shift(&self, index: usize, shift_index: usize) -> ScheduleResult<()> {
        self.check_group(index)?;
        if shift_index >= self.collection.groups[index].shifts.len() {
            return Err(schedule_error(&format!(
                "No shift at index {} in schedule group {}",
                shift_index, index
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_days(days: &[DayOfWeek]) -> ScheduleEditor {
        let mut editor = ScheduleEditor::for_new_employee(&Config::default());
        for day in days {
            editor.toggle_day(0, *day).unwrap();
        }
        editor
    }

    #[test]
    fn test_new_employee_blocks_save_until_day_selected() {
        let mut editor = ScheduleEditor::for_new_employee(&Config::default());

        // One template shift, but no day selected yet
        assert!(!editor.can_save());
        assert_eq!(editor.errors(), &[ValidationError::collection_level(NO_DAYS_SELECTED)]);

        editor.toggle_day(0, DayOfWeek::Monday).unwrap();
        assert!(editor.can_save());
    }

    #[test]
    fn test_toggle_rejects_day_claimed_elsewhere() {
        let mut editor = editor_with_days(&[DayOfWeek::Monday]);
        let second = editor.add_group();

        let result = editor.toggle_day(second, DayOfWeek::Monday);
        assert!(result.is_err());
        // The rejected toggle left the collection untouched
        assert!(editor.collection().groups[second].days_of_week.is_empty());

        // A free day is accepted
        assert_eq!(editor.toggle_day(second, DayOfWeek::Tuesday).unwrap(), true);
    }

    #[test]
    fn test_toggle_off_frees_the_day() {
        let mut editor = editor_with_days(&[DayOfWeek::Monday]);
        let second = editor.add_group();

        assert_eq!(editor.toggle_day(0, DayOfWeek::Monday).unwrap(), false);
        // Once group 0 gave Monday up, the second group may take it
        assert_eq!(editor.toggle_day(second, DayOfWeek::Monday).unwrap(), true);
    }

    #[test]
    fn test_errors_follow_every_mutation() {
        let mut editor = editor_with_days(&[DayOfWeek::Monday]);
        assert!(editor.can_save());

        // Second shift overlapping the 09:00-17:00 template shift
        let shift_index = editor.add_shift(0).unwrap();
        editor
            .update_shift(0, shift_index, Shift::new("16:00", "20:00", None))
            .unwrap();
        assert!(!editor.can_save());
        assert_eq!(editor.errors().len(), 1);
        assert_eq!(editor.errors()[0].shift_index, 1);

        // Moving the shift past the first one clears the error
        editor
            .update_shift(0, shift_index, Shift::new("17:00", "20:00", None))
            .unwrap();
        assert!(editor.can_save());
    }

    #[test]
    fn test_remove_shift_and_group() {
        let mut editor = editor_with_days(&[DayOfWeek::Monday]);
        let shift_index = editor.add_shift(0).unwrap();
        // The added shift duplicates the template shift on Monday
        assert!(!editor.can_save());

        editor.remove_shift(0, shift_index).unwrap();
        assert!(editor.can_save());

        editor.remove_group(0).unwrap();
        assert!(editor.collection().is_empty());
        assert!(editor.can_save());
    }

    #[test]
    fn test_index_errors() {
        let mut editor = editor_with_days(&[DayOfWeek::Monday]);

        assert!(editor.remove_group(5).is_err());
        assert!(editor.toggle_day(5, DayOfWeek::Monday).is_err());
        assert!(editor.remove_shift(0, 9).is_err());
        assert!(editor
            .update_shift(0, 9, Shift::new("09:00", "10:00", None))
            .is_err());
    }

    #[test]
    fn test_loaded_data_with_shared_day_is_caught() {
        // Persisted data can arrive with a day claimed by two groups;
        // the editor cannot prevent that after the fact, but validation
        // still reports the resulting overlap
        let mut first = ScheduleGroup::new();
        first.days_of_week.insert(DayOfWeek::Monday);
        first.shifts.push(Shift::new("08:00", "12:00", None));
        let mut second = ScheduleGroup::new();
        second.days_of_week.insert(DayOfWeek::Monday);
        second.shifts.push(Shift::new("11:00", "15:00", None));

        let editor = ScheduleEditor::new(ScheduleCollection::from_groups(vec![first, second]));
        assert!(!editor.can_save());
        assert_eq!(editor.errors().len(), 1);
        assert_eq!(editor.errors()[0].request_index, 1);
    }
}
