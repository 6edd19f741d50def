use chrono::NaiveDate;

use crate::model::apperror::{ApplicationError, ErrorType};

/**
 * The joined, flattened projection of a student and its group used for display.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    /**
     * Number of the group the student belongs to.
     */
    pub group_number: i64,
    /**
     * Academic program name of the group.
     */
    pub major: String,
    /**
     * Surname of the student.
     */
    pub last_name: String,
    /**
     * Given name of the student.
     */
    pub first_name: String,
    /**
     * Middle name of the student, if any.
     */
    pub middle_name: Option<String>,
    /**
     * Gender code of the student.
     */
    pub gender: String,
    /**
     * Birth date of the student.
     */
    pub birth_date: NaiveDate,
    /**
     * Institutional identifier of the student.
     */
    pub student_id: String,
}

impl StudentRow {
    /**
     * Returns the display name: surname and given name, with the middle
     * name appended when present.
     */
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle_name) => format!("{} {} {}", self.last_name, self.first_name, middle_name),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }
}

/**
 * The group filter state: either no filter or a single active group number.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFilter {
    /**
     * No group restriction; all active groups are shown.
     */
    Unfiltered,
    /**
     * Restrict to students of a single group.
     */
    Filtered(i64),
}

impl GroupFilter {
    /**
     * Returns the selected group number, or `None` when unfiltered.
     */
    pub fn selected(&self) -> Option<i64> {
        match self {
            GroupFilter::Unfiltered => None,
            GroupFilter::Filtered(group_number) => Some(*group_number),
        }
    }

    /**
     * Parses interactive filter input against the list of active groups.
     *
     * Blank input stays unfiltered. Non-numeric input and numbers not in
     * the active-group list are rejected; there is no retry.
     *
     * # Arguments
     * `input`: One line of user input, possibly with surrounding whitespace.
     * `active_groups`: Group numbers that are currently active.
     *
     * # Returns
     * A Result containing the `GroupFilter` or an `ApplicationError` of type `InvalidFilter`.
     */
    pub fn parse_strict(input: &str, active_groups: &[i64]) -> Result<Self, ApplicationError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(GroupFilter::Unfiltered);
        }
        let group_number: i64 = input
            .parse()
            .map_err(|_| ApplicationError::new(ErrorType::InvalidFilter, "Error: the group number must be a number".to_string()))?;
        if !active_groups.contains(&group_number) {
            return Err(ApplicationError::new(ErrorType::InvalidFilter, format!("Error: group {group_number} does not exist")));
        }
        Ok(GroupFilter::Filtered(group_number))
    }
}
