use chrono::NaiveDate;
use sqlx::SqliteConnection;
use tracing::{Instrument, instrument};

use crate::model::{
    apperror::{ApplicationError, ErrorType},
    models::StudentRow,
};

/**
 * Database response type for querying the student list.
 */
pub type QueryStudentListDbResp = (i64, String, String, String, Option<String>, String, NaiveDate, String);

/**
 * SQL query to retrieve the distinct numbers of active groups.
 */
const QUERY_ACTIVE_GROUPS: &str = "SELECT DISTINCT number FROM groups WHERE graduation_year >= ?1 ORDER BY number";

/**
 * SQL query to retrieve students of active groups joined with their group,
 * optionally restricted to a single group number.
 */
const QUERY_STUDENT_LIST: &str = "SELECT g.number, g.major, s.last_name, s.first_name, s.middle_name, s.gender, s.birth_date, s.student_id
                                 FROM students s
                                 JOIN groups g ON s.group_id = g.id
                                 WHERE g.graduation_year >= ?1 AND
                                 (?2 IS NULL OR g.number = ?2)
                                 ORDER BY g.number, s.last_name, s.first_name";

/**
 * DAO for roster-related database operations.
 */
pub struct RosterDao {}

impl RosterDao {
    /**
     * Creates a new instance of `RosterDao`.
     *
     * # Returns
     * A new instance of `RosterDao`.
     */
    pub fn new() -> Self {
        RosterDao {}
    }

    /**
     * Retrieves the distinct numbers of all groups whose graduation year
     * is at or after the reference year, ascending.
     *
     * # Arguments
     * `connection`: The database connection.
     * `reference_year`: The year used as the activity cutoff.
     *
     * # Returns
     * A Result containing the group numbers or an `ApplicationError`.
     */
    #[instrument(skip(self, connection), fields(result))]
    pub async fn get_active_groups(&self, connection: &mut SqliteConnection, reference_year: i64) -> Result<Vec<i64>, ApplicationError> {
        let span = tracing::Span::current();
        let results: Vec<(i64,)> = sqlx::query_as(QUERY_ACTIVE_GROUPS)
            .bind(reference_year)
            .fetch_all(connection)
            .instrument(span)
            .await
            .map_err(|err| ApplicationError::new(ErrorType::DatabaseError, format!("Failed to execute query to get active groups: {err}")))?;
        Ok(results.into_iter().map(|(number,)| number).collect())
    }

    /**
     * Retrieves the joined student/group rows for all students of active
     * groups, ordered by group number, last name and first name.
     *
     * # Arguments
     * `connection`: The database connection.
     * `reference_year`: The year used as the activity cutoff.
     * `group_filter`: Optional group number to restrict the result to.
     *
     * # Returns
     * A Result containing the student rows or an `ApplicationError`. An
     * empty result set is Ok, never an error.
     */
    #[instrument(skip(self, connection), fields(result))]
    pub async fn get_student_rows(&self, connection: &mut SqliteConnection, reference_year: i64, group_filter: Option<i64>) -> Result<Vec<StudentRow>, ApplicationError> {
        let span = tracing::Span::current();
        let results: Vec<QueryStudentListDbResp> = sqlx::query_as(QUERY_STUDENT_LIST)
            .bind(reference_year)
            .bind(group_filter)
            .fetch_all(connection)
            .instrument(span)
            .await
            .map_err(|err| ApplicationError::new(ErrorType::DatabaseError, format!("Failed to execute query to get student list: {err}")))?;
        Ok(results.into_iter().map(StudentRow::from).collect())
    }
}

impl Default for RosterDao {
    fn default() -> Self {
        RosterDao::new()
    }
}

impl From<QueryStudentListDbResp> for StudentRow {
    fn from(row: QueryStudentListDbResp) -> Self {
        let (group_number, major, last_name, first_name, middle_name, gender, birth_date, student_id) = row;
        StudentRow { group_number, major, last_name, first_name, middle_name, gender, birth_date, student_id }
    }
}
