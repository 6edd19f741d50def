use sqlx::{Pool, Sqlite};

use crate::{
    dao::roster::RosterDao,
    model::{
        apperror::{ApplicationError, ErrorType},
        models::StudentRow,
    },
};

/**
 * Represents the service for the read-only roster queries.
 */
pub struct RosterService {
    /**
     * The DAO for roster operations.
     */
    roster_dao: RosterDao,
    /**
     * Optional connection pool for database operations. Optional for test purposes until we have a better way to mock the database.
     */
    connection_pool: Option<Pool<Sqlite>>,
}

impl RosterService {
    /**
     * Creates a new instance of `RosterService`.
     *
     * # Arguments
     * `roster_dao`: The DAO for roster operations.
     * `connection_pool`: Optional connection pool for database operations.
     *
     * # Returns
     * A new instance of `RosterService`.
     */
    pub fn new(roster_dao: RosterDao, connection_pool: Option<Pool<Sqlite>>) -> Self {
        RosterService { roster_dao, connection_pool }
    }

    /**
     * Retrieves the distinct numbers of all active groups under the
     * reference year, ascending.
     *
     * # Arguments
     * `reference_year`: The year used as the activity cutoff.
     *
     * # Returns
     * A Result containing the group numbers or an `ApplicationError`.
     */
    pub async fn list_active_groups(&self, reference_year: i64) -> Result<Vec<i64>, ApplicationError> {
        let mut connection = self.acquire().await?;
        self.roster_dao.get_active_groups(&mut connection, reference_year).await
    }

    /**
     * Retrieves the joined student rows for all active groups, optionally
     * restricted to a single group number.
     *
     * # Arguments
     * `reference_year`: The year used as the activity cutoff.
     * `group_filter`: Optional group number to restrict the result to.
     *
     * # Returns
     * A Result containing the student rows or an `ApplicationError`.
     */
    pub async fn list_students(&self, reference_year: i64, group_filter: Option<i64>) -> Result<Vec<StudentRow>, ApplicationError> {
        let mut connection = self.acquire().await?;
        self.roster_dao.get_student_rows(&mut connection, reference_year, group_filter).await
    }

    /**
     * Acquires a pooled connection. The connection returns to the pool
     * when dropped, also on error paths.
     */
    async fn acquire(&self) -> Result<sqlx::pool::PoolConnection<Sqlite>, ApplicationError> {
        let Some(connection_pool) = &self.connection_pool else {
            return Err(ApplicationError::new(ErrorType::DatabaseError, "No database connection available".to_string()));
        };
        connection_pool
            .acquire()
            .await
            .map_err(|err| ApplicationError::new(ErrorType::DatabaseError, format!("Failed to acquire database connection: {err}")))
    }
}
