use crate::service::roster::RosterService;

/**
* Represents the application state shared across the Actix web application.
*/
pub struct AppState {
    /**
     * The roster service for the read-only student queries.
     */
    pub roster_service: RosterService,
}

/**
 * Creates a new instance of `AppState`.
 *
 * # Arguments
 * `roster_service`: The roster service for the read-only student queries.
 */
impl AppState {
    pub fn new(roster_service: RosterService) -> Self {
        AppState { roster_service }
    }
}
