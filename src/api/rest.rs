use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use html_escape::encode_text;
use serde::Deserialize;

use crate::model::apperror::{ApplicationError, ErrorType};

/***************** Page request models *********************/

/**
 * Query parameters accepted by the roster page.
 *
 * The filter arrives as an optional, requester-controlled parameter, so
 * it is taken as raw text and parsed leniently rather than rejected.
 */
#[derive(Debug, Deserialize)]
pub struct RosterPageQuery {
    /**
     * Optional group number to filter by.
     */
    pub group: Option<String>,
}

impl RosterPageQuery {
    /**
     * Returns the group filter when the parameter is present and numeric.
     * A missing, blank or non-numeric value is treated as unfiltered.
     */
    pub fn group_filter(&self) -> Option<i64> {
        self.group.as_deref().map(str::trim).filter(|value| !value.is_empty()).and_then(|value| value.parse().ok())
    }
}

/***************** Error models *********************/

impl ResponseError for ApplicationError {
    /**
     * Generates an error response for the application error. The surface
     * is a browser page, so the body is a minimal HTML document carrying
     * only the error's own message text.
     */
    fn error_response(&self) -> HttpResponse {
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head><title>Error</title></head>\n<body><h1>Error</h1><p>{}</p></body></html>\n",
            encode_text(&self.message)
        );
        HttpResponse::build(get_statuscode(&self.error_type)).insert_header(ContentType::html()).body(body)
    }
}

/**
* Maps application errors to HTTP status codes.
*
* # Arguments
* `application_error`: The type of error that occurred.
*
* # Returns
* The corresponding HTTP status code.
*/
fn get_statuscode(application_error: &ErrorType) -> StatusCode {
    match application_error {
        ErrorType::Initialization => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorType::StorageUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorType::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorType::InvalidFilter => StatusCode::BAD_REQUEST,
    }
}
