use actix_web::{HttpResponse, get, http::header::ContentType, web};
use chrono::{Datelike, Local};
use tracing::{Instrument, instrument};

use crate::{
    api::{rest::RosterPageQuery, state::AppState},
    model::apperror::ApplicationError,
    render::html::render_page,
};

/**
 * Endpoint rendering the roster page. The optional `group` query
 * parameter filters to a single group; a missing or non-numeric value
 * shows all active groups.
 */
#[instrument(level = "info", skip(app_state), fields(service = "rosterPage", result))]
#[get("/")]
pub async fn roster_page(query: web::Query<RosterPageQuery>, app_state: web::Data<AppState>) -> Result<HttpResponse, ApplicationError> {
    let span = tracing::Span::current();
    let reference_year = i64::from(Local::now().year());
    let group_filter = query.group_filter();
    let groups = app_state.roster_service.list_active_groups(reference_year).instrument(span.clone()).await?;
    let rows = app_state.roster_service.list_students(reference_year, group_filter).instrument(span).await?;
    Ok(HttpResponse::Ok().insert_header(ContentType::html()).body(render_page(reference_year, &groups, group_filter, &rows)))
}

#[cfg(test)]
mod test {
    use actix_web::{App, test};
    use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

    use super::*;
    use crate::{dao::roster::RosterDao, service::roster::RosterService};

    /**
     * Fixture with graduation years far enough out to stay active for
     * any realistic wall-clock year.
     */
    const TEST_SCHEMA: &str = "
        CREATE TABLE groups (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL,
            major TEXT NOT NULL,
            graduation_year INTEGER NOT NULL
        );
        CREATE TABLE students (
            student_id TEXT PRIMARY KEY,
            last_name TEXT NOT NULL,
            first_name TEXT NOT NULL,
            middle_name TEXT,
            gender TEXT NOT NULL,
            birth_date TEXT NOT NULL,
            group_id INTEGER NOT NULL REFERENCES groups(id)
        );
        INSERT INTO groups (id, number, major, graduation_year) VALUES
            (1, 101, 'CS', 9999),
            (2, 102, 'History', 9999),
            (3, 201, 'Alchemy', 1900);
        INSERT INTO students (student_id, last_name, first_name, middle_name, gender, birth_date, group_id) VALUES
            ('S001', 'Ivanov', 'Ivan', NULL, 'M', '2003-05-10', 1),
            ('S002', 'Petrova', 'Anna', NULL, 'F', '2004-01-22', 2),
            ('S003', 'Flamel', 'Nicolas', NULL, 'M', '1880-09-28', 3);
    ";

    async fn init_state() -> web::Data<AppState> {
        let pool: SqlitePool = SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap();
        sqlx::raw_sql(TEST_SCHEMA).execute(&pool).await.unwrap();
        web::Data::new(AppState::new(RosterService::new(RosterDao::new(), Some(pool))))
    }

    #[actix_web::test]
    async fn test_roster_page_unfiltered() {
        let app = test::init_service(App::new().app_data(init_state().await).service(roster_page)).await;
        let request = test::TestRequest::get().uri("/").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("Ivanov Ivan"));
        assert!(body.contains("Petrova Anna"));
        assert!(!body.contains("Flamel Nicolas"));
        assert!(body.contains("<span class=\"value\">2</span>"));
    }

    #[actix_web::test]
    async fn test_roster_page_filtered() {
        let app = test::init_service(App::new().app_data(init_state().await).service(roster_page)).await;
        let request = test::TestRequest::get().uri("/?group=102").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("Petrova Anna"));
        assert!(!body.contains("Ivanov Ivan"));
        assert!(body.contains("<option value=\"102\" selected>"));
    }

    #[actix_web::test]
    async fn test_roster_page_non_numeric_filter_falls_back_to_unfiltered() {
        let app = test::init_service(App::new().app_data(init_state().await).service(roster_page)).await;
        let request = test::TestRequest::get().uri("/?group=abc").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("Ivanov Ivan"));
        assert!(body.contains("Petrova Anna"));
    }

    #[actix_web::test]
    async fn test_roster_page_unknown_group_shows_empty_result() {
        let app = test::init_service(App::new().app_data(init_state().await).service(roster_page)).await;
        let request = test::TestRequest::get().uri("/?group=999").to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("No students found"));
    }
}
