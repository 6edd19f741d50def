use std::path::Path;
use std::time::Duration;

use actix_web::{App, HttpServer, middleware::from_fn, web};
use clap::Parser;
use sqlx::{Pool, Sqlite, sqlite::{SqliteConnectOptions, SqlitePoolOptions}};
use tracing_subscriber::EnvFilter;

use student_roster::api::endpoints::roster_page;
use student_roster::api::middleware::request_log_middleware;
use student_roster::api::state::AppState;
use student_roster::dao::roster::RosterDao;
use student_roster::model::config::{ApplicationArguments, Config, DatabaseType, LoggingConfig};
use student_roster::service::roster::RosterService;

/**
 * Main entry point for the roster web server.
 */
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = ApplicationArguments::parse();

    let config = get_config(&args.config_file)?;

    init_tracing(&config.logging)?;

    let DatabaseType::Sqlite { path, max_connections, acquire_timeout } = config.database.db_type.clone();
    if !Path::new(&path).exists() {
        return Err(std::io::Error::other(format!(
            "Database file '{path}' not found. Provision it first: sqlite3 {path} < create_database.sql"
        )));
    }
    let connection_pool: Pool<Sqlite> = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_millis(acquire_timeout))
        .connect_with(SqliteConnectOptions::new().filename(&path).read_only(true))
        .await
        .map_err(|err| std::io::Error::other(format!("Failed to create database pool: {err}")))?;

    let roster_dao = RosterDao::new();
    let roster_service = RosterService::new(roster_dao, Some(connection_pool));

    let state = web::Data::new(AppState::new(roster_service));

    let server_init = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(request_log_middleware))
            .app_data(state.clone())
            .service(roster_page)
    });

    server_init.workers(config.server.workers).bind(("127.0.0.1", config.server.http_port))?.run().await
}

/**
 * Initializes logging for the application.
 *
 * #Arguments
 * `logging`: The logging configuration.
 *
 * #Returns
 * A `Result` indicating success or failure.
 */
fn init_tracing(logging: &LoggingConfig) -> Result<(), std::io::Error> {
    let mut filter = EnvFilter::from_default_env();
    for directive in &logging.directives {
        let directive = directive.parse().map_err(|err| std::io::Error::other(format!("Invalid logging directive '{directive}': {err}")))?;
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(logging.target)
        .with_thread_ids(logging.thread_ids)
        .with_line_number(logging.line_number)
        .with_level(logging.level)
        .with_ansi(logging.ansi)
        .init();
    Ok(())
}

/**
 * Reads the configuration from the specified file.
 *
 * #Arguments
 * `config_file`: The path to the configuration file.
 *
 * #Returns
 * A `Result` containing the parsed `Config` or an `std::io::Error` if reading or parsing fails.
*/
fn get_config(config_file: &str) -> Result<Config, std::io::Error> {
    let config_str: String = std::fs::read_to_string(config_file).map_err(|err| std::io::Error::other(format!("Failed to read config file: {err}")))?;
    let config: Config = toml::from_str(&config_str).map_err(|err| std::io::Error::other(format!("Failed to parse config file: {err}")))?;
    Ok(config)
}
