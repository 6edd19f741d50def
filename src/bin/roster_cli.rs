use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use chrono::{Datelike, Local};
use clap::{Parser, command};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::EnvFilter;

use student_roster::dao::roster::RosterDao;
use student_roster::model::apperror::{ApplicationError, ErrorType};
use student_roster::model::models::GroupFilter;
use student_roster::render::text::render_table;
use student_roster::service::roster::RosterService;

/**
 * Command-line arguments for the roster CLI. Both arguments have
 * defaults, so a bare invocation works against `university.db` in the
 * working directory with the current calendar year.
 */
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CliArguments {
    /**
     * Path to the provisioned SQLite database file.
     */
    #[arg(short, long, default_value = "university.db")]
    database: String,
    /**
     * Reference year for group activity. Defaults to the current year.
     */
    #[arg(short, long)]
    year: Option<i64>,
}

/**
 * Main entry point for the roster CLI.
 *
 * Exit codes: 0 on success (including an empty result), 1 on invalid
 * filter input, 2 on storage or initialization errors.
 */
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = CliArguments::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(exit_code(&err.error_type))
        }
    }
}

/**
 * Maps the error taxonomy to process exit codes.
 */
fn exit_code(error_type: &ErrorType) -> u8 {
    match error_type {
        ErrorType::InvalidFilter => 1,
        ErrorType::Initialization | ErrorType::StorageUnavailable | ErrorType::DatabaseError => 2,
    }
}

/**
 * Runs one roster listing: print the active groups, read the optional
 * group filter from stdin, validate it and print the student table.
 *
 * # Arguments
 * `args`: The parsed command-line arguments.
 *
 * # Returns
 * A `Result` indicating success or the `ApplicationError` that ended the run.
 */
async fn run(args: &CliArguments) -> Result<(), ApplicationError> {
    if !Path::new(&args.database).exists() {
        return Err(ApplicationError::new(
            ErrorType::StorageUnavailable,
            format!("Error: database file '{0}' not found.\nProvision it first: sqlite3 {0} < create_database.sql", args.database),
        ));
    }
    let connection_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(&args.database).read_only(true))
        .await
        .map_err(|err| ApplicationError::new(ErrorType::StorageUnavailable, format!("Error: failed to open database: {err}")))?;
    let roster_service = RosterService::new(RosterDao::new(), Some(connection_pool));
    let reference_year = args.year.unwrap_or_else(|| i64::from(Local::now().year()));

    let groups = roster_service.list_active_groups(reference_year).await?;

    println!("================================================");
    println!("                 STUDENT ROSTER");
    println!("================================================");
    println!();
    println!("AVAILABLE GROUPS: {}", groups.iter().map(ToString::to_string).collect::<Vec<String>>().join(", "));
    println!();

    let group_filter = read_group_filter(&groups)?;
    let rows = roster_service.list_students(reference_year, group_filter.selected()).await?;

    println!();
    if rows.is_empty() {
        println!("No students found.");
        return Ok(());
    }
    print!("{}", render_table(&rows));
    Ok(())
}

/**
 * Prompts for a group filter and reads one line from standard input.
 * Blank input means no filter; anything else must be the number of an
 * active group.
 */
fn read_group_filter(active_groups: &[i64]) -> Result<GroupFilter, ApplicationError> {
    print!("Enter a group number or press Enter for all groups: ");
    std::io::stdout().flush().map_err(|err| ApplicationError::new(ErrorType::Initialization, format!("Failed to flush stdout: {err}")))?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input).map_err(|err| ApplicationError::new(ErrorType::Initialization, format!("Failed to read input: {err}")))?;
    GroupFilter::parse_strict(&input, active_groups)
}
