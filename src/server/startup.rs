use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Number of connection attempts before startup gives up.
const CONNECT_ATTEMPTS: u32 = 5;

/// Base delay between attempts; attempt `n` waits `n` times this long.
const CONNECT_BACKOFF: Duration = Duration::from_secs(2);

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the store and runs pending migrations.
///
/// Each attempt connects and pings the store. Failed attempts are retried with a
/// linearly growing delay. On Postgres the configured database name is used as the
/// schema search path; on SQLite it is only logged.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and name
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected store with migrations applied
/// - `Err(AppError)` - Every attempt failed, or the migrations failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut attempt = 1;
    let db = loop {
        match try_connect(config).await {
            Ok(db) => break db,
            Err(err) if attempt < CONNECT_ATTEMPTS => {
                let delay = CONNECT_BACKOFF * attempt;
                tracing::warn!(
                    "Store connection attempt {}/{} failed: {}; retrying in {:?}",
                    attempt,
                    CONNECT_ATTEMPTS,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(
                    "Store connection failed after {} attempts: {}",
                    CONNECT_ATTEMPTS,
                    err
                );
                return Err(err.into());
            }
        }
    };

    tracing::info!("Connected to store '{}'", config.database_name);

    ensure_schema(&db, &config.database_name).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the schema named by `DATABASE_NAME` on Postgres so the search path
/// resolves before migrations create their tables. No-op on other backends.
pub async fn ensure_schema(db: &DatabaseConnection, name: &str) -> Result<(), DbErr> {
    if db.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    db.execute_unprepared(&create_schema_statement(name)).await?;

    Ok(())
}

/// `CREATE SCHEMA IF NOT EXISTS` with `name` quoted as an identifier.
fn create_schema_statement(name: &str) -> String {
    format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\"",
        name.replace('"', "\"\"")
    )
}

async fn try_connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .set_schema_search_path(config.database_name.clone());

    let db = Database::connect(opt).await?;
    db.ping().await?;

    Ok(db)
}
