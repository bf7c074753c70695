//! Startup routines: store connection and migrations.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations.
///
/// In-memory SQLite URLs are pinned to a single pooled connection: every
/// sqlx connection to `sqlite::memory:` opens its own blank database, so a
/// larger pool would scatter the tables across connections.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    if config.database_url.contains("memory") {
        opt.max_connections(1);
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
