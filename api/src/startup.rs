use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::Config;

/// Connects to the database and, unless disabled, runs pending migrations.
///
/// The schema must be current before any repository touches the connection.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        tracing::info!("Running database migrations");
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}
