//! Schema management: `migrate [up|down|fresh|status]`, defaulting to `up`.

use sea_orm_migration::MigratorTrait;
use storefront_api::{config::AppConfig, db::create_orm_conn, migration::Migrator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    match command.as_str() {
        "up" => Migrator::up(&orm, None).await?,
        "down" => Migrator::down(&orm, None).await?,
        "fresh" => Migrator::fresh(&orm).await?,
        "status" => Migrator::status(&orm).await?,
        other => anyhow::bail!("unknown command `{other}`, expected up, down, fresh or status"),
    }
    tracing::info!(command = %command, "migration command finished");

    orm.close().await?;
    Ok(())
}
