use cinema_booking_api::{config::AppConfig, db::create_orm_conn, migration::Migrator};
use sea_orm_migration::MigratorTrait;

/// `migrate [up|down|status]`, defaulting to `up`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    match command.as_str() {
        "up" => {
            Migrator::up(&orm, None).await?;
            println!("Migrations applied");
        }
        "down" => {
            Migrator::down(&orm, Some(1)).await?;
            println!("Rolled back the last migration");
        }
        "status" => Migrator::status(&orm).await?,
        other => anyhow::bail!("unknown command `{other}`, expected up, down or status"),
    }
    Ok(())
}
