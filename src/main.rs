use hh_vacancy_db::{Config, DbManager, report};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        create_if_missing = cfg.create_if_missing,
        loglevel = %cfg.loglevel
    );

    let keyword = std::env::args().nth(1);

    let db = DbManager::connect(&cfg).await?;
    let json = report::render_and_close(db, keyword.as_deref()).await?;
    println!("{json}");
    Ok(())
}
