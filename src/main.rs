use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use orderpad::application::{CatalogSummary, LoadMenuUseCase, OrderSession};
use orderpad::domain::MenuSourcePort;
use orderpad::infrastructure::{
    AppConfig, CliArgs, ConfigStore, EmbeddedMenuSource, HttpMenuClient, MenuSourceKind,
};
use orderpad::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let store = ConfigStore::from_project_dirs()?;
    let mut config = store.load(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn menu_source(config: &AppConfig) -> Result<Arc<dyn MenuSourcePort>> {
    let source: Arc<dyn MenuSourcePort> = match config.menu.source {
        MenuSourceKind::Http => Arc::new(HttpMenuClient::from_config(&config.menu)?),
        MenuSourceKind::Embedded => Arc::new(EmbeddedMenuSource::new()),
    };
    Ok(source)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = orderpad::VERSION, source = %config.menu.source, "Starting orderpad");

    let source = menu_source(&config)?;
    let description = source.describe();
    let menu = LoadMenuUseCase::new(source).execute().await?;

    if config.check_menu {
        let summary = CatalogSummary::from_menu(description, &menu);
        info!(%summary, "Menu check passed");
        println!("{summary}");
        return Ok(());
    }

    let app = App::new(OrderSession::new(menu), &config, description);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
