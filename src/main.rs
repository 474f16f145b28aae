//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use ciki_raino::adapters::clock::SystemClock;
use ciki_raino::adapters::persistence::JsonStore;
use ciki_raino::adapters::ui::tui::TuiInputPort;
use ciki_raino::ports::{ClockPort, InputPort, StorePort};
use ciki_raino::usecases::{ArticleService, ChatService, PrefsService, TrackerService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    ciki_raino::adapters::ui::init_ui();

    let cfg = ciki_raino::shared::config::AppConfig::load().unwrap_or_default();
    let data_path = PathBuf::from(cfg.data_dir_or_default());
    tokio::fs::create_dir_all(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir: {}", e))?;
    let store_path = data_path.join("store.json");
    info!(path = %store_path.display(), "store file");

    // --- Store: JSON key-value file (snapshot, transcript, theme) ---
    let store_impl = JsonStore::new(&store_path);
    store_impl
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let store: Arc<dyn StorePort> = Arc::new(store_impl);

    // --- Clock: the only place ambient time enters the application ---
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    // --- Services ---
    let tracker = Arc::new(TrackerService::new(Arc::clone(&store), Arc::clone(&clock)));
    let chat = Arc::new(ChatService::new(Arc::clone(&store), Arc::clone(&clock)));
    let articles = Arc::new(ArticleService::new());
    let prefs = Arc::new(PrefsService::new(Arc::clone(&store)));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        tracker,
        chat,
        articles,
        prefs,
        clock,
        Duration::from_millis(cfg.calc_delay_ms_or_default()),
        Duration::from_millis(cfg.typing_delay_ms_or_default()),
    ));

    // --- Run (main menu -> tracker / ovulation / articles / chat) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("Sai an jima!");
    Ok(())
}
