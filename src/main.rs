use chrono::Utc;
use newsroom_core::features::categories::dtos::CategoryTreeDto;
use newsroom_core::features::dashboard::DashboardService;
use newsroom_core::features::elections::ElectionService;
use newsroom_core::features::preferences::PreferenceStore;
use newsroom_core::features::scheduling::ScheduledPublisher;
use newsroom_core::{Config, Newsroom, Seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(2)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: app={}, tokio_worker_threads={}",
        config.app.name,
        worker_threads
    );

    // Reader language
    let preferences = PreferenceStore::new(config.preferences.path.clone());
    let locale = std::env::var("LANG").ok();
    let language = preferences.load_language(
        locale
            .as_deref()
            .or(Some(config.app.default_language.code())),
    );
    tracing::info!(
        "Reader language: {} ({:?})",
        language.name(),
        language.direction()
    );

    // Seed the stores
    let seed = Seed::load(&config.seed).map_err(|e| anyhow::anyhow!("Failed to load seed: {}", e))?;
    let newsroom = Newsroom::from_seed(seed);

    let counts = newsroom.articles.counts_by_category();
    let tree = newsroom.categories.get_category_tree_with_counts(&counts);
    for (depth, category) in CategoryTreeDto::flatten(&tree) {
        tracing::info!(
            "{}{} ({}) articles={}",
            "  ".repeat(depth),
            category.name.get(language),
            category.route(),
            counts.get(&category.id).copied().unwrap_or(0)
        );
    }

    let stats = DashboardService::stats(&newsroom.articles, &newsroom.categories, Utc::now());
    tracing::info!(
        "Dashboard: total={}, published={}, drafts={}, scheduled={}",
        stats.total_articles,
        stats.published_articles,
        stats.draft_articles,
        stats.scheduled_articles
    );

    for race in newsroom.elections.live_races() {
        let leader = ElectionService::leader(race)
            .map(|c| c.name.get(language).to_string())
            .unwrap_or_default();
        tracing::info!(
            "Live race: {} reporting={}% leader={}",
            race.name.get(language),
            race.reporting_percentage,
            leader
        );
    }

    let shared = newsroom.shared();

    // Spawn scheduled publisher worker
    if config.scheduler.enabled {
        let publisher = ScheduledPublisher::new(shared.clone(), config.scheduler.interval);
        tokio::spawn(async move {
            publisher.run().await;
        });
        tracing::info!("Scheduled publisher worker spawned");
    } else {
        tracing::info!("Scheduled publisher disabled (SCHEDULER_ENABLED=false)");
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    Ok(())
}
