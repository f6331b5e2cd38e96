use kelime_lib::models::format_duration;
use kelime_lib::storage::SqliteStore;
use kelime_lib::{KelimeConfig, StudyEngine};
use std::sync::Arc;

const SAMPLE_CARDS: &[(&str, &str)] = &[
    ("hello", "merhaba"),
    ("thank you", "teşekkür ederim"),
    ("please", "lütfen"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = std::env::var("KELIME_CONFIG").unwrap_or_else(|_| "kelime.toml".to_string());
    let config = KelimeConfig::load(&config_path)?;

    let store = SqliteStore::open(&config.storage.database_path)?;
    let mut engine = StudyEngine::open(Arc::new(store), &config).await?;

    if engine.list_cards().is_empty() {
        for (front, back) in SAMPLE_CARDS {
            engine.add_card(front, back).await?;
        }
        log::info!("Sample cards created");
    }

    let overview = engine.overview();
    println!(
        "{} cards: {} known, {} learning ({:.1}% average success)",
        overview.total_cards,
        overview.known_cards,
        overview.learning_cards,
        overview.average_success_rate * 100.0
    );

    let stats = engine.study_stats();
    println!(
        "{} sessions: {} correct, {} incorrect, {} studied",
        stats.total_sessions,
        stats.total_correct,
        stats.total_incorrect,
        format_duration(stats.total_time)
    );

    Ok(())
}
