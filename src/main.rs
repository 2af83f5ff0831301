use habit_tracker::storage;
use habit_tracker::{Tracker, app};
use std::{env, fs, sync::Arc};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CATALOG: [&str; 7] = [
    "💧 Water Before Coffee",
    "☀️ Morning Pages",
    "✝️ Read Bible",
    "😍 Gratitude Practice",
    "👨🏼‍💻 Coding",
    "🇯🇵 Japanese",
    "📚 Read",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_path = storage::resolve_data_path();
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Stdout belongs to the terminal UI, so traces go to a sibling log file.
    let log_file = fs::File::create(data_path.with_extension("log"))?;
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    let store = storage::load_store(&data_path)?;
    info!(habits = store.len(), path = %data_path.display(), "habit store loaded");

    let mut tracker = Tracker::new(resolve_catalog(), store, data_path);
    app::run(&mut tracker)?;

    Ok(())
}

fn resolve_catalog() -> Vec<String> {
    if let Ok(raw) = env::var("HABITS_CATALOG") {
        let habits: Vec<String> = raw
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if !habits.is_empty() {
            return habits;
        }
    }
    DEFAULT_CATALOG.iter().map(|name| name.to_string()).collect()
}
