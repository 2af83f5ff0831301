pub mod app;
pub mod errors;
pub mod models;
pub mod storage;
pub mod streak;
pub mod tracker;
pub mod ui;

pub use errors::StorageError;
pub use models::{HabitRecord, HabitStore};
pub use storage::{load_store, resolve_data_path, save_store};
pub use tracker::{Mode, Tracker};
