mod manager;
mod persistence;

pub use manager::TrackerState;
pub use persistence::{import_meals_csv, load_state, load_state_or_default, save_state};
