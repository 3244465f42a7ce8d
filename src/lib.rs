pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod view;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
