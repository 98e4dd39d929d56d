pub mod settings;

pub use settings::{AppConfig, API_KEY_ENV, PROXY_ENV};
