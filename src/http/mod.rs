pub mod client;
pub mod retry;

pub use client::RetryingClient;
pub use retry::RetryPolicy;
