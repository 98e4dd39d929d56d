pub mod handlers;
pub mod models;
pub mod parsers;
pub mod routes;
pub mod tennis_client;

pub use tennis_client::{TennisClient, Transport};
