pub mod server;
pub mod subscription;

pub use server::ServerService;
pub use subscription::{subscribe_live, SubscriptionHandle};
