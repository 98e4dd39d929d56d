pub mod event_types;

pub use event_types::EventTypeCache;
