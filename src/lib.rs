pub mod api;
pub mod config;
pub mod containers;
pub mod error;
pub mod models;
pub mod router;
pub mod routes;
pub mod session;
pub mod store;
pub mod utils;
pub mod views;

pub use config::AppConfig;
pub use router::{Router, Screen, UiEvent};
pub use session::Session;
pub use store::{MemoryStorage, MockStore, Store};
