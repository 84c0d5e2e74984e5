pub mod config;
pub mod logging;

pub mod destination;
pub mod duration;
pub mod error;
pub mod fetcher;
pub mod provider;

pub use error::FetchError;
pub use fetcher::{fetch, FetchOutcome, FetchRequest};
pub use provider::Provider;
