//! Domain-layer errors

mod fetch_error;

pub use fetch_error::FetchError;
