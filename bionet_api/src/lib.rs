//! Client for the NSW BioNet OData API (fauna species sighting records).
mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, Credentials};
pub use self::errors::Error;
pub use self::query::{Query, SightingQuery};
