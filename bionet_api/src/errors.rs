//! Error types for the API client.

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The query was rejected before any request was made.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// An HTTP request failed at the transport level (connection error or timeout).
    #[error("request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the expected OData envelope.
    #[error("unexpected response body")]
    UnexpectedResponse,
}
