//! Error type for mediated actions.

/// Errors that end a user action.
///
/// Every variant is rendered through the same error display; none are
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Required input missing; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// Transport failure or non-2xx response.
    #[error("Error: {0}")]
    Api(#[from] quakelog_api_client::Error),
}
