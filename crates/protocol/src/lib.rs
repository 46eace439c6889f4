pub mod constants;
pub mod types;

// Re-export primary types for convenience.
pub use types::{ErrorResponse, GameReport, MessageResponse, RankingEntry, UploadResponse};
