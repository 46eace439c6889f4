//! Request/response mediation between game-log UI actions and the REST API.
//!
//! This crate holds the **business logic** of the game-log console. It has no
//! terminal or transport code of its own: callers hand the [`Mediator`] a
//! [`GamesApi`] implementation, a [`Confirm`] prompt, and one
//! [`OutputSink`] per output region.
//!
//! # Actions
//!
//! - **List games**: `GET /games`, or a "no games" sentinel when empty
//! - **Get game**: `GET /games/{id}`
//! - **Delete game**: `DELETE /games/{id}` after confirmation, then refresh
//! - **Upload log**: `POST /games/upload` (multipart), then refresh
//! - **Delete all**: `DELETE /games` after confirmation, then refresh
//! - **Ranking**: `GET /playersranking`, rendered as a text list

pub mod action;
pub mod api;
pub mod confirm;
pub mod display;
pub mod error;
pub mod mediator;
pub mod sink;

// Re-export primary types for convenience.
pub use action::{Action, GameId, Region};
pub use api::{ApiFuture, GamesApi};
pub use confirm::Confirm;
pub use display::{DisplayResult, Payload};
pub use error::ActionError;
pub use mediator::Mediator;
pub use sink::{MemorySink, OutputSink, Outputs, SinkEvent};
