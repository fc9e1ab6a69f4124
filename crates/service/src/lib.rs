//! Service layer for salescript
//!
//! Business rules between the HTTP handlers and storage/llm: caller
//! resolution, session lifecycle, the generation flow and history reads.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Services hold trait objects")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod caller;
mod config;
mod error;
mod generation_service;
mod history_service;
mod session_service;
mod team_service;

#[cfg(test)]
mod tests;

pub use caller::Caller;
pub use config::{ClosedSessionPolicy, GenerationConfig};
pub use error::ServiceError;
pub use generation_service::{GeneratedScript, GenerationService};
pub use history_service::HistoryService;
pub use session_service::SessionService;
pub use team_service::{PlaybookUpdate, TeamService};
