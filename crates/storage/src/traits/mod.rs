//! Storage backend trait abstraction
//!
//! Async domain traits for every persistence operation, so the service layer
//! can run against PostgreSQL or the in-process store alike.

pub mod script;
pub mod session;
pub mod team;

pub use script::ScriptStore;
pub use session::SessionStore;
pub use team::TeamStore;

/// Everything the service layer needs from a backend.
pub trait SalesStore: SessionStore + ScriptStore + TeamStore {}

impl<T: SessionStore + ScriptStore + TeamStore> SalesStore for T {}
