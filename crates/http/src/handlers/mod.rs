#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod generate;
pub mod history;
pub mod sessions;
pub mod teams;
