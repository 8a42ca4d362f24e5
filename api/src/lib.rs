//! Platform-independent core of the Supernova client.
//!
//! Holds the domain model, the session and interaction stores, karma
//! accounting, the simulated backend behavior, and on-device
//! persistence. The UI crates consume this; nothing here depends on a
//! UI framework, so the whole crate is testable headless.

pub mod cause;
pub mod compat;
pub mod config;
pub mod interactions;
pub mod karma;
pub mod mock;
pub mod post;
pub mod session;
pub mod storage;
pub mod user;
