//! Trait definitions for Fortnox operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! API differences in the implementations.

mod create;
mod get;
mod update;

pub use create::Create;
pub use get::Get;
pub use update::Update;
