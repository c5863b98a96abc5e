//! Vouch Types - Shared domain types
//!
//! This crate contains domain types used across Vouch services:
//! - User identity and roles
//! - The identity payload carried by access tokens

pub mod identity;
pub mod role;
pub mod user;

pub use identity::*;
pub use role::*;
pub use user::*;
