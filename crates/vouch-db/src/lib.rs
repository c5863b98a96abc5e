//! Vouch DB - Persistence collaborator
//!
//! SQLx-based persistence layer for the auth core. The auth core depends
//! only on the [`UserRepository`] trait; the Postgres implementation lives
//! behind it.
//!
//! # Example
//!
//! ```rust,ignore
//! use vouch_db::{create_pool, PgUserRepository, UserRepository};
//!
//! let pool = create_pool("postgres://localhost/vouch").await?;
//! let users = PgUserRepository::new(pool);
//!
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::PgUserRepository;
pub use pool::{create_pool, DbPool};
pub use repo::*;
