//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let member = factory::create_member(&db).await?;
//!
//!     // Create with specific values
//!     let member = factory::create_member_with_xp(&db, 123456789, 1_500).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builder for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::member_xp::MemberXpFactory;
//!
//! let member = MemberXpFactory::new(&db)
//!     .member_id(987654321)
//!     .xp(2_500)
//!     .voice_joined_at(Some(1_700_000_000))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod member_xp;

// Re-export commonly used factory functions for concise usage
pub use member_xp::{create_member, create_member_in_voice, create_member_with_xp};
