//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! #[test]
//! fn test_voice_transitions() {
//!     let joined = create_test_voice_state(111, Some(222));
//!     let left = create_test_voice_state(111, None);
//!
//!     // Use in your tests...
//! }
//! ```

pub mod voice_state;

// Re-export commonly used functions for convenience
pub use voice_state::create_test_voice_state;
