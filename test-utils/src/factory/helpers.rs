//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Base for generated member IDs.
///
/// Sits in real Discord snowflake territory (18-19 digits), so factory-made
/// members look like production data and never collide with the small
/// hand-picked IDs tests assign to the members they assert on.
const SNOWFLAKE_BASE: u64 = 900_000_000_000_000_000;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a unique snowflake-shaped ID for test data.
///
/// Monotonically increasing across all factories in the process, so two
/// default-constructed members never share an ID even across tests.
///
/// # Returns
/// - `u64` - Next unique snowflake
pub fn next_snowflake() -> u64 {
    SNOWFLAKE_BASE + COUNTER.fetch_add(1, Ordering::SeqCst)
}
