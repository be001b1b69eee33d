//! Database repository layer for the XP store.
//!
//! This module contains repository structs that handle database operations for
//! member XP records. Repositories use SeaORM entity models internally and return
//! parameter models to maintain separation between the data layer and business
//! logic layer. All XP arithmetic that must be safe under concurrent gateway
//! events is pushed into single statements here rather than done in Rust.

pub mod member_xp;

#[cfg(test)]
mod test;
