//! Domain models for the leveling engine.
//!
//! This module contains plain domain types shared by the data, service, and
//! bot layers: the XP-to-level curve, the rank threshold table with its role
//! planning logic, and parameter models converted from database entities at
//! the repository boundary.

pub mod level;
pub mod member;
pub mod rank;
