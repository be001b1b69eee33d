//! Business logic layer for XP accrual and rank maintenance.
//!
//! Services orchestrate repositories, the rank table, and the Discord-facing
//! sinks. The scoring engine owns the order of operations for every XP
//! mutation: persist first, then converge roles, then notify. Role and
//! notification failures are logged and never roll back stored XP.

pub mod reconcile;
pub mod scoring;
pub mod sink;
