//! Cron jobs for automated background tasks.

pub mod heartbeat;
