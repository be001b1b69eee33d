//! Error types for the leveling engine.
//!
//! `AppError` is the top-level error type aggregating everything that can
//! fail across the data, service, and bot layers. Most variants use `#[from]`
//! for automatic conversion with `?`.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised when role mutations, notification
    /// sends, or member lookups against Discord fail.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// IO error, currently only raised when binding the liveness listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A guild resource referenced by configuration does not exist.
    ///
    /// Raised when a rank role name from the threshold table cannot be
    /// resolved in the guild's role list.
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
