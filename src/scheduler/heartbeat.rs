use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, error, info};

use crate::error::AppError;

/// Starts the heartbeat scheduler
///
/// Runs every five minutes, pinging the database connection and emitting a
/// liveness log line so hosted deployments show activity between gateway
/// events and the connection pool never idles out.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();

    // Schedule job to run every five minutes
    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            match db.ping().await {
                Ok(()) => debug!("Heartbeat: database connection healthy"),
                Err(e) => error!("Heartbeat: database ping failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Heartbeat scheduler started");

    Ok(())
}
