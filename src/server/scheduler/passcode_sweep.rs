use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::passcode::PasscodeService};

/// Every ten minutes, on the minute.
const SWEEP_SCHEDULE: &str = "0 */10 * * * *";

/// Starts the scheduler that deletes expired one-time passcodes.
///
/// Expired codes are already rejected on use; the sweep only keeps the table small.
/// The returned scheduler must be kept alive for the job to keep running.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = sweep(&db).await {
                tracing::error!("Error sweeping expired passcodes: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Passcode sweep scheduler started");

    Ok(scheduler)
}

async fn sweep(db: &DatabaseConnection) -> Result<(), AppError> {
    let removed = PasscodeService::new(db).sweep_expired(Utc::now()).await?;
    if removed > 0 {
        tracing::debug!("Removed {} expired passcodes", removed);
    }

    Ok(())
}
