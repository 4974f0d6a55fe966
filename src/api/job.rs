//! Job polling
//!
//! Mutating operations return a job id. [`wait_job`] polls DescribeJobs
//! until the job reaches the desired status.

use super::client::Client;
use super::error::{Error, Result};
use crate::types::job::{DescribeJobsRequest, DescribeJobsResponse, JobStatus};
use std::time::Duration;

/// Default number of polls
pub const DEFAULT_ATTEMPTS: u32 = 20;

/// Default delay between polls
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Options for [`wait_job`]
#[derive(Debug, Clone)]
pub struct WaitOptions {
    pub attempts: u32,
    pub interval: Duration,
    /// Status to wait for
    pub status: JobStatus,
    /// Give up as soon as the job reports failure
    pub exit_on_fail: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
            status: JobStatus::Successful,
            exit_on_fail: true,
        }
    }
}

/// Poll a job until it reaches `options.status`
///
/// Send errors are not fatal; the next attempt is made after the interval.
pub async fn wait_job(client: &Client, job_id: &str, options: &WaitOptions) -> Result<JobStatus> {
    let request = DescribeJobsRequest {
        job_ids: vec![job_id.to_string()],
        ..Default::default()
    };

    for attempt in 1..=options.attempts {
        let mut response = DescribeJobsResponse::default();
        match client.send_request(&request, &mut response).await {
            Ok(()) if response.item_set.len() == 1 => {
                let status = response.item_set[0].status.clone();
                tracing::debug!("Job {} is {:?} (attempt {})", job_id, status, attempt);

                if status.as_ref() == Some(&options.status) {
                    return Ok(options.status.clone());
                }
                if status == Some(JobStatus::Failed) && options.exit_on_fail {
                    return Err(Error::JobFailed(job_id.to_string()));
                }
            }
            Ok(()) => {
                tracing::debug!(
                    "Job {} returned {} items (attempt {})",
                    job_id,
                    response.item_set.len(),
                    attempt
                );
            }
            Err(e) => {
                tracing::debug!("Polling job {} failed: {} (attempt {})", job_id, e, attempt);
            }
        }

        if attempt < options.attempts {
            tokio::time::sleep(options.interval).await;
        }
    }

    Err(Error::JobTimeout {
        job_id: job_id.to_string(),
        attempts: options.attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = WaitOptions::default();
        assert_eq!(options.attempts, 20);
        assert_eq!(options.interval, Duration::from_secs(3));
        assert_eq!(options.status, JobStatus::Successful);
        assert!(options.exit_on_fail);
    }
}
