//! Job commands

use anchnet::api::job::{wait_job, WaitOptions};
use anchnet::api::Client;
use anchnet::types::job::{DescribeJobsRequest, JobStatus};
use clap::{ArgAction, Args};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct DescribeJobArgs {
    pub id: String,
}

impl DescribeJobArgs {
    pub fn request(&self) -> DescribeJobsRequest {
        DescribeJobsRequest {
            job_ids: vec![self.id.clone()],
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct WaitJobArgs {
    pub id: String,

    /// Number of retries
    #[arg(short, long, default_value_t = 20)]
    pub count: u32,

    /// Retry interval, in seconds
    #[arg(short, long, default_value_t = 3)]
    pub interval: u64,

    /// Exit early if the job fails
    #[arg(short = 'r', long = "exit_on_fail", default_value_t = true, action = ArgAction::Set)]
    pub exit_on_fail: bool,

    /// Status to wait for
    #[arg(short, long, default_value = "successful")]
    pub status: JobStatus,
}

impl WaitJobArgs {
    pub fn options(&self) -> WaitOptions {
        WaitOptions {
            attempts: self.count,
            interval: Duration::from_secs(self.interval),
            status: self.status.clone(),
            exit_on_fail: self.exit_on_fail,
        }
    }

    /// Wait for the job. Prints nothing on success.
    pub async fn run(&self, client: &Client) -> ExitCode {
        match wait_job(client, &self.id, &self.options()).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        }
    }
}
