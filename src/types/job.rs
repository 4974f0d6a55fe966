//! Job APIs
//!
//! A job is not a resource; it tracks the progress of another request.

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DescribeJobs retrieves information of a list of jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeJobsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "jobs", skip_serializing_if = "is_default")]
    pub job_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeJobsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeJobsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeJobsItem {
    #[serde(skip_serializing_if = "is_default")]
    pub job_action: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<JobStatus>,
    /// Last date when job was changed
    #[serde(skip_serializing_if = "is_default")]
    pub status_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Working,
    Successful,
    Failed,
    /// Any value not listed above
    #[serde(other)]
    Unknown,
}

crate::api_request! {
    DescribeJobs => DescribeJobsRequest, DescribeJobsResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_parse() {
        assert_eq!("successful".parse::<JobStatus>().unwrap(), JobStatus::Successful);
        assert_eq!(JobStatus::Failed.to_string(), "failed");
        assert!("done".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_decode_describe_jobs() {
        let body = r#"{"action":"DescribeJobsResponse","code":0,"total_count":1,
            "item_set":[{"job_action":"StopInstances","status":"working","create_time":"2015-06-12 10:11:12"}]}"#;
        let response: DescribeJobsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_count, 1);
        assert_eq!(response.item_set[0].status, Some(JobStatus::Working));
        assert_eq!(response.item_set[0].job_action, "StopInstances");
    }

    #[test]
    fn test_decode_unlisted_job_status() {
        let body = r#"{"action":"DescribeJobsResponse","code":0,"total_count":2,
            "item_set":[{"job_action":"RunInstances","status":"deleting"},{"status":""}]}"#;
        let response: DescribeJobsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.item_set[0].status, Some(JobStatus::Unknown));
        assert_eq!(response.item_set[1].status, Some(JobStatus::Unknown));
    }
}
