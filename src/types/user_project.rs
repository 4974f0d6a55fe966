//! Account, sub-account and billing APIs

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};

/// CreateUserProject creates a sub-account under the main account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserProjectRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loginId", skip_serializing_if = "is_default")]
    pub login_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub sex: String,
    #[serde(skip_serializing_if = "is_default")]
    pub project_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub email: String,
    #[serde(rename = "contactName", skip_serializing_if = "is_default")]
    pub contact_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub mobile: String,
    #[serde(rename = "loginPasswd", skip_serializing_if = "is_default")]
    pub login_passwd: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserProjectResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub api_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DescribeProjects describes projects of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeProjectsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub projects: String,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeProjectsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeProjectsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeProjectsItem {
    #[serde(skip_serializing_if = "is_default")]
    pub project_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub project_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub project_name: String,
    /// Numeric account id used for [`TransferRequest`]. Not the public
    /// `usr-xxxxxx` id from DescribeUsers, which is used to share images.
    #[serde(rename = "userid", skip_serializing_if = "is_default")]
    pub user_id: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub status: String,
    pub balance: DescribeProjectsBalance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeProjectsBalance {
    #[serde(skip_serializing_if = "is_default")]
    pub value: String,
    #[serde(skip_serializing_if = "is_default")]
    pub coupon: String,
    #[serde(skip_serializing_if = "is_default")]
    pub consume: f64,
}

/// Transfer moves money to a sub-account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    /// Numeric account id, see [`DescribeProjectsItem::user_id`]
    #[serde(rename = "userId", skip_serializing_if = "is_default")]
    pub user_id: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub value: String,
    #[serde(skip_serializing_if = "is_default")]
    pub why: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
}

/// DescribeUsers describes users (sub-accounts) of the main account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeUsersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    /// "sub" for sub-accounts
    #[serde(rename = "type", skip_serializing_if = "is_default")]
    pub user_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeUsersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeUsersItem>,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeUsersItem {
    #[serde(rename = "loginid", skip_serializing_if = "is_default")]
    pub login_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub parent_account: String,
    #[serde(skip_serializing_if = "is_default")]
    pub username: String,
    #[serde(rename = "usr_id")]
    pub user_id: String,
}

/// GetChargeSummary summarizes charges per resource type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChargeSummaryRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChargeSummaryResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_sum: String,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<GetChargeSummaryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetChargeSummaryItem {
    #[serde(skip_serializing_if = "is_default")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub total_sum: String,
}

crate::api_request! {
    CreateUserProject => CreateUserProjectRequest, CreateUserProjectResponse;
    DescribeProjects => DescribeProjectsRequest, DescribeProjectsResponse;
    Transfer => TransferRequest, TransferResponse;
    DescribeUsers => DescribeUsersRequest, DescribeUsersResponse;
    GetChargeSummary => GetChargeSummaryRequest, GetChargeSummaryResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_project_camel_case_fields() {
        let request = CreateUserProjectRequest {
            login_id: "dev@caicloud.io".to_string(),
            sex: "M".to_string(),
            contact_name: "dev".to_string(),
            login_passwd: "secret".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "loginId": "dev@caicloud.io",
                "sex": "M",
                "contactName": "dev",
                "loginPasswd": "secret"
            })
        );
    }

    #[test]
    fn test_transfer_body() {
        let request = TransferRequest {
            user_id: 1024,
            value: "100".to_string(),
            why: "quota".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"userId": 1024, "value": "100", "why": "quota"})
        );
    }

    #[test]
    fn test_decode_describe_projects() {
        let body = r#"{"action":"DescribeProjectsResponse","code":0,"item_set":[
            {"project_id":"pro-1","userid":1024,"balance":{"value":"10.00","consume":1.5}}]}"#;
        let response: DescribeProjectsResponse = serde_json::from_str(body).unwrap();
        let item = &response.item_set[0];
        assert_eq!(item.user_id, 1024);
        assert_eq!(item.balance.value, "10.00");
        assert_eq!(item.balance.consume, 1.5);
    }
}
