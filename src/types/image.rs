//! Image APIs

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};

/// CaptureInstance creates an image from a stopped instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureInstanceRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub image_name: String,
    #[serde(rename = "instance", skip_serializing_if = "is_default")]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureInstanceResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub image_id: String,
}

/// GrantImageToUsers shares an image with users, usually from the main
/// account to its sub-accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantImageToUsersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "image", skip_serializing_if = "is_default")]
    pub image_id: String,
    #[serde(rename = "users", skip_serializing_if = "is_default")]
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantImageToUsersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
}

/// RevokeImageFromUsers unshares images from users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevokeImageFromUsersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    // A list, unlike GrantImageToUsers
    #[serde(rename = "image", skip_serializing_if = "is_default")]
    pub image_ids: Vec<String>,
    #[serde(rename = "users", skip_serializing_if = "is_default")]
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevokeImageFromUsersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
}

/// DescribeImageUsers lists users who have access to an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeImageUsersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "image_id", skip_serializing_if = "is_default")]
    pub image_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeImageUsersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub user_set: Vec<DescribeImageUsersItem>,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeImageUsersItem {
    #[serde(skip_serializing_if = "is_default")]
    pub image_id: String,
    #[serde(rename = "usr_id", skip_serializing_if = "is_default")]
    pub user_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub username: String,
}

crate::api_request! {
    CaptureInstance => CaptureInstanceRequest, CaptureInstanceResponse;
    GrantImageToUsers => GrantImageToUsersRequest, GrantImageToUsersResponse;
    RevokeImageFromUsers => RevokeImageFromUsersRequest, RevokeImageFromUsersResponse;
    DescribeImageUsers => DescribeImageUsersRequest, DescribeImageUsersResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grant_and_revoke_image_field_shapes() {
        let grant = GrantImageToUsersRequest {
            image_id: "img-1".to_string(),
            user_ids: vec!["usr-1".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&grant).unwrap(),
            json!({"image": "img-1", "users": ["usr-1"]})
        );

        let revoke = RevokeImageFromUsersRequest {
            image_ids: vec!["img-1".to_string()],
            user_ids: vec!["usr-1".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&revoke).unwrap(),
            json!({"image": ["img-1"], "users": ["usr-1"]})
        );
    }

    #[test]
    fn test_decode_describe_image_users() {
        let body = r#"{"action":"DescribeImageUsersResponse","code":0,"total_count":1,
            "user_set":[{"image_id":"img-1","usr_id":"usr-AB12","username":"sub"}]}"#;
        let response: DescribeImageUsersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.user_set[0].user_id, "usr-AB12");
    }
}
