//! Volume APIs

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DescribeVolumes retrieves information of a list of volumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVolumesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Vec<VolumeStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVolumesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeVolumesItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVolumesItem {
    #[serde(skip_serializing_if = "is_default")]
    pub volume_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub device: String,
    /// GB
    #[serde(skip_serializing_if = "is_default")]
    pub size: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<VolumeStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub status_time: String,
    pub volume_type: VolumeType,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    pub instance: DescribeVolumesInstance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVolumesInstance {
    #[serde(skip_serializing_if = "is_default")]
    pub instance_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub instance_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VolumeStatus {
    Pending,
    Available,
    InUse,
    Suspended,
    Deleted,
    #[serde(other)]
    Unknown,
}

/// Volume storage class, sent as a string. Same values as
/// [`HdType`](super::instance::HdType).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum VolumeType {
    #[default]
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    Performance,
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    Capacity,
    #[serde(rename = "unknown", other)]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// CreateVolumes creates a number of volumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateVolumesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_name: String,
    pub volume_type: VolumeType,
    /// GB, between 10 and 1000
    #[serde(skip_serializing_if = "is_default")]
    pub size: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateVolumesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DeleteVolumes deletes a list of volumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteVolumesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteVolumesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// AttachVolumes attaches a list of volumes to an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachVolumesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instance", skip_serializing_if = "is_default")]
    pub instance_id: String,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachVolumesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DetachVolumes detaches a list of volumes from their instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachVolumesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachVolumesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ResizeVolumes grows a list of volumes. Shrinking is not allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeVolumesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub size: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeVolumesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ModifyVolumeAttributes changes the name or description of a volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyVolumeAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "volume", skip_serializing_if = "is_default")]
    pub volume_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyVolumeAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

crate::api_request! {
    DescribeVolumes => DescribeVolumesRequest, DescribeVolumesResponse;
    CreateVolumes => CreateVolumesRequest, CreateVolumesResponse;
    DeleteVolumes => DeleteVolumesRequest, DeleteVolumesResponse;
    AttachVolumes => AttachVolumesRequest, AttachVolumesResponse;
    DetachVolumes => DetachVolumesRequest, DetachVolumesResponse;
    ResizeVolumes => ResizeVolumesRequest, ResizeVolumesResponse;
    ModifyVolumeAttributes => ModifyVolumeAttributesRequest, ModifyVolumeAttributesResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_status_in_use() {
        assert_eq!(serde_json::to_value(VolumeStatus::InUse).unwrap(), json!("in-use"));
        assert_eq!("in-use".parse::<VolumeStatus>().unwrap(), VolumeStatus::InUse);
    }

    #[test]
    fn test_create_volumes_sends_performance_type() {
        let request = CreateVolumesRequest {
            volume_name: "data".to_string(),
            size: 10,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"volume_name": "data", "volume_type": "0", "size": 10})
        );
    }

    #[test]
    fn test_decode_describe_volumes() {
        let body = r#"{"action":"DescribeVolumesResponse","code":0,"total_count":1,"item_set":[
            {"volume_id":"vol-46Q60KA1","size":"10","status":"in-use","volume_type":"1",
             "instance":{"instance_id":"i-DCFA40VV"}}]}"#;
        let response: DescribeVolumesResponse = serde_json::from_str(body).unwrap();
        let item = &response.item_set[0];
        assert_eq!(item.volume_type, VolumeType::Capacity);
        assert_eq!(item.status, Some(VolumeStatus::InUse));
        assert_eq!(item.instance.instance_id, "i-DCFA40VV");
    }
}
