//! SDN network (vxnet) APIs

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};

/// DescribeVxnets retrieves information of a list of vxnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVxnetsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "vxnets", skip_serializing_if = "is_default")]
    pub vxnet_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
    #[serde(skip_serializing_if = "is_default")]
    pub verbose: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVxnetsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeVxnetsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVxnetsItem {
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_addr: String,
    pub vxnet_type: VxnetType,
    #[serde(skip_serializing_if = "is_default")]
    pub systype: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub router: Vec<DescribeVxnetsRouter>,
    #[serde(skip_serializing_if = "is_default")]
    pub instances: Vec<DescribeVxnetsInstance>,
}

/// Routers carry no documented fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeVxnetsRouter {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeVxnetsInstance {
    #[serde(skip_serializing_if = "is_default")]
    pub instance_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub instance_name: String,
}

/// CreateVxnets creates a number of vxnets. Only private networks are
/// documented as creatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateVxnetsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_name: String,
    pub vxnet_type: VxnetType,
    /// Defaults to 1 on the server
    #[serde(skip_serializing_if = "is_default")]
    pub count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateVxnetsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(rename = "vxnets", skip_serializing_if = "is_default")]
    pub vxnet_ids: Vec<String>,
}

/// Type of SDN network: public or private
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VxnetType(pub i32);

impl VxnetType {
    pub const PRIVATE: Self = Self(0);
    pub const PUBLIC: Self = Self(1);
}

/// DeleteVxnets deletes a list of vxnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteVxnetsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "vxnets", skip_serializing_if = "is_default")]
    pub vxnet_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteVxnetsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// JoinVxnet attaches a list of instances to a vxnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinVxnetRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    #[serde(rename = "vxnet", skip_serializing_if = "is_default")]
    pub vxnet_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinVxnetResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// LeaveVxnet detaches a list of instances from a vxnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveVxnetRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    #[serde(rename = "vxnet", skip_serializing_if = "is_default")]
    pub vxnet_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveVxnetResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ModifyVxnetAttributes changes the name or description of a vxnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyVxnetAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "vxnet", skip_serializing_if = "is_default")]
    pub vxnet_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyVxnetAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

crate::api_request! {
    DescribeVxnets => DescribeVxnetsRequest, DescribeVxnetsResponse;
    CreateVxnets => CreateVxnetsRequest, CreateVxnetsResponse;
    DeleteVxnets => DeleteVxnetsRequest, DeleteVxnetsResponse;
    JoinVxnet => JoinVxnetRequest, JoinVxnetResponse;
    LeaveVxnet => LeaveVxnetRequest, LeaveVxnetResponse;
    ModifyVxnetAttributes => ModifyVxnetAttributesRequest, ModifyVxnetAttributesResponse;
}
