//! Instance APIs

use super::eip::IpGroupType;
use super::vxnet::VxnetType;
use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DescribeInstances retrieves information of a list of instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Vec<InstanceStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub verbose: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeInstancesItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesItem {
    #[serde(skip_serializing_if = "is_default")]
    pub instance_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub instance_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    /// Number of CPU cores
    #[serde(skip_serializing_if = "is_default")]
    pub vcpus_current: i32,
    /// Memory size in MB
    #[serde(skip_serializing_if = "is_default")]
    pub memory_current: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<InstanceStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub status_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vxnets: Vec<DescribeInstancesVxnet>,
    pub eip: DescribeInstancesEip,
    pub image: DescribeInstancesImage,
    #[serde(skip_serializing_if = "is_default")]
    pub volumes: Vec<DescribeInstancesVolume>,
    pub security_group: DescribeInstancesSecurityGroup,
    /// Volume IDs, may duplicate `volumes`
    #[serde(skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesVxnet {
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_name: String,
    pub vxnet_type: VxnetType,
    /// MAC address of the instance
    #[serde(skip_serializing_if = "is_default")]
    pub nic_id: String,
    /// Address of the instance in the network
    #[serde(skip_serializing_if = "is_default")]
    pub private_ip: String,
    /// "priv" or "pub"
    #[serde(skip_serializing_if = "is_default")]
    pub systype: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesEip {
    #[serde(skip_serializing_if = "is_default")]
    pub eip_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_addr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesImage {
    #[serde(skip_serializing_if = "is_default")]
    pub image_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub image_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub image_size: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub os_family: String,
    #[serde(skip_serializing_if = "is_default")]
    pub platform: String,
    #[serde(skip_serializing_if = "is_default")]
    pub processor_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub provider: String,
}

/// Size and volume type are strings here, unlike in DescribeVolumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesVolume {
    #[serde(skip_serializing_if = "is_default")]
    pub size: String,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub volume_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeInstancesSecurityGroup {
    #[serde(skip_serializing_if = "is_default")]
    pub attachon: i64,
    pub is_default: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InstanceStatus {
    Pending,
    Running,
    Stopped,
    Suspended,
    Terminated,
    Ceased,
    /// Any value not listed above
    #[serde(other)]
    Unknown,
}

/// RunInstances creates and runs instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    pub product: RunInstancesProduct,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    #[serde(rename = "volumes", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesProduct {
    pub cloud: RunInstancesCloud,
}

/// Cloud server description: machine, disks, networks and public IP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesCloud {
    pub vm: RunInstancesVm,
    #[serde(skip_serializing_if = "is_default")]
    pub hd: Vec<RunInstancesHardDisk>,
    /// Attach the machine to the public network
    #[serde(skip_serializing_if = "is_default")]
    pub net0: bool,
    /// Private SDN networks, either new or existing
    #[serde(skip_serializing_if = "is_default")]
    pub net1: Vec<RunInstancesNet1>,
    /// New or existing EIP. Requires `net0`.
    pub ip: RunInstancesIp,
    /// Number of identical instances to create
    #[serde(skip_serializing_if = "is_default")]
    pub amount: i32,
}

/// Only password login is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    #[default]
    Pwd,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesVm {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    pub login_mode: LoginMode,
    /// One of 1024, 2048, 4096, 8192, 16384, 32768 (MB)
    #[serde(skip_serializing_if = "is_default")]
    pub mem: i32,
    /// One of 1, 2, 4, 8
    #[serde(skip_serializing_if = "is_default")]
    pub cpu: i32,
    /// e.g. opensuse12x64c, trustysrvx64c
    #[serde(skip_serializing_if = "is_default")]
    pub image_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub password: String,
}

/// Same encoding as [`VolumeType`](super::volume::VolumeType), but numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HdType(pub i32);

impl HdType {
    pub const PERFORMANCE: Self = Self(0);
    pub const CAPACITY: Self = Self(1);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesHardDisk {
    // New disk
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(rename = "type")]
    pub hd_type: HdType,
    /// Size in GB
    #[serde(skip_serializing_if = "is_default")]
    pub unit: i32,
    // Existing disks to attach
    #[serde(rename = "hd", skip_serializing_if = "is_default")]
    pub hd_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesNet1 {
    // New network
    #[serde(skip_serializing_if = "is_default")]
    pub vxnet_name: String,
    /// Join the new machine to the network
    #[serde(skip_serializing_if = "is_default")]
    pub checked: bool,
    // Existing networks
    #[serde(rename = "vxnet_id", skip_serializing_if = "is_default")]
    pub vxnet_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInstancesIp {
    // New EIP
    /// MB/s
    #[serde(rename = "bw", skip_serializing_if = "is_default")]
    pub bandwidth: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub ip_group: Option<IpGroupType>,
    // Existing EIP
    #[serde(rename = "ip", skip_serializing_if = "is_default")]
    pub eip_id: String,
}

/// TerminateInstances terminates a list of instances. Attached EIPs and
/// volumes are only deleted when listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateInstancesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    #[serde(rename = "vols", skip_serializing_if = "is_default")]
    pub volume_ids: Vec<String>,
    #[serde(rename = "ips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateInstancesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// StartInstances starts a list of instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartInstancesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartInstancesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// StopInstances stops a list of instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopInstancesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    // Always sent; non-forced stop is 0
    pub force: InstanceStopType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopInstancesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// How to stop a machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceStopType(pub i32);

impl InstanceStopType {
    pub const NON_FORCE: Self = Self(0);
    pub const FORCE: Self = Self(1);
}

/// RestartInstances restarts a list of instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartInstancesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartInstancesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ResetLoginPasswd resets the password of a list of instances. The
/// instances must be stopped first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetLoginPasswdRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub login_passwd: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetLoginPasswdResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ModifyInstanceAttributes changes the name or description of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyInstanceAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "instance", skip_serializing_if = "is_default")]
    pub instance_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub instance_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyInstanceAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub instance_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

crate::api_request! {
    DescribeInstances => DescribeInstancesRequest, DescribeInstancesResponse;
    RunInstances => RunInstancesRequest, RunInstancesResponse;
    TerminateInstances => TerminateInstancesRequest, TerminateInstancesResponse;
    StartInstances => StartInstancesRequest, StartInstancesResponse;
    StopInstances => StopInstancesRequest, StopInstancesResponse;
    RestartInstances => RestartInstancesRequest, RestartInstancesResponse;
    ResetLoginPasswd => ResetLoginPasswdRequest, ResetLoginPasswdResponse;
    ModifyInstanceAttributes => ModifyInstanceAttributesRequest, ModifyInstanceAttributesResponse;
}
