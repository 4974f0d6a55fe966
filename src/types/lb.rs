//! Load balancer APIs, except load balancer policies

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DescribeLoadBalancers retrieves information of a list of load balancers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancers", skip_serializing_if = "is_default")]
    pub loadbalancer_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Vec<LoadBalancerStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub verbose: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeLoadBalancersItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersItem {
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_type: LoadBalancerType,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub is_applied: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<LoadBalancerStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub eips: Vec<DescribeLoadBalancersEip>,
    #[serde(skip_serializing_if = "is_default")]
    pub listeners: Vec<DescribeLoadBalancersListener>,
    pub security_group: DescribeLoadBalancersSecurityGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersEip {
    #[serde(skip_serializing_if = "is_default")]
    pub eip_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_addr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersSecurityGroup {
    #[serde(skip_serializing_if = "is_default")]
    pub attachon: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub id: i64,
    pub is_default: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersListener {
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_listener_id: String,
    #[serde(rename = "loadbalancer_listener_name", skip_serializing_if = "is_default")]
    pub listener_name: String,
    #[serde(flatten)]
    pub options: ListenerOptions,
}

/// Listener settings shared by the listener actions. See the provider's
/// AddLoadBalancerListeners documentation for `forwardfor`,
/// `session_sticky`, `healthy_check_*` and `listener_option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    #[serde(skip_serializing_if = "is_default")]
    pub balance_mode: Option<BalanceMode>,
    #[serde(skip_serializing_if = "is_default")]
    pub listener_protocol: Option<ListenerProtocolType>,
    /// Must match `listener_protocol`
    #[serde(skip_serializing_if = "is_default")]
    pub backend_protocol: Option<ListenerProtocolType>,
    #[serde(rename = "forwardfor", skip_serializing_if = "is_default")]
    pub forward_for: i32,
    #[serde(rename = "session_sticky", skip_serializing_if = "is_default")]
    pub session_stick: String,
    #[serde(skip_serializing_if = "is_default")]
    pub healthy_check_method: String,
    #[serde(skip_serializing_if = "is_default")]
    pub healthy_check_option: String,
    #[serde(skip_serializing_if = "is_default")]
    pub listener_option: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub listener_port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub timeout: i32,
}

/// Max concurrent connections of a load balancer. Zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadBalancerType(pub i32);

impl LoadBalancerType {
    pub const MAX_20K: Self = Self(1);
    pub const MAX_40K: Self = Self(2);
    pub const MAX_100K: Self = Self(3);
}

/// Protocol of a listener or its backends. Only http and tcp are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListenerProtocolType {
    Http,
    Tcp,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoadBalancerStatus {
    Pending,
    Active,
    Stopped,
    Suspended,
    Deleted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BalanceMode {
    RoundRobin,
    LeastConn,
    Source,
    #[serde(other)]
    Unknown,
}

/// A backend can be down while its instance runs, e.g. nothing listens on
/// the backend port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackendStatus {
    Up,
    Down,
    Abnormal,
    #[serde(other)]
    Unknown,
}

/// CreateLoadBalancer creates a load balancer, optionally with a firewall
/// and eips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    pub product: CreateLoadBalancerProduct,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerProduct {
    #[serde(rename = "lb")]
    pub loadbalancer: CreateLoadBalancerLb,
    #[serde(rename = "fw")]
    pub firewall: CreateLoadBalancerFw,
    #[serde(rename = "ip", skip_serializing_if = "is_default")]
    pub eips: Vec<CreateLoadBalancerIp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerLb {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "is_default")]
    pub lb_type: LoadBalancerType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerFw {
    /// Security group id
    #[serde(rename = "ref", skip_serializing_if = "is_default")]
    pub ref_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerIp {
    /// Eip to bind
    #[serde(rename = "ref", skip_serializing_if = "is_default")]
    pub ref_id: String,
}

/// DeleteLoadBalancers deletes a list of load balancers and, optionally,
/// their eips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLoadBalancersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancers", skip_serializing_if = "is_default")]
    pub loadbalancer_ids: Vec<String>,
    #[serde(rename = "ips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLoadBalancersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// StartLoadBalancer starts a list of load balancers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartLoadBalancersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancers", skip_serializing_if = "is_default")]
    pub loadbalancer_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartLoadBalancersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// StopLoadBalancer stops a list of load balancers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopLoadBalancersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancers", skip_serializing_if = "is_default")]
    pub loadbalancer_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopLoadBalancersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ModifyLoadBalancerAttributes renames a load balancer or applies a
/// security group to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyLoadBalancerAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer", skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyLoadBalancerAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
}

/// UpdateLoadBalancers applies pending listener and backend changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateLoadBalancersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancers", skip_serializing_if = "is_default")]
    pub loadbalancer_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateLoadBalancersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ResizeLoadBalancers changes the max connections of a list of load
/// balancers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeLoadBalancersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancers", skip_serializing_if = "is_default")]
    pub loadbalancer_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_type: LoadBalancerType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeLoadBalancersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// AssociateEipsToLoadBalancer attaches a list of eips to a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociateEipsToLoadBalancerRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer", skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociateEipsToLoadBalancerResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DissociateEipsFromLoadBalancer detaches a list of eips from a load
/// balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DissociateEipsFromLoadBalancerRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer", skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DissociateEipsFromLoadBalancerResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// AddLoadBalancerListeners adds listeners to a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLoadBalancerListenersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer", skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub listeners: Vec<AddLoadBalancerListenersListener>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLoadBalancerListenersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(rename = "loadbalancer_listeners", skip_serializing_if = "is_default")]
    pub listener_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLoadBalancerListenersListener {
    #[serde(rename = "loadbalancer_listener_name", skip_serializing_if = "is_default")]
    pub listener_name: String,
    #[serde(flatten)]
    pub options: ListenerOptions,
}

/// DeleteLoadBalancerListeners deletes a list of listeners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLoadBalancerListenersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer_listeners", skip_serializing_if = "is_default")]
    pub listener_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLoadBalancerListenersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DescribeLoadBalancerListeners lists listeners, either by id or all
/// listeners of `loadbalancer_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerListenersRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer", skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(rename = "loadbalancer_listeners", skip_serializing_if = "is_default")]
    pub listener_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub verbose: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerListenersResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeLoadBalancerListenersItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerListenersItem {
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(rename = "loadbalancer_listener_id", skip_serializing_if = "is_default")]
    pub listener_id: String,
    #[serde(rename = "loadbalancer_listener_name", skip_serializing_if = "is_default")]
    pub listener_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    pub disabled: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub backends: Vec<DescribeLoadBalancerListenersBackend>,
    #[serde(flatten)]
    pub options: ListenerOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerListenersBackend {
    #[serde(rename = "loadbalancer_listener_id", skip_serializing_if = "is_default")]
    pub listener_id: String,
    #[serde(rename = "loadbalancer_listener_name", skip_serializing_if = "is_default")]
    pub listener_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub weight: i32,
}

/// ModifyLoadBalancerListenerAttributes changes a listener.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyLoadBalancerListenerAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer_listener_id", skip_serializing_if = "is_default")]
    pub listener_id: String,
    #[serde(rename = "loadbalancer_listener_name", skip_serializing_if = "is_default")]
    pub listener_name: String,
    #[serde(flatten)]
    pub options: ListenerOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyLoadBalancerListenerAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(rename = "loadbalancer_listener_id", skip_serializing_if = "is_default")]
    pub listener_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// AddLoadBalancerBackends adds backends to a listener.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLoadBalancerBackendsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer_listener", skip_serializing_if = "is_default")]
    pub listener_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub backends: Vec<AddLoadBalancerBackendsBackend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLoadBalancerBackendsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(rename = "loadbalancer_backends", skip_serializing_if = "is_default")]
    pub backend_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLoadBalancerBackendsBackend {
    /// Instance id, e.g. `i-2H143W3Z`
    #[serde(skip_serializing_if = "is_default")]
    pub resource_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub weight: i32,
}

/// DeleteLoadBalancerBackends deletes a list of backends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLoadBalancerBackendsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer_backends", skip_serializing_if = "is_default")]
    pub backend_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLoadBalancerBackendsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DescribeLoadBalancerBackends lists backends, either by id or all
/// backends of a listener.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerBackendsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer", skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(rename = "loadbalancer_listener", skip_serializing_if = "is_default")]
    pub listener_id: String,
    #[serde(rename = "loadbalancer_backends", skip_serializing_if = "is_default")]
    pub backend_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub verbose: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerBackendsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeLoadBalancerBackendsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerBackendsItem {
    #[serde(rename = "loadbalancer_backend_id", skip_serializing_if = "is_default")]
    pub backend_id: String,
    #[serde(rename = "loadbalancer_backend_name", skip_serializing_if = "is_default")]
    pub backend_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub disabled: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<BackendStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub weight: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_id: String,
    #[serde(rename = "loadbalancer_policy_id", skip_serializing_if = "is_default")]
    pub policy_id: String,
    #[serde(rename = "loadbalancer_listener_id", skip_serializing_if = "is_default")]
    pub listener_id: String,
    /// The instance behind the backend
    pub resource: DescribeLoadBalancerBackendsResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerBackendsResource {
    #[serde(skip_serializing_if = "is_default")]
    pub resource_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_type: String,
}

/// ModifyLoadBalancerBackendAttributes changes a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyLoadBalancerBackendAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "loadbalancer_backend_id", skip_serializing_if = "is_default")]
    pub backend_id: String,
    #[serde(rename = "loadbalancer_policy_id", skip_serializing_if = "is_default")]
    pub policy_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub weight: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub disabled: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifyLoadBalancerBackendAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(rename = "loadbalancer_backend_id", skip_serializing_if = "is_default")]
    pub backend_id: String,
}

crate::api_request! {
    DescribeLoadBalancers => DescribeLoadBalancersRequest, DescribeLoadBalancersResponse;
    CreateLoadBalancer => CreateLoadBalancerRequest, CreateLoadBalancerResponse;
    DeleteLoadBalancers => DeleteLoadBalancersRequest, DeleteLoadBalancersResponse;
    StartLoadBalancer => StartLoadBalancersRequest, StartLoadBalancersResponse;
    StopLoadBalancer => StopLoadBalancersRequest, StopLoadBalancersResponse;
    ModifyLoadBalancerAttributes => ModifyLoadBalancerAttributesRequest, ModifyLoadBalancerAttributesResponse;
    UpdateLoadBalancers => UpdateLoadBalancersRequest, UpdateLoadBalancersResponse;
    ResizeLoadBalancers => ResizeLoadBalancersRequest, ResizeLoadBalancersResponse;
    AssociateEipsToLoadBalancer => AssociateEipsToLoadBalancerRequest, AssociateEipsToLoadBalancerResponse;
    DissociateEipsFromLoadBalancer => DissociateEipsFromLoadBalancerRequest, DissociateEipsFromLoadBalancerResponse;
    AddLoadBalancerListeners => AddLoadBalancerListenersRequest, AddLoadBalancerListenersResponse;
    DeleteLoadBalancerListeners => DeleteLoadBalancerListenersRequest, DeleteLoadBalancerListenersResponse;
    DescribeLoadBalancerListeners => DescribeLoadBalancerListenersRequest, DescribeLoadBalancerListenersResponse;
    ModifyLoadBalancerListenerAttributes => ModifyLoadBalancerListenerAttributesRequest, ModifyLoadBalancerListenerAttributesResponse;
    AddLoadBalancerBackends => AddLoadBalancerBackendsRequest, AddLoadBalancerBackendsResponse;
    DeleteLoadBalancerBackends => DeleteLoadBalancerBackendsRequest, DeleteLoadBalancerBackendsResponse;
    DescribeLoadBalancerBackends => DescribeLoadBalancerBackendsRequest, DescribeLoadBalancerBackendsResponse;
    ModifyLoadBalancerBackendAttributes => ModifyLoadBalancerBackendAttributesRequest, ModifyLoadBalancerBackendAttributesResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiRequest;
    use serde_json::json;

    #[test]
    fn test_start_stop_use_singular_action() {
        assert_eq!(StartLoadBalancersRequest::default().action_name(), "StartLoadBalancer");
        assert_eq!(StopLoadBalancersRequest::default().action_name(), "StopLoadBalancer");
    }

    #[test]
    fn test_listener_options_are_inlined() {
        let request = AddLoadBalancerListenersRequest {
            loadbalancer_id: "lb-1".to_string(),
            listeners: vec![AddLoadBalancerListenersListener {
                listener_name: "web".to_string(),
                options: ListenerOptions {
                    balance_mode: Some(BalanceMode::RoundRobin),
                    listener_protocol: Some(ListenerProtocolType::Http),
                    backend_protocol: Some(ListenerProtocolType::Http),
                    listener_port: 80,
                    ..Default::default()
                },
            }],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "loadbalancer": "lb-1",
                "listeners": [{
                    "loadbalancer_listener_name": "web",
                    "balance_mode": "roundrobin",
                    "listener_protocol": "http",
                    "backend_protocol": "http",
                    "listener_port": 80
                }]
            })
        );
    }

    #[test]
    fn test_create_load_balancer_body() {
        let request = CreateLoadBalancerRequest {
            product: CreateLoadBalancerProduct {
                loadbalancer: CreateLoadBalancerLb {
                    name: "lb".to_string(),
                    lb_type: LoadBalancerType::MAX_20K,
                },
                firewall: CreateLoadBalancerFw::default(),
                eips: vec![CreateLoadBalancerIp {
                    ref_id: "eip-1".to_string(),
                }],
            },
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"product": {"lb": {"name": "lb", "type": 1}, "fw": {}, "ip": [{"ref": "eip-1"}]}})
        );
    }

    #[test]
    fn test_decode_listener_keeps_disabled_zero() {
        let body = r#"{"action":"DescribeLoadBalancerListenersResponse","code":0,"item_set":[
            {"loadbalancer_listener_id":"lbl-1","disabled":0,"listener_port":80,"balance_mode":"leastconn"}]}"#;
        let response: DescribeLoadBalancerListenersResponse = serde_json::from_str(body).unwrap();
        let item = &response.item_set[0];
        assert_eq!(item.options.listener_port, 80);
        assert_eq!(item.options.balance_mode, Some(BalanceMode::LeastConn));

        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["disabled"], json!(0));
    }
}
