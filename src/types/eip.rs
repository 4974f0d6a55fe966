//! External IP APIs

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DescribeEips retrieves information of a list of eips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeEipsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub search_word: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Vec<EipStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub offset: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub limit: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeEipsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeEipsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeEipsItem {
    #[serde(skip_serializing_if = "is_default")]
    pub eip_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_addr: String,
    #[serde(skip_serializing_if = "is_default")]
    pub attachon: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub bandwidth: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: Option<EipStatus>,
    #[serde(skip_serializing_if = "is_default")]
    pub need_icp: i32,
    /// The instance holding this eip
    pub resource: DescribeEipsResource,
    pub eip_group: DescribeEipsEipGroup,
    pub loadbalancer: DescribeEipsLoadbalancer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeEipsResource {
    #[serde(skip_serializing_if = "is_default")]
    pub resource_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_name: String,
    /// Only known value is "instance"
    #[serde(skip_serializing_if = "is_default")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeEipsEipGroup {
    #[serde(skip_serializing_if = "is_default")]
    pub eip_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub eip_group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeEipsLoadbalancer {
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub loadbalancer_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EipStatus {
    Pending,
    Available,
    Associated,
    Suspended,
    #[serde(other)]
    Unknown,
}

/// AllocateEips creates (allocates) unused external IPs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocateEipsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    pub product: AllocateEipsProduct,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocateEipsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocateEipsProduct {
    pub ip: AllocateEipsIp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocateEipsIp {
    #[serde(skip_serializing_if = "is_default")]
    pub ip_group: Option<IpGroupType>,
    /// MB/s
    #[serde(rename = "bw", skip_serializing_if = "is_default")]
    pub bandwidth: i32,
    /// Defaults to 1 on the server
    #[serde(skip_serializing_if = "is_default")]
    pub amount: i32,
}

/// Line an external IP is allocated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum IpGroupType {
    #[serde(rename = "eipg-98dyd0aj")]
    #[strum(serialize = "eipg-98dyd0aj")]
    ChinaTelecom,
    #[serde(rename = "eipg-00000000")]
    #[strum(serialize = "eipg-00000000")]
    Bgp,
    #[serde(rename = "unknown", other)]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// ReleaseEips deletes (releases) a list of external IPs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseEipsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseEipsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// AssociateEip attaches an eip to an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociateEipRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "eip", skip_serializing_if = "is_default")]
    pub eip_id: String,
    #[serde(rename = "instance", skip_serializing_if = "is_default")]
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociateEipResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// DissociateEips detaches a list of eips from their resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DissociateEipsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DissociateEipsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ChangeEipsBandwidth changes bandwidth of a list of eips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeEipsBandwidthRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "eips", skip_serializing_if = "is_default")]
    pub eip_ids: Vec<String>,
    /// Mbps
    #[serde(skip_serializing_if = "is_default")]
    pub bandwidth: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeEipsBandwidthResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

crate::api_request! {
    DescribeEips => DescribeEipsRequest, DescribeEipsResponse;
    AllocateEips => AllocateEipsRequest, AllocateEipsResponse;
    ReleaseEips => ReleaseEipsRequest, ReleaseEipsResponse;
    AssociateEip => AssociateEipRequest, AssociateEipResponse;
    DissociateEips => DissociateEipsRequest, DissociateEipsResponse;
    ChangeEipsBandwidth => ChangeEipsBandwidthRequest, ChangeEipsBandwidthResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ip_group_wire_values() {
        assert_eq!(
            serde_json::to_value(IpGroupType::ChinaTelecom).unwrap(),
            json!("eipg-98dyd0aj")
        );
        assert_eq!("eipg-00000000".parse::<IpGroupType>().unwrap(), IpGroupType::Bgp);
        assert_eq!(IpGroupType::Bgp.to_string(), "eipg-00000000");
        assert_eq!(
            serde_json::from_value::<IpGroupType>(json!("eipg-12345678")).unwrap(),
            IpGroupType::Unknown
        );
    }

    #[test]
    fn test_allocate_eips_body() {
        let request = AllocateEipsRequest {
            product: AllocateEipsProduct {
                ip: AllocateEipsIp {
                    ip_group: Some(IpGroupType::ChinaTelecom),
                    bandwidth: 1,
                    amount: 1,
                },
            },
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"product": {"ip": {"ip_group": "eipg-98dyd0aj", "bw": 1, "amount": 1}}})
        );
    }

    #[test]
    fn test_decode_describe_eips() {
        let body = r#"{"action":"DescribeEipsResponse","code":0,"total_count":1,"item_set":[
            {"eip_id":"eip-TYFJDV7K","eip_addr":"43.254.54.122","bandwidth":1,"status":"associated",
             "resource":{"resource_id":"i-DCFA40VV","resource_type":"instance"}}]}"#;
        let response: DescribeEipsResponse = serde_json::from_str(body).unwrap();
        let item = &response.item_set[0];
        assert_eq!(item.status, Some(EipStatus::Associated));
        assert_eq!(item.resource.resource_id, "i-DCFA40VV");
        assert_eq!(item.eip_group, DescribeEipsEipGroup::default());
    }
}
