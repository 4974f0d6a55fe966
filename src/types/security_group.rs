//! Security group (firewall) APIs

use crate::api::common::{is_default, RequestCommon, ResponseCommon};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// DescribeSecurityGroups retrieves information of a list of security groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeSecurityGroupsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_groups", skip_serializing_if = "is_default")]
    pub security_group_ids: Vec<String>,
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
pub struct DescribeSecurityGroupsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<DescribeSecurityGroupsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeSecurityGroupsItem {
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub disabled: i32,
    pub is_default: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub is_applied: i32,
    #[serde(rename = "rule", skip_serializing_if = "is_default")]
    pub rules: Vec<SecurityGroupRule>,
}

/// A rule as listed by DescribeSecurityGroups and DescribeSecurityGroupRules,
/// and as passed to CreateSecurityGroup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroupRule {
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_rule_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_rule_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub action: Option<SecurityGroupRuleAction>,
    pub direction: SecurityGroupRuleDirection,
    #[serde(skip_serializing_if = "is_default")]
    pub protocol: Option<SecurityGroupRuleProtocol>,
    #[serde(skip_serializing_if = "is_default")]
    pub disabled: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub priority: i32,
    #[serde(rename = "val1", skip_serializing_if = "is_default")]
    pub value1: String,
    #[serde(rename = "val2", skip_serializing_if = "is_default")]
    pub value2: String,
    #[serde(rename = "val3", skip_serializing_if = "is_default")]
    pub value3: String,
    #[serde(rename = "resource", skip_serializing_if = "is_default")]
    pub resources: Vec<SecurityGroupResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroupResource {
    #[serde(skip_serializing_if = "is_default")]
    pub resource_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub resource_type: String,
}

/// Traffic direction of a rule: down (inbound) or up (outbound)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityGroupRuleDirection(pub i32);

impl SecurityGroupRuleDirection {
    pub const DOWN: Self = Self(0);
    pub const UP: Self = Self(1);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SecurityGroupRuleAction {
    Accept,
    Drop,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SecurityGroupRuleProtocol {
    Tcp,
    Udp,
    Icmp,
    #[serde(other)]
    Unknown,
}

/// CreateSecurityGroup creates a security group with an initial set of rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSecurityGroupRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_name: String,
    #[serde(rename = "rule", skip_serializing_if = "is_default")]
    pub rules: Vec<SecurityGroupRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSecurityGroupResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_id: String,
}

/// DeleteSecurityGroups deletes a list of security groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSecurityGroupsRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_groups", skip_serializing_if = "is_default")]
    pub security_group_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSecurityGroupsResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ApplySecurityGroup applies a security group to a list of instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplySecurityGroupRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_group", skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(rename = "instances", skip_serializing_if = "is_default")]
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplySecurityGroupResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ModifySecurityGroupAttributes changes the name or description of a
/// security group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifySecurityGroupAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_group", skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifySecurityGroupAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_id: String,
}

/// DescribeSecurityGroupRules lists rules of a security group. With only
/// `security_group_id` set, every rule in the group is listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeSecurityGroupRulesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_group", skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(rename = "security_group_rules", skip_serializing_if = "is_default")]
    pub security_group_rule_ids: Vec<String>,
    /// Both directions when unset
    #[serde(skip_serializing_if = "is_default")]
    pub direction: Option<SecurityGroupRuleDirection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeSecurityGroupRulesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub total_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub item_set: Vec<SecurityGroupRule>,
}

/// AddSecurityGroupRules adds rules to a security group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddSecurityGroupRulesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_group", skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub rules: Vec<AddSecurityGroupRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddSecurityGroupRulesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
    #[serde(rename = "security_group_rules", skip_serializing_if = "is_default")]
    pub security_group_rule_ids: Vec<String>,
}

/// Rule shape for AddSecurityGroupRules. The action goes by `rule_action`
/// here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddSecurityGroupRule {
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_rule_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_rule_name: String,
    #[serde(rename = "rule_action", skip_serializing_if = "is_default")]
    pub action: Option<SecurityGroupRuleAction>,
    pub direction: SecurityGroupRuleDirection,
    #[serde(skip_serializing_if = "is_default")]
    pub protocol: Option<SecurityGroupRuleProtocol>,
    #[serde(skip_serializing_if = "is_default")]
    pub disabled: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub priority: i32,
    #[serde(rename = "val1", skip_serializing_if = "is_default")]
    pub value1: String,
    #[serde(rename = "val2", skip_serializing_if = "is_default")]
    pub value2: String,
    #[serde(rename = "val3", skip_serializing_if = "is_default")]
    pub value3: String,
    #[serde(rename = "resource", skip_serializing_if = "is_default")]
    pub resources: Vec<SecurityGroupResource>,
}

/// DeleteSecurityGroupRules deletes a list of security group rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSecurityGroupRulesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_group_rules", skip_serializing_if = "is_default")]
    pub security_group_rule_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSecurityGroupRulesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

/// ModifySecurityGroupRuleAttributes modifies a security group rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifySecurityGroupRuleAttributesRequest {
    #[serde(flatten)]
    pub common: RequestCommon,
    #[serde(rename = "security_group", skip_serializing_if = "is_default")]
    pub security_group_id: String,
    #[serde(rename = "security_group_rule", skip_serializing_if = "is_default")]
    pub security_group_rule_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_rule_name: String,
    #[serde(rename = "rule_action", skip_serializing_if = "is_default")]
    pub action: Option<SecurityGroupRuleAction>,
    pub direction: SecurityGroupRuleDirection,
    #[serde(skip_serializing_if = "is_default")]
    pub protocol: Option<SecurityGroupRuleProtocol>,
    #[serde(skip_serializing_if = "is_default")]
    pub disabled: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub priority: i32,
    #[serde(rename = "val1", skip_serializing_if = "is_default")]
    pub value1: String,
    #[serde(rename = "val2", skip_serializing_if = "is_default")]
    pub value2: String,
    #[serde(rename = "val3", skip_serializing_if = "is_default")]
    pub value3: String,
    #[serde(rename = "resource", skip_serializing_if = "is_default")]
    pub resources: Vec<SecurityGroupResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifySecurityGroupRuleAttributesResponse {
    #[serde(flatten)]
    pub common: ResponseCommon,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group_rule_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub job_id: String,
}

crate::api_request! {
    DescribeSecurityGroups => DescribeSecurityGroupsRequest, DescribeSecurityGroupsResponse;
    CreateSecurityGroup => CreateSecurityGroupRequest, CreateSecurityGroupResponse;
    DeleteSecurityGroups => DeleteSecurityGroupsRequest, DeleteSecurityGroupsResponse;
    ApplySecurityGroup => ApplySecurityGroupRequest, ApplySecurityGroupResponse;
    ModifySecurityGroupAttributes => ModifySecurityGroupAttributesRequest, ModifySecurityGroupAttributesResponse;
    DescribeSecurityGroupRules => DescribeSecurityGroupRulesRequest, DescribeSecurityGroupRulesResponse;
    AddSecurityGroupRules => AddSecurityGroupRulesRequest, AddSecurityGroupRulesResponse;
    DeleteSecurityGroupRules => DeleteSecurityGroupRulesRequest, DeleteSecurityGroupRulesResponse;
    ModifySecurityGroupRuleAttributes => ModifySecurityGroupRuleAttributesRequest, ModifySecurityGroupRuleAttributesResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_security_group_rule_sends_down_direction() {
        let request = CreateSecurityGroupRequest {
            security_group_name: "ssh".to_string(),
            rules: vec![SecurityGroupRule {
                security_group_rule_name: "ssh".to_string(),
                action: Some(SecurityGroupRuleAction::Accept),
                direction: SecurityGroupRuleDirection::DOWN,
                protocol: Some(SecurityGroupRuleProtocol::Tcp),
                priority: 10,
                value1: "22".to_string(),
                value2: "22".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "security_group_name": "ssh",
                "rule": [{
                    "security_group_rule_name": "ssh",
                    "action": "accept",
                    "direction": 0,
                    "protocol": "tcp",
                    "priority": 10,
                    "val1": "22",
                    "val2": "22"
                }]
            })
        );
    }

    #[test]
    fn test_add_rules_use_rule_action() {
        let request = AddSecurityGroupRulesRequest {
            security_group_id: "sg-1".to_string(),
            rules: vec![AddSecurityGroupRule {
                action: Some(SecurityGroupRuleAction::Drop),
                direction: SecurityGroupRuleDirection::UP,
                protocol: Some(SecurityGroupRuleProtocol::Icmp),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "security_group": "sg-1",
                "rules": [{"rule_action": "drop", "direction": 1, "protocol": "icmp"}]
            })
        );
    }

    #[test]
    fn test_describe_rules_direction_is_optional() {
        let request = DescribeSecurityGroupRulesRequest {
            security_group_id: "sg-1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"security_group": "sg-1"})
        );

        let request = DescribeSecurityGroupRulesRequest {
            direction: Some(SecurityGroupRuleDirection::DOWN),
            ..request
        };
        assert_eq!(serde_json::to_value(&request).unwrap()["direction"], json!(0));
    }

    #[test]
    fn test_decode_is_default_summary() {
        let body = r#"{"action":"DescribeSecurityGroupsResponse","code":0,"total_count":1,"item_set":[
            {"security_group_id":"sg-1","is_default":1,"rule":[{"action":"accept","direction":0,"protocol":"tcp"}]}]}"#;
        let response: DescribeSecurityGroupsResponse = serde_json::from_str(body).unwrap();
        let item = &response.item_set[0];
        assert_eq!(item.is_default, 1);
        assert_eq!(item.rules[0].protocol, Some(SecurityGroupRuleProtocol::Tcp));
    }
}
