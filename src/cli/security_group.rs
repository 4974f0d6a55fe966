//! Security group commands

use anchnet::types::security_group::{
    AddSecurityGroupRule, AddSecurityGroupRulesRequest, ApplySecurityGroupRequest,
    CreateSecurityGroupRequest, DeleteSecurityGroupsRequest, DescribeSecurityGroupsRequest,
    SecurityGroupRule, SecurityGroupRuleAction, SecurityGroupRuleDirection,
    SecurityGroupRuleProtocol,
};
use clap::Args;

/// Create a security group. Rule flags are comma separated lists matched
/// by position, e.g. `--rulename=ssh,http --priority=1,2`.
#[derive(Args, Debug)]
pub struct CreateSecurityGroupArgs {
    pub name: String,

    /// Rule names
    #[arg(short, long, value_delimiter = ',')]
    pub rulename: Vec<String>,

    /// Rule directions. 0 is down, 1 is up
    #[arg(short, long, value_delimiter = ',')]
    pub direction: Vec<i32>,

    /// Rule actions: accept or drop
    #[arg(short, long, value_delimiter = ',')]
    pub action: Vec<SecurityGroupRuleAction>,

    /// Rule protocols: tcp, udp or icmp
    #[arg(short = 'c', long, value_delimiter = ',')]
    pub protocol: Vec<SecurityGroupRuleProtocol>,

    /// Rule priorities
    #[arg(short, long, value_delimiter = ',')]
    pub priority: Vec<i32>,

    /// First rule values, meaning depends on protocol
    #[arg(long, value_delimiter = ',')]
    pub value1: Vec<String>,

    /// Second rule values, meaning depends on protocol
    #[arg(long, value_delimiter = ',')]
    pub value2: Vec<String>,

    /// Third rule values, meaning depends on protocol
    #[arg(long, value_delimiter = ',')]
    pub value3: Vec<String>,
}

impl CreateSecurityGroupArgs {
    /// One rule per rule name; missing positions in other lists are left unset
    pub fn request(&self) -> CreateSecurityGroupRequest {
        let rules = self
            .rulename
            .iter()
            .enumerate()
            .map(|(i, name)| SecurityGroupRule {
                security_group_rule_name: name.clone(),
                action: self.action.get(i).copied(),
                direction: SecurityGroupRuleDirection(self.direction.get(i).copied().unwrap_or(0)),
                protocol: self.protocol.get(i).copied(),
                priority: self.priority.get(i).copied().unwrap_or(0),
                value1: self.value1.get(i).cloned().unwrap_or_default(),
                value2: self.value2.get(i).cloned().unwrap_or_default(),
                value3: self.value3.get(i).cloned().unwrap_or_default(),
                ..Default::default()
            })
            .collect();

        CreateSecurityGroupRequest {
            security_group_name: self.name.clone(),
            rules,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct AddSecurityGroupRuleArgs {
    /// Rule name
    pub name: String,

    pub security_group_id: String,

    /// 0 is down, 1 is up
    #[arg(short, long, default_value_t = 0)]
    pub direction: i32,

    #[arg(short, long)]
    pub action: Option<SecurityGroupRuleAction>,

    #[arg(short = 'c', long)]
    pub protocol: Option<SecurityGroupRuleProtocol>,

    #[arg(short, long, default_value_t = 0)]
    pub priority: i32,

    #[arg(long, default_value = "")]
    pub value1: String,

    #[arg(long, default_value = "")]
    pub value2: String,

    #[arg(long, default_value = "")]
    pub value3: String,
}

impl AddSecurityGroupRuleArgs {
    pub fn request(&self) -> AddSecurityGroupRulesRequest {
        AddSecurityGroupRulesRequest {
            security_group_id: self.security_group_id.clone(),
            rules: vec![AddSecurityGroupRule {
                security_group_rule_name: self.name.clone(),
                action: self.action,
                direction: SecurityGroupRuleDirection(self.direction),
                protocol: self.protocol,
                priority: self.priority,
                value1: self.value1.clone(),
                value2: self.value2.clone(),
                value3: self.value3.clone(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct ApplySecurityGroupArgs {
    pub security_group_id: String,

    /// Comma separated list of instance ids
    #[arg(value_delimiter = ',', required = true)]
    pub instance_ids: Vec<String>,
}

impl ApplySecurityGroupArgs {
    pub fn request(&self) -> ApplySecurityGroupRequest {
        ApplySecurityGroupRequest {
            security_group_id: self.security_group_id.clone(),
            instance_ids: self.instance_ids.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct DescribeSecurityGroupArgs {
    pub id: String,
}

impl DescribeSecurityGroupArgs {
    pub fn request(&self) -> DescribeSecurityGroupsRequest {
        DescribeSecurityGroupsRequest {
            security_group_ids: vec![self.id.clone()],
            verbose: 1,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchSecurityGroupArgs {
    pub name: String,
}

impl SearchSecurityGroupArgs {
    pub fn request(&self) -> DescribeSecurityGroupsRequest {
        DescribeSecurityGroupsRequest {
            search_word: self.name.clone(),
            verbose: 1,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct DeleteSecurityGroupsArgs {
    /// Comma separated list of security group ids
    #[arg(value_delimiter = ',', required = true)]
    pub ids: Vec<String>,
}

impl DeleteSecurityGroupsArgs {
    pub fn request(&self) -> DeleteSecurityGroupsRequest {
        DeleteSecurityGroupsRequest {
            security_group_ids: self.ids.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::parse;
    use crate::cli::Commands;

    #[test]
    fn test_create_security_group_rules_by_position() {
        let Commands::CreateSecurityGroup(args) = parse(&[
            "createsecuritygroup",
            "sg",
            "--rulename=ssh,http",
            "--priority=1,2",
            "--action=accept,drop",
            "--protocol=tcp,tcp",
            "--direction=0,0",
            "--value1=22,80",
            "--value2=22,80",
        ]) else {
            panic!("expected createsecuritygroup");
        };
        let request = args.request();
        assert_eq!(request.security_group_name, "sg");
        assert_eq!(request.rules.len(), 2);

        let http = &request.rules[1];
        assert_eq!(http.security_group_rule_name, "http");
        assert_eq!(http.priority, 2);
        assert_eq!(http.action, Some(SecurityGroupRuleAction::Drop));
        assert_eq!(http.protocol, Some(SecurityGroupRuleProtocol::Tcp));
        assert_eq!(http.direction, SecurityGroupRuleDirection::DOWN);
        assert_eq!(http.value1, "80");
        assert_eq!(http.value3, "");
    }

    #[test]
    fn test_add_security_group_rule() {
        let Commands::AddSecurityGroupRule(args) = parse(&[
            "addsecuritygrouprule",
            "ssh",
            "sg-1",
            "--direction",
            "1",
            "--action",
            "accept",
        ]) else {
            panic!("expected addsecuritygrouprule");
        };
        let request = args.request();
        assert_eq!(request.security_group_id, "sg-1");
        assert_eq!(request.rules[0].direction, SecurityGroupRuleDirection::UP);
        assert_eq!(request.rules[0].action, Some(SecurityGroupRuleAction::Accept));
        assert_eq!(request.rules[0].protocol, None);
    }
}
