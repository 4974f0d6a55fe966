//! Action catalog
//!
//! Every anchnet operation is named by an action string sent in the request
//! header. The catalog is a closed enum; each request shape names its action
//! explicitly and the client checks the name against this table before any
//! network I/O.

use super::error::{Error, Result};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// All recognized anchnet actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Action {
    // Instances
    DescribeInstances,
    RunInstances,
    TerminateInstances,
    StartInstances,
    StopInstances,
    RestartInstances,
    ResetLoginPasswd,
    ModifyInstanceAttributes,

    // External IPs
    DescribeEips,
    AllocateEips,
    ReleaseEips,
    AssociateEip,
    DissociateEips,
    ChangeEipsBandwidth,

    // SDN networks
    DescribeVxnets,
    CreateVxnets,
    DeleteVxnets,
    JoinVxnet,
    LeaveVxnet,
    ModifyVxnetAttributes,

    // Volumes
    DescribeVolumes,
    CreateVolumes,
    DeleteVolumes,
    AttachVolumes,
    DetachVolumes,
    ResizeVolumes,
    ModifyVolumeAttributes,

    // Load balancers
    DescribeLoadBalancers,
    CreateLoadBalancer,
    DeleteLoadBalancers,
    StartLoadBalancer,
    StopLoadBalancer,
    ModifyLoadBalancerAttributes,
    UpdateLoadBalancers,
    ResizeLoadBalancers,
    AssociateEipsToLoadBalancer,
    DissociateEipsFromLoadBalancer,
    AddLoadBalancerListeners,
    DeleteLoadBalancerListeners,
    DescribeLoadBalancerListeners,
    ModifyLoadBalancerListenerAttributes,
    AddLoadBalancerBackends,
    DeleteLoadBalancerBackends,
    DescribeLoadBalancerBackends,
    ModifyLoadBalancerBackendAttributes,

    // Security groups
    DescribeSecurityGroups,
    CreateSecurityGroup,
    DeleteSecurityGroups,
    ApplySecurityGroup,
    ModifySecurityGroupAttributes,
    DescribeSecurityGroupRules,
    AddSecurityGroupRules,
    DeleteSecurityGroupRules,
    ModifySecurityGroupRuleAttributes,

    // Jobs
    DescribeJobs,

    // Accounts and billing
    CreateUserProject,
    DescribeProjects,
    DescribeUsers,
    Transfer,
    GetChargeSummary,

    // Images
    CaptureInstance,
    DescribeImage,
    GrantImageToUsers,
    RevokeImageFromUsers,
    DescribeImageUsers,
}

impl Action {
    /// Look up an action by its exact wire name
    pub fn resolve(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownAction(name.to_string()))
    }

    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Every action in the catalog
    pub fn all() -> impl Iterator<Item = Action> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(Action::all().count(), 65);
    }

    #[test]
    fn test_resolve_known_action() {
        assert_eq!(
            Action::resolve("StopInstances").unwrap(),
            Action::StopInstances
        );
        assert_eq!(Action::StopInstances.as_str(), "StopInstances");
        assert_eq!(Action::StopInstances.to_string(), "StopInstances");
    }

    #[test]
    fn test_resolve_is_exact() {
        // Prefixes and suffixes of real names are not actions
        assert!(Action::resolve("AssociateEips").is_err());
        assert!(Action::resolve("StopInstancesRequest").is_err());
        assert!(Action::resolve("stopinstances").is_err());
        assert!(Action::resolve("").is_err());
    }

    #[test]
    fn test_resolve_unknown_action_error() {
        let err = Action::resolve("FrobnicateWidgets").unwrap_err();
        assert!(matches!(err, Error::UnknownAction(ref name) if name == "FrobnicateWidgets"));
        assert_eq!(err.to_string(), "Unknown request type: FrobnicateWidgets");
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Action::all().map(|a| a.as_str()).collect();
        assert_eq!(names.len(), Action::all().count());
    }

    #[test]
    fn test_every_action_resolves_to_itself() {
        for action in Action::all() {
            assert_eq!(Action::resolve(action.as_str()).unwrap(), action);
        }
    }
}
