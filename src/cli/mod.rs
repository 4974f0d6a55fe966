//! Subcommands
//!
//! Each subcommand builds one request from its arguments, sends it and
//! prints the response. Lists are comma separated.

pub mod eip;
pub mod image;
pub mod instance;
pub mod job;
pub mod lb;
pub mod output;
pub mod security_group;
pub mod user_project;
pub mod volume;
pub mod vxnet;

use anchnet::api::Client;
use clap::Subcommand;
use output::send;
use std::process::ExitCode;

#[derive(Subcommand, Debug)]
#[command(rename_all = "lower")]
pub enum Commands {
    /// Create an instance with a public eip
    RunInstance(instance::RunInstanceArgs),
    /// Get information of an instance by id
    DescribeInstance(instance::DescribeInstanceArgs),
    /// Search instances by name
    SearchInstance(instance::SearchInstanceArgs),
    /// Terminate a comma separated list of instances
    TerminateInstances(instance::InstanceIdsArgs),
    /// Start a comma separated list of instances
    StartInstances(instance::InstanceIdsArgs),
    /// Stop a comma separated list of instances
    StopInstances(instance::InstanceIdsArgs),

    /// Describe a comma separated list of eips
    DescribeEips(eip::EipIdsArgs),
    /// Release a comma separated list of eips
    ReleaseEips(eip::EipIdsArgs),

    /// Create a private SDN network
    CreateVxnets(vxnet::CreateVxnetArgs),
    /// Get information of SDN networks by id
    DescribeVxnets(vxnet::VxnetIdsArgs),
    /// Search SDN networks by name
    SearchVxnets(vxnet::SearchVxnetArgs),
    /// Join instances to an SDN network
    JoinVxnet(vxnet::JoinVxnetArgs),
    /// Delete SDN networks
    DeleteVxnets(vxnet::VxnetIdsArgs),

    /// Create a load balancer bound to a comma separated list of eips
    CreateLoadBalancer(lb::CreateLoadBalancerArgs),
    /// Delete load balancers and the eips bound to them
    DeleteLoadBalancer(lb::DeleteLoadBalancerArgs),
    /// Search load balancers by name
    SearchLoadBalancer(lb::SearchLoadBalancerArgs),

    /// Create a security group with rules
    CreateSecurityGroup(security_group::CreateSecurityGroupArgs),
    /// Add a rule to a security group
    AddSecurityGroupRule(security_group::AddSecurityGroupRuleArgs),
    /// Apply a security group to a comma separated list of instances
    ApplySecurityGroup(security_group::ApplySecurityGroupArgs),
    /// Get security group information by id
    DescribeSecurityGroup(security_group::DescribeSecurityGroupArgs),
    /// Search security groups by name
    SearchSecurityGroup(security_group::SearchSecurityGroupArgs),
    /// Delete a comma separated list of security groups
    DeleteSecurityGroups(security_group::DeleteSecurityGroupsArgs),

    /// Get information of a job by id
    DescribeJob(job::DescribeJobArgs),
    /// Wait until a job reaches the desired status
    WaitJob(job::WaitJobArgs),

    /// Create a sub-account
    CreateUserProject(user_project::CreateUserProjectArgs),
    /// Get information of a project
    DescribeProjects(user_project::DescribeProjectsArgs),
    /// Transfer money to a sub-account
    Transfer(user_project::TransferArgs),
    /// Search sub-account projects by user name
    SearchUserProject(user_project::SearchUserArgs),
    /// Search sub-account users by user name
    SearchUser(user_project::SearchUserArgs),
    /// Get the charge summary of the account
    GetChargeSummary,

    /// Get information of a comma separated list of volumes
    DescribeVolumes(volume::VolumeIdsArgs),
    /// Detach a comma separated list of volumes
    DetachVolumes(volume::VolumeIdsArgs),
    /// Delete a comma separated list of volumes
    DeleteVolumes(volume::VolumeIdsArgs),

    /// Create an image from a stopped instance
    CaptureInstance(image::CaptureInstanceArgs),
    /// Grant users access to an image
    GrantImage(image::ImageUsersArgs),
    /// Revoke users' access to an image
    RevokeImage(image::ImageUsersArgs),
    /// List users who have access to an image
    DescribeImageUsers(image::DescribeImageUsersArgs),
}

impl Commands {
    pub async fn execute(&self, client: &Client) -> ExitCode {
        match self {
            Commands::RunInstance(args) => send(client, "RunInstance", args.request()).await,
            Commands::DescribeInstance(args) => {
                send(client, "DescribeInstance", args.request()).await
            }
            Commands::SearchInstance(args) => send(client, "SearchInstance", args.request()).await,
            Commands::TerminateInstances(args) => {
                send(client, "TerminateInstance", args.terminate()).await
            }
            Commands::StartInstances(args) => send(client, "StartInstance", args.start()).await,
            Commands::StopInstances(args) => send(client, "StopInstance", args.stop()).await,

            Commands::DescribeEips(args) => send(client, "DescribeEips", args.describe()).await,
            Commands::ReleaseEips(args) => send(client, "ReleaseEips", args.release()).await,

            Commands::CreateVxnets(args) => send(client, "CreateVxnet", args.request()).await,
            Commands::DescribeVxnets(args) => send(client, "DescribeVxnet", args.describe()).await,
            Commands::SearchVxnets(args) => send(client, "SearchVxnet", args.request()).await,
            Commands::JoinVxnet(args) => send(client, "JoinVxnet", args.request()).await,
            Commands::DeleteVxnets(args) => send(client, "DeleteVxnet", args.delete()).await,

            Commands::CreateLoadBalancer(args) => {
                send(client, "CreateLoadBalancer", args.request()).await
            }
            Commands::DeleteLoadBalancer(args) => {
                send(client, "DeleteLoadBalancer", args.request()).await
            }
            Commands::SearchLoadBalancer(args) => {
                send(client, "SearchLoadBalancer", args.request()).await
            }

            Commands::CreateSecurityGroup(args) => {
                send(client, "CreateSecurityGroup", args.request()).await
            }
            Commands::AddSecurityGroupRule(args) => {
                send(client, "AddSecurityGroupRule", args.request()).await
            }
            Commands::ApplySecurityGroup(args) => {
                send(client, "ApplySecurityGroup", args.request()).await
            }
            Commands::DescribeSecurityGroup(args) => {
                send(client, "DescribeSecurityGroup", args.request()).await
            }
            Commands::SearchSecurityGroup(args) => {
                send(client, "SearchSecurityGroup", args.request()).await
            }
            Commands::DeleteSecurityGroups(args) => {
                send(client, "DeleteSecurityGroups", args.request()).await
            }

            Commands::DescribeJob(args) => send(client, "DescribeJob", args.request()).await,
            Commands::WaitJob(args) => args.run(client).await,

            Commands::CreateUserProject(args) => {
                send(client, "CreateUserProject", args.request()).await
            }
            Commands::DescribeProjects(args) => {
                send(client, "DescribeProjects", args.request()).await
            }
            Commands::Transfer(args) => send(client, "Transfer", args.request()).await,
            Commands::SearchUserProject(args) => {
                send(client, "SearchUserProject", args.projects()).await
            }
            Commands::SearchUser(args) => send(client, "DescribeUsers", args.users()).await,
            Commands::GetChargeSummary => {
                send(client, "GetChargeSummary", user_project::charge_summary()).await
            }

            Commands::DescribeVolumes(args) => send(client, "DescribeVolumes", args.describe()).await,
            Commands::DetachVolumes(args) => send(client, "DetachVolumes", args.detach()).await,
            Commands::DeleteVolumes(args) => send(client, "DeleteVolumes", args.delete()).await,

            Commands::CaptureInstance(args) => send(client, "CaptureInstance", args.request()).await,
            Commands::GrantImage(args) => send(client, "GrantImageToUsers", args.grant()).await,
            Commands::RevokeImage(args) => send(client, "RevokeImageFromUsers", args.revoke()).await,
            Commands::DescribeImageUsers(args) => {
                send(client, "DescribeImageUsers", args.request()).await
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Cli;
    use clap::{CommandFactory, Parser};

    pub(crate) fn try_parse(args: &[&str]) -> Result<Commands, clap::Error> {
        let argv = std::iter::once("anchnet").chain(args.iter().copied());
        Cli::try_parse_from(argv).map(|cli| cli.command)
    }

    pub(crate) fn parse(args: &[&str]) -> Commands {
        try_parse(args).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommand_names_are_lowercase() {
        let cli = Cli::command();
        let names: Vec<_> = cli.get_subcommands().map(|c| c.get_name().to_string()).collect();
        for name in [
            "runinstance",
            "describeinstance",
            "searchinstance",
            "terminateinstances",
            "startinstances",
            "stopinstances",
            "describeeips",
            "releaseeips",
            "createvxnets",
            "describevxnets",
            "searchvxnets",
            "joinvxnet",
            "deletevxnets",
            "createloadbalancer",
            "deleteloadbalancer",
            "searchloadbalancer",
            "createsecuritygroup",
            "addsecuritygrouprule",
            "applysecuritygroup",
            "describesecuritygroup",
            "searchsecuritygroup",
            "deletesecuritygroups",
            "describejob",
            "waitjob",
            "createuserproject",
            "describeprojects",
            "transfer",
            "searchuserproject",
            "searchuser",
            "getchargesummary",
            "describevolumes",
            "detachvolumes",
            "deletevolumes",
            "captureinstance",
            "grantimage",
            "revokeimage",
            "describeimageusers",
        ] {
            assert!(names.iter().any(|n| n == name), "missing subcommand {}", name);
        }
    }

    #[test]
    fn test_missing_ids_rejected() {
        assert!(try_parse(&["stopinstances"]).is_err());
        assert!(try_parse(&["joinvxnet", "vxnet-1"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "anchnet",
            "describejob",
            "job-1",
            "--zone",
            "ac2",
            "--project",
            "pro-1",
            "--config-path",
            "/tmp/anchnet",
        ])
        .unwrap();
        let settings = cli.settings();
        assert_eq!(settings.zone.as_deref(), Some("ac2"));
        assert_eq!(settings.project.as_deref(), Some("pro-1"));
        assert_eq!(
            settings.config_path.as_deref(),
            Some(std::path::Path::new("/tmp/anchnet"))
        );
    }
}
