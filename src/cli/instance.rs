//! Instance commands

use anchnet::types::eip::IpGroupType;
use anchnet::types::instance::{
    DescribeInstancesRequest, InstanceStatus, LoginMode, RunInstancesCloud, RunInstancesIp,
    RunInstancesProduct, RunInstancesRequest, RunInstancesVm, StartInstancesRequest,
    StopInstancesRequest, TerminateInstancesRequest,
};
use clap::Args;

#[derive(Args, Debug)]
pub struct RunInstanceArgs {
    /// Instance name
    pub name: String,

    /// Number of cpu cores
    #[arg(short, long, default_value_t = 1)]
    pub cpu: i32,

    /// Number of instances to run
    #[arg(short, long, default_value_t = 1)]
    pub amount: i32,

    /// Memory in MB
    #[arg(short, long, default_value_t = 1024)]
    pub memory: i32,

    /// Public network bandwidth, in MB/s
    #[arg(short, long, default_value_t = 1)]
    pub bandwidth: i32,

    /// Login password for the new instance
    #[arg(short, long, default_value = "caicloud2015ABC")]
    pub passwd: String,

    /// Image used to create the new instance
    #[arg(short, long, default_value = "trustysrvx64c")]
    pub image_id: String,

    /// IP group of the new eip
    #[arg(short = 'g', long, default_value = "eipg-00000000")]
    pub ip_group: IpGroupType,
}

impl RunInstanceArgs {
    pub fn request(&self) -> RunInstancesRequest {
        RunInstancesRequest {
            product: RunInstancesProduct {
                cloud: RunInstancesCloud {
                    vm: RunInstancesVm {
                        name: self.name.clone(),
                        login_mode: LoginMode::Pwd,
                        mem: self.memory,
                        cpu: self.cpu,
                        image_id: self.image_id.clone(),
                        password: self.passwd.clone(),
                    },
                    // Public network
                    net0: true,
                    ip: RunInstancesIp {
                        bandwidth: self.bandwidth,
                        ip_group: Some(self.ip_group),
                        ..Default::default()
                    },
                    amount: self.amount,
                    ..Default::default()
                },
            },
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct DescribeInstanceArgs {
    /// Instance id
    pub id: String,
}

impl DescribeInstanceArgs {
    pub fn request(&self) -> DescribeInstancesRequest {
        DescribeInstancesRequest {
            instance_ids: vec![self.id.clone()],
            verbose: 1,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchInstanceArgs {
    /// Instance name
    pub name: String,

    /// Comma separated statuses: running, pending, stopped, suspended
    #[arg(short, long, value_delimiter = ',', default_value = "running")]
    pub status: Vec<InstanceStatus>,
}

impl SearchInstanceArgs {
    pub fn request(&self) -> DescribeInstancesRequest {
        DescribeInstancesRequest {
            search_word: self.name.clone(),
            status: self.status.clone(),
            verbose: 1,
            ..Default::default()
        }
    }
}

/// Comma separated list of instance ids
#[derive(Args, Debug)]
pub struct InstanceIdsArgs {
    #[arg(value_delimiter = ',', required = true)]
    pub ids: Vec<String>,
}

impl InstanceIdsArgs {
    pub fn terminate(&self) -> TerminateInstancesRequest {
        TerminateInstancesRequest {
            instance_ids: self.ids.clone(),
            ..Default::default()
        }
    }

    pub fn start(&self) -> StartInstancesRequest {
        StartInstancesRequest {
            instance_ids: self.ids.clone(),
            ..Default::default()
        }
    }

    pub fn stop(&self) -> StopInstancesRequest {
        StopInstancesRequest {
            instance_ids: self.ids.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::parse;
    use crate::cli::Commands;
    use anchnet::types::instance::InstanceStopType;

    #[test]
    fn test_run_instance_defaults() {
        let Commands::RunInstance(args) = parse(&["runinstance", "test"]) else {
            panic!("expected runinstance");
        };
        let request = args.request();
        let cloud = &request.product.cloud;
        assert_eq!(cloud.vm.name, "test");
        assert_eq!(cloud.vm.cpu, 1);
        assert_eq!(cloud.vm.mem, 1024);
        assert_eq!(cloud.vm.image_id, "trustysrvx64c");
        assert_eq!(cloud.vm.password, "caicloud2015ABC");
        assert!(cloud.net0);
        assert_eq!(cloud.ip.bandwidth, 1);
        assert_eq!(cloud.ip.ip_group, Some(IpGroupType::Bgp));
        assert_eq!(cloud.amount, 1);
    }

    #[test]
    fn test_search_instance_status_list() {
        let Commands::SearchInstance(args) =
            parse(&["searchinstance", "web", "--status", "running,stopped"])
        else {
            panic!("expected searchinstance");
        };
        let request = args.request();
        assert_eq!(request.search_word, "web");
        assert_eq!(
            request.status,
            vec![InstanceStatus::Running, InstanceStatus::Stopped]
        );
        assert_eq!(request.verbose, 1);
    }

    #[test]
    fn test_stop_instances_splits_ids() {
        let Commands::StopInstances(args) = parse(&["stopinstances", "i-G74Q69NJ,i-OAEZPC6C"]) else {
            panic!("expected stopinstances");
        };
        let request = args.stop();
        assert_eq!(request.instance_ids, vec!["i-G74Q69NJ", "i-OAEZPC6C"]);
        assert_eq!(request.force, InstanceStopType::NON_FORCE);
    }
}
