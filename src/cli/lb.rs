//! Load balancer commands

use anchnet::types::lb::{
    CreateLoadBalancerIp, CreateLoadBalancerLb, CreateLoadBalancerProduct,
    CreateLoadBalancerRequest, DeleteLoadBalancersRequest, DescribeLoadBalancersRequest,
    LoadBalancerStatus, LoadBalancerType,
};
use clap::Args;

#[derive(Args, Debug)]
pub struct CreateLoadBalancerArgs {
    pub name: String,

    /// Comma separated list of eip ids to bind
    #[arg(value_delimiter = ',', required = true)]
    pub ips: Vec<String>,

    /// Max connections. 1: 20k, 2: 40k, 3: 100k
    #[arg(short = 't', long = "type", default_value_t = 1)]
    pub lb_type: i32,
}

impl CreateLoadBalancerArgs {
    pub fn request(&self) -> CreateLoadBalancerRequest {
        CreateLoadBalancerRequest {
            product: CreateLoadBalancerProduct {
                loadbalancer: CreateLoadBalancerLb {
                    name: self.name.clone(),
                    lb_type: LoadBalancerType(self.lb_type),
                },
                eips: self
                    .ips
                    .iter()
                    .map(|ip| CreateLoadBalancerIp { ref_id: ip.clone() })
                    .collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct DeleteLoadBalancerArgs {
    /// Comma separated list of load balancer ids
    pub ids: String,

    /// Comma separated list of eip ids to release with them
    pub ips: String,
}

impl DeleteLoadBalancerArgs {
    pub fn request(&self) -> DeleteLoadBalancersRequest {
        DeleteLoadBalancersRequest {
            loadbalancer_ids: split(&self.ids),
            eip_ids: split(&self.ips),
            ..Default::default()
        }
    }
}

fn split(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

#[derive(Args, Debug)]
pub struct SearchLoadBalancerArgs {
    pub name: String,

    /// Comma separated statuses: active, pending, stopped, suspended, deleted
    #[arg(short, long, value_delimiter = ',', default_value = "active")]
    pub status: Vec<LoadBalancerStatus>,
}

impl SearchLoadBalancerArgs {
    pub fn request(&self) -> DescribeLoadBalancersRequest {
        DescribeLoadBalancersRequest {
            search_word: self.name.clone(),
            status: self.status.clone(),
            verbose: 1,
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
    fn test_create_load_balancer_refs() {
        let Commands::CreateLoadBalancer(args) =
            parse(&["createloadbalancer", "lb", "eip-1,eip-2", "--type", "2"])
        else {
            panic!("expected createloadbalancer");
        };
        let request = args.request();
        assert_eq!(request.product.loadbalancer.lb_type, LoadBalancerType::MAX_40K);
        assert_eq!(request.product.eips.len(), 2);
        assert_eq!(request.product.eips[1].ref_id, "eip-2");
    }

    #[test]
    fn test_delete_load_balancer() {
        let Commands::DeleteLoadBalancer(args) = parse(&["deleteloadbalancer", "lb-1,lb-2", "eip-1"])
        else {
            panic!("expected deleteloadbalancer");
        };
        let request = args.request();
        assert_eq!(request.loadbalancer_ids, vec!["lb-1", "lb-2"]);
        assert_eq!(request.eip_ids, vec!["eip-1"]);
    }

    #[test]
    fn test_search_load_balancer_default_status() {
        let Commands::SearchLoadBalancer(args) = parse(&["searchloadbalancer", "web"]) else {
            panic!("expected searchloadbalancer");
        };
        assert_eq!(args.request().status, vec![LoadBalancerStatus::Active]);
    }
}
