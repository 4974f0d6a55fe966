//! SDN network commands

use anchnet::types::vxnet::{
    CreateVxnetsRequest, DeleteVxnetsRequest, DescribeVxnetsRequest, JoinVxnetRequest, VxnetType,
};
use clap::Args;

#[derive(Args, Debug)]
pub struct CreateVxnetArgs {
    /// Network name
    pub name: String,
}

impl CreateVxnetArgs {
    pub fn request(&self) -> CreateVxnetsRequest {
        CreateVxnetsRequest {
            vxnet_name: self.name.clone(),
            vxnet_type: VxnetType::PRIVATE,
            count: 1,
            ..Default::default()
        }
    }
}

/// Comma separated list of vxnet ids
#[derive(Args, Debug)]
pub struct VxnetIdsArgs {
    #[arg(value_delimiter = ',', required = true)]
    pub ids: Vec<String>,
}

impl VxnetIdsArgs {
    pub fn describe(&self) -> DescribeVxnetsRequest {
        DescribeVxnetsRequest {
            vxnet_ids: self.ids.clone(),
            ..Default::default()
        }
    }

    pub fn delete(&self) -> DeleteVxnetsRequest {
        DeleteVxnetsRequest {
            vxnet_ids: self.ids.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct SearchVxnetArgs {
    /// Network name
    pub name: String,
}

impl SearchVxnetArgs {
    pub fn request(&self) -> DescribeVxnetsRequest {
        DescribeVxnetsRequest {
            search_word: self.name.clone(),
            verbose: 1,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct JoinVxnetArgs {
    pub vxnet_id: String,

    /// Comma separated list of instance ids
    #[arg(value_delimiter = ',', required = true)]
    pub instance_ids: Vec<String>,
}

impl JoinVxnetArgs {
    pub fn request(&self) -> JoinVxnetRequest {
        JoinVxnetRequest {
            vxnet_id: self.vxnet_id.clone(),
            instance_ids: self.instance_ids.clone(),
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
    fn test_create_vxnet_is_private() {
        let Commands::CreateVxnets(args) = parse(&["createvxnets", "net"]) else {
            panic!("expected createvxnets");
        };
        let request = args.request();
        assert_eq!(request.vxnet_type, VxnetType::PRIVATE);
        assert_eq!(request.count, 1);
    }

    #[test]
    fn test_join_vxnet() {
        let Commands::JoinVxnet(args) = parse(&["joinvxnet", "vxnet-1", "i-1,i-2"]) else {
            panic!("expected joinvxnet");
        };
        let request = args.request();
        assert_eq!(request.vxnet_id, "vxnet-1");
        assert_eq!(request.instance_ids, vec!["i-1", "i-2"]);
    }
}
