//! External IP commands

use anchnet::types::eip::{DescribeEipsRequest, ReleaseEipsRequest};
use clap::Args;

/// Comma separated list of eip ids
#[derive(Args, Debug)]
pub struct EipIdsArgs {
    #[arg(value_delimiter = ',', required = true)]
    pub ids: Vec<String>,
}

impl EipIdsArgs {
    pub fn describe(&self) -> DescribeEipsRequest {
        DescribeEipsRequest {
            eip_ids: self.ids.clone(),
            ..Default::default()
        }
    }

    pub fn release(&self) -> ReleaseEipsRequest {
        ReleaseEipsRequest {
            eip_ids: self.ids.clone(),
            ..Default::default()
        }
    }
}
