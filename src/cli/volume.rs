//! Volume commands

use anchnet::types::volume::{DeleteVolumesRequest, DescribeVolumesRequest, DetachVolumesRequest};
use clap::Args;

/// Comma separated list of volume ids
#[derive(Args, Debug)]
pub struct VolumeIdsArgs {
    #[arg(value_delimiter = ',', required = true)]
    pub ids: Vec<String>,
}

impl VolumeIdsArgs {
    pub fn describe(&self) -> DescribeVolumesRequest {
        DescribeVolumesRequest {
            volume_ids: self.ids.clone(),
            ..Default::default()
        }
    }

    pub fn detach(&self) -> DetachVolumesRequest {
        DetachVolumesRequest {
            volume_ids: self.ids.clone(),
            ..Default::default()
        }
    }

    pub fn delete(&self) -> DeleteVolumesRequest {
        DeleteVolumesRequest {
            volume_ids: self.ids.clone(),
            ..Default::default()
        }
    }
}
