//! Image commands

use anchnet::types::image::{
    CaptureInstanceRequest, DescribeImageUsersRequest, GrantImageToUsersRequest,
    RevokeImageFromUsersRequest,
};
use clap::Args;

#[derive(Args, Debug)]
pub struct CaptureInstanceArgs {
    pub image_name: String,

    /// A stopped instance
    pub instance_id: String,
}

impl CaptureInstanceArgs {
    pub fn request(&self) -> CaptureInstanceRequest {
        CaptureInstanceRequest {
            image_name: self.image_name.clone(),
            instance_id: self.instance_id.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct ImageUsersArgs {
    pub image_id: String,

    /// Comma separated list of user ids
    #[arg(value_delimiter = ',', required = true)]
    pub user_ids: Vec<String>,
}

impl ImageUsersArgs {
    pub fn grant(&self) -> GrantImageToUsersRequest {
        GrantImageToUsersRequest {
            image_id: self.image_id.clone(),
            user_ids: self.user_ids.clone(),
            ..Default::default()
        }
    }

    pub fn revoke(&self) -> RevokeImageFromUsersRequest {
        RevokeImageFromUsersRequest {
            image_ids: vec![self.image_id.clone()],
            user_ids: self.user_ids.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct DescribeImageUsersArgs {
    pub image_id: String,
}

impl DescribeImageUsersArgs {
    pub fn request(&self) -> DescribeImageUsersRequest {
        DescribeImageUsersRequest {
            image_ids: vec![self.image_id.clone()],
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
    fn test_revoke_image_wraps_image_id() {
        let Commands::RevokeImage(args) = parse(&["revokeimage", "img-1", "usr-1,usr-2"]) else {
            panic!("expected revokeimage");
        };
        let request = args.revoke();
        assert_eq!(request.image_ids, vec!["img-1"]);
        assert_eq!(request.user_ids, vec!["usr-1", "usr-2"]);
    }
}
