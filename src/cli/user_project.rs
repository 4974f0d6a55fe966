//! Sub-account and billing commands

use anchnet::types::user_project::{
    CreateUserProjectRequest, DescribeProjectsRequest, DescribeUsersRequest,
    GetChargeSummaryRequest, TransferRequest,
};
use clap::Args;

/// Sub-account login ids live under this domain
const LOGIN_DOMAIN: &str = "caicloud.io";

fn login_id(user: &str) -> String {
    format!("{}@{}", user, LOGIN_DOMAIN)
}

#[derive(Args, Debug)]
pub struct CreateUserProjectArgs {
    /// User name; the login id is `<name>@caicloud.io`
    pub user: String,

    /// Gender of the person
    #[arg(short, long, default_value = "M")]
    pub sex: String,

    /// Cell phone number
    #[arg(short, long, default_value = "13888888888")]
    pub mobile: String,

    /// Password of the sub-account
    #[arg(short, long, default_value = "caicloud2015ABC")]
    pub passwd: String,
}

impl CreateUserProjectArgs {
    pub fn request(&self) -> CreateUserProjectRequest {
        let login = login_id(&self.user);
        CreateUserProjectRequest {
            login_id: login.clone(),
            sex: self.sex.clone(),
            project_name: self.user.clone(),
            email: login,
            contact_name: self.user.clone(),
            mobile: self.mobile.clone(),
            login_passwd: self.passwd.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct DescribeProjectsArgs {
    /// Project id, e.g. pro-xxxxx
    pub project_id: String,
}

impl DescribeProjectsArgs {
    pub fn request(&self) -> DescribeProjectsRequest {
        DescribeProjectsRequest {
            projects: self.project_id.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Numeric user id of the sub-account
    pub user_id: i64,

    pub value: String,

    /// Reason for the transfer
    #[arg(short = 'y', long, default_value = "Transfer")]
    pub why: String,
}

impl TransferArgs {
    pub fn request(&self) -> TransferRequest {
        TransferRequest {
            user_id: self.user_id,
            value: self.value.clone(),
            why: self.why.clone(),
            ..Default::default()
        }
    }
}

/// Search by user name
#[derive(Args, Debug)]
pub struct SearchUserArgs {
    pub user: String,
}

impl SearchUserArgs {
    pub fn projects(&self) -> DescribeProjectsRequest {
        DescribeProjectsRequest {
            search_word: login_id(&self.user),
            ..Default::default()
        }
    }

    pub fn users(&self) -> DescribeUsersRequest {
        DescribeUsersRequest {
            search_word: login_id(&self.user),
            user_type: "sub".to_string(),
            ..Default::default()
        }
    }
}

pub fn charge_summary() -> GetChargeSummaryRequest {
    GetChargeSummaryRequest::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::parse;
    use crate::cli::Commands;

    #[test]
    fn test_create_user_project_login_id() {
        let Commands::CreateUserProject(args) = parse(&["createuserproject", "dev"]) else {
            panic!("expected createuserproject");
        };
        let request = args.request();
        assert_eq!(request.login_id, "dev@caicloud.io");
        assert_eq!(request.email, "dev@caicloud.io");
        assert_eq!(request.project_name, "dev");
        assert_eq!(request.contact_name, "dev");
        assert_eq!(request.sex, "M");
        assert_eq!(request.mobile, "13888888888");
    }

    #[test]
    fn test_search_user_is_sub_account() {
        let Commands::SearchUser(args) = parse(&["searchuser", "dev"]) else {
            panic!("expected searchuser");
        };
        let request = args.users();
        assert_eq!(request.search_word, "dev@caicloud.io");
        assert_eq!(request.user_type, "sub");
    }

    #[test]
    fn test_transfer_requires_numeric_user_id() {
        assert!(crate::cli::tests::try_parse(&["transfer", "usr-1", "100"]).is_err());

        let Commands::Transfer(args) = parse(&["transfer", "1024", "100"]) else {
            panic!("expected transfer");
        };
        let request = args.request();
        assert_eq!(request.user_id, 1024);
        assert_eq!(request.why, "Transfer");
    }
}
