//! anchnet API transport
//!
//! This module implements the request pipeline shared by every anchnet
//! operation: header injection, signing, the HTTP exchange and response
//! decoding. Document: http://cloud.51idc.com/help/api/overview.html
//!
//! # Module Structure
//!
//! - [`action`] - Catalog of recognized action names
//! - [`auth`] - Account credentials and config file loading
//! - [`client`] - Main client for sending requests
//! - [`common`] - Common request/response headers and the request traits
//! - [`error`] - Error type
//! - [`http`] - HTTP utilities
//! - [`job`] - Job polling
//! - [`signature`] - HMAC request signature
//!
//! # Example
//!
//! ```no_run
//! use anchnet::api::{Client, Credentials, DEFAULT_ENDPOINT};
//! use anchnet::types::instance::{StopInstancesRequest, StopInstancesResponse};
//!
//! async fn example() -> anchnet::api::Result<()> {
//!     let credentials = Credentials::load(anchnet::api::auth::default_config_path())?;
//!     let client = Client::new(DEFAULT_ENDPOINT, credentials)?;
//!
//!     let request = StopInstancesRequest {
//!         instance_ids: vec!["i-G74Q69NJ".to_string()],
//!         ..Default::default()
//!     };
//!     let mut response = StopInstancesResponse::default();
//!     client.send_request(&request, &mut response).await?;
//!     println!("job: {}", response.job_id);
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod auth;
pub mod client;
pub mod common;
pub mod error;
pub mod http;
pub mod job;
pub mod signature;

pub use action::Action;
pub use auth::Credentials;
pub use client::{Client, DEFAULT_ENDPOINT, DEFAULT_ZONE};
pub use common::{ApiRequest, ApiResponse, RequestCommon, ResponseCommon};
pub use error::{Error, Result};
pub use job::{wait_job, WaitOptions};
