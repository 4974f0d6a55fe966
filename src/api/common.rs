//! Common request and response headers
//!
//! Every anchnet request embeds a [`RequestCommon`] header and every
//! response embeds a [`ResponseCommon`] header. The client fills in the
//! request header; callers never need to set it themselves.
//! http://cloud.51idc.com/help/api/public_params.html

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Returns true when `value` equals its type's default
///
/// Used with `skip_serializing_if` to omit empty optional fields.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Common request parameters used in all requests
///
/// Action is set per API, Token from the account public key, Project from
/// the account project id and Zone from the client zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCommon {
    #[serde(default, skip_serializing_if = "is_default")]
    pub action: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub token: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub zone: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub project: String,
}

/// Common response fields returned by every server response
///
/// RetCode is returned for every request but not documented; it mirrors Code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCommon {
    #[serde(default, skip_serializing_if = "is_default")]
    pub action: String,
    // code=0 means no error, so it is always emitted
    #[serde(default)]
    pub code: i64,
    #[serde(default, skip_serializing_if = "is_default")]
    pub ret_code: i64,
    #[serde(default, skip_serializing_if = "is_default")]
    pub message: String,
}

impl ResponseCommon {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// A typed anchnet request
///
/// Implemented once per request shape with [`api_request!`](crate::api_request).
/// `Clone` lets the client stamp the header onto a private copy so the
/// caller's value is never modified.
pub trait ApiRequest: Serialize + Clone + Send + Sync {
    /// Response shape for this request
    type Response: ApiResponse;

    /// Action name sent in the request header
    fn action_name(&self) -> &str;

    fn common(&self) -> &RequestCommon;

    fn common_mut(&mut self) -> &mut RequestCommon;

    /// Replace the request header
    fn with_common(mut self, common: RequestCommon) -> Self {
        *self.common_mut() = common;
        self
    }
}

/// A typed anchnet response
pub trait ApiResponse: Serialize + DeserializeOwned + Default + Send {
    fn common(&self) -> &ResponseCommon;
}

/// Implement [`ApiRequest`] and [`ApiResponse`] for a request/response pair.
///
/// Both structs must have a `common` field holding the header.
#[macro_export]
macro_rules! api_request {
    ($($action:ident => $request:ty, $response:ty;)+) => {
        $(
            impl $crate::api::common::ApiRequest for $request {
                type Response = $response;

                fn action_name(&self) -> &str {
                    $crate::api::action::Action::$action.as_str()
                }

                fn common(&self) -> &$crate::api::common::RequestCommon {
                    &self.common
                }

                fn common_mut(&mut self) -> &mut $crate::api::common::RequestCommon {
                    &mut self.common
                }
            }

            impl $crate::api::common::ApiResponse for $response {
                fn common(&self) -> &$crate::api::common::ResponseCommon {
                    &self.common
                }
            }
        )+
    };
}
