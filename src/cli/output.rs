//! Command output

use anchnet::api::{ApiRequest, Client, Error};
use serde::Serialize;
use std::process::ExitCode;

/// Send `request` and print its response
pub async fn send<R: ApiRequest>(client: &Client, command: &str, request: R) -> ExitCode {
    let mut response = R::Response::default();
    let result = client.send_request(&request, &mut response).await;
    send_result(command, &response, result.err())
}

/// Print the response of `command` as compact JSON
///
/// A response is printed even when the server reports a nonzero code; the
/// exit code is then a failure. Any other error is printed to stderr in
/// place of the response.
pub fn send_result<T: Serialize>(command: &str, response: &T, error: Option<Error>) -> ExitCode {
    if let Some(e) = error.as_ref().filter(|e| e.code().is_none()) {
        eprintln!("Unexpected error running command {}: {}", command, e);
        return ExitCode::FAILURE;
    }

    match render(response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Unexpected error marshaling output for command {}: {}", command, e);
            return ExitCode::FAILURE;
        }
    }

    if error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn render<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchnet::types::instance::StopInstancesResponse;

    #[test]
    fn test_render_is_compact() {
        let mut response = StopInstancesResponse::default();
        response.common.action = "StopInstancesResponse".to_string();
        response.job_id = "job-ZUBILH5I".to_string();
        assert_eq!(
            render(&response).unwrap(),
            r#"{"action":"StopInstancesResponse","code":0,"job_id":"job-ZUBILH5I"}"#
        );
    }

    fn is_success(code: ExitCode) -> bool {
        format!("{:?}", code) == format!("{:?}", ExitCode::SUCCESS)
    }

    #[test]
    fn test_exit_codes() {
        let response = StopInstancesResponse::default();
        assert!(is_success(send_result("StopInstance", &response, None)));

        let api_error = Error::Api {
            code: 5,
            message: "bad".to_string(),
        };
        assert!(!is_success(send_result("StopInstance", &response, Some(api_error))));

        let other = Error::UnknownAction("Frobnicate".to_string());
        assert!(!is_success(send_result("StopInstance", &response, Some(other))));
    }
}
