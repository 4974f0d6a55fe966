//! Request signing
//!
//! anchnet authenticates a request by an HMAC-SHA256 of the exact request
//! body, keyed by the account's private key, sent hex encoded in the
//! `signature` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the signature
pub const SIGNATURE_HEADER: &str = "signature";

/// Generate the lowercase hex signature of `body` using `key`
pub fn sign(body: &[u8], key: &[u8]) -> String {
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        unreachable!("HMAC accepts keys of any length");
    };
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        let body = r#"{"product":{"cloud":{"amount":1,"vm":{"cpu":1,"mem":1024,"image_id":"centos65x64d","name":"test","mode":"system","login_mode":"pwd","password":"anchnet20150401"},"net0":true,"net1":[],"hd":[{"type":0,"unit":"100","name":"anchnet应用"},{"type":0,"unit":"100","name":"anchnet数据库"}],"ip":{"bw":"5","ip_group":"eipg-00000000"}}},"zone":"ac1","token":"1HC4XSHVTSRVU5C89NP4","action":"RunInstances"}"#;
        let secret = "r3ak4XcBlM3zclK5turz1I3DjclK3Lk098Y4HDHo";

        assert_eq!(
            sign(body.as_bytes(), secret.as_bytes()),
            "f45022c0f5b1da37dd53d2983b5cf2d487603ad48b88adae942297aa570ffd18"
        );
    }

    #[test]
    fn test_sign_is_lowercase_hex() {
        let signature = sign(b"{}", b"secret");
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_sign_empty_key() {
        // Empty keys are valid HMAC keys
        assert_eq!(sign(b"body", b"").len(), 64);
    }
}
