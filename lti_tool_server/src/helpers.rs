use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(secret: &str, data: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take a key of any size");
    mac.update(data);
    mac
}

/// Base64-encoded HMAC-SHA256 of `data` under `secret`, as sent by the gateway.
pub fn calculate_hmac(secret: &str, data: &[u8]) -> String {
    base64::encode(keyed_mac(secret, data).finalize().into_bytes())
}

/// Checks a base64-encoded signature against `data` in constant time. Undecodable signatures fail.
pub fn verify_hmac(secret: &str, data: &[u8], signature: &str) -> bool {
    match base64::decode(signature.trim()) {
        Ok(tag) => keyed_mac(secret, data).verify_slice(&tag).is_ok(),
        Err(_) => false,
    }
}

/// Escapes text for interpolation into HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
