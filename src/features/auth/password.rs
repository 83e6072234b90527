//! Salted password hashing.
//!
//! Passwords are stored as `salt$hex(HMAC-SHA256(salt, password))`.
//! Verification runs through `Mac::verify_slice`, which compares in constant
//! time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR: char = '$';

fn digest(salt: &str, password: &str) -> HmacSha256 {
    // HMAC accepts keys of any length, so new_from_slice cannot fail here.
    let mut mac = HmacSha256::new_from_slice(salt.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
    mac.update(password.as_bytes());
    mac
}

/// Hash a password under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let tag = digest(&salt, password).finalize().into_bytes();
    format!("{}{}{}", salt, SEPARATOR, hex::encode(tag))
}

/// Constant-time check of a candidate password against a stored hash.
/// Malformed stored values simply fail verification.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, tag_hex)) = stored.split_once(SEPARATOR) else {
        return false;
    };
    let Ok(expected) = hex::decode(tag_hex) else {
        return false;
    };
    digest(salt, password).verify_slice(&expected).is_ok()
}
