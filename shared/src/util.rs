//! Small helpers shared by server and clients

use rand::RngCore;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 获取当前 UTC 时间戳（微秒）
pub fn now_micros() -> i64 {
    chrono::Utc::now().timestamp_micros()
}

/// Opaque public identifier for newly created records (uuid v4)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Random 32-byte secret encoded as 64 lowercase hex chars.
///
/// Used for order download tokens.
pub fn secret_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Constant-time byte comparison for secrets.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_token_shape() {
        let token = secret_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(token, secret_token());
    }

    #[test]
    fn test_new_id_is_uuid() {
        let id = new_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
