//! Shared helpers for the fleet rental workspace: logging setup, runtime
//! environment checks and small response types used across crates.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_serializes_with_response_key() {
        let m = types::MessageResponse::new("vehicle deleted");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["response"], "vehicle deleted");
    }
}
