use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_serializes_status_only() {
        let json = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "healthy"}));
    }
}
