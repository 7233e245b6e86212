use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ComputeProgressRequest {
    pub start_value: Option<Decimal>,
    pub current_value: Option<Decimal>,
    pub target_value: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComputeProgressResponse {
    pub progress: Decimal,
}
