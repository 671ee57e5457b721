use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ManualScanRequest {
    #[validate(length(max = 255, message = "product_name must be at most 255 characters"))]
    #[schema(example = "Granola bar")]
    pub product_name: String,
    #[validate(length(max = 10000, message = "ingredients must be at most 10000 characters"))]
    #[schema(example = "oats, honey, almonds; sea salt")]
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetHistoryParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 100)]
    pub limit: Option<u32>,
}
