pub mod names;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use names::{AddNameRequest, NameResponse, UpdateNameRequest};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Name not found")]
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Allah's Ar-Rahman name added")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
