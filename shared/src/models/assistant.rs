//! Booking assistant contract

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Free-text question about availability, locations or rules
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AskAssistantInput {
    #[validate(length(min = 1, max = 2000, message = "Query must be 1-2000 characters."))]
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AskAssistantOutput {
    #[validate(length(min = 1))]
    pub answer: String,
}
