use super::{FinishReason, ObjectType, Usage};
use serde::{self, Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Choice {
    pub text: String,
    pub index: i32,
    // Always null; kept so the envelope matches the completions schema.
    pub logprobs: Option<Value>,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Metadata {
    pub inference_time_seconds: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Completion {
    pub id: String,
    pub object: ObjectType,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
    pub metadata: Metadata,
}
