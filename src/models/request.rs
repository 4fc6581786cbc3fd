use serde::{self, Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top_p: Option<f64>,
}

/// Body accepted on `/v2/completions`.
///
/// `prompt` is optional at the type level so that a missing prompt surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct CompletionCreate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub generation_config: Option<GenerationConfig>,
}
