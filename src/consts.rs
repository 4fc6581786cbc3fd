pub const AUTH_HEADER: &str = "custom_authentication_token";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant";
pub const DEFAULT_MAX_TOKENS: i32 = 512;

pub const DEFAULT_MODEL_NAME: &str = "tinyllama:1.1b";
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_TOP_P: f64 = 0.3;

pub const COMPLETION_ID_PREFIX: &str = "cmpl-";
pub(crate) const COMPLETION_ID_BYTES: usize = 4;

pub const MISSING_PROMPT_MESSAGE: &str = "Missing 'prompt' field in request";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid authentication token";

pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
// Generation on a CPU-only host can take minutes for long outputs.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 300;

pub(crate) const SERVER_HOST: &str = "0.0.0.0";
pub(crate) const SERVER_PORT: u16 = 8080;
pub(crate) const SERVER_WORKERS: usize = 8;
pub(crate) const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
