pub mod app;
pub mod auth;
pub mod completion_request;
pub mod config;
pub mod consts;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ollama_client;
pub mod service;

#[cfg(test)]
mod test_utils;
