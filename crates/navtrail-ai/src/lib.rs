//! navtrail-ai
//!
//! Language-model invocation, travel prompt construction and structured
//! output parsing. Every operation degrades to a canned answer when no
//! model is configured or a call fails.

pub mod bedrock;
pub mod context;
pub mod error;
pub mod extract;
pub mod mock;
pub mod model;
pub mod openai;
pub mod prompts;
pub mod service;
