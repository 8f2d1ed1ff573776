mod client;

pub use client::{CompletionClient, OpenAiClient};
