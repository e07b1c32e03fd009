mod client;

pub use client::{GenerateClient, GenerateOptions, OpenAiClient};
