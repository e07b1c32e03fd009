pub mod coach;
pub mod config;
pub mod error;
pub mod form;
pub mod llm;
pub mod server;

pub use error::{Error, Result};
