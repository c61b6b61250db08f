//! # postcraft
//!
//! LinkedIn post generation built on a curated template catalog.
//!
//! Posts are composed locally from expert profiles, insight phrases and
//! structure pools. When a text-completion provider is configured it is tried
//! first, and any failure falls back to the template path.

pub mod ai;
pub mod config;
pub mod error;
pub mod logging;
pub mod random;

pub use ai::content::{
    ContentGenerator, ContentStrategy, GeneratedPost, GenerationRequest, TemplateStore, Tone,
};
pub use config::PostcraftConfig;
pub use error::{Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::InvalidInput("test".to_string());
        assert!(err.to_string().contains("test"));
    }
}
