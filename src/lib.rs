//! # Telegram Bot API Client
//!
//! A lightweight, typed client for the Telegram Bot HTTP API.
//!
//! ## Features
//!
//! - **Typed calls**: every endpoint is one async function returning a typed result
//! - **Minimal requests**: unset option fields never reach the wire
//! - **File uploads**: multipart bodies with thumbnails and mixed
//!   local/remote media groups handled transparently
//! - **Robust**: typed errors, bounded retries with backoff for transient failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use telegram_bot_rs::{Api, FileRef, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = Api::new("your_bot_token")?;
//!     api.send_message("hello!", 123456789, None).await?;
//!
//!     let photo = FileRef::from_path("./photo.jpg").await?;
//!     api.send_photo(&photo, 123456789, None).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod media;
pub mod multipart;
pub mod options;
pub mod query;
pub mod response;
pub mod types;

// Re-export main types for convenience
pub use api::Api;
pub use config::Config;
pub use error::{BotError, Result};
pub use file::{requires_multipart, FileRef};
pub use media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo,
};
pub use response::ApiResponse;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Basic smoke test to ensure modules compile
        assert_eq!(1, 1);
    }
}
