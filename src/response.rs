//! The response envelope every Bot API call returns.
//!
//! Every endpoint wraps its payload in the same outer shape: `ok` plus
//! either `result` or an `error_code`/`description` pair. Checking the
//! envelope is the single place a platform-reported failure becomes a typed
//! error; no interpretation of specific codes happens here.

use crate::error::{BotError, Result};
use anyhow::anyhow;
use serde::Deserialize;

/// The outer wrapper of every API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

/// Extra failure context some errors carry.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before the request can be repeated.
    pub retry_after: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Validates the envelope, converting a platform-reported failure into
    /// an [`BotError::Api`] carrying the code and description verbatim.
    pub fn check(&self) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(BotError::Api {
                code: self.error_code.unwrap_or_default(),
                description: self.description.clone().unwrap_or_default(),
            })
        }
    }

    /// Checks the envelope and unwraps the typed payload.
    pub fn into_result(self) -> Result<T> {
        self.check()?;
        self.result
            .ok_or_else(|| BotError::Internal(anyhow!("ok response without result payload")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ok() {
        let response: ApiResponse<bool> = serde_json::from_str(r#"{"ok":true,"result":true}"#)
            .unwrap();
        assert!(response.check().is_ok());
        assert!(response.into_result().unwrap());
    }

    #[test]
    fn test_check_failure_carries_code_and_description() {
        let response: ApiResponse<bool> =
            serde_json::from_str(r#"{"ok":false,"error_code":403,"description":"Forbidden"}"#)
                .unwrap();

        let err = response.check().unwrap_err();
        match err {
            BotError::Api { code, description } => {
                assert_eq!(code, 403);
                assert_eq!(description, "Forbidden");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_into_result_on_failure() {
        let response: ApiResponse<i64> = serde_json::from_str(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}"#,
        )
        .unwrap();

        assert_eq!(response.parameters.unwrap().retry_after, Some(5));
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_ok_without_result_is_internal_error() {
        let response: ApiResponse<i64> = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, BotError::Internal(_)));
    }
}
