//! Callback-style adapter over the async operations.
//!
//! The operations themselves only return futures. Callers that want an
//! `(error, result)` callback wrap the future here; the callback fires and
//! the result is still returned, so both paths see the outcome.

use std::future::Future;

pub async fn with_callback<T, E, Fut, F>(operation: Fut, callback: F) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(Option<&E>, Option<&T>),
{
    let result = operation.await;
    match &result {
        Ok(value) => callback(None, Some(value)),
        Err(err) => callback(Some(err), None),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_callback_sees_success() {
        let mut seen = None;
        let result = with_callback(async { Ok::<_, String>(42) }, |err, value| {
            assert!(err.is_none());
            seen = value.copied();
        })
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(seen, Some(42));
    }

    #[tokio::test]
    async fn test_error_reaches_callback_and_caller() {
        let mut seen = None;
        let result = with_callback(async { Err::<i32, _>("Network error".to_string()) }, |err, value| {
            assert!(value.is_none());
            seen = err.cloned();
        })
        .await;

        assert_eq!(result, Err("Network error".to_string()));
        assert_eq!(seen.as_deref(), Some("Network error"));
    }
}
