//! Merge failure classification
//!
//! Turns the anyhow error chain of a failed merge request into something
//! the toast can show: a coarse classification for picking the wording,
//! and the most informative message in the chain.

use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    ServerError, // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify an error based on its message and error chain.
pub fn classify_error(error: &Error) -> ErrorType {
    let error_msg = error.to_string().to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            if status.is_server_error() {
                return ErrorType::ServerError;
            }
            return ErrorType::Other;
        }
    }

    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Extract the most informative message from the error chain: the
/// reqwest error if one is present, otherwise the deepest root cause.
pub fn format_error_message(error: &Error) -> String {
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Compose the message shown when a merge request fails in transit,
/// naming the server for the failure classes where that helps.
pub fn merge_failure_message(error: &Error, server_url: &str) -> String {
    match classify_error(error) {
        ErrorType::ConnectionRefused => {
            format!("Cannot connect to merge service at {server_url}")
        }
        ErrorType::Timeout => format!("Merge request to {server_url} timed out"),
        ErrorType::NetworkError => {
            format!("Network error reaching {server_url}: {}", format_error_message(error))
        }
        ErrorType::ServerError | ErrorType::Other => format_error_message(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_connection_refused() {
        let err = anyhow::anyhow!("connection refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn classify_dns_failure_as_network() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn classify_anything_else_as_other() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn format_unwraps_context_to_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to reach merge endpoint");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn refused_connection_names_the_server() {
        let err = anyhow::anyhow!("connection refused (os error 111)");
        let msg = merge_failure_message(&err, "http://pdf.local:8080");
        assert!(msg.contains("http://pdf.local:8080"));
    }
}
