//! Transport error types.
//!
//! - [`TransportError::ConnectionRefused`]: the host refused the connection at
//!   the socket level; lifecycle operations translate it into
//!   [`ResourceError::HostUnavailable`](crate::rest::ResourceError::HostUnavailable)
//! - [`TransportError::Network`]: any other transport failure, propagated as is

use thiserror::Error;

/// Errors raised by a [`Transport`](crate::clients::Transport) before a
/// response is received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The host refused the connection.
    #[error("host at {host} refused connection -- verify it is running")]
    ConnectionRefused {
        /// The host that refused the connection.
        host: String,
    },

    /// Network or protocol error other than a refused connection.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_refused_message_names_host() {
        let error = TransportError::ConnectionRefused {
            host: "http://localhost:3000".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "host at http://localhost:3000 refused connection -- verify it is running"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &TransportError::ConnectionRefused {
            host: "h".to_string(),
        };
        let _ = error;
    }
}
