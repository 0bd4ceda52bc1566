use thiserror::Error;

/// Transport-level failures of a backend exchange.
///
/// Application errors (a well-formed body carrying an `error` field) are not
/// represented here; they arrive as [`super::ReplyOutcome::ApplicationError`].
/// `Display` yields only the underlying message so callers can render it
/// verbatim behind an `"Error: "` prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("{message}")]
    Network { message: String },

    /// A response arrived but its body was not the expected JSON
    #[error("{message}")]
    Decode { message: String },
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::Network {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ClientError::Decode {
            message: message.into(),
        }
    }

    /// Text shown to the user for a failed exchange
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::decode(error.to_string())
        } else {
            ClientError::network(error.to_string())
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefixes_transport_failures() {
        let error = ClientError::network("Failed to fetch");
        assert_eq!(error.user_message(), "Error: Failed to fetch");

        let error = ClientError::decode("expected value at line 1 column 1");
        assert_eq!(
            error.user_message(),
            "Error: expected value at line 1 column 1"
        );
    }
}
