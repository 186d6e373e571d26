use thiserror::Error;

/// Errori del client HTTP
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Risposta non 2xx: `message` è il campo `error` restituito dal server
    #[error("server responded {status}: {message}")]
    Api { status: u16, message: String },

    #[error("not logged in")]
    NotAuthenticated,
}

impl ClientError {
    /// true per 401/403: il token è scaduto o non valido, serve un nuovo login
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
            || matches!(self, Self::Api { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_classification() {
        assert!(ClientError::NotAuthenticated.is_auth_failure());
        let expired = ClientError::Api {
            status: 401,
            message: "Unable to decode token".into(),
        };
        assert!(expired.is_auth_failure());
        let bad = ClientError::Api {
            status: 400,
            message: "Message content is required".into(),
        };
        assert!(!bad.is_auth_failure());
        assert_eq!(bad.to_string(), "server responded 400: Message content is required");
    }
}
