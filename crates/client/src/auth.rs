//! Authentication strategies and request credential handling.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone, Default)]
pub enum AuthStrategy {
    /// No credentials; every request is sent unauthenticated.
    #[default]
    Anonymous,
    /// Service account token or API key, sent as a bearer token.
    ApiToken { token: SecretString },
    /// Username and password sent as HTTP basic auth.
    BasicAuth {
        username: String,
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Build a strategy from a raw token. An empty token means anonymous access.
    pub fn from_token(token: &str) -> Self {
        if token.is_empty() {
            Self::Anonymous
        } else {
            Self::ApiToken {
                token: SecretString::new(token.to_string().into()),
            }
        }
    }

    /// Check if requests carry credentials.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Attach credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Anonymous => builder,
            Self::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
            Self::BasicAuth { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
        }
    }
}

impl From<&grafana_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &grafana_config::AuthStrategy) -> Self {
        match strategy {
            grafana_config::AuthStrategy::Anonymous => Self::Anonymous,
            grafana_config::AuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
            grafana_config::AuthStrategy::BasicAuth { username, password } => Self::BasicAuth {
                username: username.clone(),
                password: password.clone(),
            },
        }
    }
}
