use secrecy::{ExposeSecret, Secret};

/// Bearer credential issued by `/login`. Only lives as long as the scenario that obtained it.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: Option<Secret<String>>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<AccessToken> {
        self.access_token
            .filter(|token| !token.expose_secret().is_empty())
            .map(AccessToken::new)
    }
}
