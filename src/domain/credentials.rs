use secrecy::{ExposeSecret, Secret};

/// Email/password pair sent to both `/register` and `/login`.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a Secret<String>,
}

#[derive(serde::Serialize)]
pub(crate) struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> Credentials<'a> {
    pub(crate) fn body(&self) -> CredentialsBody<'a> {
        CredentialsBody {
            email: self.email,
            password: self.password.expose_secret(),
        }
    }
}
