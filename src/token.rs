/// Opaque access credential attached to every outbound call.
///
/// Immutable after construction. One token binds to one `Instagram`
/// instance for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    access_token: String,
    secret: Option<String>,
}

impl Token {
    pub fn new(access_token: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            secret,
        }
    }

    /// The access token sent with every request.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The client secret, if one was supplied. Not sent on API calls.
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}
