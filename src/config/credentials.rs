use std::fmt;

/// Which backend service implementation a resolved configuration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorType {
    /// The hosted cloud service.
    Cloud,
    /// An on-premises TPP appliance.
    Tpp,
    /// The in-process fake endpoint used by test harnesses.
    Fake,
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorType::Cloud => write!(f, "Cloud"),
            ConnectorType::Tpp => write!(f, "TPP"),
            ConnectorType::Fake => write!(f, "Fake"),
        }
    }
}

/// Authentication material for a connector, exactly one kind at a time.
///
/// Which variant applies is decided by the connector derivation: tokens and
/// username/password belong to TPP, API keys to Cloud. The `ApiKey` payload
/// may be empty; validating it is the connector's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    #[default]
    None,
    AccessToken(String),
    RefreshToken(String),
    UsernamePassword { user: String, password: String },
    ApiKey(String),
}

impl Credentials {
    /// Human-readable credential kind, safe to print (no secret material).
    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::None => "none",
            Credentials::AccessToken(_) => "access token",
            Credentials::RefreshToken(_) => "refresh token",
            Credentials::UsernamePassword { .. } => "username and password",
            Credentials::ApiKey(_) => "API key",
        }
    }
}
