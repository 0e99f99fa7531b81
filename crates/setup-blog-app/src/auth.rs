//! Authentication collaborator boundary
//!
//! The site only exposes login/register/logout affordances. The work is done
//! by an external collaborator behind [`AuthService`]; its result is shown to
//! the user unmodified.

use setup_blog_core::prelude::*;

/// Message reported by [`UnconfiguredAuth`] for every call.
pub const NOT_CONFIGURED: &str = "authentication service is not configured";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Work handed to the collaborator by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(Credentials),
    Register(Registration),
    Logout,
}

impl AuthRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthRequest::Login(_) => "login",
            AuthRequest::Register(_) => "register",
            AuthRequest::Logout => "logout",
        }
    }
}

/// What the collaborator said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<Result<String>> for AuthOutcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(message) => AuthOutcome::success(message),
            Err(e) => AuthOutcome::failure(e.to_string()),
        }
    }
}

/// Login / register / logout operations
///
/// Request and response shapes beyond these are owned by the collaborator.
#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    async fn login(&self, credentials: Credentials) -> Result<String>;

    async fn register(&self, registration: Registration) -> Result<String>;

    async fn logout(&self) -> Result<String>;
}

/// Run one request against `service`.
pub async fn perform<S: AuthService + Sync>(service: &S, request: AuthRequest) -> AuthOutcome {
    let kind = request.kind();
    let result = match request {
        AuthRequest::Login(credentials) => AuthService::login(service, credentials).await,
        AuthRequest::Register(registration) => {
            AuthService::register(service, registration).await
        }
        AuthRequest::Logout => AuthService::logout(service).await,
    };
    match &result {
        Ok(_) => info!("Auth {} succeeded", kind),
        Err(e) => warn!("Auth {} failed: {}", kind, e),
    }
    result.into()
}

/// Default collaborator: every call fails with [`NOT_CONFIGURED`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredAuth;

impl AuthService for UnconfiguredAuth {
    async fn login(&self, _credentials: Credentials) -> Result<String> {
        Err(Error::auth(NOT_CONFIGURED))
    }

    async fn register(&self, _registration: Registration) -> Result<String> {
        Err(Error::auth(NOT_CONFIGURED))
    }

    async fn logout(&self) -> Result<String> {
        Err(Error::auth(NOT_CONFIGURED))
    }
}
