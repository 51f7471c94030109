use crate::domain::{
    authentication::{
        entities::{AuthTokens, Session, SignUpOutcome},
        value_objects::{SignInInput, SignUpInput, SignUpRequest},
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn sign_up(
        &self,
        input: SignUpInput,
    ) -> impl Future<Output = Result<SignUpOutcome, CoreError>> + Send;

    fn sign_in(
        &self,
        input: SignInInput,
    ) -> impl Future<Output = Result<AuthTokens, CoreError>> + Send;

    fn sign_out(&self, session: Session) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn resend_confirmation(
        &self,
        email: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn authenticate(&self, access_token: String) -> Result<Session, CoreError>;
}

/// Hosted identity provider. Passwords and email confirmation live there.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    fn sign_up(
        &self,
        request: SignUpRequest,
    ) -> impl Future<Output = Result<SignUpOutcome, CoreError>> + Send;

    fn sign_in(
        &self,
        input: SignInInput,
    ) -> impl Future<Output = Result<AuthTokens, CoreError>> + Send;

    fn sign_out(&self, access_token: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn resend_confirmation(
        &self,
        email: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Local signature and audience check, no network call.
    fn verify_access_token(&self, access_token: &str) -> Result<Session, CoreError>;
}
