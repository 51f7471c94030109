use chrono::Utc;
use tracing::{error, info};

use crate::domain::{
    account::{
        entities::{UserAccount, trial_end},
        ports::UserAccountRepository,
    },
    authentication::{
        entities::{AuthTokens, Session, SignUpOutcome},
        ports::{AuthService, IdentityProvider},
        value_objects::{SignInInput, SignUpInput, SignUpRequest},
    },
    badge::ports::BadgeRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    library::ports::LibraryRecipeRepository,
    photo::ports::ObjectStoragePort,
    suggestion::ports::CompletionClient,
    user_recipe::ports::UserRecipeRepository,
};

fn normalize_email(email: &str) -> Result<String, CoreError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(CoreError::InvalidRequest("email is required".to_string()));
    }
    Ok(email)
}

impl<L, UR, A, B, C, I, O, HC> AuthService for Service<L, UR, A, B, C, I, O, HC>
where
    L: LibraryRecipeRepository,
    UR: UserRecipeRepository,
    A: UserAccountRepository,
    B: BadgeRepository,
    C: CompletionClient,
    I: IdentityProvider,
    O: ObjectStoragePort,
    HC: HealthCheckRepository,
{
    async fn sign_up(&self, input: SignUpInput) -> Result<SignUpOutcome, CoreError> {
        let email = normalize_email(&input.email)?;
        let name = input.name.trim().to_string();
        let now = Utc::now();

        let outcome = self
            .identity_provider
            .sign_up(SignUpRequest {
                email: email.clone(),
                password: input.password,
                name: name.clone(),
                trial_ends_at: trial_end(now),
            })
            .await?;

        if let SignUpOutcome::SignedIn(tokens) = &outcome {
            let account = UserAccount::new_trial(tokens.user.id, email, name, now);
            // Sign-up already succeeded at the provider; a missing row is
            // recreated on the next profile read.
            if let Err(e) = self.account_repository.create(account).await {
                error!(user_id = %tokens.user.id, error = %e, "failed to create account profile");
            }
        } else {
            info!("sign-up pending email confirmation");
        }

        Ok(outcome)
    }

    async fn sign_in(&self, input: SignInInput) -> Result<AuthTokens, CoreError> {
        let email = normalize_email(&input.email)?;
        self.identity_provider
            .sign_in(SignInInput {
                email,
                password: input.password,
            })
            .await
    }

    async fn sign_out(&self, session: Session) -> Result<(), CoreError> {
        self.identity_provider.sign_out(session.access_token).await
    }

    async fn resend_confirmation(&self, email: String) -> Result<(), CoreError> {
        let email = normalize_email(&email)?;
        self.identity_provider.resend_confirmation(email).await
    }

    fn authenticate(&self, access_token: String) -> Result<Session, CoreError> {
        self.identity_provider.verify_access_token(&access_token)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        authentication::entities::AuthUser, common::services::test_support::Mocks,
    };

    fn tokens(id: Uuid) -> AuthTokens {
        AuthTokens {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            token_type: "bearer".into(),
            expires_in: 3600,
            user: AuthUser {
                id,
                email: Some("ana@example.com".into()),
                name: Some("Ana".into()),
            },
        }
    }

    fn sign_up_input() -> SignUpInput {
        SignUpInput {
            email: " Ana@Example.com ".into(),
            password: "segredo123".into(),
            name: "Ana".into(),
        }
    }

    #[tokio::test]
    async fn immediate_session_creates_profile() {
        let mut mocks = Mocks::new();
        let user_id = Uuid::from_u128(7);
        mocks
            .identity
            .expect_sign_up()
            .withf(|request| {
                request.email == "ana@example.com" && request.trial_ends_at > Utc::now()
            })
            .returning(move |_| Box::pin(async move { Ok(SignUpOutcome::SignedIn(tokens(user_id))) }));
        mocks
            .accounts
            .expect_create()
            .withf(move |account| account.id == user_id && account.name == "Ana")
            .times(1)
            .returning(|account| Box::pin(async move { Ok(account) }));

        let outcome = mocks.into_service().sign_up(sign_up_input()).await.unwrap();
        assert!(matches!(outcome, SignUpOutcome::SignedIn(_)));
    }

    #[tokio::test]
    async fn pending_confirmation_skips_profile() {
        let mut mocks = Mocks::new();
        mocks.identity.expect_sign_up().returning(|_| {
            Box::pin(async move {
                Ok(SignUpOutcome::ConfirmationPending {
                    user: AuthUser {
                        id: Uuid::from_u128(8),
                        email: Some("ana@example.com".into()),
                        name: None,
                    },
                    message: "Email de confirmação enviado! Verifique sua caixa de entrada."
                        .into(),
                })
            })
        });
        mocks.accounts.expect_create().never();

        let outcome = mocks.into_service().sign_up(sign_up_input()).await.unwrap();
        assert!(matches!(outcome, SignUpOutcome::ConfirmationPending { .. }));
    }

    #[tokio::test]
    async fn profile_failure_does_not_fail_sign_up() {
        let mut mocks = Mocks::new();
        mocks.identity.expect_sign_up().returning(|_| {
            Box::pin(async move { Ok(SignUpOutcome::SignedIn(tokens(Uuid::from_u128(9)))) })
        });
        mocks.accounts.expect_create().returning(|_| {
            Box::pin(async move { Err(CoreError::StorageError("duplicate key".into())) })
        });

        assert!(mocks.into_service().sign_up(sign_up_input()).await.is_ok());
    }

    #[tokio::test]
    async fn sign_out_revokes_the_session_token() {
        let mut mocks = Mocks::new();
        mocks
            .identity
            .expect_sign_out()
            .withf(|token| token == "access-token")
            .times(1)
            .returning(|_| Box::pin(async move { Ok(()) }));

        let session = crate::domain::common::services::test_support::session();
        assert!(mocks.into_service().sign_out(session).await.is_ok());
    }

    #[test]
    fn authenticate_delegates_to_provider() {
        let mut mocks = Mocks::new();
        mocks
            .identity
            .expect_verify_access_token()
            .returning(|_| Err(CoreError::InvalidToken));

        assert_eq!(
            mocks.into_service().authenticate("bad".into()),
            Err(CoreError::InvalidToken)
        );
    }
}
