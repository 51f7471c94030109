use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignUpValidator {
    #[validate(email(message = "email must be valid"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignInValidator {
    #[validate(email(message = "email must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResendConfirmationValidator {
    #[validate(email(message = "email must be valid"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_checks_every_field() {
        let valid = SignUpValidator {
            email: "ana@example.com".into(),
            password: "segredo".into(),
            name: "Ana".into(),
        };
        assert!(valid.validate().is_ok());

        let invalid = SignUpValidator {
            email: "ana".into(),
            password: "123".into(),
            name: String::new(),
        };
        let errors = invalid.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }
}
