use crate::domain::common::entities::app_errors::CoreError;

/// Turns a policy decision into a `Forbidden` error when it is negative.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_policy_is_forbidden() {
        assert_eq!(
            ensure_policy(Ok(false), "premium only"),
            Err(CoreError::Forbidden("premium only".to_string()))
        );
        assert_eq!(ensure_policy(Ok(true), "premium only"), Ok(()));
        assert_eq!(
            ensure_policy(Err(CoreError::NotFound), "premium only"),
            Err(CoreError::NotFound)
        );
    }
}
