use crate::api::errors::ApiError;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_password_len(password: &str) -> Result<(), ApiError> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_enough_passwords() {
        assert!(validate_password_len("12345678").is_ok());
        assert!(validate_password_len("пароль-ок").is_ok());
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(validate_password_len("1234567").is_err());
        assert!(validate_password_len("").is_err());
    }
}
