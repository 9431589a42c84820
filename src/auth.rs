//! Session Persistence & Form Validation
//!
//! Bearer token storage in browser localStorage plus the client-side checks
//! that run before login/register requests go out.

const TOKEN_KEY: &str = "plateful.token";

pub const MIN_PASSWORD_LEN: usize = 8;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Token from a previous session, if any.
pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Registration form checks. Violations never reach the network.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }
    validate_login(email, password)?;
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Login form checks shared with registration. The length minimum applies
/// only at registration; existing accounts may predate it.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    if password.is_empty() {
        return Err("Please enter your password".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_requires_a_name() {
        let err = validate_registration("  ", "a@b.com", "longenough", "longenough");
        assert_eq!(err, Err("Please enter your name".to_string()));
    }

    #[test]
    fn registration_rejects_short_passwords() {
        let err = validate_registration("Ana", "a@b.com", "short", "short");
        assert!(err.unwrap_err().contains("at least 8"));
    }

    #[test]
    fn registration_rejects_mismatched_confirmation() {
        let err = validate_registration("Ana", "a@b.com", "longenough", "different1");
        assert_eq!(err, Err("Passwords do not match".to_string()));
    }

    #[test]
    fn registration_accepts_a_valid_form() {
        assert_eq!(
            validate_registration("Ana", "a@b.com", "longenough", "longenough"),
            Ok(())
        );
    }

    #[test]
    fn login_requires_an_email_shape() {
        assert!(validate_login("not-an-email", "longenough").is_err());
        assert!(validate_login("", "longenough").is_err());
        assert_eq!(validate_login("a@b.com", "longenough"), Ok(()));
    }

    #[test]
    fn login_accepts_passwords_below_the_registration_minimum() {
        // older accounts may have shorter passwords; only registration
        // enforces the length floor
        assert_eq!(validate_login("a@b.com", "short"), Ok(()));
        assert!(validate_login("a@b.com", "").is_err());
    }
}
