//! Normalization and validation of user-supplied account fields.

use artha_shared::AppError;
use thiserror::Error;

/// Avatar used when the user supplies none.
pub const DEFAULT_AVATAR_URL: &str = "https://www.gravatar.com/avatar/?d=mp";

/// Shortest allowed username, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// Shortest allowed password, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Errors raised while validating account fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// A required field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Username shorter than `MIN_USERNAME_LEN`.
    #[error("Username must be at least {} characters", MIN_USERNAME_LEN)]
    UsernameTooShort,

    /// Username contains whitespace.
    #[error("Username cannot contain whitespace")]
    UsernameWhitespace,

    /// Email not of the form `local@domain.tld`.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password shorter than `MIN_PASSWORD_LEN`.
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,

    /// A profile update carried no fields.
    #[error("At least one field is required")]
    NothingToUpdate,
}

impl From<CredentialError> for AppError {
    fn from(e: CredentialError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

/// Trims and lower-cases a username.
pub fn normalize_username(raw: &str) -> Result<String, CredentialError> {
    let username = raw.trim().to_lowercase();
    if username.is_empty() {
        return Err(CredentialError::MissingField("username"));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CredentialError::UsernameWhitespace);
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(CredentialError::UsernameTooShort);
    }
    Ok(username)
}

/// Trims and lower-cases an email address.
pub fn normalize_email(raw: &str) -> Result<String, CredentialError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(CredentialError::MissingField("email"));
    }

    let (local, domain) = email.split_once('@').ok_or(CredentialError::InvalidEmail)?;
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(CredentialError::InvalidEmail);
    }
    Ok(email)
}

/// Trims a full name and rejects it when blank.
pub fn validate_full_name(raw: &str) -> Result<String, CredentialError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CredentialError::MissingField("fullName"));
    }
    Ok(name.to_string())
}

/// Checks password length. Passwords are never trimmed.
pub fn validate_password(raw: &str) -> Result<(), CredentialError> {
    if raw.trim().is_empty() {
        return Err(CredentialError::MissingField("password"));
    }
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}

/// Validated registration fields. The password is still plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Normalized username.
    pub username: String,
    /// Normalized email.
    pub email: String,
    /// Trimmed full name.
    pub full_name: String,
    /// Plaintext password, to be hashed before storage.
    pub password: String,
    /// Avatar URL.
    pub avatar: String,
}

impl NewUser {
    /// Validates registration input.
    ///
    /// # Errors
    ///
    /// Returns the first `CredentialError` found, checking fields in the
    /// order username, email, full name, password.
    pub fn validate(
        username: &str,
        email: &str,
        full_name: &str,
        password: &str,
        avatar: Option<&str>,
    ) -> Result<Self, CredentialError> {
        let username = normalize_username(username)?;
        let email = normalize_email(email)?;
        let full_name = validate_full_name(full_name)?;
        validate_password(password)?;

        let avatar = avatar
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AVATAR_URL)
            .to_string();

        Ok(Self {
            username,
            email,
            full_name,
            password: password.to_string(),
            avatar,
        })
    }
}

/// Validated profile changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    /// New username.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
}

impl ProfileChanges {
    /// Validates a profile update. Blank fields count as absent.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NothingToUpdate` when every field is absent.
    pub fn validate(
        username: Option<&str>,
        email: Option<&str>,
        full_name: Option<&str>,
    ) -> Result<Self, CredentialError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|s| !s.trim().is_empty())
        }

        let changes = Self {
            username: present(username).map(normalize_username).transpose()?,
            email: present(email).map(normalize_email).transpose()?,
            full_name: present(full_name).map(validate_full_name).transpose()?,
        };

        if changes.username.is_none() && changes.email.is_none() && changes.full_name.is_none() {
            return Err(CredentialError::NothingToUpdate);
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("  Asha_R ").unwrap(), "asha_r");
        assert_eq!(normalize_username("ab"), Err(CredentialError::UsernameTooShort));
        assert_eq!(normalize_username(""), Err(CredentialError::MissingField("username")));
        assert_eq!(normalize_username("a b c"), Err(CredentialError::UsernameWhitespace));
    }

    #[rstest]
    #[case("Asha@Example.COM", Some("asha@example.com"))]
    #[case(" a@b.io ", Some("a@b.io"))]
    #[case("no-at-sign.com", None)]
    #[case("@example.com", None)]
    #[case("a@localhost", None)]
    #[case("a@.com", None)]
    #[case("a@b@c.com", None)]
    fn test_normalize_email(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_email(input).ok().as_deref(), expected);
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("12345678").is_ok());
        assert_eq!(validate_password("1234567"), Err(CredentialError::PasswordTooShort));
        assert_eq!(validate_password("   "), Err(CredentialError::MissingField("password")));
    }

    #[test]
    fn test_new_user_defaults_avatar() {
        let user = NewUser::validate("Asha", "asha@example.com", " Asha Rao ", "secret-pass", None)
            .unwrap();
        assert_eq!(user.username, "asha");
        assert_eq!(user.full_name, "Asha Rao");
        assert_eq!(user.avatar, DEFAULT_AVATAR_URL);

        let user = NewUser::validate(
            "asha",
            "asha@example.com",
            "Asha",
            "secret-pass",
            Some("https://img.test/a.png"),
        )
        .unwrap();
        assert_eq!(user.avatar, "https://img.test/a.png");
    }

    #[test]
    fn test_new_user_checks_fields_in_order() {
        assert_eq!(
            NewUser::validate("", "", "", "", None),
            Err(CredentialError::MissingField("username"))
        );
        assert_eq!(
            NewUser::validate("asha", "asha@example.com", "  ", "secret-pass", None),
            Err(CredentialError::MissingField("fullName"))
        );
    }

    #[test]
    fn test_profile_changes() {
        let changes = ProfileChanges::validate(None, Some("NEW@Example.com"), Some("  ")).unwrap();
        assert_eq!(changes.email.as_deref(), Some("new@example.com"));
        assert!(changes.username.is_none());
        assert!(changes.full_name.is_none());

        assert_eq!(
            ProfileChanges::validate(None, None, Some(" ")),
            Err(CredentialError::NothingToUpdate)
        );
        assert_eq!(
            ProfileChanges::validate(Some("x"), None, None),
            Err(CredentialError::UsernameTooShort)
        );
    }

    #[test]
    fn test_maps_to_invalid_input() {
        let err: AppError = CredentialError::PasswordTooShort.into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "Password must be at least 8 characters");
    }
}
