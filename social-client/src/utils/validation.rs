//! Validation utilities for user input

use shared::RegisterRequest;

/// Largest image accepted for upload (5 MiB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((user, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if domain.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    if user.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if domain.is_empty() || !domain.contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate username (same character set the backend accepts)
pub fn validate_username(username: &str) -> ValidationResult {
    if username.is_empty() {
        return ValidationResult::err("Username is required");
    }

    if username.chars().count() > 150 {
        return ValidationResult::err("Username must be at most 150 characters");
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return ValidationResult::err("Username can only contain letters, numbers and @ . + - _");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate a registration form, reporting the first failing rule
pub fn validate_registration(form: &RegisterRequest) -> ValidationResult {
    if form.password != form.password2 {
        return ValidationResult::err("Passwords do not match");
    }

    for result in [
        validate_password(&form.password),
        validate_username(&form.username),
        validate_email(&form.email),
    ] {
        if !result.is_valid {
            return result;
        }
    }

    ValidationResult::ok()
}

/// Validate login form
pub fn validate_login(username: &str, password: &str) -> ValidationResult {
    if username.trim().is_empty() || password.is_empty() {
        return ValidationResult::err("Username and password are required");
    }

    ValidationResult::ok()
}

/// A post needs text or an image
pub fn validate_post(content: &str, has_image: bool) -> ValidationResult {
    if content.trim().is_empty() && !has_image {
        return ValidationResult::err("Write something or add an image");
    }

    ValidationResult::ok()
}

/// Validate comment text
pub fn validate_comment(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::err("Comment cannot be empty");
    }

    ValidationResult::ok()
}

/// Validate an image picked for upload
pub fn validate_image(mime_type: &str, size: usize) -> ValidationResult {
    if !mime_type.starts_with("image/") {
        return ValidationResult::err("Please select a valid image");
    }

    if size > MAX_IMAGE_BYTES {
        return ValidationResult::err("Image must be at most 5MB");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, password2: &str) -> RegisterRequest {
        RegisterRequest {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: password.to_string(),
            password2: password2.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
    }

    #[test]
    fn test_username_validation() {
        assert!(validate_username("ana").is_valid);
        assert!(validate_username("user.name+tag@x").is_valid);
        assert!(!validate_username("").is_valid);
        assert!(!validate_username("has space").is_valid);
        assert!(!validate_username(&"a".repeat(151)).is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret12").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("").is_valid);
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration(&form("secret12", "secret12")).is_valid);

        let mismatch = validate_registration(&form("secret12", "secret13"));
        assert_eq!(mismatch.error.as_deref(), Some("Passwords do not match"));

        let short = validate_registration(&form("abc", "abc"));
        assert_eq!(
            short.error.as_deref(),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_post_and_comment_validation() {
        assert!(validate_post("hello", false).is_valid);
        assert!(validate_post("", true).is_valid);
        assert!(!validate_post("   ", false).is_valid);
        assert!(!validate_comment(" ").is_valid);
        assert!(validate_login("ana", "x").is_valid);
        assert!(!validate_login(" ", "x").is_valid);
    }

    #[test]
    fn test_image_validation() {
        assert!(validate_image("image/png", 1024).is_valid);
        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES).is_valid);
        assert!(!validate_image("application/pdf", 10).is_valid);
        assert!(!validate_image("image/png", MAX_IMAGE_BYTES + 1).is_valid);
    }
}
