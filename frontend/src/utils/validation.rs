pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
/// The account service does the authoritative validation.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let labels: Vec<&str> = domain.split('.').collect();
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && labels.len() >= 2
        && labels.iter().all(|label| !label.is_empty())
}

pub fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some(EMAIL_REQUIRED.to_string())
    } else if !looks_like_email(value) {
        Some(EMAIL_INVALID.to_string())
    } else {
        None
    }
}

pub fn validate_required(value: &str, message: &str) -> Option<String> {
    if value.is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_email_requires_value() {
        assert_eq!(validate_email("  ").as_deref(), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn validate_email_rejects_malformed_addresses() {
        for value in ["alice", "alice@", "@example.com", "alice@example", "a b@example.com", "a@b@c.com", "alice@.com"] {
            assert_eq!(validate_email(value).as_deref(), Some(EMAIL_INVALID), "{value}");
        }
    }

    #[test]
    fn validate_email_accepts_common_addresses() {
        assert!(validate_email("alice@example.com").is_none());
        assert!(validate_email(" bob.smith+reset@mail.example.org ").is_none());
    }

    #[test]
    fn validate_required_flags_empty_values() {
        assert_eq!(
            validate_required("", "Password is required").as_deref(),
            Some("Password is required")
        );
        assert!(validate_required(" ", "Password is required").is_none());
    }
}
