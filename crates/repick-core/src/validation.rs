//! Input validation predicates.
//!
//! These mirror the backend's constraint annotations so forms can reject
//! bad input before spending a round trip.

/// Whether a string looks like an email address.
///
/// Matches the backend's lenient check: one `@`, non-empty local part,
/// a dot somewhere in the domain, no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Backend requires at least 8 characters.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
}

/// Backend requires 1 to 30 characters.
#[must_use]
pub fn is_valid_nickname(nickname: &str) -> bool {
    let len = nickname.chars().count();
    (1..=30).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("fan@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co.kr"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@dot."));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("has space@example.com"));
        assert!(!is_valid_email("double@@example.com"));
    }

    #[test]
    fn test_password_length() {
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        // Multi-byte characters count as characters, not bytes.
        assert!(is_valid_password("비밀번호비밀번호"));
    }

    #[test]
    fn test_nickname_length() {
        assert!(!is_valid_nickname(""));
        assert!(is_valid_nickname("체리"));
        assert!(is_valid_nickname(&"a".repeat(30)));
        assert!(!is_valid_nickname(&"a".repeat(31)));
    }
}
