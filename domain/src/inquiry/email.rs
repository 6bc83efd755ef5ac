//! Email address syntax check

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Whether `email` is a syntactically valid address.
///
/// The domain must contain at least one dot: `ada@localhost` is rejected.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        let emails: Vec<(&str, bool)> = vec![
            ("ada@example.com", true),
            ("ada.lovelace+coaching@example.co.uk", true),
            ("kitty-mcwilliam@oxford-coaching.org", true),
            ("example.com", false),
            ("ada@example", false),
            ("ada@@example.com", false),
            ("ada@#example.com", false),
            ("ada @example.com", false),
            ("@example.com", false),
            ("ada@-example.com", false),
            ("", false),
        ];

        for (email, expected) in emails {
            assert_eq!((email, is_valid_email(email)), (email, expected));
        }
    }
}
