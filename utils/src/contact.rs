use regex::Regex;
use strum_macros::{Display, EnumString};

use crate::Error;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}$";
const PHONE_PATTERN: &str = r"^\+998[0-9]{9}$";

#[derive(Display, EnumString, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum ContactKind {
    Email,
    PhoneNumber,
}

pub fn is_email(text: &str) -> bool {
    let Ok(pattern) = Regex::new(EMAIL_PATTERN) else {
        return false;
    };
    pattern.is_match(text)
}

pub fn is_phone_number(text: &str) -> bool {
    let Ok(pattern) = Regex::new(PHONE_PATTERN) else {
        return false;
    };
    pattern.is_match(text)
}

/// Classify `text` as an email address or a phone number. Anything that
/// matches neither pattern is a validation error carrying the offending
/// value under the `email_phone_number` field.
pub fn is_email_or_phone_number(text: &str) -> Result<ContactKind, Error> {
    if is_email(text) {
        Ok(ContactKind::Email)
    } else if is_phone_number(text) {
        Ok(ContactKind::PhoneNumber)
    } else {
        Err(Error::Validation {
            field: "email_phone_number",
            value: text.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{is_email, is_email_or_phone_number, is_phone_number, ContactKind};
    use crate::Error;

    #[test]
    fn recognizes_emails() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.example.co"));
        assert!(is_email("USER_1%x@e-mail.museum"));

        assert!(!is_email("user@example"));
        assert!(!is_email("user at example.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@example.com "));
    }

    #[test]
    fn recognizes_phone_numbers() {
        assert!(is_phone_number("+998901234567"));

        assert!(!is_phone_number("998901234567"));
        assert!(!is_phone_number("+99890123456"));
        assert!(!is_phone_number("+9989012345678"));
        assert!(!is_phone_number("+1998901234567"));
    }

    #[test]
    fn classifies_emails_and_phone_numbers() {
        assert_eq!(
            is_email_or_phone_number("user@example.com").unwrap(),
            ContactKind::Email
        );
        assert_eq!(
            is_email_or_phone_number("+998901234567").unwrap(),
            ContactKind::PhoneNumber
        );
    }

    #[test]
    fn rejects_everything_else_with_field_and_value() {
        let err = is_email_or_phone_number("not-a-contact").unwrap_err();
        match &err {
            Error::Validation { field, value } => {
                assert_eq!(*field, "email_phone_number");
                assert_eq!(value, "not-a-contact");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("not-a-contact"));
    }

    #[test]
    fn kind_string_forms() {
        assert_eq!(ContactKind::Email.to_string(), "email");
        assert_eq!(ContactKind::PhoneNumber.to_string(), "phone_number");
        assert_eq!(
            ContactKind::from_str("phone_number").unwrap(),
            ContactKind::PhoneNumber
        );
    }
}
