//! Field rules shared by the customer, employee and vehicle records.

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ModelError;

pub const PERSONAL_ID_DIGITS: u32 = 11;
pub const MIN_NAME_LEN: usize = 3;
pub const MIN_PHONE_LEN: usize = 7;
pub const MIN_EMAIL_LEN: usize = 7;
pub const MIN_ADDRESS_LEN: usize = 5;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
/// RFC 5322 mailbox: `local@domain` or `Display Name <local@domain>`.
/// Local part and domain are dot-atoms (no leading, trailing or doubled
/// dots) or quoted strings / domain literals.
static MAILBOX_RE: Lazy<Regex> = Lazy::new(|| {
    let atom = r"(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]|[^\x00-\x7F])+";
    let quoted = r#""(?:[^"\\\r\n]|\\.)*""#;
    let dot_atom = format!(r"{atom}(?:\.{atom})*");
    let addr_spec = format!(r"(?:{dot_atom}|{quoted})@(?:{dot_atom}|\[[^\[\]\\]*\])");
    let word = format!(r"(?:(?:{atom}|\.)+|{quoted})");
    let pattern = format!(r"^\s*(?:{addr_spec}|(?:{word}(?:\s+{word})*\s*)?<{addr_spec}>)\s*$");
    Regex::new(&pattern).expect("valid mailbox regex")
});
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.(\d{4})$").expect("valid date regex")
});

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Number of decimal digits in `id`, ignoring the sign. Zero has one digit.
pub fn personal_id_length(id: i64) -> u32 {
    match id.unsigned_abs().checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

pub fn validate_personal_id(id: i64, entity: &str) -> Result<(), ModelError> {
    if personal_id_length(id) != PERSONAL_ID_DIGITS {
        return Err(ModelError::invalid(format!(
            "personal id of the {entity} must be exactly {PERSONAL_ID_DIGITS} digits"
        )));
    }
    Ok(())
}

pub fn validate_name(value: &str, field: &str) -> Result<(), ModelError> {
    if value.chars().count() < MIN_NAME_LEN {
        return Err(ModelError::invalid(format!(
            "{field} cannot be empty or shorter than {MIN_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ModelError> {
    if value.chars().count() < MIN_PHONE_LEN {
        return Err(ModelError::invalid(format!(
            "phone number cannot be empty or shorter than {MIN_PHONE_LEN} numbers"
        )));
    }
    Ok(())
}

/// Phone rule for customers: the length rule plus no alphabetic characters.
pub fn validate_phone_digits(value: &str) -> Result<(), ModelError> {
    validate_phone(value)?;
    if value.chars().any(char::is_alphabetic) {
        return Err(ModelError::invalid("phone number cannot consist letters"));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.is_empty() {
        return Err(ModelError::invalid("email cannot be empty"));
    }
    if !is_valid_email(email) {
        return Err(ModelError::invalid("email must contain a valid domain"));
    }
    Ok(())
}

pub fn is_valid_mailbox(email: &str) -> bool {
    MAILBOX_RE.is_match(email)
}

/// Customer email rule: minimum length, then mailbox syntax.
pub fn validate_customer_email(email: &str) -> Result<(), ModelError> {
    if email.chars().count() < MIN_EMAIL_LEN {
        return Err(ModelError::invalid(format!(
            "email cannot be empty or shorter than {MIN_EMAIL_LEN} characters"
        )));
    }
    if !is_valid_mailbox(email) {
        return Err(ModelError::invalid(format!("invalid mail address: {email}")));
    }
    Ok(())
}

pub fn validate_address(value: &str) -> Result<(), ModelError> {
    if value.chars().count() < MIN_ADDRESS_LEN {
        return Err(ModelError::invalid(format!(
            "living address cannot be empty or shorter than {MIN_ADDRESS_LEN} symbols"
        )));
    }
    Ok(())
}

/// `DD.MM.YYYY` with a year no later than the current one.
pub fn is_valid_date(date: &str) -> bool {
    let Some(caps) = DATE_RE.captures(date) else {
        return false;
    };
    caps[3].parse::<i32>().map(|year| year <= current_year()).unwrap_or(false)
}

/// Title-case each word: first letter upper, the rest lower.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_id_length_counts_digits_ignoring_sign() {
        assert_eq!(personal_id_length(0), 1);
        assert_eq!(personal_id_length(7), 1);
        assert_eq!(personal_id_length(12345678901), 11);
        assert_eq!(personal_id_length(-12345678901), 11);
        assert_eq!(personal_id_length(99999999999), 11);
        assert_eq!(personal_id_length(100000000000), 12);
        assert_eq!(personal_id_length(i64::MIN), 19);
    }

    #[test]
    fn personal_id_must_have_eleven_digits() {
        assert!(validate_personal_id(12345678901, "customer").is_ok());
        assert!(validate_personal_id(-12345678901, "customer").is_ok());
        assert!(validate_personal_id(0, "customer").is_err());
        assert!(validate_personal_id(1234567890, "customer").is_err());
        assert!(validate_personal_id(123456789012, "employee").is_err());
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("john@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("john@x"));
        assert!(!is_valid_email("john.x.com"));
        assert!(!is_valid_email("john@x.c"));
        assert!(validate_email("").is_err());
        assert!(validate_customer_email("a@b.io").is_err());
    }

    #[test]
    fn customer_mailbox_syntax() {
        for ok in [
            "john@x.com",
            "john@localhost",
            "first.last+tag@mail.example.org",
            "John Smith <john@x.com>",
            "<john@x.com>",
            "\"john smith\"@x.com",
            "john@[192.168.0.1]",
        ] {
            assert!(validate_customer_email(ok).is_ok(), "{ok}");
        }
        for bad in [
            "a..b@x.com",
            ".john@x.com",
            "john.@x.com",
            "john@x..com",
            "john@.x.com",
            "john.x.com",
            "john@@x.com",
            "John <john@x.com",
            "john smith@x.com",
        ] {
            assert!(validate_customer_email(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn phone_rules() {
        assert!(validate_phone_digits("5551234").is_ok());
        assert!(validate_phone_digits("+372 5551234").is_ok());
        assert!(validate_phone_digits("555123").is_err());
        assert!(validate_phone_digits("555123a").is_err());
        assert!(validate_phone("555123a").is_ok());
    }

    #[test]
    fn date_of_birth_format() {
        assert!(is_valid_date("01.02.1990"));
        assert!(is_valid_date("31.12.2000"));
        assert!(!is_valid_date("1.2.1990"));
        assert!(!is_valid_date("32.01.1990"));
        assert!(!is_valid_date("01.13.1990"));
        assert!(!is_valid_date("1990-02-01"));
        let next_year = format!("01.01.{}", current_year() + 1);
        assert!(!is_valid_date(&next_year));
    }

    #[test]
    fn title_case_normalizes_words() {
        assert_eq!(title_case("petrol"), "Petrol");
        assert_eq!(title_case("LPG"), "Lpg");
        assert_eq!(title_case("hAtChBaCk"), "Hatchback");
        assert_eq!(title_case("two words"), "Two Words");
        assert_eq!(title_case(""), "");
    }
}
