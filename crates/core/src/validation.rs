//! Declarative field constraints.
//!
//! Records implement [`Validate`] by describing their constraints against a
//! [`Report`]. The report collects every violation (it does not stop at the
//! first one) and tags each with a location path such as
//! `["body", "person", "age"]`, so the HTTP layer can point clients at the
//! offending field.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| (*s).to_string()).collect(),
            msg: msg.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// Types whose fields carry declared constraints.
pub trait Validate {
    /// Record every violated constraint into `report`.
    fn validate_into(&self, report: &mut Report);

    /// Validate standalone (no location prefix).
    fn validate(&self) -> DomainResult<()> {
        let mut report = Report::new();
        self.validate_into(&mut report);
        report.finish()
    }
}

/// Collector for constraint violations.
#[derive(Debug, Default)]
pub struct Report {
    prefix: Vec<String>,
    errors: Vec<FieldError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report whose locations start at `root` (e.g. `"body"`, `"query"`).
    pub fn at(root: &str) -> Self {
        Self {
            prefix: vec![root.to_string()],
            errors: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a violation for `field` under the current prefix.
    pub fn push(&mut self, field: &str, msg: impl Into<String>) {
        let mut loc = self.prefix.clone();
        if !field.is_empty() {
            loc.push(field.to_string());
        }
        self.errors.push(FieldError {
            loc,
            msg: msg.into(),
        });
    }

    /// Validate a sub-record with its locations nested under `field`.
    pub fn nested<V: Validate + ?Sized>(&mut self, field: &str, value: &V) {
        self.prefix.push(field.to_string());
        value.validate_into(self);
        self.prefix.pop();
    }

    /// Lengths are counted in characters, not bytes.
    pub fn min_length(&mut self, field: &str, value: &str, min: usize) {
        if value.chars().count() < min {
            self.push(field, format!("must have at least {min} characters"));
        }
    }

    pub fn max_length(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("must have at most {max} characters"));
        }
    }

    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        self.min_length(field, value, min);
        self.max_length(field, value, max);
    }

    /// Exclusive lower bound.
    pub fn greater_than<T>(&mut self, field: &str, value: T, bound: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if value <= bound {
            self.push(field, format!("must be greater than {bound}"));
        }
    }

    /// Inclusive upper bound.
    pub fn at_most<T>(&mut self, field: &str, value: T, bound: T)
    where
        T: PartialOrd + fmt::Display,
    {
        if value > bound {
            self.push(field, format!("must be less than or equal to {bound}"));
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !is_email_shaped(value) {
            self.push(field, "is not a valid email address");
        }
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn finish(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors))
        }
    }
}

/// `local@domain.tld`: dot-atom local part, ASCII hostname labels, alphabetic TLD of 2+ letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    ))
    .expect("invalid email regex pattern")
});

fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        low: i64,
        name: String,
    }

    impl Validate for Pair {
        fn validate_into(&self, report: &mut Report) {
            report.greater_than("low", self.low, 0);
            report.length("name", &self.name, 1, 3);
        }
    }

    struct Wrapper {
        pair: Pair,
    }

    impl Validate for Wrapper {
        fn validate_into(&self, report: &mut Report) {
            report.nested("pair", &self.pair);
        }
    }

    #[test]
    fn collects_every_violation() {
        let pair = Pair {
            low: 0,
            name: "abcd".to_string(),
        };
        let err = pair.validate().unwrap_err();
        let errors = err.field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].loc, vec!["low"]);
        assert_eq!(errors[1].msg, "must have at most 3 characters");
    }

    #[test]
    fn nested_locations_carry_root_and_parent() {
        let wrapper = Wrapper {
            pair: Pair {
                low: -3,
                name: "ok".to_string(),
            },
        };
        let mut report = Report::at("body");
        wrapper.validate_into(&mut report);

        let errors = report.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body", "pair", "low"]);
        assert_eq!(errors[0].to_string(), "body.pair.low: must be greater than 0");
    }

    #[test]
    fn length_counts_characters() {
        let mut report = Report::new();
        report.max_length("name", "ñandú", 5);
        assert!(report.is_empty());
        report.min_length("name", "", 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn email_shapes() {
        for ok in ["miguel@example.com", "a.b+tag@mail.example.co", "x@ab.io"] {
            assert!(is_email_shaped(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "miguel@",
            "miguel@example",
            "miguel@@example.com",
            "mi guel@example.com",
            "miguel@example.c",
            "miguel@-example.com",
            "miguel@example..com",
            ".miguel@example.com",
            "user@例え.jp",
            "a@b.co1",
            "user@localhost",
        ] {
            assert!(!is_email_shaped(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn field_error_serializes_loc_and_msg() {
        let err = FieldError::new(&["query", "name"], "must have at least 1 characters");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["loc"], serde_json::json!(["query", "name"]));
        assert_eq!(json["msg"], "must have at least 1 characters");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: bounds accept exactly the half-open interval (gt, le].
            #[test]
            fn bounds_accept_exactly_the_interval(value in -500i64..500) {
                let mut report = Report::new();
                report.greater_than("age", value, 0);
                report.at_most("age", value, 115);
                prop_assert_eq!(report.is_empty(), value > 0 && value <= 115);
            }

            /// Property: length checks agree with the character count.
            #[test]
            fn length_matches_char_count(value in "\\PC{0,60}") {
                let mut report = Report::new();
                report.length("name", &value, 1, 50);
                let n = value.chars().count();
                prop_assert_eq!(report.is_empty(), (1..=50).contains(&n));
            }
        }
    }
}
