//! Validation rules for submitted user fields.
//!
//! Rules run independently and accumulate into [`ValidationErrors`]; no rule
//! short-circuits another. Per-field presence checks run first, followed by
//! the cross-field check tying `other_language` to `language`.
//!
//! Callers normalise with [`UserFields::normalized`] before validating, which
//! guarantees `other_language` is empty whenever it does not apply.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::user::{OTHER_LANGUAGE, UserFields, is_offered_language};

/// Message attached to a required field that is empty or whitespace.
pub const BLANK: &str = "can't be blank";
/// Message attached to a language outside the offered set.
pub const NOT_IN_LIST: &str = "is not included in the list";

/// Field keys used in error mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    /// `name`
    Name,
    /// `language`
    Language,
    /// `other_language`
    OtherLanguage,
}

impl UserField {
    /// All fields in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Language, Self::OtherLanguage];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Language => "language",
            Self::OtherLanguage => "other_language",
        }
    }
}

/// Whether `language` must be one of the offered choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguagePolicy {
    /// Any non-blank language identifier is accepted.
    #[default]
    Open,
    /// Only `ruby`, `php` and `other` are accepted.
    Restricted,
}

impl LanguagePolicy {
    /// Policy for a boolean "restrict languages" toggle.
    #[must_use]
    pub const fn from_restricted(restricted: bool) -> Self {
        if restricted {
            Self::Restricted
        } else {
            Self::Open
        }
    }
}

/// Field name to messages mapping. Empty when the record is valid.
///
/// Serialises as a JSON object keyed by field wire name, e.g.
/// `{"other_language": ["can't be blank"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<UserField, Vec<String>>);

impl ValidationErrors {
    /// `true` when no rule was violated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`; empty when the field is valid.
    #[must_use]
    pub fn messages(&self, field: UserField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fields with at least one message, in form order.
    pub fn fields(&self) -> impl Iterator<Item = UserField> + '_ {
        self.0.keys().copied()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: UserField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }
}

impl FromIterator<(UserField, &'static str)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (UserField, &'static str)>>(iter: I) -> Self {
        let mut errors = Self::default();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_name(fields: &UserFields, errors: &mut ValidationErrors) {
    if is_blank(&fields.name) {
        errors.add(UserField::Name, BLANK);
    }
}

fn check_language(fields: &UserFields, policy: LanguagePolicy, errors: &mut ValidationErrors) {
    if is_blank(&fields.language) {
        errors.add(UserField::Language, BLANK);
        return;
    }
    if policy == LanguagePolicy::Restricted && !is_offered_language(&fields.language) {
        errors.add(UserField::Language, NOT_IN_LIST);
    }
}

fn check_other_language(fields: &UserFields, errors: &mut ValidationErrors) {
    if fields.language == OTHER_LANGUAGE && is_blank(&fields.other_language) {
        errors.add(UserField::OtherLanguage, BLANK);
    }
}

/// Validate a candidate record, returning every violated rule.
///
/// # Examples
/// ```
/// use user_forms::domain::{LanguagePolicy, UserField, UserFields, validate};
///
/// let errors = validate(&UserFields::new("Bo", "other", ""), LanguagePolicy::Open);
/// assert_eq!(errors.messages(UserField::OtherLanguage), ["can't be blank"]);
/// assert!(errors.messages(UserField::Name).is_empty());
/// ```
#[must_use]
pub fn validate(fields: &UserFields, policy: LanguagePolicy) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    check_name(fields, &mut errors);
    check_language(fields, policy, &mut errors);
    check_other_language(fields, &mut errors);
    errors
}
