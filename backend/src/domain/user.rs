//! User data model.
//!
//! A [`User`] is a stored record; [`UserFields`] is the editable triple that
//! forms submit and that validation inspects. Persisted users always satisfy
//! the rules in [`crate::domain::validation`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Language value that makes `other_language` applicable.
pub const OTHER_LANGUAGE: &str = "other";

/// A language option offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChoice {
    /// Submitted value.
    pub value: &'static str,
    /// Label shown next to the radio button and in the list view.
    pub label: &'static str,
}

/// The fixed set of choices offered by the form, in display order.
pub const LANGUAGE_CHOICES: [LanguageChoice; 3] = [
    LanguageChoice {
        value: "ruby",
        label: "Ruby",
    },
    LanguageChoice {
        value: "php",
        label: "PHP",
    },
    LanguageChoice {
        value: OTHER_LANGUAGE,
        label: "Other",
    },
];

/// Whether `language` is one of [`LANGUAGE_CHOICES`].
#[must_use]
pub fn is_offered_language(language: &str) -> bool {
    LANGUAGE_CHOICES
        .iter()
        .any(|choice| choice.value == language)
}

/// Store-assigned user identifier. Identifiers increase with insertion
/// order, so sorting by id lists users oldest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The three editable fields of a user.
///
/// Values are kept exactly as submitted; blankness is judged by validation,
/// not by trimming here.
///
/// # Examples
/// ```
/// use user_forms::domain::UserFields;
///
/// let fields = UserFields::new("Ana", "ruby", "Cobol").normalized();
/// assert_eq!(fields.other_language, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserFields {
    /// Person's name.
    #[schema(example = "Ana")]
    pub name: String,
    /// Selected language identifier.
    #[schema(example = "other")]
    pub language: String,
    /// Free-text language, meaningful only when `language` is `other`.
    #[schema(example = "Cobol")]
    pub other_language: String,
}

impl UserFields {
    /// Build a field set from its parts.
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        other_language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            other_language: other_language.into(),
        }
    }

    /// Whether the conditional `other_language` field applies.
    #[must_use]
    pub fn uses_other_language(&self) -> bool {
        self.language == OTHER_LANGUAGE
    }

    /// Clear `other_language` unless `language` is `other`.
    ///
    /// Runs before every save so client input can never leave a stale
    /// free-text language on a record that selected a listed one.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !self.uses_other_language() {
            self.other_language.clear();
        }
        self
    }
}

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    fields: UserFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Assemble a stored record.
    #[must_use]
    pub fn new(
        id: UserId,
        fields: UserFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            fields,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Editable fields as stored.
    #[must_use]
    pub fn fields(&self) -> &UserFields {
        &self.fields
    }

    /// Consume the record, keeping only its editable fields.
    #[must_use]
    pub fn into_fields(self) -> UserFields {
        self.fields
    }

    /// Name as stored.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// Language identifier as stored.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.fields.language
    }

    /// Free-text language as stored; empty unless `language` is `other`.
    #[must_use]
    pub fn other_language(&self) -> &str {
        &self.fields.other_language
    }

    /// Creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Human-facing language name for listings.
    ///
    /// Offered languages map to their label, `other` maps to the free-text
    /// value, and anything else (possible when the language set is not
    /// enforced) is shown verbatim.
    #[must_use]
    pub fn display_language(&self) -> &str {
        if self.fields.uses_other_language() {
            return &self.fields.other_language;
        }
        LANGUAGE_CHOICES
            .iter()
            .find(|choice| choice.value == self.fields.language)
            .map_or(self.fields.language.as_str(), |choice| choice.label)
    }
}
