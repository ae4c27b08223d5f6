//! Domain primitives, validation and services.
//!
//! Purpose: hold the user model and the rules deciding whether a submitted
//! form may be stored. Nothing here depends on HTTP or Diesel; adapters reach
//! the domain through [`ports`].
//!
//! Public surface:
//! - `User`, `UserId`, `UserFields`: the stored record and its editable part.
//! - `validate`, `ValidationErrors`, `UserField`, `LanguagePolicy`: the
//!   validation engine.
//! - `UserFormService`: implements the `UsersQuery` and `UserFormCommand`
//!   driving ports.
//! - `Error`, `ErrorCode`, `TraceId`: failures and request correlation.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_form_service;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    LANGUAGE_CHOICES, LanguageChoice, OTHER_LANGUAGE, User, UserFields, UserId,
    is_offered_language,
};
pub use self::user_form_service::UserFormService;
pub use self::validation::{
    BLANK, LanguagePolicy, NOT_IN_LIST, UserField, ValidationErrors, validate,
};
