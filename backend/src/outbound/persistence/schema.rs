//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Users managed through the form.
    users (id) {
        /// Ascending surrogate key (`BIGSERIAL`).
        id -> Int8,
        /// Person's name; never blank.
        name -> Varchar,
        /// Language identifier; never blank.
        language -> Varchar,
        /// Free-text language; empty unless `language` is `other`.
        other_language -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
