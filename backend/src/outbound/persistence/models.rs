//! Internal Diesel row structs.
//!
//! These types never leave the persistence module; the repository converts
//! them to domain [`User`] values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{User, UserFields, UserId};

use super::schema::users;

/// Row read from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub language: String,
    pub other_language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            name,
            language,
            other_language,
            created_at,
            updated_at,
        } = row;
        User::new(
            UserId::new(id),
            UserFields {
                name,
                language,
                other_language,
            },
            created_at,
            updated_at,
        )
    }
}

/// Insertable values for a new user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub language: &'a str,
    pub other_language: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewUserRow<'a> {
    pub(crate) fn new(fields: &'a UserFields, now: DateTime<Utc>) -> Self {
        Self {
            name: &fields.name,
            language: &fields.language,
            other_language: &fields.other_language,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of the editable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChanges<'a> {
    pub name: &'a str,
    pub language: &'a str,
    pub other_language: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserChanges<'a> {
    pub(crate) fn new(fields: &'a UserFields, now: DateTime<Utc>) -> Self {
        Self {
            name: &fields.name,
            language: &fields.language,
            other_language: &fields.other_language,
            updated_at: now,
        }
    }
}
