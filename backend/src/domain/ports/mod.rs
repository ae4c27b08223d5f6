//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UserFormCommand`) are called by inbound
//! adapters; the driven port (`UserRepository`) is implemented by outbound
//! persistence adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_form_command;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use user_form_command::MockUserFormCommand;
pub use user_form_command::{SaveOutcome, UserFormCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
