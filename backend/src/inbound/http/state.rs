//! Shared HTTP adapter state.
//!
//! Handlers accept this via `web::Data` so they depend only on the driving
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserFormCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub forms: Arc<dyn UserFormCommand>,
}

impl HttpState {
    pub fn new(users: Arc<dyn UsersQuery>, forms: Arc<dyn UserFormCommand>) -> Self {
        Self { users, forms }
    }
}
