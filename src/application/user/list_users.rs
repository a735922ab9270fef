//! ListUsersHandler.

use std::sync::Arc;

use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.list().await?)
    }
}
