//! GetUserHandler - lookup by id or email.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn by_id(&self, user_id: UserId) -> Result<User, UserError> {
        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))
    }

    pub async fn by_email(&self, email: &str) -> Result<User, UserError> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::EmailNotFound {
                email: email.to_string(),
            })
    }
}
