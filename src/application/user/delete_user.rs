//! DeleteUserHandler.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::UserRepository;

pub struct DeleteUserHandler {
    users: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<(), UserError> {
        if self.users.find_by_id(&user_id).await?.is_none() {
            return Err(UserError::NotFound(user_id));
        }
        self.users.delete(&user_id).await?;
        tracing::info!(user_id = %user_id, "user deleted");
        Ok(())
    }
}
