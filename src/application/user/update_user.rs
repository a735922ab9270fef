//! UpdateUserHandler - partial update with email-uniqueness re-check.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{User, UserError, UserUpdate};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub update: UserUpdate,
}

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, UserError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or(UserError::NotFound(cmd.user_id))?;

        if let Some(email) = cmd.update.email {
            if email != user.email {
                if let Some(other) = self.users.find_by_email(&email).await? {
                    if other.id != user.id {
                        return Err(UserError::email_taken(email));
                    }
                }
                user.email = email;
            }
        }
        if let Some(name) = cmd.update.name {
            user.name = name;
        }
        if let Some(surname) = cmd.update.surname {
            user.surname = surname;
        }
        user.updated_at = Timestamp::now();

        self.users.update(&user).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::verification::test_support::MockUserRepository;
    use crate::ports::UserRepository as _;

    #[tokio::test]
    async fn updates_only_provided_fields() {
        let user = User::register_verified("Anna", "Ivanova", "anna@example.com");
        let user_id = user.id;
        let repo = Arc::new(MockUserRepository::with(user));
        let handler = UpdateUserHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateUserCommand {
                user_id,
                update: UserUpdate {
                    surname: Some("Smirnova".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.surname, "Smirnova");
        assert_eq!(updated.name, "Anna");
        assert_eq!(updated.email, "anna@example.com");
        assert_eq!(repo.stored()[0].surname, "Smirnova");
    }

    #[tokio::test]
    async fn reassigning_a_taken_email_is_rejected() {
        let first = User::register_verified("Anna", "Ivanova", "anna@example.com");
        let second = User::register_verified("Boris", "Petrov", "boris@example.com");
        let second_id = second.id;
        let repo = Arc::new(MockUserRepository::empty());
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();
        let handler = UpdateUserHandler::new(repo);

        let result = handler
            .handle(UpdateUserCommand {
                user_id: second_id,
                update: UserUpdate {
                    email: Some("anna@example.com".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(UserError::EmailTaken { .. })));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = UpdateUserHandler::new(Arc::new(MockUserRepository::empty()));

        let result = handler
            .handle(UpdateUserCommand {
                user_id: UserId::new(),
                update: UserUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
