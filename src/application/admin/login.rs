//! LoginHandler - admin credential check and token issuance.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::admin::{issue_token, verify_password, AdminError};
use crate::ports::AdminRepository;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub expires_in_secs: i64,
}

/// Handler for admin login.
///
/// Unknown email and wrong password return the same `InvalidCredentials`
/// error so the response does not leak which admins exist.
pub struct LoginHandler {
    admins: Arc<dyn AdminRepository>,
    jwt_secret: SecretString,
    token_expiry_secs: i64,
}

impl LoginHandler {
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        jwt_secret: SecretString,
        token_expiry_secs: i64,
    ) -> Self {
        Self {
            admins,
            jwt_secret,
            token_expiry_secs,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AdminError> {
        let Some(admin) = self.admins.find_by_email(&cmd.email).await? else {
            return Err(AdminError::InvalidCredentials);
        };

        if !verify_password(&cmd.password, &admin.password_hash)? {
            return Err(AdminError::InvalidCredentials);
        }

        let access_token = issue_token(
            admin.id,
            self.jwt_secret.expose_secret(),
            self.token_expiry_secs,
        )?;

        tracing::info!(admin_id = %admin.id, "admin logged in");

        Ok(LoginResult {
            access_token,
            expires_in_secs: self.token_expiry_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::admin::{decode_token, hash_password, Admin};
    use crate::domain::foundation::DomainError;
    use crate::ports::SaveResult;
    use async_trait::async_trait;

    struct MockAdminRepository {
        admins: Vec<Admin>,
    }

    #[async_trait]
    impl AdminRepository for MockAdminRepository {
        async fn insert(&self, _admin: &Admin) -> Result<SaveResult, DomainError> {
            Ok(SaveResult::Inserted)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
            Ok(self.admins.iter().find(|a| a.email == email).cloned())
        }
    }

    const SECRET: &str = "test-signing-secret";

    fn handler(admins: Vec<Admin>) -> LoginHandler {
        LoginHandler::new(
            Arc::new(MockAdminRepository { admins }),
            SecretString::new(SECRET.to_string()),
            3600,
        )
    }

    #[tokio::test]
    async fn valid_credentials_issue_a_token() {
        let hash = hash_password("s3cret").unwrap();
        let admin = Admin::create("admin@example.com", hash);
        let admin_id = admin.id;
        let handler = handler(vec![admin]);

        let result = handler
            .handle(LoginCommand {
                email: "admin@example.com".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();

        let claims = decode_token(&result.access_token, SECRET).unwrap();
        assert_eq!(claims.sub, admin_id.to_string());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let hash = hash_password("s3cret").unwrap();
        let handler = handler(vec![Admin::create("admin@example.com", hash)]);

        let wrong_password = handler
            .handle(LoginCommand {
                email: "admin@example.com".to_string(),
                password: "nope".to_string(),
            })
            .await;
        let unknown_email = handler
            .handle(LoginCommand {
                email: "ghost@example.com".to_string(),
                password: "s3cret".to_string(),
            })
            .await;

        assert!(matches!(wrong_password, Err(AdminError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(AdminError::InvalidCredentials)));
    }
}
