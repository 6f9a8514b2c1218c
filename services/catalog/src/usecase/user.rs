use chrono::Utc;
use tracing::info;

use auctions_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::CatalogError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: NewUser) -> Result<User, CatalogError> {
        let input = input.validated()?;
        let user = User {
            id: UserId::new(),
            username: input.username,
            email: input.email,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, user_id: UserId) -> Result<(), CatalogError> {
        let deleted = self.repo.delete(user_id).await?;
        if !deleted {
            return Err(CatalogError::UserNotFound);
        }
        info!(%user_id, "user deleted");
        Ok(())
    }
}
