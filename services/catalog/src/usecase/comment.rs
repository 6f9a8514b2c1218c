use chrono::Utc;
use tracing::info;

use auctions_domain::id::CommentId;

use crate::domain::repository::{CommentRepository, ListingRepository, UserRepository};
use crate::domain::types::{Comment, NewComment};
use crate::error::CatalogError;

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentUseCase<R: CommentRepository, L: ListingRepository, U: UserRepository> {
    pub repo: R,
    pub listings: L,
    pub users: U,
}

impl<R, L, U> CreateCommentUseCase<R, L, U>
where
    R: CommentRepository,
    L: ListingRepository,
    U: UserRepository,
{
    pub async fn execute(&self, input: NewComment) -> Result<Comment, CatalogError> {
        let input = input.validated()?;
        self.listings
            .find_by_id(input.listing_id)
            .await?
            .ok_or(CatalogError::ListingNotFound)?;
        self.users
            .find_by_id(input.user_id)
            .await?
            .ok_or(CatalogError::UserNotFound)?;

        let comment = Comment {
            id: CommentId::new(),
            listing_id: input.listing_id,
            user_id: input.user_id,
            content: input.content,
            created_at: Utc::now(),
        };
        self.repo.create(&comment).await?;
        info!(comment_id = %comment.id, listing_id = %comment.listing_id, "comment created");
        Ok(comment)
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<R: CommentRepository> {
    pub repo: R,
}

impl<R: CommentRepository> DeleteCommentUseCase<R> {
    pub async fn execute(&self, comment_id: CommentId) -> Result<(), CatalogError> {
        let deleted = self.repo.delete(comment_id).await?;
        if !deleted {
            return Err(CatalogError::CommentNotFound);
        }
        info!(%comment_id, "comment deleted");
        Ok(())
    }
}
