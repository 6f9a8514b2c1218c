use auctions_domain::validation::ValidationError;

/// Catalog error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("user not found")]
    UserNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("listing not found")]
    ListingNotFound,
    #[error("bid not found")]
    BidNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("username already taken")]
    UsernameTaken,
    #[error("category code already taken")]
    CategoryCodeTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::ListingNotFound => "LISTING_NOT_FOUND",
            Self::BidNotFound => "BID_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::CategoryCodeTaken => "CATEGORY_CODE_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound
                | Self::CategoryNotFound
                | Self::ListingNotFound
                | Self::BidNotFound
                | Self::CommentNotFound
        )
    }

    /// Log storage failures and pass the error on. Use at the boundary that
    /// hands errors to users; the other variants are expected outcomes.
    pub fn log_internal(self) -> Self {
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        self
    }
}
