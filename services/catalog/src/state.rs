use anyhow::Context as _;
use sea_orm::DatabaseConnection;

use auctions_core::config::Config as _;

use crate::config::CatalogConfig;
use crate::infra::db::{
    self, DbBidRepository, DbCategoryRepository, DbCommentRepository, DbListingRepository,
    DbUserRepository, DbWishlistRepository,
};

/// Shared handle to the catalog store. Cheap to clone; hands out repositories
/// backed by the same connection pool.
#[derive(Clone)]
pub struct Catalog {
    pub db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(config: &CatalogConfig) -> anyhow::Result<Self> {
        Ok(Self::new(db::connect(config).await?))
    }

    /// Install the configured tracing subscriber, then connect.
    pub async fn bootstrap(config: &CatalogConfig) -> anyhow::Result<Self> {
        auctions_core::tracing::init_tracing(config.log_format);
        Self::connect(config).await
    }

    /// [`Catalog::bootstrap`] with configuration read from the environment.
    pub async fn from_env() -> anyhow::Result<Self> {
        let config = CatalogConfig::from_env().context("load catalog config")?;
        Self::bootstrap(&config).await
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn listing_repo(&self) -> DbListingRepository {
        DbListingRepository {
            db: self.db.clone(),
        }
    }

    pub fn bid_repo(&self) -> DbBidRepository {
        DbBidRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn wishlist_repo(&self) -> DbWishlistRepository {
        DbWishlistRepository {
            db: self.db.clone(),
        }
    }
}
