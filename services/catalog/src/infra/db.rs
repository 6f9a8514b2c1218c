use anyhow::Context as _;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    sea_query::OnConflict,
};
use tracing::info;

use auctions_catalog_schema::{auction_listings, bids, categories, comments, users, wishlist_items};
use auctions_core::sea_ext::DbErrExt as _;
use auctions_domain::id::{BidId, CategoryId, CommentId, ListingId, UserId};

use crate::config::CatalogConfig;
use crate::domain::repository::{
    BidRepository, CategoryRepository, CommentRepository, ListingRepository, UserRepository,
    WishlistRepository,
};
use crate::domain::types::{AuctionListing, Bid, Category, Comment, User};
use crate::error::CatalogError;

/// Open a connection pool sized and logged per `config`.
pub async fn connect(config: &CatalogConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.database_max_connections)
        .sqlx_logging(config.database_sqlx_logging);
    let db = Database::connect(options)
        .await
        .context("connect to database")?;
    info!(
        max_connections = config.database_max_connections,
        "database connected"
    );
    Ok(db)
}

/// Amounts read back from storage carry exactly two decimal places.
fn money(mut amount: Decimal) -> Decimal {
    amount.rescale(2);
    amount
}

fn internal(e: DbErr, context: &'static str) -> CatalogError {
    CatalogError::Internal(anyhow::Error::new(e).context(context))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, CatalogError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), CatalogError> {
        users::ActiveModel {
            id: Set(user.id.0),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                CatalogError::UsernameTaken
            } else {
                internal(e, "create user")
            }
        })?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<bool, CatalogError> {
        let result = users::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id.into(),
        username: model.username,
        email: model.email,
        created_at: model.created_at,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CatalogError> {
        let model = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Category>, CatalogError> {
        let model = categories::Entity::find()
            .filter(categories::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find category by code")?;
        Ok(model.map(category_from_model))
    }

    async fn list(&self) -> Result<Vec<Category>, CatalogError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .order_by_asc(categories::Column::Code)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn create(&self, category: &Category) -> Result<(), CatalogError> {
        categories::ActiveModel {
            id: Set(category.id.0),
            code: Set(category.code.clone()),
            name: Set(category.name.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                CatalogError::CategoryCodeTaken
            } else {
                internal(e, "create category")
            }
        })?;
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CatalogError> {
        let result = categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete category")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id.into(),
        code: model.code,
        name: model.name,
    }
}

// ── Listing repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbListingRepository {
    pub db: DatabaseConnection,
}

impl ListingRepository for DbListingRepository {
    async fn find_by_id(&self, id: ListingId) -> Result<Option<AuctionListing>, CatalogError> {
        let model = auction_listings::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find listing by id")?;
        Ok(model.map(listing_from_model))
    }

    async fn create(&self, listing: &AuctionListing) -> Result<(), CatalogError> {
        auction_listings::ActiveModel {
            id: Set(listing.id.0),
            title: Set(listing.title.clone()),
            description: Set(listing.description.clone()),
            starting_bid: Set(listing.starting_bid),
            image: Set(listing.image.clone()),
            is_active: Set(listing.is_active),
            user_id: Set(listing.user_id.0),
            category_id: Set(listing.category_id.map(|id| id.0)),
            closing_bid_id: Set(listing.closing_bid_id.map(|id| id.0)),
            created_at: Set(listing.created_at),
        }
        .insert(&self.db)
        .await
        .context("create listing")?;
        Ok(())
    }

    async fn update(&self, listing: &AuctionListing) -> Result<(), CatalogError> {
        auction_listings::ActiveModel {
            id: Set(listing.id.0),
            title: Set(listing.title.clone()),
            description: Set(listing.description.clone()),
            image: Set(listing.image.clone()),
            is_active: Set(listing.is_active),
            category_id: Set(listing.category_id.map(|id| id.0)),
            closing_bid_id: Set(listing.closing_bid_id.map(|id| id.0)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update listing")?;
        Ok(())
    }

    async fn delete(&self, id: ListingId) -> Result<bool, CatalogError> {
        let result = auction_listings::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete listing")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<AuctionListing>, CatalogError> {
        let models = auction_listings::Entity::find()
            .filter(auction_listings::Column::UserId.eq(user_id.0))
            .order_by_asc(auction_listings::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list listings by user")?;
        Ok(models.into_iter().map(listing_from_model).collect())
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<AuctionListing>, CatalogError> {
        let models = auction_listings::Entity::find()
            .filter(auction_listings::Column::CategoryId.eq(category_id.0))
            .order_by_asc(auction_listings::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list listings by category")?;
        Ok(models.into_iter().map(listing_from_model).collect())
    }

    async fn list_active(&self) -> Result<Vec<AuctionListing>, CatalogError> {
        let models = auction_listings::Entity::find()
            .filter(auction_listings::Column::IsActive.eq(true))
            .order_by_asc(auction_listings::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list active listings")?;
        Ok(models.into_iter().map(listing_from_model).collect())
    }
}

fn listing_from_model(model: auction_listings::Model) -> AuctionListing {
    AuctionListing {
        id: model.id.into(),
        title: model.title,
        description: model.description,
        starting_bid: money(model.starting_bid),
        image: model.image,
        is_active: model.is_active,
        user_id: model.user_id.into(),
        category_id: model.category_id.map(CategoryId::from),
        closing_bid_id: model.closing_bid_id.map(BidId::from),
        created_at: model.created_at,
    }
}

// ── Bid repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBidRepository {
    pub db: DatabaseConnection,
}

impl BidRepository for DbBidRepository {
    async fn find_by_id(&self, id: BidId) -> Result<Option<Bid>, CatalogError> {
        let model = bids::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find bid by id")?;
        Ok(model.map(bid_from_model))
    }

    async fn create(&self, bid: &Bid) -> Result<(), CatalogError> {
        bids::ActiveModel {
            id: Set(bid.id.0),
            auction_listing_id: Set(bid.listing_id.0),
            user_id: Set(bid.user_id.map(|id| id.0)),
            amount: Set(bid.amount),
            created_at: Set(bid.created_at),
        }
        .insert(&self.db)
        .await
        .context("create bid")?;
        Ok(())
    }

    async fn delete(&self, id: BidId) -> Result<bool, CatalogError> {
        let result = bids::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete bid")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_listing(&self, listing_id: ListingId) -> Result<Vec<Bid>, CatalogError> {
        let models = bids::Entity::find()
            .filter(bids::Column::AuctionListingId.eq(listing_id.0))
            .order_by_asc(bids::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list bids by listing")?;
        Ok(models.into_iter().map(bid_from_model).collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Bid>, CatalogError> {
        let models = bids::Entity::find()
            .filter(bids::Column::UserId.eq(user_id.0))
            .order_by_asc(bids::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list bids by user")?;
        Ok(models.into_iter().map(bid_from_model).collect())
    }

    async fn highest_for_listing(
        &self,
        listing_id: ListingId,
    ) -> Result<Option<Bid>, CatalogError> {
        // Ids are time-ordered, so they break ties on identical timestamps.
        let model = bids::Entity::find()
            .filter(bids::Column::AuctionListingId.eq(listing_id.0))
            .order_by_desc(bids::Column::Amount)
            .order_by_asc(bids::Column::CreatedAt)
            .order_by_asc(bids::Column::Id)
            .one(&self.db)
            .await
            .context("find highest bid")?;
        Ok(model.map(bid_from_model))
    }
}

fn bid_from_model(model: bids::Model) -> Bid {
    Bid {
        id: model.id.into(),
        listing_id: model.auction_listing_id.into(),
        user_id: model.user_id.map(UserId::from),
        amount: money(model.amount),
        created_at: model.created_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CatalogError> {
        let model = comments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn create(&self, comment: &Comment) -> Result<(), CatalogError> {
        comments::ActiveModel {
            id: Set(comment.id.0),
            auction_listing_id: Set(comment.listing_id.0),
            user_id: Set(comment.user_id.0),
            content: Set(comment.content.clone()),
            created_at: Set(comment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create comment")?;
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CatalogError> {
        let result = comments::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_by_listing(&self, listing_id: ListingId) -> Result<Vec<Comment>, CatalogError> {
        let models = comments::Entity::find()
            .filter(comments::Column::AuctionListingId.eq(listing_id.0))
            .order_by_asc(comments::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list comments by listing")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, CatalogError> {
        let models = comments::Entity::find()
            .filter(comments::Column::UserId.eq(user_id.0))
            .order_by_asc(comments::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list comments by user")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }
}

fn comment_from_model(model: comments::Model) -> Comment {
    Comment {
        id: model.id.into(),
        listing_id: model.auction_listing_id.into(),
        user_id: model.user_id.into(),
        content: model.content,
        created_at: model.created_at,
    }
}

// ── Wishlist repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWishlistRepository {
    pub db: DatabaseConnection,
}

impl WishlistRepository for DbWishlistRepository {
    async fn add(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError> {
        let item = wishlist_items::ActiveModel {
            user_id: Set(user_id.0),
            auction_listing_id: Set(listing_id.0),
        };
        let inserted = wishlist_items::Entity::insert(item)
            .on_conflict(
                OnConflict::columns([
                    wishlist_items::Column::UserId,
                    wishlist_items::Column::AuctionListingId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("add wishlist item")?;
        Ok(inserted > 0)
    }

    async fn remove(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError> {
        let result = wishlist_items::Entity::delete_many()
            .filter(wishlist_items::Column::UserId.eq(user_id.0))
            .filter(wishlist_items::Column::AuctionListingId.eq(listing_id.0))
            .exec(&self.db)
            .await
            .context("remove wishlist item")?;
        Ok(result.rows_affected > 0)
    }

    async fn contains(&self, user_id: UserId, listing_id: ListingId) -> Result<bool, CatalogError> {
        let count = wishlist_items::Entity::find_by_id((user_id.0, listing_id.0))
            .count(&self.db)
            .await
            .context("check wishlist item")?;
        Ok(count > 0)
    }

    async fn list_listings(&self, user_id: UserId) -> Result<Vec<AuctionListing>, CatalogError> {
        let models = auction_listings::Entity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                auction_listings::Relation::WishlistItems.def(),
            )
            .filter(wishlist_items::Column::UserId.eq(user_id.0))
            .order_by_asc(auction_listings::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list wishlist listings")?;
        Ok(models.into_iter().map(listing_from_model).collect())
    }

    async fn list_users(&self, listing_id: ListingId) -> Result<Vec<UserId>, CatalogError> {
        let models = wishlist_items::Entity::find()
            .filter(wishlist_items::Column::AuctionListingId.eq(listing_id.0))
            .all(&self.db)
            .await
            .context("list wishlist users")?;
        Ok(models.into_iter().map(|m| UserId::from(m.user_id)).collect())
    }
}
