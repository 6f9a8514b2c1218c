use tracing::info;

use auctions_domain::id::CategoryId;

use crate::domain::repository::CategoryRepository;
use crate::domain::types::{Category, NewCategory};
use crate::error::CatalogError;

// ── CreateCategory ───────────────────────────────────────────────────────────

pub struct CreateCategoryUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> CreateCategoryUseCase<R> {
    pub async fn execute(&self, input: NewCategory) -> Result<Category, CatalogError> {
        let input = input.validated()?;
        // Racing inserts are still caught by the unique index.
        if self.repo.find_by_code(&input.code).await?.is_some() {
            return Err(CatalogError::CategoryCodeTaken);
        }
        let category = Category {
            id: CategoryId::new(),
            code: input.code,
            name: input.name,
        };
        self.repo.create(&category).await?;
        info!(category_id = %category.id, code = %category.code, "category created");
        Ok(category)
    }
}

// ── DeleteCategory ───────────────────────────────────────────────────────────

pub struct DeleteCategoryUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> DeleteCategoryUseCase<R> {
    pub async fn execute(&self, category_id: CategoryId) -> Result<(), CatalogError> {
        let deleted = self.repo.delete(category_id).await?;
        if !deleted {
            return Err(CatalogError::CategoryNotFound);
        }
        info!(%category_id, "category deleted");
        Ok(())
    }
}
