use async_trait::async_trait;

use crate::domain::entities::{Category, Item, ReviewBox, ReviewDate, User};
use crate::shared::error::AppError;

/// Persistence seams, one per aggregate. Concrete storage, transactions
/// and query mechanics live behind these traits; the domain only
/// propagates whatever the implementation returns.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<(), AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn update_user(&self, user: &User) -> Result<(), AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(&self, category: &Category) -> Result<(), AppError>;
    async fn get_categories_by_user(&self, user_id: &str) -> Result<Vec<Category>, AppError>;
    async fn update_category(&self, category: &Category) -> Result<(), AppError>;
    async fn delete_category(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReviewBoxRepository: Send + Sync {
    async fn create_box(&self, review_box: &ReviewBox) -> Result<(), AppError>;
    async fn get_boxes_by_category(&self, category_id: &str) -> Result<Vec<ReviewBox>, AppError>;
    async fn update_box(&self, review_box: &ReviewBox) -> Result<(), AppError>;
    async fn delete_box(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create_item(&self, item: &Item) -> Result<(), AppError>;
    async fn get_item(&self, id: &str) -> Result<Option<Item>, AppError>;
    async fn get_items_by_user(&self, user_id: &str) -> Result<Vec<Item>, AppError>;
    async fn update_item(&self, item: &Item) -> Result<(), AppError>;
    async fn delete_item(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReviewDateRepository: Send + Sync {
    async fn create_review_dates(&self, review_dates: &[ReviewDate]) -> Result<(), AppError>;
    async fn get_review_dates_by_item(&self, item_id: &str) -> Result<Vec<ReviewDate>, AppError>;
    async fn update_review_date(&self, review_date: &ReviewDate) -> Result<(), AppError>;
    async fn delete_review_dates_by_item(&self, item_id: &str) -> Result<(), AppError>;
}
