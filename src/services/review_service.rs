use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::reviews::{CreateReviewRequest, ReviewList},
    entity::{
        Products,
        reviews::{ActiveModel as ReviewActive, Column as ReviewCol, Entity as Reviews, Model as ReviewModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Review,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub const MIN_RATE: i32 = 0;
pub const MAX_RATE: i32 = 5;

pub fn validate_rate(rate: i32) -> Result<(), AppError> {
    if (MIN_RATE..=MAX_RATE).contains(&rate) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "rate must be between {MIN_RATE} and {MAX_RATE}"
        )))
    }
}

pub async fn list_reviews(
    state: &AppState,
    product_id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<ReviewList>> {
    if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let (page, limit, offset) = pagination.normalize();

    let finder = Reviews::find()
        .filter(ReviewCol::ProductId.eq(product_id))
        .order_by_desc(ReviewCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(review_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Reviews",
        ReviewList { items },
        Some(meta),
    ))
}

pub async fn create_review(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    validate_rate(payload.rate)?;
    if payload.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".into()));
    }

    if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let review = ReviewActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        author_id: Set(user.user_id),
        rate: Set(payload.rate),
        text: Set(payload.text),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "review_create",
        Some("reviews"),
        Some(serde_json::json!({ "review_id": review.id, "product_id": product_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Review created",
        review_from_entity(review),
        Some(Meta::empty()),
    ))
}

fn review_from_entity(model: ReviewModel) -> Review {
    Review {
        id: model.id,
        product_id: model.product_id,
        author_id: model.author_id,
        rate: model.rate,
        text: model.text,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
