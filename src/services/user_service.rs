use crate::{
    audit::log_audit,
    db::DbPool,
    dto::users::UpdateProfileRequest,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::User,
    response::{ApiResponse, Meta},
};

pub async fn get_me(pool: &DbPool, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let me: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_optional(pool)
        .await?;
    let me = match me {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("OK", me, None))
}

pub async fn update_me(
    pool: &DbPool,
    user: &AuthUser,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<User>> {
    let existing: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_optional(pool)
        .await?;
    let existing = match existing {
        Some(u) => u,
        None => return Err(AppError::NotFound),
    };

    let phone = payload.phone.or(existing.phone);
    let address = payload.address.or(existing.address);
    let is_seller = payload.is_seller.unwrap_or(existing.is_seller);

    let updated: User = sqlx::query_as(
        r#"
        UPDATE users
        SET phone = $2, address = $3, is_seller = $4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user.user_id)
    .bind(phone)
    .bind(address)
    .bind(is_seller)
    .fetch_one(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        Some(user.user_id),
        "profile_update",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.user_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Profile updated",
        updated,
        Some(Meta::empty()),
    ))
}
