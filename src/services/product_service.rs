use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
};

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &ProductQuery) {
    if let Some(q) = query.q.as_ref().filter(|q| !q.is_empty()) {
        qb.push(" AND name ILIKE ");
        qb.push_bind(format!("%{q}%"));
    }
    if let Some(category_id) = query.category_id {
        qb.push(" AND category_id = ");
        qb.push_bind(category_id);
    }
    if let Some(seller_id) = query.seller_id {
        qb.push(" AND seller_id = ");
        qb.push_bind(seller_id);
    }
    if let Some(min_price) = query.min_price {
        qb.push(" AND price >= ");
        qb.push_bind(min_price);
    }
    if let Some(max_price) = query.max_price {
        qb.push(" AND price <= ");
        qb.push_bind(max_price);
    }
}

pub async fn list_products(
    pool: &DbPool,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM products WHERE TRUE");
    push_filters(&mut count_qb, &query);
    let total: i64 = count_qb.build_query_scalar().fetch_one(pool).await?;

    let sort_by = query.sort_by.unwrap_or(ProductSortBy::CreatedAt);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);

    let mut qb = QueryBuilder::new("SELECT * FROM products WHERE TRUE");
    push_filters(&mut qb, &query);
    qb.push(format!(" ORDER BY {} {}", sort_by.as_sql(), sort_order.as_sql()));
    qb.push(" LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    let items = qb.build_query_as::<Product>().fetch_all(pool).await?;

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub async fn get_product(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    pool: &DbPool,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if payload.price < 0 {
        return Err(AppError::BadRequest("price must not be negative".into()));
    }

    let seller: Option<(bool,)> = sqlx::query_as("SELECT is_seller FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_optional(pool)
        .await?;
    match seller {
        Some((true,)) => {}
        _ => return Err(AppError::Forbidden),
    }

    let category_exist: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM categories WHERE id = $1")
        .bind(payload.category_id)
        .fetch_optional(pool)
        .await?;
    if category_exist.is_none() {
        return Err(AppError::BadRequest("category not found".to_string()));
    }

    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (id, name, description, price, image_url, category_id, seller_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_url)
    .bind(payload.category_id)
    .bind(user.user_id)
    .fetch_one(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        Some(user.user_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    pool: &DbPool,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    ensure_owner_or_admin(&existing, user)?;

    if let Some(price) = payload.price {
        if price < 0 {
            return Err(AppError::BadRequest("price must not be negative".into()));
        }
    }
    if let Some(category_id) = payload.category_id {
        let category_exist: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM categories WHERE id = $1")
                .bind(category_id)
                .fetch_optional(pool)
                .await?;
        if category_exist.is_none() {
            return Err(AppError::BadRequest("category not found".to_string()));
        }
    }

    let name = payload.name.unwrap_or(existing.name);
    let description = payload.description.or(existing.description);
    let price = payload.price.unwrap_or(existing.price);
    let image_url = payload.image_url.or(existing.image_url);
    let category_id = payload.category_id.unwrap_or(existing.category_id);

    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = $2, description = $3, price = $4, image_url = $5, category_id = $6
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(image_url)
    .bind(category_id)
    .fetch_one(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        Some(user.user_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(
    pool: &DbPool,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let existing = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    ensure_owner_or_admin(&existing, user)?;

    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if let Err(err) = log_audit(
        pool,
        Some(user.user_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn ensure_owner_or_admin(product: &Product, user: &AuthUser) -> Result<(), AppError> {
    if product.seller_id != user.user_id && user.role != "admin" {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
