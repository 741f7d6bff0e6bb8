use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::{CheckoutRequest, OrderList, OrderWithItems},
    entity::{
        cart_items::{self, Column as CartCol, Entity as CartItems},
        order_items::{
            ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems,
            Model as OrderItemModel,
        },
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::Column as ProdCol,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Order, OrderItem},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    services::cart_service::cart_totals,
    state::AppState,
};

pub const VALID_ORDER_STATUSES: [&str; 3] = ["processing", "shipped", "delivered"];

pub const COURIER_DELIVERY: &str = "required";
pub const PICKUP_DELIVERY: &str = "not_required";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("phone pattern is valid"));

pub fn validate_order_status(status: &str) -> Result<(), AppError> {
    if VALID_ORDER_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid order status".into()))
    }
}

/// Up to 15 digits, optional leading `+`.
pub fn validate_phone_number(phone: &str) -> Result<(), AppError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Phone number must be entered in the format '+999999999', up to 15 digits".into(),
        ))
    }
}

/// Courier delivery is only valid with a non-empty personal address.
pub fn validate_delivery(
    requires_courier_delivery: &str,
    personal_address: Option<&str>,
) -> Result<(), AppError> {
    match requires_courier_delivery {
        PICKUP_DELIVERY => Ok(()),
        COURIER_DELIVERY => match personal_address {
            Some(address) if !address.trim().is_empty() => Ok(()),
            _ => Err(AppError::BadRequest(
                "Courier delivery requires a personal address".into(),
            )),
        },
        _ => Err(AppError::BadRequest("Invalid delivery option".into())),
    }
}

pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all().add(OrderCol::UserId.eq(user.user_id));
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::Status.eq(status.clone()));
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);

    let mut finder = Orders::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(OrderCol::CreatedAt),
        SortOrder::Desc => finder.order_by_desc(OrderCol::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Ok",
        OrderList { items: orders },
        Some(meta),
    ))
}

/// Convert the user's cart into an order. Product name and price are
/// copied onto each order item so the order survives later catalog edits.
pub async fn checkout(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    validate_phone_number(&payload.phone_number)?;
    validate_delivery(
        &payload.requires_courier_delivery,
        payload.delivery_personal_address.as_deref(),
    )?;
    if payload.delivery_city.trim().is_empty() {
        return Err(AppError::BadRequest("delivery_city must not be empty".into()));
    }
    if payload.delivery_pickup_point.trim().is_empty() {
        return Err(AppError::BadRequest(
            "delivery_pickup_point must not be empty".into(),
        ));
    }

    let txn = state.orm.begin().await?;

    #[derive(Debug, FromQueryResult)]
    struct CartProductRow {
        product_id: Uuid,
        quantity: i32,
        name: String,
        price: i64,
    }

    let rows = CartItems::find()
        .select_only()
        .column_as(CartCol::ProductId, "product_id")
        .column_as(CartCol::Quantity, "quantity")
        .column_as(ProdCol::Name, "name")
        .column_as(ProdCol::Price, "price")
        .join(JoinType::InnerJoin, cart_items::Relation::Products.def())
        .filter(CartCol::UserId.eq(user.user_id))
        .lock(LockType::Update)
        .into_model::<CartProductRow>()
        .all(&txn)
        .await?;

    if rows.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }
    for row in &rows {
        if row.quantity <= 0 {
            return Err(AppError::BadRequest("Cart has invalid quantity".into()));
        }
    }

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        phone_number: Set(payload.phone_number),
        delivery_city: Set(payload.delivery_city),
        delivery_pickup_point: Set(payload.delivery_pickup_point),
        delivery_personal_address: Set(payload.delivery_personal_address),
        requires_courier_delivery: Set(payload.requires_courier_delivery),
        is_paid: Set(false),
        status: Set("processing".into()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let mut order_items: Vec<OrderItem> = Vec::new();

    for row in &rows {
        let item = OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            product_id: Set(Some(row.product_id)),
            name: Set(row.name.clone()),
            price: Set(row.price),
            quantity: Set(row.quantity),
            created_at: NotSet,
        }
        .insert(&txn)
        .await?;

        order_items.push(order_item_from_entity(item));
    }

    // clear cart
    CartItems::delete_many()
        .filter(CartCol::UserId.eq(user.user_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "checkout",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let (total, _) = cart_totals(order_items.iter().map(|i| (i.price, i.quantity)));

    Ok(ApiResponse::success(
        "Checkout success",
        OrderWithItems {
            order: order_from_entity(order),
            items: order_items,
            total,
        },
        Some(Meta::empty()),
    ))
}

pub async fn pay_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let txn = state.orm.begin().await?;

    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserId.eq(user.user_id))
                .add(OrderCol::Id.eq(id)),
        )
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    if order.is_paid {
        return Err(AppError::BadRequest("Order already paid".into()));
    }

    let mut active: OrderActive = order.into();
    active.is_paid = Set(true);
    active.updated_at = Set(Utc::now().into());
    let order = active.update(&txn).await?;

    let items: Vec<OrderItem> = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .all(&txn)
        .await?
        .into_iter()
        .map(order_item_from_entity)
        .collect();

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "order_paid",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let (total, _) = cart_totals(items.iter().map(|i| (i.price, i.quantity)));

    Ok(ApiResponse::success(
        "Payment recorded",
        OrderWithItems {
            order: order_from_entity(order),
            items,
            total,
        },
        Some(Meta::empty()),
    ))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserId.eq(user.user_id))
                .add(OrderCol::Id.eq(id)),
        )
        .one(&state.orm)
        .await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let items: Vec<OrderItem> = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_item_from_entity)
        .collect();

    let (total, _) = cart_totals(items.iter().map(|i| (i.price, i.quantity)));

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems {
            order: order_from_entity(order),
            items,
            total,
        },
        Some(Meta::empty()),
    ))
}

pub(crate) fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        phone_number: model.phone_number,
        delivery_city: model.delivery_city,
        delivery_pickup_point: model.delivery_pickup_point,
        delivery_personal_address: model.delivery_personal_address,
        requires_courier_delivery: model.requires_courier_delivery,
        is_paid: model.is_paid,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

pub(crate) fn order_item_from_entity(model: OrderItemModel) -> OrderItem {
    OrderItem {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        name: model.name,
        price: model.price,
        quantity: model.quantity,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
