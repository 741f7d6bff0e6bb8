use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum_shop_api::{config::AppConfig, db::create_pool};
use rand::prelude::*;
use uuid::Uuid;

const EMAIL_DOMAINS: [&str; 5] = [
    "example.com",
    "test.com",
    "sample.org",
    "demo.net",
    "mail.com",
];

const SOME_WORDS: [&str; 19] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

const RECORD_COUNT: usize = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_admin(&pool, "admin@example.com", "admin123").await?;
    println!("Ensured admin {admin_id}");

    seed_users(&pool).await?;
    seed_categories(&pool).await?;
    seed_products(&pool).await?;
    seed_cart_items(&pool).await?;
    seed_orders(&pool).await?;
    seed_order_items(&pool).await?;
    seed_reviews(&pool).await?;

    println!("Seed completed");
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

async fn ensure_admin(pool: &sqlx::PgPool, email: &str, password: &str) -> anyhow::Result<Uuid> {
    let password_hash = hash_password(password)?;

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, password_hash, role)
        VALUES ($1, $2, $3, 'admin')
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    let admin_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    Ok(admin_id)
}

async fn seed_users(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    // One shared hash; hashing 20 passwords individually is pointless here.
    let password_hash = hash_password("12345")?;

    let rows: Vec<(Uuid, String, String, bool, String)> = {
        let mut rng = thread_rng();
        (1..=RECORD_COUNT)
            .map(|i| {
                let domain = EMAIL_DOMAINS[rng.gen_range(0..EMAIL_DOMAINS.len())];
                (
                    Uuid::new_v4(),
                    format!("user{i}@{domain}"),
                    format!("+7701{}", rng.gen_range(1_000_000..=9_999_999)),
                    rng.gen_bool(0.5),
                    format!(
                        "Street {}, City {}",
                        rng.gen_range(1..=50),
                        rng.gen_range(1..=10)
                    ),
                )
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, email, phone, is_seller, address) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, phone, is_seller, address)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(&password_hash)
        .bind(phone)
        .bind(is_seller)
        .bind(address)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} user records");
    Ok(())
}

async fn seed_categories(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let rows: Vec<(Uuid, String, String)> = {
        let mut rng = thread_rng();
        (0..RECORD_COUNT)
            .map(|_| {
                let name = capitalize(SOME_WORDS[rng.gen_range(0..SOME_WORDS.len())]);
                let description = format!("Category about {} products.", name.to_lowercase());
                (Uuid::new_v4(), name, description)
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, name, description) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO categories (id, name, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} category records");
    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let categories: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM categories")
        .fetch_all(pool)
        .await?;
    let mut sellers: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE is_seller = TRUE")
        .fetch_all(pool)
        .await?;
    if sellers.is_empty() {
        sellers = sqlx::query_as("SELECT id FROM users").fetch_all(pool).await?;
    }
    if categories.is_empty() || sellers.is_empty() {
        anyhow::bail!("seed users and categories before products");
    }

    let rows: Vec<(Uuid, String, String, i64, String, Uuid, Uuid)> = {
        let mut rng = thread_rng();
        (1..=RECORD_COUNT)
            .map(|i| {
                let first = SOME_WORDS[rng.gen_range(0..SOME_WORDS.len())];
                let second = SOME_WORDS[rng.gen_range(0..SOME_WORDS.len())];
                let name = capitalize(&format!("{first} {second}"));
                (
                    Uuid::new_v4(),
                    name.clone(),
                    format!("Description for {name}"),
                    rng.gen_range(1_000..=50_000),
                    format!("https://placehold.co/150x150?text=Product+{i}"),
                    categories[rng.gen_range(0..categories.len())].0,
                    sellers[rng.gen_range(0..sellers.len())].0,
                )
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, name, description, price, image_url, category_id, seller_id) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, image_url, category_id, seller_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(category_id)
        .bind(seller_id)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} product records");
    Ok(())
}

async fn seed_cart_items(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let users: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM users").fetch_all(pool).await?;
    let products: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM products")
        .fetch_all(pool)
        .await?;
    if users.is_empty() || products.is_empty() {
        anyhow::bail!("seed users and products before cart items");
    }

    let rows: Vec<(Uuid, Uuid, Uuid, i32)> = {
        let mut rng = thread_rng();
        (0..RECORD_COUNT)
            .map(|_| {
                (
                    Uuid::new_v4(),
                    users[rng.gen_range(0..users.len())].0,
                    products[rng.gen_range(0..products.len())].0,
                    rng.gen_range(1..=5),
                )
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, user_id, product_id, quantity) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO cart_items (id, user_id, product_id, quantity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, product_id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} cart item records");
    Ok(())
}

async fn seed_orders(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let users: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM users").fetch_all(pool).await?;
    if users.is_empty() {
        anyhow::bail!("seed users before orders");
    }

    let statuses = ["processing", "shipped", "delivered"];

    let rows: Vec<(Uuid, Uuid, String, String, String, Option<String>, &str, String)> = {
        let mut rng = thread_rng();
        (0..RECORD_COUNT)
            .map(|_| {
                // Courier delivery must carry a personal address.
                let requires_courier = if rng.gen_bool(0.5) {
                    "required"
                } else {
                    "not_required"
                };
                let personal_address = if requires_courier == "required" {
                    Some(format!("Street {}", rng.gen_range(1..=50)))
                } else {
                    None
                };
                (
                    Uuid::new_v4(),
                    users[rng.gen_range(0..users.len())].0,
                    format!("+7701{}", rng.gen_range(1_000_000..=9_999_999)),
                    format!("City {}", rng.gen_range(1..=20)),
                    format!("Pickup {}", rng.gen_range(1..=50)),
                    personal_address,
                    requires_courier,
                    statuses[rng.gen_range(0..statuses.len())].to_string(),
                )
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, user_id, phone, city, pickup, address, requires_courier, status) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, phone_number, delivery_city,
                                delivery_pickup_point, delivery_personal_address,
                                requires_courier_delivery, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(phone)
        .bind(city)
        .bind(pickup)
        .bind(address)
        .bind(requires_courier)
        .bind(status)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} order records");
    Ok(())
}

async fn seed_order_items(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let orders: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM orders").fetch_all(pool).await?;
    let products: Vec<(Uuid, String, i64)> = sqlx::query_as("SELECT id, name, price FROM products")
        .fetch_all(pool)
        .await?;
    if orders.is_empty() || products.is_empty() {
        anyhow::bail!("seed orders and products before order items");
    }

    let rows: Vec<(Uuid, Uuid, Uuid, String, i64, i32)> = {
        let mut rng = thread_rng();
        (0..RECORD_COUNT)
            .map(|_| {
                let product = &products[rng.gen_range(0..products.len())];
                (
                    Uuid::new_v4(),
                    orders[rng.gen_range(0..orders.len())].0,
                    product.0,
                    product.1.clone(),
                    product.2,
                    rng.gen_range(1..=3),
                )
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, order_id, product_id, name, price, quantity) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO order_items (id, order_id, product_id, name, price, quantity)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(order_id)
        .bind(product_id)
        .bind(name)
        .bind(price)
        .bind(quantity)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} order item records");
    Ok(())
}

async fn seed_reviews(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let products: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM products")
        .fetch_all(pool)
        .await?;
    let authors: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM users").fetch_all(pool).await?;
    if products.is_empty() || authors.is_empty() {
        anyhow::bail!("seed users and products before reviews");
    }

    let rows: Vec<(Uuid, Uuid, Uuid, i32, String)> = {
        let mut rng = thread_rng();
        (0..RECORD_COUNT)
            .map(|_| {
                let words: Vec<&str> = (0..10)
                    .map(|_| SOME_WORDS[rng.gen_range(0..SOME_WORDS.len())])
                    .collect();
                (
                    Uuid::new_v4(),
                    products[rng.gen_range(0..products.len())].0,
                    authors[rng.gen_range(0..authors.len())].0,
                    rng.gen_range(1..=5),
                    capitalize(&words.join(" ")),
                )
            })
            .collect()
    };

    let mut created = 0_u64;
    for (id, product_id, author_id, rate, text) in rows {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (id, product_id, author_id, rate, text)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(product_id)
        .bind(author_id)
        .bind(rate)
        .bind(text)
        .execute(pool)
        .await?;
        created += result.rows_affected();
    }

    println!("Created {created} review records");
    Ok(())
}
