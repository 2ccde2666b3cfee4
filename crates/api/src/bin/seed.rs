//! Database seeding binary.
//!
//! Creates (or refreshes) the admin user from `ADMIN_EMAIL` /
//! `ADMIN_PASSWORD` / `ADMIN_NAME`, and inserts starter content into any
//! empty content table so a fresh environment has something to render.
//!
//! Idempotent: the admin upserts by email, and starter content is only
//! written when its table has no rows.

use anyhow::Context;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_api::password::hash_password;
use atelier_db::models::client::CreateClient;
use atelier_db::models::service::CreateService;
use atelier_db::models::testimonial::CreateTestimonial;
use atelier_db::repositories::{ClientRepo, ServiceRepo, TestimonialRepo, UserRepo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = atelier_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    atelier_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    seed_admin(&pool).await?;
    seed_services(&pool).await?;
    seed_clients(&pool).await?;
    seed_testimonials(&pool).await?;

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed_admin(pool: &PgPool) -> anyhow::Result<()> {
    let email = std::env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?;
    let password = std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".into());

    let hash = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {e}"))?;
    let user = UserRepo::upsert_admin(pool, &name, &email, &hash).await?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin user seeded");
    Ok(())
}

async fn seed_services(pool: &PgPool) -> anyhow::Result<()> {
    if !ServiceRepo::list(pool).await?.is_empty() {
        return Ok(());
    }

    let starters = [
        ("Brand Identity", "branding", "Naming, logo systems, and visual identity."),
        ("Web Design", "layout", "Marketing sites and product interfaces."),
        ("Art Direction", "camera", "Campaign visuals and photography direction."),
    ];
    for (title, icon, description) in starters {
        let input = CreateService {
            title: title.into(),
            slug: None,
            description: description.into(),
            icon: icon.into(),
        };
        let slug = atelier_core::slug::slugify(title);
        ServiceRepo::create(pool, &input, &slug).await?;
    }

    tracing::info!(count = starters.len(), "Starter services seeded");
    Ok(())
}

async fn seed_clients(pool: &PgPool) -> anyhow::Result<()> {
    let existing = ClientRepo::list(pool, None, None, 1, 0).await?;
    if existing.total > 0 {
        return Ok(());
    }

    let starters = [
        ("TechFlow Inc.", "/logos/techflow.svg", Some("https://techflow.example")),
        ("Northwind Studio", "/logos/northwind.svg", None),
    ];
    for (name, logo, website) in starters {
        let input = CreateClient {
            name: name.into(),
            logo: logo.into(),
            website: website.map(Into::into),
            featured: Some(true),
        };
        ClientRepo::create(pool, &input).await?;
    }

    tracing::info!(count = starters.len(), "Starter clients seeded");
    Ok(())
}

async fn seed_testimonials(pool: &PgPool) -> anyhow::Result<()> {
    let existing = TestimonialRepo::list(pool, None, None, 1, 0).await?;
    if existing.total > 0 {
        return Ok(());
    }

    let input = CreateTestimonial {
        name: "Dana Reeves".into(),
        position: "Head of Marketing".into(),
        company: "TechFlow Inc.".into(),
        content: "The rebrand landed exactly where we hoped it would.".into(),
        avatar: None,
        featured: Some(true),
    };
    TestimonialRepo::create(pool, &input).await?;

    tracing::info!("Starter testimonial seeded");
    Ok(())
}
