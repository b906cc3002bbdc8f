use axum::{
    Json, Router,
    middleware::from_fn,
    routing::get,
};

use dotenvy::dotenv;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_auth_axum::{AUTH_ROUTE_PREFIX, AuthUser, authenticate, session_auth_router};

async fn index(user: Option<AuthUser>) -> Json<serde_json::Value> {
    match user {
        Some(user) => Json(json!({
            "message": format!("Hello, {}!", user.name),
            "email": user.email,
            "admin": user.is_admin(),
        })),
        None => Json(json!({
            "message": "Hello, stranger!",
            "hint": format!("Sign in at POST {}/signin", AUTH_ROUTE_PREFIX.as_str()),
        })),
    }
}

// The AuthUser extractor rejects anonymous requests with 401
async fn protected(user: AuthUser) -> Json<serde_json::Value> {
    Json(json!({
        "message": format!("This page is only for you, {}.", user.name),
        "user_id": user.id,
    }))
}

fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!("session_auth_axum=debug,session_auth=debug,{app_name}=debug,info").into()
        }

        #[cfg(not(debug_assertions))]
        {
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("demo_session");

    dotenv().ok();
    session_auth_axum::init().await?;

    let app = Router::new()
        .route("/", get(index))
        .route("/protected", get(protected))
        .nest(AUTH_ROUTE_PREFIX.as_str(), session_auth_router())
        .layer(from_fn(authenticate));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
