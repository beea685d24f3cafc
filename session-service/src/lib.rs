use std::{error::Error, future::Future, pin::Pin};

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use app_state::AppState;
use middleware::{optional_auth, require_auth};
use routes::{health, login, logout, me, refresh, register, status, verify_token};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let public = Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login))
        .route("/refresh", post(refresh::refresh));

    let protected = Router::new()
        .route("/verify", post(verify_token::verify_token))
        .route("/me", get(me::me))
        .route("/logout", post(logout::logout))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth));

    // Same handlers for anonymous and signed-in callers.
    let optional = Router::new()
        .route("/status", get(status::status))
        .route_layer(from_fn_with_state(app_state.clone(), optional_auth));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/auth", public.merge(protected).merge(optional))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    /// Binds `address` (port 0 picks a free port) and prepares the server
    /// without starting it.
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        let server = axum::serve(listener, app_router(app_state));

        Ok(Self {
            http_future: Box::pin(async move { server.await }),
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!(address = %self.address, "listening");
        self.http_future.await
    }
}
