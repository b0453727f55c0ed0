use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

mod api;
mod config;
mod middleware;

#[cfg(test)]
mod tests;

use config::Config;

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    println!("🚀 Starting Taskdeck server...");
    println!("📡 Server will run on http://localhost:{}", config.port);

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS and panic recovery
    let app = api::create_router()
        .layer(cors)
        .layer(middleware::create_panic_handler());

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("✅ Server listening on {}", addr);
    print_endpoints();

    axum::serve(listener, app).await?;

    Ok(())
}

fn print_endpoints() {
    println!("\nAvailable endpoints:");
    println!("GET    /health      - Health check");
    println!("GET    /tasks       - Get all tasks");
    println!("GET    /tasks/:id   - Get task by ID");
    println!("POST   /tasks       - Create new task");
    println!("PUT    /tasks/:id   - Update task");
    println!("DELETE /tasks/:id   - Delete task");
}
