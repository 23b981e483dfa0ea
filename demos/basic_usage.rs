//! End-to-end tour of the resource client against a configured backend.
//!
//! Run with: cargo run --example basic_usage

use restcache::{ClientConfig, ResourceClient};
use serde_json::json;

#[tokio::main]
async fn main() -> restcache::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Initialize with your API details. The TTL defaults to five minutes.
    let api = ResourceClient::new(
        ClientConfig::new()
            .with_api_key("your-actual-api-key")
            .with_base_url("https://api.yourservice.com/v1"),
    )?;

    // Get a resource by id. Repeating this call within the TTL is served
    // from the cache without touching the network.
    let user = api.get("/users", "123").await?;
    println!("User: {}", user);

    // List with filters.
    let all_users = api
        .list(
            "/users",
            &[("limit", "10"), ("offset", "0"), ("status", "active")],
        )
        .await?;
    println!("All users: {}", all_users);

    // Create a new resource. Any successful mutation clears the cache so
    // later reads see fresh state.
    let new_user = api
        .create(
            "/users",
            &json!({
                "name": "John Doe",
                "email": "john@example.com",
                "role": "user"
            }),
        )
        .await?;
    println!("Created user: {}", new_user);

    // Update it.
    let updated = api
        .update(
            "/users",
            "123",
            &json!({"name": "John Smith", "status": "verified"}),
        )
        .await?;
    println!("Updated user: {}", updated);

    // Search.
    let results = api
        .search("/users/search", "john", &[("role", "user")])
        .await?;
    println!("Search results: {}", results);

    // Delete.
    api.delete("/users", "123").await?;
    println!("User deleted successfully");

    Ok(())
}
