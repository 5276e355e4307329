//! Basic example demonstrating the Fortnox API client.
//!
//! Run with:
//! ```
//! FORTNOX_ACCESS_TOKEN=your-token FORTNOX_CLIENT_SECRET=your-secret \
//!     cargo run --example basic
//! ```
//!
//! To obtain an access token from a one-time authorization code, run once
//! with `FORTNOX_AUTH_CODE` set instead of `FORTNOX_ACCESS_TOKEN`.

use fortnoxapi::{Article, Customer, FortnoxClient, Get};

#[tokio::main]
async fn main() -> fortnoxapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let client_secret =
        std::env::var("FORTNOX_CLIENT_SECRET").expect("FORTNOX_CLIENT_SECRET not set");

    // One-time setup: exchange an authorization code for an access token
    if let Ok(auth_code) = std::env::var("FORTNOX_AUTH_CODE") {
        println!("Exchanging authorization code for an access token...");
        let token = FortnoxClient::get_auth_token(&auth_code, &client_secret).await?;
        println!("Access token: {}", token);
        println!("Store it and re-run with FORTNOX_ACCESS_TOKEN set.");
        return Ok(());
    }

    let access_token =
        std::env::var("FORTNOX_ACCESS_TOKEN").expect("FORTNOX_ACCESS_TOKEN not set");

    println!("Creating Fortnox client...");
    let client = FortnoxClient::new(&access_token, &client_secret)?;
    println!("Connected to: {}", client.base_url());

    // Look up a customer by organisation number
    let organisation_number =
        std::env::var("FORTNOX_ORG_NR").unwrap_or_else(|_| "556677-8899".to_string());

    println!("\n--- Finding Customer ---");
    match Customer::by_organisation_number(&client, &organisation_number).await {
        Ok(customer) => {
            println!("Customer: {}", customer.name);
            println!("  Number: {}", customer.customer_number);
            println!("  Organisation number: {}", customer.organisation_number);
            if !customer.email.is_empty() {
                println!("  Email: {}", customer.email);
            }
            if !customer.city.is_empty() {
                println!("  City: {} {}", customer.zip_code, customer.city);
            }
        }
        Err(err) => println!("Customer lookup failed: {}", err),
    }

    // Fetch an article by article number
    let article_number =
        std::env::var("FORTNOX_ARTICLE_NR").unwrap_or_else(|_| "1".to_string());

    println!("\n--- Getting Article ---");
    match Article::get(&client, article_number).await {
        Ok(article) => {
            println!("Article: {}", article.article_number);
            println!("  Description: {}", article.description);
        }
        Err(err) => println!("Article lookup failed: {}", err),
    }

    println!("\nDone!");
    Ok(())
}
