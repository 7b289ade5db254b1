//! Auth command handlers.

use anyhow::{Context, Result};
use spense_core::api::{ApiClient, RegisterRequest};
use spense_core::config::Config;
use spense_core::session::{SessionStore, mask_token};

/// Persists a freshly issued token and reports where it went.
fn store_session(token: String) -> Result<()> {
    let mut session = SessionStore::load().context("load session")?;
    session.set_token(token);
    session.save().context("save session")?;
    Ok(())
}

pub async fn login(config: &Config, email: &str, password: &str) -> Result<()> {
    let client = ApiClient::new(config)?;
    let token = client
        .login(email, password)
        .await
        .context("Login failed. Please check your credentials and try again")?;

    store_session(token.clone())?;

    println!("✓ Logged in as {} (token: {})", email, mask_token(&token));
    println!("  Session saved to: {}", SessionStore::session_path().display());
    Ok(())
}

pub async fn register(
    config: &Config,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<()> {
    let client = ApiClient::new(config)?;
    let request = RegisterRequest {
        email,
        password,
        first_name,
        last_name,
    };
    let token = client
        .register(&request)
        .await
        .context("Registration failed. Please check your details and try again")?;

    store_session(token.clone())?;

    println!("✓ Registered {} (token: {})", email, mask_token(&token));
    println!("  Session saved to: {}", SessionStore::session_path().display());
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut session = SessionStore::load().context("load session")?;
    let had_token = session.clear();

    if had_token {
        session.save().context("save session")?;
        println!("✓ Logged out");
        println!(
            "  Token removed from: {}",
            SessionStore::session_path().display()
        );
    } else {
        println!("Not logged in (no session token found).");
    }

    Ok(())
}
