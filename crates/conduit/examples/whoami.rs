//! Prints the user the configured API token belongs to.
//!
//! ```sh
//! CONDUIT_HOST=https://phab.example.com CONDUIT_TOKEN=api-... \
//!     cargo run --example whoami
//! ```

use anyhow::{Context, Result};
use conduit::Conduit;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("CONDUIT_HOST").context("CONDUIT_HOST is not set")?;
    let token = std::env::var("CONDUIT_TOKEN").context("CONDUIT_TOKEN is not set")?;

    let conduit = Conduit::new(&host, token)?;
    let me = conduit.user().whoami().await?;

    println!("{} ({}) <{}>", me.user_name, me.real_name, me.primary_email);
    Ok(())
}
