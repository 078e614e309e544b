//! Lists every open revision the token's user is responsible for.
//!
//! ```sh
//! CONDUIT_HOST=https://phab.example.com CONDUIT_TOKEN=api-... \
//!     cargo run --example revision_search
//! ```

use anyhow::{Context, Result};
use conduit::model::RevisionSearchParams;
use conduit::{Conduit, Paginated};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("CONDUIT_HOST").context("CONDUIT_HOST is not set")?;
    let token = std::env::var("CONDUIT_TOKEN").context("CONDUIT_TOKEN is not set")?;

    let conduit = Conduit::new(&host, token)?;

    let params = RevisionSearchParams {
        query_key: Some("active".into()),
        ..Default::default()
    };
    let revisions = conduit
        .differential()
        .revision()
        .search_all(Paginated::new(params).limit(100))
        .await?;

    for revision in &revisions {
        println!(
            "D{} [{}] {}",
            revision.id, revision.fields.status.name, revision.fields.title
        );
    }
    println!("{} revisions", revisions.len());
    Ok(())
}
