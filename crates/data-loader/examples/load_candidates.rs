//! Example: load a candidate payload and print a short summary
//!
//! Run with: cargo run --package data-loader --example load_candidates -- data/candidates.json

use data_loader::{CandidateSet, CandidateSource};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let source: CandidateSource = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/candidates.json".to_string())
        .parse()?;

    println!("Loading candidates from {}...\n", source);

    let start = Instant::now();
    let set = CandidateSet::load(&source).await?;
    let elapsed = start.elapsed();

    let named = set.iter().filter(|c| c.has_name()).count();
    let with_email = set.iter().filter(|c| c.email().is_some()).count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", set.len());
    println!("Named: {}", named);
    println!("With email: {}", with_email);

    Ok(())
}
