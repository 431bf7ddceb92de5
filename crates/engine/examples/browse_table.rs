//! Simple harness for the candidate table.
//!
//! Loads a payload, runs a filter and a sort, and logs the first page.
//!
//! Run with: cargo run --package engine --example browse_table -- data/candidates.json

use anyhow::Result;
use tracing::info;

use engine::{CandidateSource, CandidateTable, EngineConfig, SortColumn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,engine=debug,pipeline=debug")
        .init();

    let source: CandidateSource = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/candidates.json".to_string())
        .parse()?;

    info!("Loading candidates...");
    let mut table = CandidateTable::load(&source, &EngineConfig::default()).await?;

    let stats = table.stats();
    info!(
        "{} uploads, {} errors, {}% success",
        stats.total_uploads, stats.total_errors, stats.success_rate
    );

    table.apply_filter("", "python");
    table.sort(SortColumn::UploadDate);

    let page = table.page();
    info!("{} (page {} of {})", page.caption(), page.current_page, page.total_pages);
    for (i, candidate) in page.rows.iter().enumerate() {
        info!(
            "{}. {} <{}> [{}]",
            i + 1,
            candidate.name(),
            candidate.email().unwrap_or("N/A"),
            candidate.skills_joined(", ")
        );
    }

    Ok(())
}
