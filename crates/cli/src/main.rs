use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{CandidateSource, CandidateTable, EngineConfig, SortColumn};
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

mod render;
mod shell;

/// candidate-dash - Admin dashboard for parsed resume candidates
#[derive(Parser)]
#[command(name = "candidate-dash")]
#[command(about = "Search, sort, page through and export parsed resume candidates", long_about = None)]
struct Cli {
    /// Candidate payload: a JSON file path or an http(s) URL
    #[arg(short, long, default_value = "data/candidates.json")]
    source: String,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// JSON config file, e.g. {"pageSize": 10}
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Filter and sort steps, applied in the order a user would click them
#[derive(Args, Debug)]
struct ViewArgs {
    /// Search name, email and skills (case-insensitive)
    #[arg(long, default_value = "")]
    search: String,

    /// Keep only candidates with a skill containing this text
    #[arg(long, default_value = "")]
    skill: String,

    /// Column header to click; repeat to click again (toggles direction)
    #[arg(long = "sort", value_name = "COLUMN")]
    sorts: Vec<SortColumn>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary cards (uploads, success rate, errors, candidates)
    Stats,

    /// Show one page of the candidate table
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show the detail view for one candidate
    Show {
        /// Candidate id
        #[arg(long)]
        id: String,
    },

    /// Export the filtered view (all pages) as CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Directory to write candidates_<date>.csv into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Interactive session: type commands, see the table update
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let source: CandidateSource = cli.source.parse().context("Invalid --source")?;

    // Load the candidate payload; failure replaces the whole dashboard
    let start = Instant::now();
    let mut table = match CandidateTable::load(&source, &config).await {
        Ok(table) => table,
        Err(e) => {
            render::print_fatal(&format!(
                "Could not load candidate data from {source}. Check that the file exists \
                 or that the URL is public and reachable, then try again."
            ));
            return Err(e).context("Failed to load candidate data");
        }
    };
    println!(
        "{} Loaded {} records in {:?}",
        "✓".green(),
        table.candidates().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Stats => render::print_stats(&table.stats()),
        Commands::List { view, page } => handle_list(&mut table, &view, page),
        Commands::Show { id } => handle_show(&table, &id)?,
        Commands::Export { view, out } => handle_export(&mut table, &view, out)?,
        Commands::Shell => shell::run(&mut table)?,
    }

    Ok(())
}

/// Config file first, then command-line overrides
fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size);
    }
    config.validate()?;
    Ok(config)
}

/// Run the filter (only if the user typed something) and the header clicks
fn apply_view(table: &mut CandidateTable, view: &ViewArgs) {
    if !view.search.is_empty() || !view.skill.is_empty() {
        table.apply_filter(&view.search, &view.skill);
    }
    for &column in &view.sorts {
        if table.sort(column).is_none() {
            warn!("Column {} is not sortable, ignoring", column);
        }
    }
}

/// Handle the 'list' command
fn handle_list(table: &mut CandidateTable, view: &ViewArgs, page: usize) {
    apply_view(table, view);

    if page > 1 {
        let delta = isize::try_from(page - 1).unwrap_or(isize::MAX);
        if !table.change_page(delta) {
            warn!(
                "Page {} is out of range (1-{}), showing page 1",
                page,
                table.total_pages()
            );
        }
    }

    render::print_page(&table.page());
}

/// Handle the 'show' command
fn handle_show(table: &CandidateTable, id: &str) -> Result<()> {
    let detail = table
        .detail(id)
        .ok_or_else(|| anyhow!("Candidate {} not found", id))?;
    render::print_detail(&detail);
    Ok(())
}

/// Handle the 'export' command
fn handle_export(table: &mut CandidateTable, view: &ViewArgs, out: PathBuf) -> Result<()> {
    apply_view(table, view);

    let date = chrono::Utc::now().date_naive();
    let path = table
        .export_to_dir(&out, date)
        .context("Failed to export candidates")?;

    println!(
        "{} Exported {} candidates to {}",
        "✓".green(),
        table.view_len(),
        path.display()
    );
    Ok(())
}
