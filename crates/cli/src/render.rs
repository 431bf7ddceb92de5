//! Terminal rendering of the table, stats cards and detail modal.

use colored::Colorize;
use engine::{format_upload_date, CandidateDetail, DashboardStats, TablePage};

const NO_RESULTS: &str = "No candidates found matching your criteria.";

/// Print the four summary cards
pub fn print_stats(stats: &DashboardStats) {
    println!("{}", "Dashboard".bold().blue());
    println!("{}Total uploads: {}", "• ".green(), stats.total_uploads);
    println!("{}Success rate: {}%", "• ".green(), stats.success_rate);
    println!("{}Errors: {}", "• ".red(), stats.total_errors);
    println!("{}Candidates: {}", "• ".cyan(), stats.total_candidates);
}

/// Print the caption, the current page rows and the pagination controls
pub fn print_page(page: &TablePage<'_>) {
    println!("{}", page.caption().bold().blue());

    if page.is_empty_result() {
        println!("  {}", NO_RESULTS.yellow());
    } else {
        for candidate in &page.rows {
            let skills = candidate.skills_joined(", ");
            println!(
                "  {} {} {} [{}] {} {}",
                format!("[{}]", candidate.id()).dimmed(),
                candidate.name().bold(),
                candidate.email().unwrap_or("N/A").cyan(),
                if skills.is_empty() { "N/A".to_string() } else { skills },
                candidate.experience_summary().unwrap_or("N/A"),
                format_upload_date(candidate.upload_date()).dimmed(),
            );
        }
    }

    let prev = if page.has_previous { "< prev".normal() } else { "< prev".dimmed() };
    let next = if page.has_next { "next >".normal() } else { "next >".dimmed() };
    println!(
        "{}  Page {} of {}  {}",
        prev, page.current_page, page.total_pages, next
    );
}

/// Print the detail modal for one candidate
pub fn print_detail(detail: &CandidateDetail) {
    println!("{}", detail.name.bold().blue());
    println!("{}", "Personal Information".bold());
    println!("  Email: {}", detail.email);
    println!("  Phone: {}", detail.phone_number);
    println!("  Upload Date: {}", detail.upload_date);
    println!("{}", "Experience Summary".bold());
    println!("  {}", detail.experience_summary);
    println!("{}", "Skills".bold());
    println!("  {}", detail.skills_display());
    println!("{}", "Languages".bold());
    println!("  {}", detail.languages);
}

/// Replace all output with a fatal error block
pub fn print_fatal(message: &str) {
    eprintln!("{}", "Error Loading Dashboard".bold().red());
    eprintln!("{}", message);
}
