//! Interactive session over stdin.
//!
//! Each line is one dashboard event (typing in the search box, picking a
//! skill, clicking a header or a pagination button). After every event the
//! page is re-rendered from the table's current state.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use engine::{CandidateTable, SortColumn};
use tracing::debug;

use crate::render;

const HELP: &str = "\
commands:
  search <text>     set the search box (empty to clear it)
  skill <text>      set the skill selector (empty to clear it)
  clear             clear both filters
  sort <column>     click a header: name, email, skills, experienceSummary, uploadDate
                    or its position, 1-5
  next | prev       change page
  page              redraw the current page
  show <id>         open the detail view for a candidate
  stats             show the summary cards
  export [dir]      write the filtered view as CSV (default: current dir)
  help              this text
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Skill(String),
    Clear,
    Sort(SortColumn),
    ChangePage(isize),
    Page,
    Show(String),
    Stats,
    Export(PathBuf),
    Help,
    Quit,
}

/// Parse one input line; `Ok(None)` for a blank line
pub fn parse_command(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "skill" | "k" => ShellCommand::Skill(rest.to_string()),
        "clear" => ShellCommand::Clear,
        "sort" => ShellCommand::Sort(parse_column(rest)?),
        "next" | "n" => ShellCommand::ChangePage(1),
        "prev" | "p" => ShellCommand::ChangePage(-1),
        "page" => ShellCommand::Page,
        "show" => {
            if rest.is_empty() {
                return Err("show needs a candidate id".to_string());
            }
            ShellCommand::Show(rest.to_string())
        }
        "stats" => ShellCommand::Stats,
        "export" => ShellCommand::Export(if rest.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(rest)
        }),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

/// A column name, or a 1-based header position as shown in the table
fn parse_column(text: &str) -> std::result::Result<SortColumn, String> {
    match text.parse::<usize>() {
        Ok(position) => SortColumn::from_header_index(position)
            .ok_or_else(|| format!("no column at header position {position}")),
        Err(_) => text.parse::<SortColumn>().map_err(|e| e.to_string()),
    }
}

/// Search box and skill selector contents, as the user left them
#[derive(Debug, Default)]
struct FilterInputs {
    search: String,
    skill: String,
}

pub fn run(table: &mut CandidateTable) -> Result<()> {
    let mut inputs = FilterInputs::default();

    render::print_stats(&table.stats());
    println!();
    render::print_page(&table.page());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };
        debug!("Shell command: {:?}", command);

        match command {
            ShellCommand::Search(text) => {
                inputs.search = text;
                table.apply_filter(&inputs.search, &inputs.skill);
            }
            ShellCommand::Skill(text) => {
                inputs.skill = text;
                table.apply_filter(&inputs.search, &inputs.skill);
            }
            ShellCommand::Clear => {
                inputs = FilterInputs::default();
                table.clear_filters();
            }
            ShellCommand::Sort(column) => {
                if table.sort(column).is_none() {
                    println!("{}", format!("{column} is not sortable").yellow());
                    continue;
                }
            }
            ShellCommand::ChangePage(delta) => {
                table.change_page(delta);
            }
            ShellCommand::Page => {}
            ShellCommand::Show(id) => {
                match table.detail(&id) {
                    Some(detail) => render::print_detail(&detail),
                    None => println!("{}", format!("No candidate with id {id}").yellow()),
                }
                continue;
            }
            ShellCommand::Stats => {
                render::print_stats(&table.stats());
                continue;
            }
            ShellCommand::Export(dir) => {
                let date = chrono::Utc::now().date_naive();
                match table.export_to_dir(&dir, date) {
                    Ok(path) => println!("{} Exported to {}", "✓".green(), path.display()),
                    Err(e) => println!("{}", e.to_string().red()),
                }
                continue;
            }
            ShellCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ShellCommand::Quit => break,
        }

        render::print_page(&table.page());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_command("search  data engineer ").unwrap(),
            Some(ShellCommand::Search("data engineer".to_string()))
        );
        assert_eq!(
            parse_command("skill").unwrap(),
            Some(ShellCommand::Skill(String::new()))
        );
        assert_eq!(parse_command("CLEAR").unwrap(), Some(ShellCommand::Clear));
    }

    #[test]
    fn test_parse_sort_and_paging() {
        assert_eq!(
            parse_command("sort uploadDate").unwrap(),
            Some(ShellCommand::Sort(SortColumn::UploadDate))
        );
        assert!(parse_command("sort salary").is_err());
        assert_eq!(
            parse_command("sort 3").unwrap(),
            Some(ShellCommand::Sort(SortColumn::Skills))
        );
        assert_eq!(
            parse_command("sort 6").unwrap(),
            Some(ShellCommand::Sort(SortColumn::Status))
        );
        assert!(parse_command("sort 0").is_err());
        assert!(parse_command("sort 7").is_err());
        assert_eq!(parse_command("n").unwrap(), Some(ShellCommand::ChangePage(1)));
        assert_eq!(parse_command("prev").unwrap(), Some(ShellCommand::ChangePage(-1)));
    }

    #[test]
    fn test_parse_show_export() {
        assert_eq!(
            parse_command("show c-12").unwrap(),
            Some(ShellCommand::Show("c-12".to_string()))
        );
        assert!(parse_command("show").is_err());
        assert_eq!(
            parse_command("export").unwrap(),
            Some(ShellCommand::Export(PathBuf::from(".")))
        );
        assert_eq!(
            parse_command("export /tmp/out").unwrap(),
            Some(ShellCommand::Export(PathBuf::from("/tmp/out")))
        );
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert!(parse_command("logout").is_err());
    }
}
