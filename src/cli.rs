use anyhow::{Result, bail};
use clap::Parser;
use ratatui::crossterm::style::Stylize;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(about = "Terminal dashboards for internal back-office records")]
pub struct Args {
    /// Dashboard to open directly (contracts, payroll, invoices, vendors, timesheets)
    #[arg(short = 'd', long)]
    pub dashboard: Option<String>,

    /// Replace the selected dashboard's seed rows from a .csv, .csv.gz or .json file
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Rows per page
    #[arg(short = 'p', long, default_value_t = 10)]
    pub page_size: usize,
}

impl Args {
    pub fn validate(&self, known_slugs: &[&str]) -> Result<()> {
        if let Some(slug) = &self.dashboard {
            if !known_slugs.iter().any(|s| s.eq_ignore_ascii_case(slug)) {
                bail!(
                    "{} Unknown dashboard '{}'. Available: {}",
                    "[ERROR]".red().bold(),
                    slug,
                    known_slugs.join(", ")
                );
            }
        }

        if let Some(path) = &self.data {
            // Imported rows need a schema to map onto.
            if self.dashboard.is_none() {
                bail!(
                    "{} --data requires --dashboard so the file can be matched to a schema.",
                    "[ERROR]".red().bold()
                );
            }
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("")
                .to_lowercase();
            // Only gzipped CSV is accepted, not arbitrary .gz files.
            let ok = name.ends_with(".csv") || name.ends_with(".csv.gz") || name.ends_with(".json");
            if !ok {
                bail!(
                    "{} --data must be a .csv, .csv.gz or .json file (got '{}')",
                    "[ERROR]".red().bold(),
                    name
                );
            }
        }

        if self.page_size == 0 {
            bail!(
                "{} --page-size must be at least 1",
                "[ERROR]".red().bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(data: &str) -> Args {
        Args {
            dashboard: Some("invoices".into()),
            data: Some(PathBuf::from(data)),
            page_size: 10,
        }
    }

    #[test]
    fn data_extension_must_be_csv_gz_or_json() {
        let slugs = ["invoices"];
        assert!(args("rows.csv").validate(&slugs).is_ok());
        assert!(args("rows.csv.gz").validate(&slugs).is_ok());
        assert!(args("rows.json").validate(&slugs).is_ok());
        assert!(args("rows.parquet").validate(&slugs).is_err());
        // Not every .gz is acceptable, only gzipped CSV.
        assert!(args("rows.json.gz").validate(&slugs).is_err());
        assert!(args("rows.gz").validate(&slugs).is_err());
    }
}
