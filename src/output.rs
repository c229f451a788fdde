//! Output rendering for the CLI
//!
//! Resources are printed as an aligned plain-text table, JSON, or YAML.

use crate::cloud::{Cluster, CloudProvider, CloudProviderRegion, UserAccount};
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name stored in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// A resource that can be shown as one table row
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

impl TableRow for UserAccount {
    fn headers() -> &'static [&'static str] {
        &["ACCOUNT ID", "NAME", "USER ID", "ROLE", "STATUS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.account_id.to_string(),
            self.name.clone(),
            self.user_id.to_string(),
            self.role.clone(),
            self.account_status.clone(),
        ]
    }
}

impl TableRow for CloudProvider {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "ROOT ACCOUNT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.root_account_id.clone(),
        ]
    }
}

impl TableRow for CloudProviderRegion {
    fn headers() -> &'static [&'static str] {
        &["ID", "PROVIDER", "NAME", "FULL NAME", "CONTINENT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.cloud_provider_id.to_string(),
            self.name.clone(),
            self.full_name.clone(),
            self.continent.clone(),
        ]
    }
}

impl TableRow for Cluster {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "STATUS", "VERSION", "DCS", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.status.clone(),
            self.scylla_version.clone(),
            self.dc.len().to_string(),
            self.created_at.clone(),
        ]
    }
}

/// Render `items` in the requested format
pub fn render<T: Serialize + TableRow>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(items)?),
        OutputFormat::Table => Ok(render_table(items)),
    }
}

fn render_table<T: TableRow>(items: &[T]) -> String {
    let headers = T::headers();
    let rows: Vec<Vec<String>> = items.iter().map(TableRow::row).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![format_line(headers, &widths)];
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_line(&cells, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
