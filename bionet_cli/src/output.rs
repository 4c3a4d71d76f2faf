use std::path::Path;

use anyhow::Result;
use bionet_api::types::SightingRecord;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct SightingRow {
    #[tabled(rename = "Scientific Name")]
    #[serde(rename = "Scientific Name")]
    scientific_name: String,
    #[tabled(rename = "Common Name")]
    #[serde(rename = "Common Name")]
    common_name: String,
    #[tabled(rename = "Class")]
    #[serde(rename = "Class")]
    class: String,
    #[tabled(rename = "BC Act")]
    #[serde(rename = "BC Act")]
    bc_act: String,
    #[tabled(rename = "EPBC Act")]
    #[serde(rename = "EPBC Act")]
    epbc_act: String,
    #[tabled(rename = "Last Seen")]
    #[serde(rename = "Last Seen")]
    last_seen: String,
    #[tabled(rename = "Latitude")]
    #[serde(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    #[serde(rename = "Longitude")]
    longitude: String,
}

fn build_sighting_rows(records: &[SightingRecord]) -> Vec<SightingRow> {
    records
        .iter()
        .map(|r| SightingRow {
            scientific_name: r.scientific_name.clone(),
            common_name: r.common_name.clone(),
            class: r.taxonomic_class.clone(),
            bc_act: format_status(r.bc_act_status.as_deref()),
            epbc_act: format_status(r.epbc_act_status.as_deref()),
            last_seen: r
                .date_last
                .map(|d| d.date().to_string())
                .unwrap_or_default(),
            latitude: format_coordinate(r.latitude),
            longitude: format_coordinate(r.longitude),
        })
        .collect()
}

// -- Table output --

pub fn print_sightings_table(records: &[SightingRecord]) {
    println!("{}", Table::new(build_sighting_rows(records)));
}

// -- Markdown output --

pub fn print_sightings_markdown(records: &[SightingRecord]) {
    let mut table = Table::new(build_sighting_rows(records));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_sightings_csv(records: &[SightingRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_sighting_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_sightings_csv(records: &[SightingRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in build_sighting_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_status(status: Option<&str>) -> String {
    match status {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "Not listed".to_string(),
    }
}

fn format_coordinate(value: Option<f64>) -> String {
    value.map(|v| format!("{:.4}", v)).unwrap_or_default()
}
