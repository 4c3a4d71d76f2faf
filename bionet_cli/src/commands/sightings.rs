use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use bionet_api::types::{AreaOfInterest, FaunaGroup};
use bionet_api::{Client, Query, SightingQuery};
use clap::Args;

use crate::output::{
    print_json, print_sightings_csv, print_sightings_markdown, print_sightings_table,
    write_sightings_csv, OutputFormat,
};

#[derive(Args)]
pub struct SightingsArgs {
    /// Fauna group: all, mammals, birds, reptiles, amphibians
    #[arg(long, default_value = "all")]
    pub group: String,

    /// Maximum number of records to fetch
    #[arg(long, default_value = "100")]
    pub max_records: i64,

    /// Skip this many records, for manual paging
    #[arg(long)]
    pub skip: Option<i64>,

    /// Area of interest as min_lon,min_lat,max_lon,max_lat (GDA94 degrees)
    #[arg(long)]
    pub bbox: Option<String>,

    /// Only return species listed under the BC Act or EPBC Act
    #[arg(long)]
    pub threatened: bool,

    /// BioNet username for licensed access (or BIONET_USERNAME env var)
    #[arg(long)]
    pub username: Option<String>,

    /// BioNet password for licensed access (or BIONET_PASSWORD env var)
    #[arg(long)]
    pub password: Option<String>,

    /// Write results to a CSV file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: &SightingsArgs, format: &OutputFormat) -> Result<()> {
    let group = FaunaGroup::from_str(&args.group).map_err(|_| {
        anyhow!(
            "unknown fauna group '{}'; expected all, mammals, birds, reptiles, or amphibians",
            args.group
        )
    })?;

    let mut query = SightingQuery::default()
        .with_group(group)
        .with_max_records(args.max_records);

    if let Some(skip) = args.skip {
        query = query.with_skip(skip);
    }

    if let Some(ref bbox) = args.bbox {
        query = query.with_area(parse_bbox(bbox)?);
    }

    if args.threatened {
        query = query.with_listed_only();
    }

    let client = build_client(args.username.as_deref(), args.password.as_deref());
    let records = client.get_sightings(&query).await?;

    eprintln!("{} sighting records ({})", records.len(), group);

    if let Some(ref path) = args.out {
        write_sightings_csv(&records, path)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_sightings_table(&records),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => print_sightings_csv(&records)?,
        OutputFormat::Markdown => print_sightings_markdown(&records),
    }

    Ok(())
}

fn build_client(username: Option<&str>, password: Option<&str>) -> Client {
    let username = username
        .map(str::to_string)
        .or_else(|| std::env::var("BIONET_USERNAME").ok());
    let password = password
        .map(str::to_string)
        .or_else(|| std::env::var("BIONET_PASSWORD").ok());
    match (username, password) {
        (Some(u), Some(p)) => Client::new().with_credentials(&u, &p),
        _ => Client::new(),
    }
}

fn parse_bbox(input: &str) -> Result<AreaOfInterest> {
    let coords = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid bbox coordinate '{}'", part.trim()))
        })
        .collect::<Result<Vec<f64>>>()?;
    if coords.len() != 4 {
        return Err(anyhow!("bbox must be min_lon,min_lat,max_lon,max_lat"));
    }
    Ok(AreaOfInterest::bounds(
        coords[0], coords[1], coords[2], coords[3],
    )?)
}
