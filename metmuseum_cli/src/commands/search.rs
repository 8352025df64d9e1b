use anyhow::Result;
use clap::Args;
use metmuseum_api::{Client, SearchOptions};

use crate::output::{print_json, print_object_ids_table, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Search term, e.g. sunflowers
    pub q: String,

    /// Only highlighted objects
    #[arg(long)]
    pub highlight: bool,

    /// Only objects in this department
    #[arg(long)]
    pub department_id: Option<i64>,

    /// Only objects currently on view
    #[arg(long)]
    pub on_view: bool,

    /// Match the term against artist and culture fields only
    #[arg(long)]
    pub artist_or_culture: bool,

    /// Medium or object type, e.g. Paintings (repeatable)
    #[arg(long = "medium")]
    pub media: Vec<String>,

    /// Only objects with images
    #[arg(long)]
    pub has_images: bool,

    /// Geographic location, e.g. France (repeatable)
    #[arg(long = "geo-location")]
    pub geo_locations: Vec<String>,

    /// First year of the date range (requires --date-end)
    #[arg(long, allow_negative_numbers = true)]
    pub date_begin: Option<i64>,

    /// Last year of the date range (requires --date-begin)
    #[arg(long, allow_negative_numbers = true)]
    pub date_end: Option<i64>,

    /// Maximum number of IDs to print in table output
    #[arg(long, default_value = "50")]
    pub limit: usize,
}

/// Flags that are off leave the filter unset rather than sending `false`.
pub fn build_options(args: &SearchArgs) -> SearchOptions {
    let flag = |set: bool| set.then_some(true);
    SearchOptions {
        q: args.q.clone(),
        is_highlight: flag(args.highlight),
        department_id: args.department_id,
        is_on_view: flag(args.on_view),
        artist_or_culture: flag(args.artist_or_culture),
        media: args.media.clone(),
        has_images: flag(args.has_images),
        geo_locations: args.geo_locations.clone(),
        date_begin: args.date_begin,
        date_end: args.date_end,
    }
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = build_options(args);
    let resp = client.search(&options).await?;
    match format {
        OutputFormat::Table => print_object_ids_table(&resp, args.limit),
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}
