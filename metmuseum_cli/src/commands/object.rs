use anyhow::Result;
use clap::Args;
use metmuseum_api::{Client, ObjectOptions};

use crate::output::{print_json, print_object_table, OutputFormat};

#[derive(Args)]
pub struct ObjectArgs {
    /// Object ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
}

pub async fn run(args: &ObjectArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let object = client.object(&ObjectOptions::new(args.id)).await?;
    match format {
        OutputFormat::Table => print_object_table(&object),
        OutputFormat::Json => print_json(&object),
    }
    Ok(())
}
