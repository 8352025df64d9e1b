use anyhow::Result;
use metmuseum_api::Client;

use crate::output::{print_departments_table, print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.departments().await?;
    match format {
        OutputFormat::Table => print_departments_table(&resp.departments),
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}
