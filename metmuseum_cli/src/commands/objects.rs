use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use metmuseum_api::{Client, ObjectsOptions, DATE_FORMAT};

use crate::output::{print_json, print_object_ids_table, OutputFormat};

#[derive(Args)]
pub struct ObjectsArgs {
    /// Only objects updated after this day (YYYY-MM-DD)
    #[arg(long)]
    pub metadata_date: Option<String>,

    /// Only objects in this department (repeatable)
    #[arg(long = "department-id")]
    pub department_ids: Vec<i64>,

    /// Maximum number of IDs to print in table output
    #[arg(long, default_value = "50")]
    pub limit: usize,
}

pub fn build_options(args: &ObjectsArgs) -> Result<ObjectsOptions> {
    let mut options = ObjectsOptions::default().with_department_ids(&args.department_ids);
    if let Some(date) = &args.metadata_date {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .with_context(|| format!("invalid --metadata-date '{}', expected YYYY-MM-DD", date))?;
        options = options.with_metadata_date(date);
    }
    Ok(options)
}

pub async fn run(args: &ObjectsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = build_options(args)?;
    let resp = client.objects(&options).await?;
    match format {
        OutputFormat::Table => print_object_ids_table(&resp, args.limit),
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(metadata_date: Option<&str>, department_ids: Vec<i64>) -> ObjectsArgs {
        ObjectsArgs {
            metadata_date: metadata_date.map(|s| s.to_string()),
            department_ids,
            limit: 50,
        }
    }

    #[test]
    fn maps_flags_to_options() {
        let options = build_options(&args(Some("2024-01-15"), vec![1, 6])).unwrap();
        assert_eq!(options.metadata_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(options.department_ids, vec![1, 6]);
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(build_options(&args(Some("15/01/2024"), vec![])).is_err());
    }

    #[test]
    fn no_flags_means_no_filters() {
        let options = build_options(&args(None, vec![])).unwrap();
        assert_eq!(options, ObjectsOptions::default());
    }
}
