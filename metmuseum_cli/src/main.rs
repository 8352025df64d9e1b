mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use metmuseum_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "metmuseum")]
#[command(about = "Query the Metropolitan Museum of Art collection")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root (defaults to $METMUSEUM_BASE_URL, then the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List object IDs, optionally filtered by update date and department
    Objects(commands::objects::ObjectsArgs),
    /// Show a single object
    Object(commands::object::ObjectArgs),
    /// List departments
    Departments,
    /// Search object IDs
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("metmuseum=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let env_base_url = std::env::var("METMUSEUM_BASE_URL").ok();
    let client = build_client(cli.base_url.as_deref(), env_base_url.as_deref(), cli.timeout)?;

    match &cli.command {
        Commands::Objects(args) => commands::objects::run(args, &client, &format).await?,
        Commands::Object(args) => commands::object::run(args, &client, &format).await?,
        Commands::Departments => commands::departments::run(&client, &format).await?,
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
    }

    Ok(())
}

/// Root precedence: `--base-url`, then `METMUSEUM_BASE_URL`, then the public API.
fn build_client(
    base_url: Option<&str>,
    env_base_url: Option<&str>,
    timeout: Option<u64>,
) -> Result<Client> {
    let client = match timeout {
        Some(secs) => {
            let http = Client::http_client_builder()
                .timeout(Duration::from_secs(secs))
                .build()?;
            Client::with_http_client(http)
        }
        None => Client::new()?,
    };

    Ok(match base_url.or(env_base_url) {
        Some(url) => {
            tracing::debug!("using API root {}", url);
            client.with_root_url(url)?
        }
        None => client,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use metmuseum_api::DEFAULT_ROOT;

    #[test]
    fn flag_overrides_env_root() {
        let client = build_client(
            Some("http://flag.example/v1/"),
            Some("http://env.example/v1/"),
            None,
        )
        .unwrap();
        assert_eq!(client.root_url().as_str(), "http://flag.example/v1/");
    }

    #[test]
    fn env_root_used_without_flag() {
        let client = build_client(None, Some("http://env.example/v1/"), None).unwrap();
        assert_eq!(client.root_url().as_str(), "http://env.example/v1/");
    }

    #[test]
    fn public_root_is_the_fallback() {
        let client = build_client(None, None, None).unwrap();
        assert_eq!(client.root_url().as_str(), DEFAULT_ROOT);
    }

    #[test]
    fn root_without_trailing_slash_is_accepted() {
        let client = build_client(Some("http://localhost:8080/public/collection/v1"), None, None)
            .unwrap();
        assert_eq!(
            client.root_url().as_str(),
            "http://localhost:8080/public/collection/v1/"
        );
    }

    #[test]
    fn timeout_builds_an_injected_client() {
        let client = build_client(None, Some("http://env.example/v1"), Some(5)).unwrap();
        assert_eq!(client.root_url().as_str(), "http://env.example/v1/");
    }

    #[test]
    fn invalid_root_is_rejected() {
        assert!(build_client(Some("not a url"), None, None).is_err());
    }
}
