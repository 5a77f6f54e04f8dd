use anyhow::Result;
use clap::{Parser, Subcommand};
use omglol_dns::{config, dns::RecordSpec, provider::Provider};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "omglol-dns", version, about = "Manage omg.lol DNS records")]
struct Cli {
    /// YAML file with username, api_key and base_url
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all records
    List,
    /// Show the record with the given ID
    Get { id: u64 },
    /// Show the first record with the given name
    Lookup { name: String },
    /// Create a record
    Create {
        #[arg(long = "type")]
        record_type: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        data: String,
        /// Defaults to 3600
        #[arg(long)]
        ttl: Option<u32>,
    },
    /// Delete the record with the given ID, if it exists
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let provider = Provider::configure(&config)?;

    match cli.command {
        Command::List => print_json(&provider.data_source().read_all().await?),
        Command::Get { id } => print_json(&provider.resource().read(id).await?),
        Command::Lookup { name } => print_json(&provider.data_source().read(&name).await?),
        Command::Create {
            record_type,
            name,
            data,
            ttl,
        } => {
            let spec = RecordSpec {
                r#type: record_type,
                name,
                data,
                ttl,
            };
            print_json(&provider.resource().create(spec).await?)
        }
        Command::Delete { id } => Ok(provider.resource().delete(id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
