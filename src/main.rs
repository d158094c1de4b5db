mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use newsdesk::config::Config;
use newsdesk::Newsdesk;

#[tokio::main]
async fn main() -> Result<()> {
    newsdesk::logging::init()?;

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let desk = Newsdesk::new(&config)?;

    match cli.command {
        Commands::Fetch { path } => {
            let page = desk.page_data(&path).await?;
            println!("{}", serde_json::to_string_pretty(page.as_value())?);
        }
        Commands::Additional {
            path,
            service,
            variant,
        } => {
            let (_, additional) = desk
                .page_with_additional(&path, &service, variant.as_deref())
                .await?;
            match additional {
                Some(map) if map.is_empty() => {
                    println!("No supplementary sources available");
                }
                Some(map) => {
                    let names: Vec<&str> = map.keys().map(String::as_str).collect();
                    println!("Supplementary sources: {}", names.join(", "));
                    println!("{}", serde_json::to_string_pretty(&map)?);
                }
                None => println!("Page type requires no supplementary data"),
            }
        }
    }
    Ok(())
}
