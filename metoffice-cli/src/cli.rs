use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use metoffice_core::{Config, DataPoint, DataPointClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Met Office DataPoint forecasts in your terminal")]
pub struct Cli {
    /// Log requests and parser decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the DataPoint API key.
    Configure {
        /// API key; prompted for when omitted.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Observation and forecast sites.
    #[command(subcommand)]
    Site(SiteCommand),

    /// Regional text forecasts.
    #[command(subcommand)]
    Region(RegionCommand),
}

#[derive(Debug, Subcommand)]
pub enum SiteCommand {
    /// Print every site.
    List,

    /// Print sites whose name, region or area contains TEXT.
    Find {
        text: String,
    },

    /// Remember a site (by exact name) and its region for forecasts.
    Set {
        name: String,
    },

    /// Today's forecast for the stored site, followed by its regional forecast.
    Forecast(ForecastArgs),
}

#[derive(Debug, Subcommand)]
pub enum RegionCommand {
    /// Print every region.
    List,

    /// Regional text forecast for the stored region.
    Forecast(ForecastArgs),
}

#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// Use this id instead of the stored one.
    #[arg(long)]
    pub id: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure { api_key } => {
                let api_key = match api_key {
                    Some(key) => key,
                    None => inquire::Password::new("DataPoint API key:")
                        .without_confirmation()
                        .with_help_message("Register at https://www.metoffice.gov.uk/services/data/datapoint")
                        .prompt()
                        .context("Failed to read API key")?,
                };
                if api_key.trim().is_empty() {
                    bail!("API key must not be empty");
                }

                config.set_api_key(api_key);
                let path = config.save()?;
                println!("Saved API key to {}", path.display());
            }

            Command::Site(SiteCommand::List) => {
                let sites = client(&config)?.sites().await?;
                print!("{}", render::sites(&sites));
            }

            Command::Site(SiteCommand::Find { text }) => {
                let sites = client(&config)?.find_sites(&text).await?;
                print!("{}", render::site_lines(&sites));
            }

            Command::Site(SiteCommand::Set { name }) => {
                let selection = client(&config)?.select_site(&name).await?;
                config.set_selection(&selection);
                config.save()?;
                print!("{}", render::selection(&selection));
            }

            Command::Site(SiteCommand::Forecast(args)) => {
                let dp = client(&config)?;
                let site_id = match &args.id {
                    Some(id) => id.as_str(),
                    None => config.site_id()?,
                };

                let forecast = dp.site_forecast(site_id).await?;
                print!("{}", render::site_forecast(&forecast));

                match config.region_id() {
                    Ok(region_id) => print_region_forecast(&dp, region_id).await?,
                    Err(_) => tracing::debug!("no region id stored; skipping regional forecast"),
                }
            }

            Command::Region(RegionCommand::List) => {
                let regions = client(&config)?.regions().await?;
                print!("{}", render::regions(&regions));
            }

            Command::Region(RegionCommand::Forecast(args)) => {
                let dp = client(&config)?;
                let region_id = match &args.id {
                    Some(id) => id.as_str(),
                    None => config.region_id()?,
                };

                print_region_forecast(&dp, region_id).await?;
            }
        }

        Ok(())
    }
}

fn client(config: &Config) -> anyhow::Result<DataPoint<DataPointClient>> {
    Ok(DataPoint::from_config(config.client_config()?)?)
}

async fn print_region_forecast(
    dp: &DataPoint<DataPointClient>,
    region_id: &str,
) -> anyhow::Result<()> {
    let entries = dp.region_forecast(region_id).await?;
    if entries.is_empty() {
        bail!("No forecasts found for region {region_id}");
    }

    print!("{}", render::region_forecast(&entries));
    Ok(())
}
