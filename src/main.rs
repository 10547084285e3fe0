use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use country_stats::{
    add_country, delete_country, edit_country, init_logging, render_statistics, render_table,
    run_connected, Country, CountryChanges, DatabaseConfig, MemoryStore, MySqlStore, RecordStore,
    StatisticsReport,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "country-stats")]
#[command(about = "Country indicator records and statistics")]
struct Cli {
    /// Use an in-memory store seeded from this JSON file instead of MySQL
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// View data table
    Table,
    /// View statistics
    Stats,
    /// Add country
    Add {
        #[arg(short, long)]
        code: String,

        #[arg(short, long)]
        name: String,

        #[command(flatten)]
        indicators: IndicatorArgs,
    },
    /// Edit country
    Edit {
        /// Code of the country to edit
        code: String,

        #[arg(long)]
        new_code: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        #[command(flatten)]
        indicators: IndicatorArgs,

        /// Clear the internet users reading
        #[arg(long, conflicts_with = "internet_users")]
        clear_internet_users: bool,

        /// Clear the literacy reading
        #[arg(long, conflicts_with = "literacy")]
        clear_literacy: bool,
    },
    /// Delete country
    Delete {
        code: String,
    },
}

#[derive(Debug, Args)]
struct IndicatorArgs {
    #[arg(short, long)]
    internet_users: Option<f64>,

    #[arg(short, long)]
    literacy: Option<f64>,
}

// Changes against the stored record; clear flags win over absent values
fn indicator_change(value: Option<f64>, clear: bool) -> Option<Option<f64>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.seed {
        Some(path) => {
            let store = MemoryStore::from_json_file(path).await?;
            execute(&store, cli.command).await
        }
        None => {
            let store = MySqlStore::new(DatabaseConfig::from_env()?)?;
            run_connected(&store, execute(&store, cli.command)).await
        }
    }
}

async fn execute(store: &dyn RecordStore, command: Commands) -> Result<()> {
    match command {
        Commands::Table => {
            let countries = store.list_all().await?;
            println!("{}", render_table(&countries));
        }
        Commands::Stats => {
            let report = StatisticsReport::build(store).await?;
            println!("{}", render_statistics(&report));
        }
        Commands::Add {
            code,
            name,
            indicators,
        } => {
            let country = Country::builder(code, name)
                .with_internet_users(indicators.internet_users)
                .with_adult_literacy_rate(indicators.literacy)
                .build();
            let country = add_country(store, country).await?;
            println!("Country {} added successfully!", country.code);
        }
        Commands::Edit {
            code,
            new_code,
            name,
            indicators,
            clear_internet_users,
            clear_literacy,
        } => {
            let changes = CountryChanges {
                code: new_code,
                name,
                internet_users: indicator_change(indicators.internet_users, clear_internet_users),
                adult_literacy_rate: indicator_change(indicators.literacy, clear_literacy),
            };
            let country = edit_country(store, &code, changes).await?;
            println!("Country {} updated successfully!", country.code);
        }
        Commands::Delete { code } => {
            delete_country(store, &code).await?;
            println!("Country {} deleted successfully!", code);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    info!("Running {:?}", cli.command);
    if let Err(e) = run(cli).await {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
