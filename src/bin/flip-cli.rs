use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "flip-cli")]
#[command(about = "Management CLI for the flip server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tally
    Counts,
    /// Show the tally for one result label
    Count { label: String },
    /// List recorded flips
    Flips,
    /// Show one flip by id
    Flip { id: u64 },
    /// Record a new flip
    Create { result: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let response = match cli.command {
        Commands::Counts => client.get(format!("{}/counts", cli.url)).send().await?,
        Commands::Count { label } => {
            client
                .get(format!("{}/counts/{}", cli.url, label))
                .send()
                .await?
        }
        Commands::Flips => client.get(format!("{}/flips", cli.url)).send().await?,
        Commands::Flip { id } => {
            client
                .get(format!("{}/flips/{}", cli.url, id))
                .send()
                .await?
        }
        Commands::Create { result } => {
            let body = serde_json::json!({ "data": { "result": result } });
            client
                .post(format!("{}/flips", cli.url))
                .json(&body)
                .send()
                .await?
        }
    };

    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => println!("{}\n{}", status, serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}\n{}", status, text),
    }

    Ok(())
}
