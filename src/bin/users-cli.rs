use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "users-cli")]
#[command(about = "Command-line client for the user service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Show a single user
    Get { id: u64 },
    /// Create a user
    Create { name: String },
    /// Rename a user
    Update { id: u64, name: String },
    /// Delete a user
    Delete { id: u64 },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::List => client.get(format!("{}/users", base)),
        Commands::Get { id } => client.get(format!("{}/users/{}", base, id)),
        Commands::Create { name } => client
            .post(format!("{}/users", base))
            .json(&json!({ "name": name })),
        Commands::Update { id, name } => client
            .put(format!("{}/users/{}", base, id))
            .json(&json!({ "name": name })),
        Commands::Delete { id } => client.delete(format!("{}/users/{}", base, id)),
        Commands::Health => client.get(format!("{}/health", base)),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
