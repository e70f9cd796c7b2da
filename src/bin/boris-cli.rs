use clap::{Parser, Subcommand};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::{connect_async, tungstenite::Message};

#[derive(Parser)]
#[command(name = "boris-cli")]
#[command(about = "Management CLI for the BORIS gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Admin mount prefix.
    #[arg(short, long, default_value = "secret-backend/")]
    admin_prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway status
    Status,
    /// Show the compiled route table
    Routes,
    /// Send an HTTP GET and print the body
    Get { path: String },
    /// Send one WebSocket text frame and print the reply
    Ws {
        text: String,
        #[arg(long, default_value = "/ws/")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/{}status", base, cli.admin_prefix)).send().await?;
            print_json(res).await?;
        }
        Commands::Routes => {
            let res = client.get(format!("{}/{}routes", base, cli.admin_prefix)).send().await?;
            print_json(res).await?;
        }
        Commands::Get { path } => {
            let res = client.get(format!("{}{}", base, path)).send().await?;
            println!("{}", res.status());
            println!("{}", res.text().await?);
        }
        Commands::Ws { text, path } => {
            let ws_url = format!("{}{}", base.replacen("http", "ws", 1), path);
            let (mut stream, _) = connect_async(ws_url.as_str()).await?;

            stream.send(Message::text(text)).await?;
            while let Some(msg) = stream.next().await {
                match msg? {
                    Message::Text(reply) => {
                        println!("{}", reply.as_str());
                        break;
                    }
                    Message::Close(_) => {
                        eprintln!("Connection closed before a reply arrived");
                        break;
                    }
                    _ => {}
                }
            }
            stream.close(None).await?;
        }
    }

    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Admin API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
