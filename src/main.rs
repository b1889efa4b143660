use seekchat::config::Config;
use seekchat::demo;
use seekchat::llm::LLMClient;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// seekchat - demos against an OpenAI-compatible chat API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to start searching for seekchat.toml
    #[arg(long, short = 'c', default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Explain a bible verse
    Verse {
        #[arg(default_value = demo::DEFAULT_VERSE)]
        verse: String,
    },
    /// Fill in the body of a Fibonacci function (beta endpoint)
    Fim,
    /// List available models
    Models,
    /// Two rounds against the reasoning model
    Reasoning,
    /// Two-round conversation about mountains (default)
    Mountains,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging with RUST_LOG environment variable
    // Default to "warn" if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load(&args.config_dir)?;
    info!(base_url = %config.base_url, "Configuration loaded");
    let client = LLMClient::new(config)?;

    match args.command.unwrap_or(Commands::Mountains) {
        Commands::Verse { verse } => verse_command(&client, &verse).await,
        Commands::Fim => fim_command(&client).await,
        Commands::Models => models_command(&client).await,
        Commands::Reasoning => reasoning_command(&client).await,
        Commands::Mountains => mountains_command(&client).await,
    }
}

async fn verse_command(client: &LLMClient, verse: &str) -> Result<()> {
    let reply = demo::explain_bible_verse(client, client.chat_model(), verse).await?;
    println!("{}", reply.content);
    Ok(())
}

async fn fim_command(client: &LLMClient) -> Result<()> {
    let response = demo::fibonacci_fim(client).await?;
    for choice in &response.choices {
        println!("{}", choice.text);
    }
    Ok(())
}

async fn models_command(client: &LLMClient) -> Result<()> {
    for model in demo::list_models(client).await? {
        println!("{} ({}, owned by {})", model.id, model.object, model.owned_by);
    }
    Ok(())
}

async fn reasoning_command(client: &LLMClient) -> Result<()> {
    let conversation = demo::reasoning_rounds(client, client.reasoner_model()).await?;
    println!(
        "Reasoning Content: {}",
        conversation.first.reasoning_content.as_deref().unwrap_or("")
    );
    println!("Response 1 Content: {}", conversation.first.content);
    println!("Response 2 Content: {}", conversation.second.content);
    Ok(())
}

async fn mountains_command(client: &LLMClient) -> Result<()> {
    let conversation = demo::mountain_conversation(client, client.chat_model()).await?;
    println!("First Response: {}", conversation.first.content);
    println!("Second Response: {}", conversation.second.content);
    Ok(())
}
