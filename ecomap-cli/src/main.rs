//! ECO-MAP CLI - KIN ECO-MAP assistant from the command line.
//!
//! Plays the role of the app's UI layer: it keeps its own transcript and
//! renders the gateway's results, nothing more.

use clap::{Parser, Subcommand, ValueEnum};
use ecomap::{Assistant, ChatTurn, GatewayConfig, ImagePayload};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ecomap")]
#[command(about = "KIN ECO-MAP assistant: academy chat and marketplace item analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Override the upstream model (e.g. gemini-2.5-pro)
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the academy assistant (one-shot, or interactive without args)
    Chat {
        /// Message to send; omit to start an interactive session
        #[arg(value_name = "MESSAGE", trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// Analyze a photographed item for resale
    Analyze {
        /// Path to the image file (JPEG or PNG)
        #[arg(value_name = "FILE")]
        image: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Mime type of the image
        #[arg(long, default_value = "image/jpeg")]
        mime: String,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    let assistant = Assistant::from_config(&config);

    let exit_code = match cli.command {
        Commands::Chat { message } => {
            if message.is_empty() {
                handle_interactive_chat(&assistant).await
            } else {
                handle_chat(&assistant, &message.join(" ")).await
            }
        }
        Commands::Analyze {
            image,
            format,
            mime,
        } => handle_analyze(&assistant, &image, format, &mime).await,
    };

    process::exit(exit_code);
}

async fn handle_chat(assistant: &Assistant, message: &str) -> i32 {
    let reply = assistant.send_message(message).await;
    println!("{}", reply);
    0
}

async fn handle_interactive_chat(assistant: &Assistant) -> i32 {
    println!("KIN ECO-MAP — académie. Posez votre question (/reset, /quit).");

    let stdin = std::io::stdin();
    let mut transcript: Vec<ChatTurn> = Vec::new();

    loop {
        print!("vous> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                assistant.reset_session().await;
                transcript.clear();
                println!("(session réinitialisée)");
                continue;
            }
            _ => {}
        }

        transcript.push(ChatTurn::user(input));
        let reply = assistant.send_message(input).await;
        println!("eco> {}", reply);
        transcript.push(ChatTurn::assistant(reply));
    }

    0
}

async fn handle_analyze(
    assistant: &Assistant,
    image: &PathBuf,
    format: OutputFormat,
    mime: &str,
) -> i32 {
    let bytes = match std::fs::read(image) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", image.display(), e);
            return 1;
        }
    };

    let payload = ImagePayload::from_bytes(&bytes, mime);
    let data_uri = format!("data:{};base64,{}", payload.mime_type, payload.data);
    let analysis = assistant.analyze_item(&data_uri).await;

    match format {
        OutputFormat::Human => {
            println!("Titre       : {}", analysis.title);
            println!("Catégorie   : {}", analysis.category.label_fr());
            println!("Poids       : {} kg", analysis.weight_kg);
            println!("Prix estimé : {} FC", analysis.price_fc);
            println!("Description : {}", analysis.description);
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&analysis).expect("analysis serializes")
            );
        }
    }

    0
}
