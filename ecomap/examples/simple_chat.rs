//! Minimal chat session against the hosted service.
//!
//! Requires `GEMINI_API_KEY` in the environment; without it the gateway
//! degrades to the fixed apology.
//!
//! Run with: `cargo run --example simple_chat`

use ecomap::{Assistant, ChatTurn, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let assistant = Assistant::from_config(&GatewayConfig::from_env());
    let mut transcript: Vec<ChatTurn> = Vec::new();

    for question in [
        "Mbote ! Comment trier les déchets plastiques à la maison ?",
        "Et où est-ce que je peux les revendre à Kinshasa ?",
    ] {
        transcript.push(ChatTurn::user(question));
        println!("> {}", question);

        let reply = assistant.send_message(question).await;
        println!("{}\n", reply);
        transcript.push(ChatTurn::assistant(reply));
    }

    println!("({} tours dans la transcription)", transcript.len());
    Ok(())
}
