//! Analyze a photographed item for resale.
//!
//! Run with: `cargo run --example analyze_image -- photo.jpg`

use ecomap::{Assistant, GatewayConfig, ImagePayload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: analyze_image <photo>"))?;

    let bytes = std::fs::read(&path)?;
    let payload = ImagePayload::from_bytes(&bytes, "image/jpeg");
    let data_uri = format!("data:{};base64,{}", payload.mime_type, payload.data);

    let assistant = Assistant::from_config(&GatewayConfig::from_env());
    let analysis = assistant.analyze_item(&data_uri).await;

    println!("Titre       : {}", analysis.title);
    println!("Catégorie   : {}", analysis.category.label_fr());
    println!("Poids       : {} kg", analysis.weight_kg);
    println!("Prix estimé : {} FC", analysis.price_fc);
    println!("Description : {}", analysis.description);
    Ok(())
}
