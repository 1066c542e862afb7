use anyhow::Result;
use contradiction_gateway::client;

#[tokio::main]
async fn main() -> Result<()> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| client::DEFAULT_URL.to_string());

    let response = client::send(&url, &client::example_dialog()).await?;
    println!("{}", response);

    Ok(())
}
