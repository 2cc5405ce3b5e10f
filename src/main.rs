#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vantage_gateway::run().await
}
