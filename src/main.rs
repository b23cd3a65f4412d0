#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quotesync::tracing::init();
    quotesync::app::run().await
}
