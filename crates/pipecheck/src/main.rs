#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pipecheck_lib::main().await
}
