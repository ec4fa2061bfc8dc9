#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = missionlab_rust::run().await {
        eprintln!("missionlab-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
