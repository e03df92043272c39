#[tokio::main]
async fn main() {
    if let Err(e) = tiered_fee_calculator::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
