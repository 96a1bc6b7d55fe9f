use log::info;

use fopo_assessment::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    println!("\n=== FOPO Assessment ===");
    println!("Ten quick statements about how much other people's opinions weigh on you.\n");

    let config = AppConfig::from_env();
    info!("Collector endpoint: {}", config.collector_url);
    info!("Result cache: {}", config.result_cache_path.display());

    if let Err(e) = fopo_assessment::console::run(config).await {
        eprintln!("Error running assessment: {}", e);
        std::process::exit(1);
    }
}
