use clap::Parser;
use seat_scout::utils::logger;
use seat_scout::{load_search_config, rejected_config, CliConfig, HttpVendorClient, SeatScout};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting seat-scout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let search = match load_search_config(&config.config, config.endpoint.as_deref()) {
        Ok(search) => search,
        Err(e) => {
            println!("{}", rejected_config(e));
            return Ok(());
        }
    };

    let scout = SeatScout::new(HttpVendorClient::new(search.endpoint.clone()));
    let outcome = scout.run(search).await;

    // 所有結果都是正常結束，只差在印出的訊息
    println!("{}", outcome);

    Ok(())
}
