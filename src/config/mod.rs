pub mod file_config;
pub mod search_config;

pub use file_config::FileConfig;
pub use search_config::SearchConfig;

/// 車票業者的訂票表單
pub const DEFAULT_ENDPOINT: &str = "https://vendas.expressodeprata.com.br/cgi-bin/br5.cgi";

/// 預設設定檔名稱，相對於工作目錄
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "seat-scout")]
#[command(about = "Look for free bus seats in a departure time window")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: std::path::PathBuf,

    #[arg(long, help = "Override the vendor endpoint from the config file")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
