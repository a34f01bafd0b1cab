use crate::config::SearchConfig;
use crate::core::time_window::TimeWindow;

/// 單次執行的唯讀狀態：設定與解析好的時間窗
#[derive(Debug, Clone, PartialEq)]
pub struct SearchContext {
    pub config: SearchConfig,
    pub window: TimeWindow,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        let window = TimeWindow::resolve(config.first_time, config.last_time);
        Self { config, window }
    }

    pub fn with_window(config: SearchConfig, window: TimeWindow) -> Self {
        Self { config, window }
    }
}
