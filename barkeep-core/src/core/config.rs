use std::path::PathBuf;

/// File holding the persisted profile collection, inside the data directory
pub const PROFILES_FILE: &str = "profiles.json";

/// Desk configuration
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（`.env` 文件同样生效）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BARKEEP_DATA_DIR | ./data | 数据目录 (profiles.json) |
/// | BARKEEP_LOG_LEVEL | info | 日志级别 |
/// | BARKEEP_LOG_DIR | (unset) | 日志文件目录, 未设置则只输出到终端 |
/// | BARKEEP_TOAST_DURATION_MS | 3000 | 通知默认显示时长(毫秒) |
/// | BARKEEP_DEFAULT_CUSTOMER | the customer | 无顾客名时 `{name}` 的替代文字 |
///
/// # 示例
///
/// ```ignore
/// BARKEEP_DATA_DIR=/srv/barkeep BARKEEP_LOG_LEVEL=debug cargo run -p barkeep-core
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Data directory holding `profiles.json`
    pub data_dir: PathBuf,
    /// tracing max level
    pub log_level: String,
    /// Rolling log file directory
    pub log_dir: Option<String>,
    /// Default notification lifetime (ms)
    pub toast_duration_ms: u64,
    /// Fallback for `{name}` when an order has no customer name
    pub default_customer: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("BARKEEP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            log_level: std::env::var("BARKEEP_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("BARKEEP_LOG_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty()),
            toast_duration_ms: std::env::var("BARKEEP_TOAST_DURATION_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::services::notify::DEFAULT_DURATION_MS),
            default_customer: std::env::var("BARKEEP_DEFAULT_CUSTOMER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "the customer".into()),
        }
    }

    /// 使用自定义数据目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// Path of the persisted profile collection
    pub fn profiles_path(&self) -> PathBuf {
        self.data_dir.join(PROFILES_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
