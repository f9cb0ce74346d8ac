//! Barkeep - 角色扮演酒馆/咖啡馆的点单台
//!
//! # 架构概述
//!
//! - **订单** (`orders`): 订单生命周期 (active / archived)、草稿、金额
//! - **Emote** (`emote`): 多段 emote 游标推进与防重复起始段
//! - **菜单** (`menu`): 拖拽重排状态机
//! - **Profile** (`profiles`): profile 集合、导入合并、JSON 持久化
//! - **服务** (`services`): 剪贴板、通知队列、主题
//!
//! # 模块结构
//!
//! ```text
//! barkeep-core/src/
//! ├── core/          # 配置、会话状态
//! ├── emote/         # emote 引擎与模板
//! ├── menu/          # 菜单拖拽重排
//! ├── orders/        # 订单管理
//! ├── profiles/      # profile 导入 / 存储
//! ├── services/      # 剪贴板、通知、主题
//! └── utils/         # 日志、校验、时间
//! ```

pub mod core;
pub mod emote;
pub mod menu;
pub mod orders;
pub mod profiles;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, DeskState};
pub use emote::{EmoteContext, EmoteEngine};
pub use menu::MenuReorder;
pub use orders::{OrderDraft, OrdersManager};
pub use profiles::{ImportError, ProfileBook, ProfileStore, StorageError};
pub use services::{Clipboard, MemoryClipboard, NotificationQueue, SystemClipboard, ThemeState};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`，读取配置，初始化日志
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ )____ ______/ /_____  ___  ____
  / __  / __ `/ ___/ //_/ _ \/ _ \/ __ \
 / /_/ / /_/ / /  / ,< /  __/  __/ /_/ /
/_____/\__,_/_/  /_/|_|\___/\___/ .___/
                               /_/
    "#
    );
}
