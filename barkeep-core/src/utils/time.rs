//! 时间工具函数

/// Elapsed time since order creation, rendered as `"{m}m {s}s"`
///
/// `"Unknown"` without a start time; spans in the future clamp to `"0m 0s"`.
pub fn format_elapsed(now_millis: i64, started_at: Option<i64>) -> String {
    let Some(start) = started_at else {
        return "Unknown".to_string();
    };
    let elapsed_ms = now_millis - start;
    if elapsed_ms < 0 {
        return "0m 0s".to_string();
    }
    let seconds = elapsed_ms / 1000;
    format!("{}m {}s", seconds / 60, seconds % 60)
}
