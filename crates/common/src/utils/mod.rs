/// 工具函数集合

/// 格式化百分比，保留两位小数并附加 `%`
///
/// 超出 0-100 的值会被截断，NaN 视为 0
pub fn format_percent(value: f64) -> String {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    format!("{:.2}%", clamped)
}

/// 计算已用百分比，总量为 0 时返回 None
pub fn usage_percent(total: u64, available: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let used = total.saturating_sub(available);
    Some(used as f64 / total as f64 * 100.0)
}

/// 按 `df` 的口径计算磁盘使用率
///
/// 参数均为块数：`blocks` 总块数、`free` 空闲块数（含保留块）、`available`
/// 非特权用户可用块数。保留块既不算已用也不算可用，结果为
/// `used / (used + available)`，其中 `used = blocks - free`
pub fn disk_used_percent(blocks: u64, free: u64, available: u64) -> Option<f64> {
    let used = blocks.saturating_sub(free);
    let capacity = used.saturating_add(available);
    if capacity == 0 {
        return None;
    }
    Some(used as f64 / capacity as f64 * 100.0)
}
