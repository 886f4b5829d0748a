/// 输入校验
///
/// 仅做粗粒度的标签过滤，不是 HTML 清洗器。畸形标签、属性注入、
/// 编码后的载荷都能绕过它，渲染时仍需做输出转义。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ValidationOutcome;

/// 形如 `<...>` 的开闭标签
static MARKUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is a valid regex"));

/// 是否包含类似 HTML/XML 标签的片段
pub fn contains_markup(text: &str) -> bool {
    MARKUP_PATTERN.is_match(text)
}

/// 校验 `input` 字段
pub fn validate_input(input: Option<&str>) -> ValidationOutcome {
    match input {
        None => ValidationOutcome::RejectedMissingField,
        Some(text) if contains_markup(text) => ValidationOutcome::RejectedForbiddenPattern,
        Some(_) => ValidationOutcome::Accepted,
    }
}
