//! 通用辅助函数：
//! - 环境变量读取
//! - YAML 标量到文本的转换（含真值判断）

use std::{env, path::PathBuf};
use serde_yaml::Value;

/// 可选读取 PATH 环境变量为 PathBuf。
pub(crate) fn env_opt_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// 将 YAML 标量转为文本（null 记为 `null`）；映射与序列返回 None。
pub(crate) fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => Some("null".to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(t) => scalar_text(&t.value),
        _ => None,
    }
}

/// 仅当值为“真”时返回文本：空串、false、0 与 null 视为缺省。
pub(crate) fn truthy_text(v: &Value) -> Option<String> {
    match v {
        Value::Bool(false) | Value::Null => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => scalar_text(other).filter(|s| !s.is_empty()),
    }
}

/// 非空字符串
pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
