//! .env 合并：只改写识别的键，其余行原样保留

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::{fs, path::Path};

use crate::{
    config::BrandingConfig,
    utils::{non_empty, truthy_text},
};

/// 由品牌配置计算需要写入的键值（值为空的键被跳过，而不是清空）
pub(crate) fn env_entries(cfg: &BrandingConfig) -> Vec<(&'static str, String)> {
    let app_title = cfg
        .env_value("APP_TITLE")
        .and_then(truthy_text)
        .or_else(|| non_empty(Some(cfg.app.name.as_str())).map(str::to_string));
    let footer = cfg.env_value("CUSTOM_FOOTER").and_then(truthy_text);

    [("APP_TITLE", app_title), ("CUSTOM_FOOTER", footer)]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
}

/// 对 .env 文本应用键值：已有 `KEY=` 行原位替换，否则换行后追加
pub(crate) fn merge_env(content: &str, entries: &[(&str, String)]) -> Result<String> {
    let mut out = content.to_string();
    for (key, value) in entries {
        let line = format!("{}=\"{}\"", key, value);
        let re = Regex::new(&format!(r"(?m)^{}=[^\r\n]*", regex::escape(key)))?;
        if re.is_match(&out) {
            log::debug!("replace {} in .env", key);
            out = re.replace(&out, NoExpand(&line)).into_owned();
        } else {
            log::debug!("append {} to .env", key);
            out.push('\n');
            out.push_str(&line);
        }
    }
    Ok(out)
}

/// 读取（不存在则视为空）、合并并写回 .env
pub(crate) fn update_env(cfg: &BrandingConfig, env_path: &Path) -> Result<()> {
    let content = if env_path.exists() {
        fs::read_to_string(env_path)
            .with_context(|| format!("读取失败: {}", env_path.display()))?
    } else {
        String::new()
    };
    let merged = merge_env(&content, &env_entries(cfg))?;
    fs::write(env_path, merged).with_context(|| format!("写入失败: {}", env_path.display()))?;
    println!("📝 Updated {}", env_path.display());
    Ok(())
}
