//! 配置与加载模块：
//! - 定义 `BrandingConfig`/`AppInfo`/`Theme` 等数据结构
//! - 提供 `load_config` 读取本地 branding.yaml

use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};
use anyhow::{Result, Context, bail};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// 默认配置文件名（相对当前目录）
pub(crate) const DEFAULT_CONFIG_FILE: &str = "branding.yaml";

#[derive(Debug, Deserialize)]
pub(crate) struct BrandingConfig {
    pub(crate) app: AppInfo,
    /// 写入 .env 的覆盖值，例如 APP_TITLE / CUSTOM_FOOTER
    #[serde(default)]
    pub(crate) env: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub(crate) theme: Option<Theme>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppInfo {
    /// 应用名称，写入 manifest 的 name/short_name，并作为 APP_TITLE 的回退值
    pub(crate) name: String,
    /// 页面 <title>
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// <meta name="description"> 内容
    #[serde(default)]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct Theme {
    #[serde(default)]
    pub(crate) colors: Option<ThemeColors>,
}

/// 颜色表：CSS 变量名 -> 值，保持 YAML 中的书写顺序
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ThemeColors {
    #[serde(default)]
    pub(crate) light: Option<Mapping>,
    #[serde(default)]
    pub(crate) dark: Option<Mapping>,
}

impl BrandingConfig {
    pub(crate) fn colors(&self) -> Option<&ThemeColors> {
        self.theme.as_ref().and_then(|t| t.colors.as_ref())
    }

    /// 读取 env 段中的某个键
    pub(crate) fn env_value(&self, key: &str) -> Option<&Value> {
        self.env.as_ref().and_then(|m| m.get(key))
    }
}

/// 加载后的配置文本及其路径
#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig { pub(crate) text: String, pub(crate) path: PathBuf }

impl LoadedConfig {
    pub(crate) fn parse(&self) -> Result<BrandingConfig> {
        parse_config(&self.text)
            .with_context(|| format!("解析 YAML 失败: {}", self.path.display()))
    }
}

pub(crate) fn parse_config(text: &str) -> Result<BrandingConfig> {
    let cfg: BrandingConfig = serde_yaml::from_str(text)?;
    Ok(cfg)
}

/// 读取本地配置；文件不存在时直接报错，调用方不会触碰任何目标文件
pub(crate) fn load_config(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        bail!("Branding file not found: {}", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("读取配置失败: {}", path.display()))?;
    Ok(LoadedConfig { text, path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
app:
  name: Acme
  title: Acme Chat
env:
  CUSTOM_FOOTER: Hi
theme:
  colors:
    light:
      --bg: "#fff"
      --fg: "#111"
"##;

    #[test]
    fn parses_sections_and_keeps_color_order() {
        let cfg = parse_config(SAMPLE).unwrap();
        assert_eq!(cfg.app.name, "Acme");
        assert_eq!(cfg.app.title.as_deref(), Some("Acme Chat"));
        assert!(cfg.app.description.is_none());
        assert_eq!(cfg.env_value("CUSTOM_FOOTER").and_then(|v| v.as_str()), Some("Hi"));
        let light = cfg.colors().and_then(|c| c.light.as_ref()).unwrap();
        let keys: Vec<&str> = light.iter().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["--bg", "--fg"]);
        assert!(cfg.colors().unwrap().dark.is_none());
    }

    #[test]
    fn absent_sections_are_none() {
        let cfg = parse_config("app:\n  name: Solo\n").unwrap();
        assert!(cfg.env.is_none());
        assert!(cfg.colors().is_none());
    }

    #[test]
    fn missing_app_name_is_an_error() {
        assert!(parse_config("app:\n  title: Nameless\n").is_err());
    }

    #[test]
    fn missing_local_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("Branding file not found"));
    }
}
