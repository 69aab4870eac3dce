//! manifest.json：不存在时按默认值创建，存在时只覆盖 name/short_name

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use std::{fs, path::Path};

use crate::config::BrandingConfig;

/// 新建 manifest 时使用的默认内容
pub(crate) fn default_manifest() -> Value {
    json!({
        "name": "LibreChat",
        "short_name": "LibreChat",
        "icons": [
            {
                "src": "assets/favicon-32x32.png",
                "sizes": "32x32",
                "type": "image/png"
            },
            {
                "src": "assets/apple-touch-icon-180x180.png",
                "sizes": "180x180",
                "type": "image/png"
            }
        ],
        "theme_color": "#171717",
        "background_color": "#171717",
        "display": "standalone"
    })
}

/// 写入应用名称；顶层必须是 JSON 对象
pub(crate) fn apply_app_name(mut manifest: Value, name: &str) -> Result<Value> {
    let Some(obj) = manifest.as_object_mut() else {
        bail!("manifest 顶层不是 JSON 对象");
    };
    obj.insert("name".into(), Value::String(name.to_string()));
    obj.insert("short_name".into(), Value::String(name.to_string()));
    Ok(manifest)
}

pub(crate) fn update_manifest(cfg: &BrandingConfig, manifest_path: &Path) -> Result<()> {
    let manifest: Value = if manifest_path.exists() {
        let text = fs::read_to_string(manifest_path)
            .with_context(|| format!("读取失败: {}", manifest_path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("解析 JSON 失败: {}", manifest_path.display()))?
    } else {
        println!("🆕 Creating new {}", manifest_path.display());
        default_manifest()
    };

    let manifest = apply_app_name(manifest, &cfg.app.name)
        .with_context(|| format!("无法更新: {}", manifest_path.display()))?;
    let out = serde_json::to_string_pretty(&manifest)?;
    fs::write(manifest_path, out)
        .with_context(|| format!("写入失败: {}", manifest_path.display()))?;
    println!("📝 Updated {}", manifest_path.display());
    Ok(())
}
