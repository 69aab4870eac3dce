//! 初始化模块
//! - `brandify init` 写出示例 branding.yaml

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::DEFAULT_CONFIG_FILE;

// 内置示例（用于 init）
pub(crate) const SAMPLE_CONFIG: &str = include_str!("assets/sample.branding.yaml");

/// 初始化示例配置；已存在且未指定 force 时跳过
pub(crate) fn init_scaffold(dir: &Path, force: bool) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("创建目录失败: {}", dir.display()))?;
    }

    let cfg_path = dir.join(DEFAULT_CONFIG_FILE);
    if cfg_path.exists() && !force {
        eprintln!("跳过: {} 已存在，使用 --force 可覆盖", cfg_path.display());
    } else {
        fs::write(&cfg_path, SAMPLE_CONFIG.as_bytes())
            .with_context(|| format!("写入示例配置失败: {}", cfg_path.display()))?;
        println!("写入: {}", cfg_path.display());
    }

    println!("✅ 初始化完成，编辑 {} 后运行: brandify", DEFAULT_CONFIG_FILE);
    Ok(())
}
