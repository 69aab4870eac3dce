//! 在入口模块 main.jsx 中引入 branding.css

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BRANDING_IMPORT: &str = "import './branding.css'";
const BASE_IMPORT: &str = "import './style.css'";

/// 返回 None 表示已经引入过，无需改写
pub(crate) fn inject_import(source: &str) -> Option<String> {
    if source.contains(BRANDING_IMPORT) {
        return None;
    }
    if source.contains(BASE_IMPORT) {
        let replacement = format!("{};\n{}", BASE_IMPORT, BRANDING_IMPORT);
        Some(source.replacen(BASE_IMPORT, &replacement, 1))
    } else {
        Some(format!("{};\n{}", BRANDING_IMPORT, source))
    }
}

pub(crate) fn inject_branding_css_import(entry_path: &Path) -> Result<()> {
    if !entry_path.exists() {
        log::info!("skip {}: file not found", entry_path.display());
        return Ok(());
    }
    let source = fs::read_to_string(entry_path)
        .with_context(|| format!("读取失败: {}", entry_path.display()))?;
    match inject_import(&source) {
        Some(patched) => {
            fs::write(entry_path, patched)
                .with_context(|| format!("写入失败: {}", entry_path.display()))?;
            println!("🔗 Injected branding.css into {}", entry_path.display());
        }
        None => log::debug!("{} already imports branding.css", entry_path.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_after_base_stylesheet() {
        let src = "import React from 'react';\nimport './style.css';\nrender();\n";
        assert_eq!(
            inject_import(src).unwrap(),
            "import React from 'react';\nimport './style.css';\nimport './branding.css';\nrender();\n"
        );
    }

    #[test]
    fn prepends_without_base_stylesheet() {
        assert_eq!(inject_import("render();\n").unwrap(), "import './branding.css';\nrender();\n");
    }

    #[test]
    fn existing_import_is_kept_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.jsx");
        let src = "import './style.css';\nimport './branding.css';\n";
        fs::write(&path, src).unwrap();
        inject_branding_css_import(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), src);
    }

    #[test]
    fn absent_entry_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        inject_branding_css_import(&dir.path().join("main.jsx")).unwrap();
        assert!(!dir.path().join("main.jsx").exists());
    }
}
