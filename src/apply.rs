//! 应用品牌配置：按固定顺序依次改写各目标文件
//! .env -> index.html -> manifest.json -> branding.css -> main.jsx

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::{
    config::BrandingConfig,
    entry::inject_branding_css_import,
    env_file::update_env,
    html::update_index_html,
    manifest::update_manifest,
    stylesheet::generate_branding_css,
};

/// 目标文件路径（均相对项目根）
#[derive(Debug, Clone)]
pub(crate) struct Targets {
    pub(crate) env: PathBuf,
    pub(crate) index_html: PathBuf,
    pub(crate) manifest: PathBuf,
    pub(crate) stylesheet: PathBuf,
    pub(crate) entry: PathBuf,
}

impl Targets {
    pub(crate) fn under(root: &Path) -> Self {
        let client = root.join("client");
        Self {
            env: root.join(".env"),
            index_html: client.join("index.html"),
            manifest: client.join("public").join("manifest.json"),
            stylesheet: client.join("src").join("branding.css"),
            entry: client.join("src").join("main.jsx"),
        }
    }
}

/// 执行一次完整应用；任一步骤出错即中止，已写入的文件不回滚
pub(crate) fn apply(config: &BrandingConfig, root: &Path) -> Result<()> {
    let targets = Targets::under(root);
    log::debug!("targets: {:?}", targets);

    update_env(config, &targets.env)?;
    update_index_html(config, &targets.index_html)?;
    update_manifest(config, &targets.manifest)?;
    generate_branding_css(config.colors(), &targets.stylesheet)?;
    inject_branding_css_import(&targets.entry)?;

    println!("✅ Branding applied successfully!");
    println!("👉 Please rebuild the client: npm run frontend");
    Ok(())
}
