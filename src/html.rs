//! index.html 改写：标题、描述与 manifest 链接
//! 只做文本匹配，不解析 DOM；找不到目标标签时静默跳过。

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::{fs, path::Path};

use crate::{config::BrandingConfig, utils::non_empty};

const TITLE_PATTERN: &str = r"<title>[^\r\n]*?</title>";
const DESCRIPTION_PATTERN: &str = r#"<meta name="description" content="[^\r\n]*?" />"#;
const MANIFEST_LINK: &str = "    <link rel=\"manifest\" href=\"/manifest.json\" />\n  </head>";

/// 改写结果，`manifest_injected` 用于打印提示
#[derive(Debug, PartialEq)]
pub(crate) struct HtmlPatch {
    pub(crate) html: String,
    pub(crate) manifest_injected: bool,
}

pub(crate) fn patch_html(html: &str, title: Option<&str>, description: Option<&str>) -> Result<HtmlPatch> {
    let mut html = html.to_string();

    if let Some(title) = non_empty(title) {
        let re = Regex::new(TITLE_PATTERN)?;
        let tag = format!("<title>{}</title>", title);
        html = re.replacen(&html, 1, NoExpand(&tag)).into_owned();
    }

    if let Some(desc) = non_empty(description) {
        let re = Regex::new(DESCRIPTION_PATTERN)?;
        let tag = format!("<meta name=\"description\" content=\"{}\" />", desc);
        html = re.replacen(&html, 1, NoExpand(&tag)).into_owned();
    }

    let mut manifest_injected = false;
    if !html.contains("rel=\"manifest\"") {
        html = html.replacen("</head>", MANIFEST_LINK, 1);
        manifest_injected = true;
    }

    Ok(HtmlPatch { html, manifest_injected })
}

/// 不存在 index.html 时什么也不做
pub(crate) fn update_index_html(cfg: &BrandingConfig, index_path: &Path) -> Result<()> {
    if !index_path.exists() {
        log::info!("skip {}: file not found", index_path.display());
        return Ok(());
    }
    let html = fs::read_to_string(index_path)
        .with_context(|| format!("读取失败: {}", index_path.display()))?;
    let patch = patch_html(&html, cfg.app.title.as_deref(), cfg.app.description.as_deref())?;
    if patch.manifest_injected {
        println!("🔗 Injected manifest link into {}", index_path.display());
    }
    fs::write(index_path, patch.html)
        .with_context(|| format!("写入失败: {}", index_path.display()))?;
    println!("📝 Updated {}", index_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html>\n  <head>\n    <title>LibreChat</title>\n    <meta name=\"description\" content=\"Old\" />\n  </head>\n  <body></body>\n</html>\n";

    #[test]
    fn rewrites_title_and_description_and_adds_manifest() {
        let patch = patch_html(PAGE, Some("Acme Chat"), Some("Talk to Acme")).unwrap();
        assert!(patch.manifest_injected);
        assert_eq!(
            patch.html,
            "<html>\n  <head>\n    <title>Acme Chat</title>\n    <meta name=\"description\" content=\"Talk to Acme\" />\n      <link rel=\"manifest\" href=\"/manifest.json\" />\n  </head>\n  <body></body>\n</html>\n"
        );
    }

    #[test]
    fn second_pass_is_identical() {
        let first = patch_html(PAGE, Some("Acme"), None).unwrap();
        let second = patch_html(&first.html, Some("Acme"), None).unwrap();
        assert!(!second.manifest_injected);
        assert_eq!(first.html, second.html);
    }

    #[test]
    fn missing_tags_are_left_alone() {
        let page = "<head><meta name=\"description\" content=\"x\"></head>";
        let patch = patch_html(page, Some("T"), Some("D")).unwrap();
        assert_eq!(
            patch.html,
            "<head><meta name=\"description\" content=\"x\">    <link rel=\"manifest\" href=\"/manifest.json\" />\n  </head>"
        );
    }

    #[test]
    fn only_first_title_is_replaced() {
        let page = "<title>a</title><title>b</title><link rel=\"manifest\" href=\"/m.json\">";
        let patch = patch_html(page, Some("c"), None).unwrap();
        assert_eq!(patch.html, "<title>c</title><title>b</title><link rel=\"manifest\" href=\"/m.json\">");
    }

    #[test]
    fn absent_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = crate::config::parse_config("app:\n  name: Acme\n").unwrap();
        update_index_html(&cfg, &dir.path().join("index.html")).unwrap();
        assert!(!dir.path().join("index.html").exists());
    }
}
