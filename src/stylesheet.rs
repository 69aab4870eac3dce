//! branding.css 生成：每次全量重写，不与旧内容合并

use anyhow::{Context, Result};
use serde::Serialize;
use serde_yaml::Mapping;
use std::{fs, path::Path};
use tera::{Context as TContext, Tera};

use crate::{config::ThemeColors, utils::scalar_text};

const TEMPLATE_NAME: &str = "branding.css";
const TEMPLATE: &str = include_str!("assets/branding.css.tera");

#[derive(Debug, Serialize, PartialEq)]
struct CssVar {
    name: String,
    value: String,
}

/// 按 YAML 书写顺序展开颜色表；非标量的值跳过并警告
fn css_vars(map: Option<&Mapping>) -> Vec<CssVar> {
    let Some(map) = map else { return Vec::new() };
    map.iter()
        .filter_map(|(k, v)| {
            let name = scalar_text(k)?;
            match scalar_text(v) {
                Some(value) => Some(CssVar { name, value }),
                None => {
                    log::warn!("颜色 {} 的值不是标量，已跳过", name);
                    None
                }
            }
        })
        .collect()
}

pub(crate) fn render_css(colors: &ThemeColors) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .with_context(|| format!("加载模板失败: {}", TEMPLATE_NAME))?;

    let mut ctx = TContext::new();
    ctx.insert("has_light", &colors.light.is_some());
    ctx.insert("has_dark", &colors.dark.is_some());
    ctx.insert("light", &css_vars(colors.light.as_ref()));
    ctx.insert("dark", &css_vars(colors.dark.as_ref()));

    let css = tera
        .render(TEMPLATE_NAME, &ctx)
        .with_context(|| format!("渲染模板失败: {}", TEMPLATE_NAME))?;
    Ok(css)
}

/// 未配置 theme.colors 时保留现有文件不动
pub(crate) fn generate_branding_css(colors: Option<&ThemeColors>, css_path: &Path) -> Result<()> {
    let Some(colors) = colors else {
        log::info!("skip {}: no theme.colors", css_path.display());
        return Ok(());
    };
    let css = render_css(colors)?;
    fs::write(css_path, css).with_context(|| format!("写入失败: {}", css_path.display()))?;
    println!("🎨 Generated {}", css_path.display());
    Ok(())
}
