//! 监视模式：配置文件变更后重新应用
//! - 监视配置文件所在目录（编辑器常以替换方式保存）
//! - 只响应配置文件本身的事件，避免被自身写出的 .env 触发

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};
use anyhow::{Context, Result};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use crate::{apply::apply, config::load_config};

/// 事件是否涉及配置文件
fn touches_config(event: &notify::Event, file_name: &OsString) -> bool {
    event
        .paths
        .iter()
        .any(|p| p.file_name().map(|n| n == file_name.as_os_str()).unwrap_or(false))
}

fn apply_from(config_path: &Path, root: &Path) -> Result<()> {
    let cfg = load_config(config_path)?.parse()?;
    apply(&cfg, root)
}

/// 先应用一次，然后阻塞监视；重新应用失败只打印错误，不退出
pub(crate) fn watch_and_apply(config_path: PathBuf, root: PathBuf) -> Result<()> {
    apply_from(&config_path, &root)?;

    let file_name = config_path
        .file_name()
        .map(|n| n.to_os_string())
        .with_context(|| format!("无效的配置路径: {}", config_path.display()))?;
    let watch_dir = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let dirty = Arc::new(AtomicBool::new(false));
    let _watcher = {
        let dirty = dirty.clone();
        let file_name = file_name.clone();
        let mut watcher: RecommendedWatcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                if let Ok(event) = res {
                    if touches_config(&event, &file_name) {
                        dirty.store(true, Ordering::SeqCst);
                    }
                }
            })?;
        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("监视失败: {}", watch_dir.display()))?;
        watcher
    };
    println!("👀 Watching {} (Ctrl+C to stop)", config_path.display());

    let mut runs: u64 = 1;
    loop {
        thread::sleep(Duration::from_millis(400));
        if !dirty.swap(false, Ordering::SeqCst) {
            continue;
        }
        match apply_from(&config_path, &root) {
            Ok(()) => {
                runs += 1;
                println!("🔁 Re-applied branding, run = {}", runs);
            }
            Err(e) => eprintln!("❌ {:#}", e),
        }
    }
}
