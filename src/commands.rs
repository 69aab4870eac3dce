//! 命令调度模块：
//! - 接收解析好的 CLI 参数，计算“有效参数”（CLI > 环境变量 > 默认值）
//! - 不带子命令运行时只使用默认路径，不读取环境变量
//! - 调用配置加载、应用、初始化、监视等模块

use anyhow::Result;
use std::path::PathBuf;

use crate::{
    apply::apply,
    cli::{Cli, Command, SourceArgs},
    config::{self, DEFAULT_CONFIG_FILE},
    init::init_scaffold,
    utils::env_opt_path,
    watch::watch_and_apply,
};

/// 解析后的配置路径与项目根
#[derive(Debug)]
struct Effective {
    config: PathBuf,
    root: PathBuf,
}

impl Effective {
    /// ./branding.yaml 与当前目录
    fn defaults() -> Self {
        Self { config: PathBuf::from(DEFAULT_CONFIG_FILE), root: PathBuf::from(".") }
    }
}

fn resolve(args: SourceArgs) -> Effective {
    let defaults = Effective::defaults();
    let config = args
        .config
        .or_else(|| env_opt_path("BRANDIFY_CONFIG"))
        .unwrap_or(defaults.config);
    let root = args
        .root
        .or_else(|| env_opt_path("BRANDIFY_ROOT"))
        .unwrap_or(defaults.root);
    Effective { config, root }
}

fn run_apply(eff: Effective) -> Result<()> {
    println!("🎨 Applying branding from {}...", eff.config.display());
    // 配置缺失时在此处失败，之后的步骤不会执行
    let cfg = config::load_config(&eff.config)?.parse()?;
    apply(&cfg, &eff.root)
}

/// 运行指定的子命令；无子命令时以默认路径执行 apply
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => run_apply(Effective::defaults()),
        Some(Command::Apply(args)) => run_apply(resolve(args)),
        Some(Command::Init { force, dir }) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            init_scaffold(&dir, force)
        }
        Some(Command::Watch(args)) => {
            let eff = resolve(args);
            watch_and_apply(eff.config, eff.root)
        }
    }
}
