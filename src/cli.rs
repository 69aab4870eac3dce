//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 不带任何参数运行时等价于 `brandify apply`。

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 顶层 CLI 入口
#[derive(Parser, Debug)]
#[command(name = "brandify", about = "为前端客户端应用品牌配置（名称、标题、主题色）", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

/// 子命令定义
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// 读取 branding.yaml 并改写目标文件（默认子命令）
    Apply(SourceArgs),
    /// 写出示例 branding.yaml
    Init {
        /// 强制覆盖已存在文件
        #[arg(long)]
        force: bool,
        /// 目标目录（默认当前目录）
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// 应用一次后监视配置文件，变更时重新应用
    Watch(SourceArgs),
}

/// apply / watch 共用的配置来源与项目根参数
#[derive(Args, Debug)]
pub(crate) struct SourceArgs {
    /// 配置文件路径，默认：branding.yaml
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
    /// 项目根目录（.env 与 client/ 所在目录），默认：当前目录
    #[arg(short, long, value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,
}
