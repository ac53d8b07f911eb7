//! 命令行参数

use crate::config::Config;
use crate::error::ConfigError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 写手市场命令行客户端
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML 配置文件路径；不指定时从环境变量读取
    #[arg(short = 'f', long, env = "WRITER_PORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// 覆盖配置中的 API 地址
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// 列出所有学院
    Colleges,
    /// 列出所有方向
    Branches,
    /// 列出写手
    Writers {
        #[arg(long, default_value = "")]
        college: String,
        #[arg(long, default_value = "")]
        branch: String,
        /// 输出 HTML 卡片而不是纯文本
        #[arg(long)]
        html: bool,
    },
    /// 提交写手申请
    Apply {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        college_name: String,
        #[arg(long)]
        branch: String,
        #[arg(long)]
        email: String,
        /// 每 10 页的价格
        #[arg(long)]
        rate: String,
        /// 学生证图片路径
        #[arg(long)]
        student_id: Option<PathBuf>,
    },
}

impl Args {
    /// 合并配置文件 / 环境变量与命令行覆盖项
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::from_env(),
        };

        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }
        config.verbose_logging |= self.verbose;

        Ok(config)
    }
}
