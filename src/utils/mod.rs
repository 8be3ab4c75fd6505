//! # 通用工具模块
//!
//! - `path` - 应用配置目录和设置文件的路径解析

pub mod path;
