//! # 路径工具函数
//!
//! 提供与应用配置文件路径相关的工具函数：
//! - 获取应用自身配置目录路径（`~/.popcorn-portfolio/`）
//! - 获取设置文件路径（`~/.popcorn-portfolio/settings.json`）

use std::path::PathBuf;

/// 设置文件名
const SETTINGS_FILE_NAME: &str = "settings.json";

/// 获取应用配置目录的绝对路径
///
/// 应用的持久化数据（目前只有 UI 设置）独立存储在
/// `~/.popcorn-portfolio/` 目录下。
/// 使用 `dirs` crate 获取跨平台的主目录路径。
///
/// # 返回值
/// 返回 `~/.popcorn-portfolio/` 目录的绝对路径。
///
/// # 错误
/// 如果无法确定用户主目录（极端情况，如无 HOME 环境变量），返回错误信息。
pub fn get_app_config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "无法获取用户主目录".to_string())?;
    Ok(home.join(".popcorn-portfolio"))
}

/// 获取设置文件的绝对路径
///
/// # 返回值
/// 返回 `~/.popcorn-portfolio/settings.json` 的绝对路径。
pub fn get_settings_file_path() -> Result<PathBuf, String> {
    Ok(get_app_config_path()?.join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_layout() {
        let path = get_settings_file_path().expect("测试环境应有主目录");
        assert!(path.ends_with(".popcorn-portfolio/settings.json"));
    }
}
