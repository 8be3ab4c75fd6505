//! # UI 设置 Tauri Commands
//!
//! 提供界面偏好设置的读写 Tauri command 处理函数：
//! - `read_ui_settings` - 应用启动时读取持久化的主题偏好
//! - `save_ui_settings` - 主题切换时写回配置文件
//!
//! 设置存储在应用自身的配置目录 `~/.popcorn-portfolio/settings.json` 中，
//! 与项目数据请求流程完全正交。

use crate::models::settings::UiSettings;
use crate::utils::path;

/// 读取界面偏好设置
///
/// 从 `~/.popcorn-portfolio/settings.json` 加载设置。
/// 文件不存在时（首次启动）返回默认设置（明亮主题），不算错误。
///
/// # 返回值
/// 解析后的设置对象
///
/// # 错误
/// 文件存在但无法读取或 JSON 解析失败时返回错误
#[tauri::command]
pub async fn read_ui_settings() -> Result<UiSettings, String> {
    let settings_path = path::get_settings_file_path()?;

    // 首次启动没有配置文件，返回默认值
    if !settings_path.exists() {
        return Ok(UiSettings::default());
    }

    let content = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| format!("读取设置文件失败: {}", e))?;

    serde_json::from_str(&content).map_err(|e| format!("解析设置文件失败: {}", e))
}

/// 保存界面偏好设置
///
/// 将设置序列化为 JSON（带 2 空格缩进）写入
/// `~/.popcorn-portfolio/settings.json`，目录不存在时自动创建。
///
/// # 参数
/// - `settings` - 要保存的完整设置对象
///
/// # 错误
/// 序列化失败、目录创建失败或文件写入失败时返回错误
#[tauri::command]
pub async fn save_ui_settings(settings: UiSettings) -> Result<(), String> {
    let settings_path = path::get_settings_file_path()?;

    if let Some(parent) = settings_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("创建配置目录失败: {}", e))?;
    }

    // 与前端 JSON.stringify(settings, null, 2) 保持一致的格式
    let content = serde_json::to_string_pretty(&settings)
        .map_err(|e| format!("序列化设置失败: {}", e))?;

    tokio::fs::write(&settings_path, content)
        .await
        .map_err(|e| format!("写入设置文件失败: {}", e))
}
