//! # 外部链接 Tauri Commands
//!
//! 提供外部链接打开的 Tauri command 处理函数：
//! - `open_project_link` - 在系统浏览器中打开项目的外部链接
//!
//! 项目卡片和详情页的 "Live Demo" / "View Code" 按钮经由此 command
//! 打开，统一校验链接协议后交给 `tauri-plugin-opener`（OS 原生 API）。

use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

/// 判断链接是否为可打开的 Web 地址
///
/// 只接受 `http://` 和 `https://` 协议。示例数据中的占位链接 `#`
/// 以及任何本地路径都不会被打开。
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// 在系统浏览器中打开项目的外部链接
///
/// # 参数
/// - `url` - 项目的 `link` 或 `githubLink` 字段值
///
/// # 错误
/// 链接不是 http(s) 地址或系统打开失败时返回错误信息
#[tauri::command]
pub fn open_project_link(app: AppHandle, url: String) -> Result<(), String> {
    if !is_web_url(&url) {
        return Err(format!("不是可打开的 Web 链接: {}", url));
    }

    app.opener()
        .open_url(&url, None::<&str>)
        .map_err(|e| format!("打开外部链接失败: {}", e))
}
