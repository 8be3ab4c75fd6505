//! # UI 设置数据模型
//!
//! 定义持久化的界面偏好设置（UiSettings），目前只有主题一项。
//! 存储在应用自身的配置目录中（`~/.popcorn-portfolio/settings.json`），
//! 应用启动时读取一次，主题切换时写回。

use serde::{Deserialize, Serialize};

/// 明亮主题标识
pub const THEME_LIGHT: &str = "light";

/// 暗色主题标识
pub const THEME_DARK: &str = "dark";

/// 界面偏好设置
///
/// 进程级 UI 状态：启动时显式初始化（读取持久化偏好），无需清理。
/// 与数据请求流程完全正交，不影响任何页面的数据正确性。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface UiSettings {
///   theme: "light" | "dark";
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// 当前主题："light" 或 "dark"
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    THEME_LIGHT.to_string()
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(UiSettings::default().theme, THEME_LIGHT);
    }

    #[test]
    fn test_missing_theme_field_falls_back_to_default() {
        // 旧版本配置文件可能缺少 theme 字段
        let settings: UiSettings = serde_json::from_str("{}").expect("解析空设置对象失败");
        assert_eq!(settings.theme, THEME_LIGHT);
    }

    #[test]
    fn test_roundtrip_preserves_dark_theme() {
        let settings = UiSettings {
            theme: THEME_DARK.to_string(),
        };
        let json = serde_json::to_string(&settings).expect("序列化设置失败");
        let parsed: UiSettings = serde_json::from_str(&json).expect("反序列化设置失败");
        assert_eq!(parsed, settings);
    }
}
