//! # API 配置服务
//!
//! 解析后端 API 的基础地址（base URL）。
//! 基础地址在应用启动时读取一次，之后所有请求都基于它拼接路径，
//! 不支持按请求覆盖。

/// 识别的环境变量名：后端 API 基础地址
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// 默认基础地址：本地开发后端
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// 从进程环境读取 API 基础地址
///
/// 启动时调用一次。未设置 `API_BASE_URL`（或设置为空）时使用默认地址。
pub fn api_base_url() -> String {
    resolve_base_url(std::env::var(API_BASE_URL_ENV).ok())
}

/// 规范化基础地址
///
/// # 规则
/// - `None` 或空白字符串 → 默认地址
/// - 去除末尾的 `/`，保证后续路径拼接时不产生双斜杠
pub fn resolve_base_url(value: Option<String>) -> String {
    let base = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => DEFAULT_API_BASE_URL.to_string(),
    };
    base.trim().trim_end_matches('/').to_string()
}
