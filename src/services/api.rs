//! # 后端 API 客户端服务
//!
//! 封装对作品集后端 HTTP API 的全部访问，是数据层的唯一出口：
//! - `list_projects` - `GET {base}/projects`，项目列表
//! - `get_project` - `GET {base}/projects/{id}`，单个项目
//! - `send_contact` - `POST {base}/contact`，联系表单提交
//!
//! ## 错误归一化
//! 所有失败被归一化为 `ApiError` 两类：
//! - `Transport` - 网络不可达、连接失败、响应体解析失败
//! - `Http` - 后端返回非 2xx 状态码（携带状态码和响应体文本）
//!
//! 本服务只向上抛出原始错误，不做任何降级决策；
//! 各页面的 command 在自己的边界上决定降级方式（列表页替换示例数据、
//! 详情页渲染 NotFound、联系表单显示内联错误）。
//!
//! ## 请求模型
//! 每次调用都是一次单程尽力而为的请求：不重试、不缓存、不设超时覆盖。

use std::fmt;

use serde::de::DeserializeOwned;

use crate::models::contact::ContactMessage;
use crate::models::project::Project;
use crate::services::config;

/// API 请求错误
///
/// 数据服务的完整错误分类。`NotFound` 不是独立的错误变体：
/// 详情页把"无此 id"（通常表现为 `Http { status: 404 }`）和
/// 传输失败统一解析为 NotFound 渲染状态。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 传输层失败：网络不可达、DNS 解析失败、响应体不是合法 JSON 等
    Transport(String),

    /// HTTP 层失败：后端返回了非 2xx 状态码
    Http {
        /// HTTP 状态码
        status: u16,
        /// 响应体文本（后端的错误描述，可能为空）
        body: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(reason) => write!(f, "请求失败: {reason}"),
            Self::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "后端返回错误状态: HTTP {status}")
                } else {
                    write!(f, "后端返回错误状态: HTTP {status} - {body}")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// 后端 API 客户端
///
/// 持有复用的 `reqwest::Client` 连接池和启动时确定的基础地址。
/// 通过 Tauri 的 `manage()` 注册为应用状态，
/// 所有 command 函数通过 `State<ApiClient>` 参数注入访问。
pub struct ApiClient {
    /// API 基础地址（末尾无斜杠），所有请求路径基于它拼接
    base_url: String,

    /// 复用的 HTTP 客户端（内部带连接池，Clone 开销低）
    http: reqwest::Client,
}

impl ApiClient {
    /// 以指定基础地址创建客户端
    ///
    /// # 参数
    /// - `base_url` - API 基础地址，末尾斜杠会被去除
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: config::resolve_base_url(Some(base_url.into())),
            http: reqwest::Client::new(),
        }
    }

    /// 以进程环境中的 `API_BASE_URL`（或默认地址）创建客户端
    ///
    /// 应用启动时调用一次，之后基础地址不再变化。
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    /// 当前使用的基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 项目列表请求地址：`{base}/projects`
    pub fn projects_url(&self) -> String {
        format!("{}/projects", self.base_url)
    }

    /// 单个项目请求地址：`{base}/projects/{id}`
    ///
    /// `id` 是列表页和详情页之间导航的不透明键，原样拼入路径，
    /// 不做任何解析或转换。
    pub fn project_url(&self, id: &str) -> String {
        format!("{}/projects/{}", self.base_url, id)
    }

    /// 联系表单提交地址：`{base}/contact`
    pub fn contact_url(&self) -> String {
        format!("{}/contact", self.base_url)
    }

    /// 获取项目列表
    ///
    /// # 返回值
    /// 按后端返回顺序排列的 Project 数组（顺序有意义，渲染时保持）
    ///
    /// # 错误
    /// 非 2xx 状态返回 `ApiError::Http`，网络或解析失败返回 `ApiError::Transport`
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json(&self.projects_url()).await
    }

    /// 按 id 获取单个项目
    ///
    /// # 参数
    /// - `id` - 路由中的项目标识，原样传入请求路径
    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        self.get_json(&self.project_url(id)).await
    }

    /// 提交联系表单消息
    ///
    /// 以 JSON 体 `{name, email, message}` POST 到 `{base}/contact`。
    /// 成功响应（2xx）的响应体被忽略。
    pub async fn send_contact(&self, data: &ContactMessage) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.contact_url())
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// 执行一次 GET 请求并把成功响应体解析为 JSON
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Transport(format!("响应体解析失败: {e}")))
    }

    /// 校验响应状态码，非 2xx 归一化为 `ApiError::Http`
    ///
    /// 失败响应的响应体文本被读出并随错误携带（读取失败时置空）。
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_url_passes_id_verbatim() {
        let client = ApiClient::new("http://localhost:5000/api");
        // id 不做任何转换，原样拼入路径
        assert_eq!(
            client.project_url("42"),
            "http://localhost:5000/api/projects/42"
        );
        assert_eq!(
            client.project_url("abc-123"),
            "http://localhost:5000/api/projects/abc-123"
        );
    }

    #[test]
    fn test_endpoint_urls() {
        let client = ApiClient::new("https://api.popcorn.dev/v1/");
        // 基础地址末尾斜杠被去除，拼接不产生双斜杠
        assert_eq!(client.base_url(), "https://api.popcorn.dev/v1");
        assert_eq!(client.projects_url(), "https://api.popcorn.dev/v1/projects");
        assert_eq!(client.contact_url(), "https://api.popcorn.dev/v1/contact");
    }

    #[test]
    fn test_api_error_display() {
        let transport = ApiError::Transport("connection refused".to_string());
        assert!(transport.to_string().contains("connection refused"));

        let http = ApiError::Http {
            status: 503,
            body: "service unavailable".to_string(),
        };
        let rendered = http.to_string();
        assert!(rendered.contains("503"));
        assert!(rendered.contains("service unavailable"));

        // 空响应体时不渲染多余的分隔符
        let empty_body = ApiError::Http {
            status: 404,
            body: String::new(),
        };
        assert_eq!(empty_body.to_string(), "后端返回错误状态: HTTP 404");
    }
}
