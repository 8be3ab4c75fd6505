//! # 联系表单数据模型与状态机
//!
//! 定义联系表单相关的 Rust 结构体：
//! - `ContactMessage` - 表单提交的消息体，对应 `POST /contact` 的 JSON 请求体
//! - `ContactFormState` - 表单的渲染状态（idle/submitting/success/error）
//! - `ContactForm` - 一次页面挂载期间的表单模型，持有字段值并驱动状态转换
//!
//! ## 状态机
//! `Idle → Submitting → { Success | Error }`，其中 `Error → Submitting`
//! 可重入（用户可重试），`Success` 为本次挂载的终态（提交按钮禁用）。
//! 提交成功后清空三个输入字段；提交失败保留字段值供重试。

use serde::{Deserialize, Serialize};

/// 联系表单消息体
///
/// 由表单输入构造，发送一次后即丢弃，不做任何持久化。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ContactFormData {
///   name: string;
///   email: string;
///   message: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// 发件人姓名
    pub name: String,

    /// 发件人邮箱
    pub email: String,

    /// 留言内容
    pub message: String,
}

/// 联系表单渲染状态
///
/// 通过 Tauri IPC 序列化给前端，前端据此决定按钮文案、
/// 禁用状态和内联错误提示的渲染。
///
/// 对应前端 TypeScript 类型：
/// ```typescript
/// type ContactStatus = "idle" | "loading" | "success" | "error";
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ContactFormState {
    /// 初始状态：尚未提交
    Idle,

    /// 提交中：请求已发出、尚未收到响应，提交按钮禁用
    Submitting,

    /// 提交成功：本次挂载的终态，提交按钮保持禁用，字段已清空
    Success,

    /// 提交失败：显示内联错误信息，字段保留，允许重新提交
    Error {
        /// 内联展示的错误信息
        message: String,
    },
}

/// 一次页面挂载期间的联系表单模型
///
/// 持有三个输入字段的当前值和渲染状态，是所有状态转换的唯一入口。
/// 页面挂载时创建（或重置）一个实例，卸载时销毁。
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    /// 姓名字段当前值
    pub name: String,

    /// 邮箱字段当前值
    pub email: String,

    /// 留言字段当前值
    pub message: String,

    /// 当前渲染状态
    pub state: ContactFormState,
}

impl ContactForm {
    /// 创建一个空白表单（Idle 状态，字段为空）
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: ContactFormState::Idle,
        }
    }

    /// 判断当前状态是否允许提交
    ///
    /// - `Idle` / `Error` - 允许（Error 状态下的提交即为重试）
    /// - `Submitting` - 不允许（已有一次请求在途）
    /// - `Success` - 不允许（本次挂载的终态）
    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            ContactFormState::Idle | ContactFormState::Error { .. }
        )
    }

    /// 开始一次提交：记录字段值并进入 Submitting 状态
    ///
    /// # 返回值
    /// - `true` - 状态允许提交，已进入 Submitting
    /// - `false` - 当前状态不允许提交（Submitting 或 Success），表单不变
    pub fn begin_submit(&mut self, data: &ContactMessage) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.name = data.name.clone();
        self.email = data.email.clone();
        self.message = data.message.clone();
        self.state = ContactFormState::Submitting;
        true
    }

    /// 提交成功：进入 Success 终态并清空全部输入字段
    pub fn resolve_success(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.state = ContactFormState::Success;
    }

    /// 提交失败：进入 Error 状态，字段值保留以便用户修改后重试
    ///
    /// # 参数
    /// - `message` - 内联展示的错误信息
    pub fn resolve_error(&mut self, message: String) {
        self.state = ContactFormState::Error { message };
    }

    /// 重置为空白表单（页面重新挂载时调用）
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
