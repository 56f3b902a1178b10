use serde::{Deserialize, Serialize};

pub mod content;
pub mod icon;
pub mod protocol;
pub mod submission;

pub use content::{
    AboutContent, AboutValue, MdMessage, Milestone, Project, ProjectInput, Service, ServiceInput,
    TeamStats,
};
pub use icon::IconName;
pub use submission::{
    CareerApplication, CareerFields, CareerStatus, ContactStatus, ContactSubmission, NewContact,
};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 未设置 `API_URL` 时使用的后端地址
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// 会话 token 的存储键
pub const STORAGE_TOKEN_KEY: &str = "adminToken";
/// 管理员身份 (JSON) 的存储键
pub const STORAGE_ADMIN_KEY: &str = "admin";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 简历只接受 PDF
pub const RESUME_CONTENT_TYPE: &str = "application/pdf";
/// 简历大小上限 10 MiB
pub const RESUME_MAX_BYTES: u64 = 10 * 1024 * 1024;
/// multipart 表单中简历字段名
pub const RESUME_FIELD: &str = "resume";

/// 服务端未给出 message 时的兜底文案
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// 项目分类（开放字符串，这里只是后台表单和前台筛选使用的已知值）
pub const PROJECT_CATEGORIES: [&str; 4] =
    ["Steel Plants", "Power Plants", "Refineries", "Infrastructure"];

// =========================================================
// 传输包装 (Envelope)
// =========================================================

/// 后端统一响应格式：`{ success, data, message }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// 部分接口不返回该字段，缺省视为成功
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

/// 错误响应体，只关心 message 字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

/// 管理员身份，随 token 一起持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录成功后 `data` 的内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminIdentity,
}

/// `PATCH .../status` 的请求体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate<S> {
    pub status: S,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_decodes_to_none() {
        let env: Envelope<Vec<Service>> =
            serde_json::from_str(r#"{"success":false,"message":"Service not found"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Service not found"));
    }

    #[test]
    fn envelope_success_defaults_to_true() {
        let env: Envelope<AdminIdentity> =
            serde_json::from_str(r#"{"data":{"id":"1","username":"admin"}}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap().username, "admin");
    }

    #[test]
    fn admin_identity_accepts_mongo_id() {
        let admin: AdminIdentity =
            serde_json::from_str(r#"{"_id":"65f0","username":"admin"}"#).unwrap();
        assert_eq!(admin.id, "65f0");
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(body.message.is_none());
    }
}
