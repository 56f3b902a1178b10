//! 访客提交的记录：联系留言与求职申请
//!
//! 内容字段在创建后不再修改，后台只能推进状态。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =========================================================
// 联系留言 (Contact)
// =========================================================

/// 留言处理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 4] = [
        ContactStatus::New,
        ContactStatus::Read,
        ContactStatus::Replied,
        ContactStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
            ContactStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 公开联系表单提交的内容
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub base: NewContact,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =========================================================
// 求职申请 (Career)
// =========================================================

/// 申请状态，只能从 `Pending` 单向流转
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CareerStatus {
    #[default]
    Pending,
    Shortlisted,
    Rejected,
}

impl CareerStatus {
    pub const ALL: [CareerStatus; 3] = [
        CareerStatus::Pending,
        CareerStatus::Shortlisted,
        CareerStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerStatus::Pending => "pending",
            CareerStatus::Shortlisted => "shortlisted",
            CareerStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// pending -> shortlisted | rejected，没有反向流转
    pub fn can_transition_to(&self, next: CareerStatus) -> bool {
        matches!(
            (self, next),
            (
                CareerStatus::Pending,
                CareerStatus::Shortlisted | CareerStatus::Rejected
            )
        )
    }
}

impl fmt::Display for CareerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 申请表单中的文本字段（简历文件单独作为 multipart 部分发送）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

impl CareerFields {
    /// 以 multipart 文本字段的形式展开，空的可选字段照常发送空串
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("position", self.position.clone()),
            ("experience", self.experience.clone().unwrap_or_default()),
            ("coverLetter", self.cover_letter.clone().unwrap_or_default()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerApplication {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub base: CareerFields,
    /// 服务端保存的简历引用（文件路径或对象 key）
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub status: CareerStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_status_only_moves_forward() {
        assert!(CareerStatus::Pending.can_transition_to(CareerStatus::Shortlisted));
        assert!(CareerStatus::Pending.can_transition_to(CareerStatus::Rejected));
        assert!(!CareerStatus::Shortlisted.can_transition_to(CareerStatus::Pending));
        assert!(!CareerStatus::Rejected.can_transition_to(CareerStatus::Shortlisted));
        assert!(!CareerStatus::Pending.can_transition_to(CareerStatus::Pending));
    }

    #[test]
    fn contact_submission_decodes_wire_shape() {
        let raw = r#"{
            "_id": "c1",
            "name": "Ravi",
            "email": "ravi@example.com",
            "subject": "Quote",
            "message": "Need erection crew",
            "status": "replied",
            "emailSent": true,
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#;
        let contact: ContactSubmission = serde_json::from_str(raw).unwrap();
        assert_eq!(contact.id, "c1");
        assert_eq!(contact.base.phone, None);
        assert_eq!(contact.status, ContactStatus::Replied);
        assert!(contact.email_sent);
        assert!(contact.created_at.is_some());
    }

    #[test]
    fn status_parse_is_exact() {
        assert_eq!(ContactStatus::parse("archived"), Some(ContactStatus::Archived));
        assert_eq!(ContactStatus::parse("Archived"), None);
        assert_eq!(CareerStatus::parse("shortlisted"), Some(CareerStatus::Shortlisted));
    }
}
