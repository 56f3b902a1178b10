//! 后台维护的站点内容：服务、项目、关于我们

use crate::icon::IconName;
use serde::{Deserialize, Serialize};

// =========================================================
// 服务 (Service)
// =========================================================

/// 创建/更新服务时提交的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    /// 稳定的 slug，用于详情页 URL
    #[serde(rename = "id")]
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub base: ServiceInput,
}

impl Service {
    /// 图标名解析为已知图标，未知值回退到默认
    pub fn icon_name(&self) -> IconName {
        self.base
            .icon
            .as_deref()
            .map(IconName::resolve)
            .unwrap_or_default()
    }
}

// =========================================================
// 项目 (Project)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub client: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub base: ProjectInput,
}

fn default_active() -> bool {
    true
}

// =========================================================
// 关于我们 (About) - 单例文档，整体替换
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AboutValue {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub engineers: u32,
    pub supervisors: u32,
    pub technicians: u32,
    pub years_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MdMessage {
    pub name: String,
    pub position: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    pub values: Vec<AboutValue>,
    pub milestones: Vec<Milestone>,
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_stats: Option<TeamStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md_message: Option<MdMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_keeps_both_ids_apart() {
        let raw = r#"{
            "_id": "66aa",
            "id": "steel-erection",
            "title": "Structural Steel Erection",
            "description": "Heavy structures",
            "features": ["Cranes", "Rigging"],
            "icon": "HardHat",
            "order": 1,
            "isActive": true
        }"#;
        let service: Service = serde_json::from_str(raw).unwrap();
        assert_eq!(service.id, "66aa");
        assert_eq!(service.base.slug, "steel-erection");
        assert_eq!(service.base.features, vec!["Cranes", "Rigging"]);
        assert_eq!(service.icon_name(), IconName::HardHat);
    }

    #[test]
    fn unknown_icon_falls_back() {
        let raw = r#"{"_id":"1","id":"x","title":"t","description":"d","icon":"Rocket"}"#;
        let service: Service = serde_json::from_str(raw).unwrap();
        assert_eq!(service.icon_name(), IconName::default());
        assert!(service.base.is_active);
    }

    #[test]
    fn partial_about_document_fills_defaults() {
        let about: AboutContent =
            serde_json::from_str(r#"{"vision":"Safety first","certifications":["ISO 9001"]}"#)
                .unwrap();
        assert_eq!(about.vision.as_deref(), Some("Safety first"));
        assert!(about.values.is_empty());
        assert_eq!(about.certifications, vec!["ISO 9001"]);
        assert!(about.team_stats.is_none());
    }
}
