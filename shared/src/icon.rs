//! 服务图标
//!
//! 后台以字符串保存图标名，这里收敛为封闭枚举。

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconName {
    #[default]
    Building2,
    Wrench,
    HardHat,
    Settings,
    Cog,
    Hammer,
}

impl IconName {
    pub const ALL: [IconName; 6] = [
        IconName::Building2,
        IconName::Wrench,
        IconName::HardHat,
        IconName::Settings,
        IconName::Cog,
        IconName::Hammer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Building2 => "Building2",
            IconName::Wrench => "Wrench",
            IconName::HardHat => "HardHat",
            IconName::Settings => "Settings",
            IconName::Cog => "Cog",
            IconName::Hammer => "Hammer",
        }
    }

    /// 精确匹配图标名，未知输入回退到默认图标
    pub fn resolve(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == name.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_names() {
        for icon in IconName::ALL {
            assert_eq!(IconName::resolve(icon.as_str()), icon);
        }
        assert_eq!(IconName::resolve(" Cog "), IconName::Cog);
    }

    #[test]
    fn resolve_unknown_is_default() {
        assert_eq!(IconName::resolve(""), IconName::Building2);
        assert_eq!(IconName::resolve("hammer"), IconName::Building2);
    }
}
