//! Stripe 账户数据模型
//!
//! 仅保留本工具读取的字段，其余字段在反序列化时忽略

use serde::Deserialize;

/// Stripe 账户（平台账户或 Connect 子账户）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    /// 账户 ID（acct_...）
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub business_profile: Option<BusinessProfile>,

    #[serde(default)]
    pub settings: Option<AccountSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub dashboard: Option<DashboardSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardSettings {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Account {
    /// 仅有 ID 的账户
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            business_profile: None,
            settings: None,
        }
    }

    #[cfg(test)]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[cfg(test)]
    pub fn with_business_name(mut self, name: impl Into<String>) -> Self {
        self.business_profile = Some(BusinessProfile {
            name: Some(name.into()),
        });
        self
    }

    #[cfg(test)]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.settings = Some(AccountSettings {
            dashboard: Some(DashboardSettings {
                display_name: Some(name.into()),
            }),
        });
        self
    }

    /// `business_profile.name`，空字符串视为未设置
    pub fn business_name(&self) -> Option<&str> {
        self.business_profile
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// `settings.dashboard.display_name`，空字符串视为未设置
    pub fn display_name(&self) -> Option<&str> {
        self.settings
            .as_ref()
            .and_then(|s| s.dashboard.as_ref())
            .and_then(|d| d.display_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// 列表接口的一页结果
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    pub data: Vec<T>,
    /// 是否还有下一页
    #[serde(default)]
    pub has_more: bool,
}

/// 删除接口响应
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedAccount {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_connected_account() {
        let json = r#"{
            "id": "acct_1Nv0FGQ9RKHgCVdK",
            "object": "account",
            "email": "jenny.rosen@example.com",
            "business_profile": { "name": "Jenny's Bakery", "url": null },
            "charges_enabled": false,
            "settings": null
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, "acct_1Nv0FGQ9RKHgCVdK");
        assert_eq!(account.email(), Some("jenny.rosen@example.com"));
        assert_eq!(account.business_name(), Some("Jenny's Bakery"));
        assert_eq!(account.display_name(), None);
    }

    #[test]
    fn test_deserialize_platform_account() {
        let json = r#"{
            "id": "acct_platform",
            "settings": { "dashboard": { "display_name": "Acme Platform", "timezone": "Etc/UTC" } }
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.display_name(), Some("Acme Platform"));
        assert_eq!(account.email(), None);
        assert_eq!(account.business_name(), None);
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let account = Account::new("acct_1")
            .with_email("")
            .with_business_name("")
            .with_display_name("");
        assert_eq!(account.email(), None);
        assert_eq!(account.business_name(), None);
        assert_eq!(account.display_name(), None);
    }

    #[test]
    fn test_deserialize_list_page() {
        let json = r#"{
            "object": "list",
            "url": "/v1/accounts",
            "has_more": true,
            "data": [{ "id": "acct_1" }, { "id": "acct_2" }]
        }"#;
        let page: List<Account> = serde_json::from_str(json).unwrap();
        assert!(page.has_more);
        assert_eq!(page.data, vec![Account::new("acct_1"), Account::new("acct_2")]);
    }

    #[test]
    fn test_deserialize_deleted_account() {
        let json = r#"{ "id": "acct_1", "object": "account", "deleted": true }"#;
        let deleted: DeletedAccount = serde_json::from_str(json).unwrap();
        assert_eq!(deleted.id, "acct_1");
        assert!(deleted.deleted);
    }
}
