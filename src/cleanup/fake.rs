//! 测试用的内存版 AccountApi

use std::cell::RefCell;
use std::collections::HashSet;

use reqwest::StatusCode;

use crate::stripe::model::{DeletedAccount, List};
use crate::stripe::{Account, AccountApi, ListAccountsParams, StripeError};

/// 按游标分页的内存账户表，记录每一次调用
#[derive(Default)]
pub struct FakeAccountApi {
    pub platform: Option<Account>,
    pub accounts: Vec<Account>,
    /// 删除时返回 resource_missing 的账户
    pub missing: HashSet<String>,
    /// 删除时返回其他错误的账户
    pub broken: HashSet<String>,
    /// 删除时返回 `deleted: false` 的账户
    pub undeletable: HashSet<String>,
    /// 第 N 次（从 0 开始）列表请求失败
    pub fail_list_call: Option<usize>,
    pub reject_key: bool,
    pub list_calls: RefCell<Vec<ListAccountsParams>>,
    pub delete_calls: RefCell<Vec<String>>,
}

impl FakeAccountApi {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            platform: Some(Account::new("acct_platform").with_display_name("Acme Platform")),
            accounts,
            ..Default::default()
        }
    }

    /// 生成 `count` 个 ID 为 acct_0000.. 的账户
    pub fn with_count(count: usize) -> Self {
        Self::with_accounts((0..count).map(|i| Account::new(format!("acct_{:04}", i))).collect())
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.delete_calls.borrow().clone()
    }
}

impl AccountApi for FakeAccountApi {
    async fn retrieve_platform_account(&self) -> Result<Account, StripeError> {
        if self.reject_key {
            return Err(StripeError::Authentication(
                "Invalid API Key provided".to_string(),
            ));
        }
        Ok(self
            .platform
            .clone()
            .unwrap_or_else(|| Account::new("acct_platform")))
    }

    async fn list_accounts(
        &self,
        params: &ListAccountsParams,
    ) -> Result<List<Account>, StripeError> {
        let call = self.list_calls.borrow().len();
        self.list_calls.borrow_mut().push(params.clone());

        if self.fail_list_call == Some(call) {
            return Err(StripeError::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: None,
                message: "list failed".to_string(),
            });
        }

        let start = match &params.starting_after {
            Some(cursor) => self
                .accounts
                .iter()
                .position(|a| &a.id == cursor)
                .map(|i| i + 1)
                .ok_or_else(|| StripeError::NotFound(format!("No such account: '{}'", cursor)))?,
            None => 0,
        };
        let end = (start + params.limit as usize).min(self.accounts.len());

        Ok(List {
            data: self.accounts[start..end].to_vec(),
            has_more: end < self.accounts.len(),
        })
    }

    async fn delete_account(&self, account_id: &str) -> Result<DeletedAccount, StripeError> {
        self.delete_calls.borrow_mut().push(account_id.to_string());

        if self.missing.contains(account_id) {
            return Err(StripeError::NotFound(format!(
                "No such account: '{}'",
                account_id
            )));
        }
        if self.broken.contains(account_id) {
            return Err(StripeError::Api {
                status: StatusCode::BAD_REQUEST,
                code: Some("account_invalid".to_string()),
                message: "Account cannot be deleted while it has a balance".to_string(),
            });
        }

        Ok(DeletedAccount {
            id: account_id.to_string(),
            deleted: !self.undeletable.contains(account_id),
        })
    }
}
