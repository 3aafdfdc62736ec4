//! Stripe 客户端实现

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::error::StripeError;
use super::model::{Account, DeletedAccount, List};
use crate::http_client::build_client;
use crate::model::config::Config;

/// 列表接口单页上限
pub const PAGE_LIMIT: u8 = 100;

/// 列出子账户的分页参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAccountsParams {
    /// 每页数量（1..=100）
    pub limit: u8,
    /// 分页游标：上一页最后一个账户的 ID
    pub starting_after: Option<String>,
}

impl Default for ListAccountsParams {
    fn default() -> Self {
        Self {
            limit: PAGE_LIMIT,
            starting_after: None,
        }
    }
}

/// 账户相关的远程操作
///
/// 清理流程只依赖这个 trait，测试中以内存实现替换。
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// 查询当前密钥所属的平台账户
    async fn retrieve_platform_account(&self) -> Result<Account, StripeError>;

    /// 列出一页 Connect 子账户
    async fn list_accounts(&self, params: &ListAccountsParams)
    -> Result<List<Account>, StripeError>;

    /// 删除指定子账户
    async fn delete_account(&self, account_id: &str) -> Result<DeletedAccount, StripeError>;
}

/// 基于 reqwest 的 Stripe 客户端
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    /// 按配置创建客户端
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = build_client(config.proxy.as_ref(), config.timeout_secs)?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            secret_key: config.secret_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// 发送请求并解析 JSON 响应，非 2xx 响应转换为 [`StripeError`]
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StripeError> {
        let response = request.bearer_auth(&self.secret_key).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("Stripe 返回错误: HTTP {} - {}", status, body);
            return Err(StripeError::from_response(status, &body));
        }

        tracing::trace!("Stripe 返回的 JSON: {}", body);
        Ok(serde_json::from_str(&body)?)
    }
}

impl AccountApi for StripeClient {
    async fn retrieve_platform_account(&self) -> Result<Account, StripeError> {
        let url = self.url("/v1/account");
        tracing::debug!("查询平台账户: {}", url);
        self.send(self.client.get(&url)).await
    }

    async fn list_accounts(
        &self,
        params: &ListAccountsParams,
    ) -> Result<List<Account>, StripeError> {
        let url = self.url("/v1/accounts");
        let mut request = self.client.get(&url).query(&[("limit", params.limit)]);
        if let Some(cursor) = &params.starting_after {
            request = request.query(&[("starting_after", cursor)]);
        }

        tracing::debug!(
            "列出子账户: {} (limit={}, starting_after={:?})",
            url,
            params.limit,
            params.starting_after
        );
        self.send(request).await
    }

    async fn delete_account(&self, account_id: &str) -> Result<DeletedAccount, StripeError> {
        let url = self.url(&format!("/v1/accounts/{}", account_id));
        tracing::debug!("删除子账户: {}", url);
        self.send(self.client.delete(&url)).await
    }
}
