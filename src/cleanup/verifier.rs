//! 平台账户校验

use std::io::Write;

use crate::stripe::{Account, AccountApi};

/// 查询当前平台账户并打印其 ID 与名称
///
/// 在任何列举/删除操作之前调用；密钥无效时返回错误，调用方应直接退出。
pub async fn verify_session<A, W>(api: &A, out: &mut W) -> anyhow::Result<Account>
where
    A: AccountApi,
    W: Write,
{
    let platform = match api.retrieve_platform_account().await {
        Ok(account) => account,
        Err(e) if e.is_authentication() => {
            return Err(anyhow::Error::new(e).context("Invalid Stripe API key."));
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to connect to Stripe")),
    };

    tracing::info!("已连接平台账户: {}", platform.id);
    writeln!(out, "Connected to Stripe account: {}", platform.id)?;
    writeln!(
        out,
        "Business name: {}",
        platform.display_name().unwrap_or("Not set")
    )?;

    Ok(platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanup::fake::FakeAccountApi;

    #[tokio::test]
    async fn test_prints_identity() {
        let api = FakeAccountApi::with_count(0);
        let mut out = Vec::new();

        let platform = verify_session(&api, &mut out).await.unwrap();
        assert_eq!(platform.id, "acct_platform");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Connected to Stripe account: acct_platform\nBusiness name: Acme Platform\n"
        );
    }

    #[tokio::test]
    async fn test_missing_display_name() {
        let mut api = FakeAccountApi::with_count(0);
        api.platform = Some(Account::new("acct_bare"));
        let mut out = Vec::new();

        verify_session(&api, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Business name: Not set"));
    }

    #[tokio::test]
    async fn test_invalid_key() {
        let mut api = FakeAccountApi::with_count(3);
        api.reject_key = true;
        let mut out = Vec::new();

        let err = verify_session(&api, &mut out).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid Stripe API key.");
        assert!(out.is_empty());
        assert!(api.list_calls.borrow().is_empty());
    }
}
