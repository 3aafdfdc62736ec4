//! Connect 子账户清理流程
//!
//! 校验密钥 → 列出子账户 → 展示 → 确认 → 删除 → 汇总，严格顺序执行

pub mod confirm;
pub mod deleter;
pub mod lister;
pub mod verifier;

#[cfg(test)]
pub(crate) mod fake;

use std::io::{BufRead, Write};

use anyhow::Context;

pub use confirm::confirm_deletion;
pub use deleter::{RunSummary, delete_accounts};
pub use lister::list_all_accounts;
pub use verifier::verify_session;

use crate::stripe::{Account, AccountApi};

const RULE: &str = "==================================================";

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 只列出，不调用删除接口
    DryRun,
    Execute,
}

/// 一次运行的结束状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 没有任何子账户
    NoAccounts,
    /// 操作员未确认
    Aborted,
    Completed(RunSummary),
}

/// 执行完整清理流程
///
/// `input` 用于读取确认回答，`out` 接收面向操作员的输出。
/// 密钥校验失败或任一页列表失败都会返回错误；单个账户删除失败只计入统计。
pub async fn run<A, R, W>(api: &A, mode: Mode, input: &mut R, out: &mut W) -> anyhow::Result<Outcome>
where
    A: AccountApi,
    R: BufRead,
    W: Write,
{
    verify_session(api, out).await?;

    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    match mode {
        Mode::DryRun => writeln!(out, "DRY RUN: Listing Connected Accounts")?,
        Mode::Execute => writeln!(out, "Deleting All Connected Accounts")?,
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "\nFetching connected accounts...")?;
    out.flush()?;
    let accounts = list_all_accounts(api)
        .await
        .context("Failed to list connected accounts")?;

    if accounts.is_empty() {
        writeln!(out, "No connected accounts found.")?;
        return Ok(Outcome::NoAccounts);
    }

    writeln!(out, "Found {} connected account(s):\n", accounts.len())?;
    for account in &accounts {
        writeln!(out, "{}", describe_account(account))?;
    }
    writeln!(out)?;

    if mode == Mode::Execute {
        if !confirm_deletion(accounts.len(), input, out)? {
            tracing::info!("操作员取消删除");
            writeln!(out, "Aborted.")?;
            return Ok(Outcome::Aborted);
        }
        writeln!(out)?;
    }

    let summary = delete_accounts(api, &accounts, mode, out).await?;

    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    match mode {
        Mode::DryRun => writeln!(
            out,
            "DRY RUN complete. {} account(s) would be deleted.",
            summary.deleted
        )?,
        Mode::Execute => writeln!(
            out,
            "Deleted {} account(s), {} failed.",
            summary.deleted, summary.failed
        )?,
    }
    writeln!(out, "{}", RULE)?;

    Ok(Outcome::Completed(summary))
}

/// 列表中的一行：`  • <id> - <名称> (<邮箱>)`
fn describe_account(account: &Account) -> String {
    format!(
        "  • {} - {} ({})",
        account.id,
        account.business_name().unwrap_or("No name"),
        account.email().unwrap_or("No email")
    )
}
