//! 逐个删除子账户

use std::io::Write;

use super::Mode;
use crate::stripe::{Account, AccountApi};

/// 单个账户的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 演练模式，未调用删除接口
    WouldDelete,
    Deleted,
    /// 账户在远端已不存在
    NotFound,
    /// 其他错误，附带错误信息
    Failed(String),
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::WouldDelete | Self::Deleted)
    }
}

/// 一次运行的删除统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 已删除（演练模式下为将被删除）的数量
    pub deleted: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &DeleteOutcome) {
        if outcome.is_success() {
            self.deleted += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// 处理单个账户，错误只影响该账户
pub async fn delete_one<A: AccountApi>(api: &A, account_id: &str, mode: Mode) -> DeleteOutcome {
    if mode == Mode::DryRun {
        return DeleteOutcome::WouldDelete;
    }

    match api.delete_account(account_id).await {
        Ok(resp) if resp.deleted => {
            tracing::debug!("Stripe 确认已删除: {}", resp.id);
            DeleteOutcome::Deleted
        }
        Ok(_) => DeleteOutcome::Failed("account was not deleted".to_string()),
        Err(e) if e.is_not_found() => DeleteOutcome::NotFound,
        Err(e) => DeleteOutcome::Failed(e.to_string()),
    }
}

/// 按顺序处理全部账户并打印每个结果
///
/// 单个账户失败不会中断后续账户；仅输出写入失败时返回错误。
pub async fn delete_accounts<A, W>(
    api: &A,
    accounts: &[Account],
    mode: Mode,
    out: &mut W,
) -> std::io::Result<RunSummary>
where
    A: AccountApi,
    W: Write,
{
    let mut summary = RunSummary::default();

    for account in accounts {
        let id = account.id.as_str();
        let outcome = delete_one(api, id, mode).await;

        match &outcome {
            DeleteOutcome::WouldDelete => writeln!(out, "  [DRY RUN] Would delete: {}", id)?,
            DeleteOutcome::Deleted => {
                tracing::info!("已删除子账户: {}", id);
                writeln!(out, "  ✓ Deleted: {}", id)?
            }
            DeleteOutcome::NotFound => {
                tracing::warn!("子账户不存在: {}", id);
                writeln!(out, "  ✗ Not found: {}", id)?
            }
            DeleteOutcome::Failed(reason) => {
                tracing::warn!("删除子账户失败: {} - {}", id, reason);
                writeln!(out, "  ✗ Error deleting {}: {}", id, reason)?
            }
        }

        summary.record(&outcome);
    }

    Ok(summary)
}
