//! 子账户分页列举

use crate::stripe::{Account, AccountApi, ListAccountsParams, PAGE_LIMIT, StripeError};

/// 按游标逐页拉取子账户
///
/// 每页最多 [`PAGE_LIMIT`] 个，游标取上一页最后一个账户的 ID；
/// 接口报告没有更多页后不再发起请求。
pub struct AccountPager<'a, A> {
    api: &'a A,
    cursor: Option<String>,
    finished: bool,
}

impl<'a, A: AccountApi> AccountPager<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            cursor: None,
            finished: false,
        }
    }

    /// 拉取下一页，已无更多页时返回 `None`
    pub async fn next_page(&mut self) -> Result<Option<Vec<Account>>, StripeError> {
        if self.finished {
            return Ok(None);
        }

        let params = ListAccountsParams {
            limit: PAGE_LIMIT,
            starting_after: self.cursor.clone(),
        };
        let page = self.api.list_accounts(&params).await?;

        match page.data.last() {
            Some(last) if page.has_more => self.cursor = Some(last.id.clone()),
            Some(_) => self.finished = true,
            None => {
                if page.has_more {
                    tracing::warn!("接口返回 has_more 但本页为空，停止翻页");
                }
                self.finished = true;
            }
        }

        Ok(Some(page.data))
    }
}

/// 拉取全部子账户，保持接口返回顺序
///
/// 任一页失败都会直接返回错误，不返回部分结果。
pub async fn list_all_accounts<A: AccountApi>(api: &A) -> Result<Vec<Account>, StripeError> {
    let mut pager = AccountPager::new(api);
    let mut accounts = Vec::new();
    let mut pages = 0usize;

    while let Some(page) = pager.next_page().await? {
        pages += 1;
        tracing::debug!("第 {} 页: {} 个账户", pages, page.len());
        accounts.extend(page);
    }

    tracing::info!("共拉取 {} 页，{} 个子账户", pages, accounts.len());
    Ok(accounts)
}
