//! Stripe REST 接口
//!
//! 只覆盖本工具用到的三个操作：查询当前平台账户、分页列出 Connect 子账户、删除子账户

pub mod client;
pub mod error;
pub mod model;

pub use client::{AccountApi, ListAccountsParams, StripeClient, PAGE_LIMIT};
pub use error::StripeError;
pub use model::Account;
