//! 致命错误的输出格式
//!
//! 启动失败与运行失败都在这里渲染成面向操作员的 `Error: ...` 文本，调用方随后以退出码 1 结束进程。

use std::io::{self, Write};

use crate::model::config::ConfigError;
use crate::stripe::StripeError;

/// 配置加载失败
pub fn write_config_error<W: Write>(out: &mut W, err: &ConfigError) -> io::Result<()> {
    writeln!(out, "Error: {}", err)?;
    if *err == ConfigError::MissingSecretKey {
        writeln!(out, "Please check your .env file.")?;
    }
    Ok(())
}

/// 运行期失败
///
/// 密钥无效时只输出最外层提示，Stripe 返回的细节写入日志；其他错误输出完整错误链。
pub fn write_run_error<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    if is_authentication_failure(err) {
        tracing::debug!("认证失败详情: {:#}", err);
        writeln!(out, "Error: {}", err)
    } else {
        writeln!(out, "Error: {:#}", err)
    }
}

fn is_authentication_failure(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<StripeError>()
            .is_some_and(StripeError::is_authentication)
    })
}
