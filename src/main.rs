mod cleanup;
mod fatal;
mod http_client;
mod model;
mod stripe;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cleanup::{Mode, Outcome};
use model::config::Config;
use stripe::StripeClient;

/// 删除 Stripe 平台下的全部 Connect 子账户
#[derive(Parser, Debug)]
#[command(name = "connect-purge", version)]
struct Args {
    /// 只列出将被删除的账户，不调用删除接口
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // 日志写到 stderr，stdout 只留给操作员报告
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match model::config::load_env_file() {
        Some(path) => tracing::debug!("已加载环境文件: {}", path.display()),
        None => tracing::debug!("未找到 .env 文件"),
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = fatal::write_config_error(&mut std::io::stdout(), &e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "使用 {} 模式密钥: {}",
        config.key_mode().as_str(),
        config.masked_key()
    );

    let client = match StripeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            let _ = fatal::write_run_error(&mut std::io::stdout(), &e);
            std::process::exit(1);
        }
    };

    let mode = if args.dry_run {
        Mode::DryRun
    } else {
        Mode::Execute
    };

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();

    match cleanup::run(&client, mode, &mut input, &mut out).await {
        Ok(Outcome::Completed(summary)) => {
            tracing::info!("运行结束: 成功 {}，失败 {}", summary.deleted, summary.failed);
        }
        Ok(outcome) => tracing::info!("运行结束: {:?}", outcome),
        Err(e) => {
            let _ = fatal::write_run_error(&mut out, &e);
            std::process::exit(1);
        }
    }
}
