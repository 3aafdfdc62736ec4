//! 运行配置
//!
//! 全部配置来自进程环境变量（启动时会先加载 `.env`），
//! 以显式的 [`Config`] 值传递给 Stripe 客户端，不保存任何全局状态。

use std::path::{Path, PathBuf};

use crate::http_client::ProxyConfig;

/// 平台账户密钥
pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";
/// API 根地址（测试或代理网关时覆盖）
pub const API_BASE_VAR: &str = "STRIPE_API_BASE";
/// 请求超时（秒）
pub const TIMEOUT_VAR: &str = "STRIPE_TIMEOUT_SECS";
pub const PROXY_URL_VAR: &str = "STRIPE_PROXY_URL";
pub const PROXY_USERNAME_VAR: &str = "STRIPE_PROXY_USERNAME";
pub const PROXY_PASSWORD_VAR: &str = "STRIPE_PROXY_PASSWORD";

const DEFAULT_API_BASE: &str = "https://api.stripe.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 配置错误
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STRIPE_SECRET_KEY not found in environment variables.")]
    MissingSecretKey,

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// 密钥对应的 Stripe 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Test,
    Live,
    Unknown,
}

impl KeyMode {
    /// 按密钥前缀判断（sk_/rk_ 均可）
    pub fn from_key(key: &str) -> Self {
        let rest = key
            .strip_prefix("sk_")
            .or_else(|| key.strip_prefix("rk_"))
            .unwrap_or("");
        if rest.starts_with("test_") {
            Self::Test
        } else if rest.starts_with("live_") {
            Self::Live
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
            Self::Unknown => "unknown",
        }
    }
}

/// 应用配置
#[derive(Debug, Clone)]
pub struct Config {
    /// Stripe secret key（Bearer 认证）
    pub secret_key: String,

    /// API 根地址，不含结尾的 `/`
    pub api_base: String,

    pub timeout_secs: u64,

    /// 出站代理（可选）
    pub proxy: Option<ProxyConfig>,
}

impl Config {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    ///
    /// 空白值视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let secret_key = get(SECRET_KEY_VAR).ok_or(ConfigError::MissingSecretKey)?;

        let api_base = get(API_BASE_VAR)
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = match get(TIMEOUT_VAR) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: TIMEOUT_VAR,
                        value: raw,
                    });
                }
            },
        };

        let proxy = get(PROXY_URL_VAR).map(|url| {
            let proxy = ProxyConfig::new(url);
            match (get(PROXY_USERNAME_VAR), get(PROXY_PASSWORD_VAR)) {
                (Some(username), Some(password)) => proxy.with_auth(username, password),
                _ => proxy,
            }
        });

        Ok(Self {
            secret_key,
            api_base,
            timeout_secs,
            proxy,
        })
    }

    pub fn key_mode(&self) -> KeyMode {
        KeyMode::from_key(&self.secret_key)
    }

    /// 脱敏后的密钥，用于日志
    pub fn masked_key(&self) -> String {
        mask_key(&self.secret_key)
    }
}

/// 环境文件名
const ENV_FILE: &str = ".env";

/// 加载 `.env` 文件，返回实际加载的路径
///
/// 先按 dotenvy 的规则从当前目录向上查找；找不到时再尝试可执行文件所在目录及其上一级。
/// 已存在的环境变量不会被覆盖。
pub fn load_env_file() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => return Some(path),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("读取 .env 文件失败: {}", e),
    }

    let exe = std::env::current_exe().ok()?;
    for candidate in exe_env_candidates(exe.parent()?) {
        if !candidate.is_file() {
            continue;
        }
        match dotenvy::from_path(&candidate) {
            Ok(()) => return Some(candidate),
            Err(e) => tracing::warn!("读取 {} 失败: {}", candidate.display(), e),
        }
    }
    None
}

/// 可执行文件旁的候选环境文件：同级目录，其次上一级目录
fn exe_env_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![exe_dir.join(ENV_FILE)];
    if let Some(parent) = exe_dir.parent() {
        candidates.push(parent.join(ENV_FILE));
    }
    candidates
}

/// 对 Key 进行脱敏：保留前 6 位和后 3 位，中间用 *** 替代
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let len = chars.len();
    if len <= 9 {
        let prefix: String = chars[..len.min(2)].iter().collect();
        return format!("{}***", prefix);
    }
    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[len - 3..].iter().collect();
    format!("{}***{}", prefix, suffix)
}
