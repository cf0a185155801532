use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// 起動時の設定エラー（いずれもプロセスを終了させる）
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("$PORT must be set")]
    MissingPort,

    #[error("$PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

/// リクエスト 1 件あたりの上限時間（ヘッダー読み込み・ハンドラ実行それぞれ）
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub request_timeout: Duration,
}

impl Config {
    /// 環境変数から Config を作成する
    ///
    /// 必須の環境変数:
    /// - PORT
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port(std::env::var("PORT").ok().as_deref())
    }

    pub fn from_port(port: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ConfigError::MissingPort),
        };

        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;

        Ok(Self {
            port,
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    /// 全インターフェースで待ち受けるアドレス
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
