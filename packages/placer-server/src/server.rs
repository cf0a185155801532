use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use hyper::server::conn::http1;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::handler;
use crate::routes::RouteTable;

#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// ルーティングテーブルを axum の Router に組み込む
///
/// パスの解決は全て `handler::dispatch` が行うため、axum 側にはルートを登録しない。
/// ハンドラが `request_timeout` を超えた場合は 408 を返す。
pub fn app(routes: RouteTable, request_timeout: Duration) -> Router {
    let state = AppState {
        routes: Arc::new(routes),
    };

    Router::new()
        .fallback(handler::dispatch)
        .layer(middleware::from_fn_with_state(request_timeout, handler_timeout))
        .with_state(state)
}

/// 設定されたポートで待ち受けを開始する
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(port = config.port, "starting http server");

    run(listener, config.request_timeout).await;
    Ok(())
}

/// バインド済みのリスナーでサーバーを動かす
///
/// ヘッダーの読み込みとハンドラの実行はそれぞれ `request_timeout` で打ち切る。
pub async fn run(listener: TcpListener, request_timeout: Duration) {
    let router = app(RouteTable::standard(), request_timeout);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let (stream, remote) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to accept connection");
                    continue;
                }
            },
            _ = &mut shutdown => return,
        };

        let service = TowerToHyperService::new(router.clone());
        tokio::spawn(async move {
            let mut builder = http1::Builder::new();
            builder
                .timer(TokioTimer::new())
                .header_read_timeout(request_timeout);

            let result = builder
                .serve_connection(TokioIo::new(stream), service)
                .await;

            if let Err(e) = result {
                tracing::debug!(remote = %remote, error = %e, "connection closed with error");
            }
        });
    }
}

async fn handler_timeout(
    State(timeout): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(timeout = ?timeout, "request timed out");
            StatusCode::REQUEST_TIMEOUT.into_response()
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
