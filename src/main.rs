use std::net::SocketAddr;

use trip::config::{establish_connection, AppConfig};
use trip::domain::health::service::init_start_time;
use trip::shutdown::shutdown_signal;
use trip::utils::logging::init_logging;
use trip::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 종료 시까지 유지)
    let _log_guard = init_logging();
    init_start_time();

    // 3. 설정 및 데이터베이스 연결
    let config = AppConfig::from_env()?;
    let db = establish_connection(&config.database_url).await?;

    // 4. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = app(AppState { db, config });

    // 5. 서버 실행
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
