use crate::config::AppConfig;
use sea_orm::DatabaseConnection;

/// 핸들러에 공유되는 상태 (요청마다 clone)
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
}
