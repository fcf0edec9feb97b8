use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 输出当前数据概况
async fn log_inventory(storage: &Arc<dyn Storage>) {
    let rooms = storage.list_rooms().await;
    let exams = storage.list_exams().await;
    let students = storage.list_students().await;

    match (rooms, exams, students) {
        (Ok(rooms), Ok(exams), Ok(students)) => {
            let seats: i64 = rooms.iter().map(|r| i64::from(r.capacity)).sum();
            info!(
                "Loaded {} rooms ({} seats), {} exams, {} students",
                rooms.len(),
                seats,
                exams.len(),
                students.len()
            );
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            warn!("Failed to read inventory: {}", e.format_simple());
        }
    }
}

/// 准备服务器启动的上下文
/// 连接数据库并完成迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();
    debug!("Connecting to database: {}", config.database.url);

    let storage = crate::storage::create_storage().await?;
    info!("Storage backend initialized and migrations completed");

    log_inventory(&storage).await;

    Ok(StartupContext { storage })
}
