use crate::domain::{
    event::entity::{event, event_review},
    restaurant::entity::restaurant,
    review::entity::review,
};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, EntityName, Schema, Statement,
};
use std::env;
use tracing::info;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    // Check if schema update is enabled
    let should_update_schema = env::var("DB_SCHEMA_UPDATE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        });

    if should_update_schema {
        sync_schema(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// Create all tables and indexes if they do not exist yet.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // Parents first, then the join table
    create_table_if_not_exists(db, &schema, event::Entity).await?;
    create_table_if_not_exists(db, &schema, restaurant::Entity).await?;
    create_table_if_not_exists(db, &schema, review::Entity).await?;
    create_table_if_not_exists(db, &schema, event_review::Entity).await?;

    // 목록 필터에서 자주 쓰는 컬럼
    create_index_if_not_exists(db, "idx_event_category", "event", &["category"]).await?;
    create_index_if_not_exists(db, "idx_event_date", "event", &["date"]).await?;
    create_index_if_not_exists(db, "idx_restaurant_category", "restaurant", &["category"]).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let sql = format!(
        "CREATE INDEX {} ON {} ({})",
        index_name,
        table_name,
        columns.join(", ")
    );
    let stmt = Statement::from_string(backend, sql);

    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Ignore "already exists" errors for idempotency
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate") || err_str.contains("exists") {
                Ok(())
            } else {
                tracing::error!("Failed to create index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map(|_| ()).map_err(|e| {
        tracing::error!("Failed to create table {}: {}", entity.table_name(), e);
        e
    })
}
