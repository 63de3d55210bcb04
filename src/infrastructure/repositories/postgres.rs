use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Pool, Postgres, postgres::PgPoolOptions, types::Json};

use crate::domain::{
    models::{User, UserFields},
    repositories::UserRepository,
    value_objects::RecordId,
};

pub type PgPool = Pool<Postgres>;

/// Opens the process-wide pool and applies pending migrations.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to the database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    Ok(pool)
}

/// Stores each user as a JSONB document keyed by its identifier.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert_one(&self, fields: &UserFields) -> anyhow::Result<RecordId> {
        let id = RecordId::generate();
        sqlx::query(r#"INSERT INTO users (id, document) VALUES ($1, $2)"#)
            .bind(id.to_hex())
            .bind(Json(UserDocument::from(fields)))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let records = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, document FROM users ORDER BY created_at, id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(User::try_from).collect()
    }

    async fn update_one(&self, id: &RecordId, fields: &UserFields) -> anyhow::Result<bool> {
        // `||` merges the new fields over the stored document
        let result = sqlx::query(r#"UPDATE users SET document = document || $2 WHERE id = $1"#)
            .bind(id.to_hex())
            .bind(Json(UserDocument::from(fields)))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, id: &RecordId) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id.to_hex())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

impl From<&UserFields> for UserDocument {
    fn from(fields: &UserFields) -> Self {
        Self {
            name: fields.name().to_string(),
            email: fields.email().to_string(),
        }
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: String,
    document: Json<UserDocument>,
}

impl TryFrom<UserRecord> for User {
    type Error = anyhow::Error;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .parse::<RecordId>()
            .with_context(|| format!("stored identifier {:?} is corrupt", record.id))?;
        let UserDocument { name, email } = record.document.0;
        Ok(User { id, name, email })
    }
}
