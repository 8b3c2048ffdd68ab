use sqlx::{Pool, Postgres};

use crate::storage::validate_postgres_table_schema;
use crate::userdb::{errors::UserError, types::User};

use super::config::DB_TABLE_USERS;

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // Sequence values are never handed out twice, even after a delete
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{}_name ON {table_name}(name)
        "#,
        table_name.replace('.', "_")
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

/// Validates that the User table schema matches what we expect
pub(super) async fn validate_user_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();

    let expected_columns = vec![("id", "bigint"), ("name", "text"), ("email", "text")];

    validate_postgres_table_schema(pool, users_table, &expected_columns, UserError::Storage).await
}

pub(super) async fn insert_user_postgres(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO {table_name} (name, email)
        VALUES ($1, $2)
        RETURNING id, name, email
        "#
    ))
    .bind(name)
    .bind(email)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| UserError::from_write(e, email))?;

    tx.commit()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(user)
}

pub(super) async fn get_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name, email FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_all_users_postgres(pool: &Pool<Postgres>) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, name, email FROM {table_name} ORDER BY id ASC
        "#
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn update_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
    name: &str,
    email: &str,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    let updated = sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE {table_name} SET name = $1, email = $2
        WHERE id = $3
        RETURNING id, name, email
        "#
    ))
    .bind(name)
    .bind(email)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| UserError::from_write(e, email))?;

    tx.commit()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(updated)
}

pub(super) async fn delete_user_postgres(pool: &Pool<Postgres>, id: i64) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(&mut *tx)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(result.rows_affected() > 0)
}
