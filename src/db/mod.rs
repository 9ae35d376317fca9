use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use thiserror::Error;

pub mod models;

use self::models::{Medicine, NewMedicine};

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("medicine {id} not found")]
    NotFound { id: i64 },
}

/// Opens a fresh connection to the store.
///
/// Connections are never pooled or reused: each data-access function owns
/// its connection from connect to close, and an early error return closes
/// it on drop.
async fn connect(options: &MySqlConnectOptions) -> Result<MySqlConnection, sqlx::Error> {
    MySqlConnection::connect_with(options).await
}

/// Fetches every medicine, ordered by ascending id.
pub async fn list_medicines(options: &MySqlConnectOptions) -> Result<Vec<Medicine>, DbError> {
    let mut conn = connect(options).await?;
    let medicines = sqlx::query_as::<_, Medicine>("SELECT * FROM medicines ORDER BY id")
        .fetch_all(&mut conn)
        .await?;
    conn.close().await?;
    Ok(medicines)
}

/// Fetches a single medicine by id.
pub async fn get_medicine(options: &MySqlConnectOptions, id: i64) -> Result<Medicine, DbError> {
    let mut conn = connect(options).await?;
    let medicine = sqlx::query_as::<_, Medicine>("SELECT * FROM medicines WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut conn)
        .await?;
    conn.close().await?;
    medicine.ok_or(DbError::NotFound { id })
}

/// Inserts a medicine and re-reads the stored row by its assigned id.
pub async fn insert_medicine(
    options: &MySqlConnectOptions,
    new: &NewMedicine,
) -> Result<Medicine, DbError> {
    let mut conn = connect(options).await?;
    let result = sqlx::query(
        "INSERT INTO medicines (name, quantity, expiry_date, category) VALUES (?, ?, ?, ?)",
    )
    .bind(&new.name)
    .bind(new.quantity)
    .bind(new.expiry_date)
    .bind(&new.category)
    .execute(&mut conn)
    .await?;

    let id = result.last_insert_id() as i64;
    let medicine = sqlx::query_as::<_, Medicine>("SELECT * FROM medicines WHERE id = ?")
        .bind(id)
        .fetch_one(&mut conn)
        .await?;
    conn.close().await?;
    Ok(medicine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use envconfig::Envconfig;

    // Integration tests - run against a real store with the medicines table:
    // DB_HOST=... DB_NAME=... cargo test -- --ignored

    fn options_from_env() -> MySqlConnectOptions {
        crate::config::Config::init_from_env()
            .expect("store configuration")
            .connect_options()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_ordered_by_id() {
        let options = options_from_env();
        let medicines = list_medicines(&options).await.expect("list failed");
        let ids: Vec<i64> = medicines.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let options = options_from_env();
        let new = NewMedicine {
            name: "Aspirin".to_string(),
            quantity: 100,
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            category: "painkiller".to_string(),
        };
        let created = insert_medicine(&options, &new)
            .await
            .expect("insert failed");
        let fetched = get_medicine(&options, created.id).await.expect("get failed");
        assert_eq!(created.id, fetched.id);
        assert_eq!(fetched.name, "Aspirin");
        assert_eq!(fetched.quantity, 100);
        assert_eq!(fetched.expiry_date, new.expiry_date);
        assert_eq!(fetched.category, "painkiller");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_id_is_not_found() {
        let options = options_from_env();
        let result = get_medicine(&options, 99_999_999).await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }
}
