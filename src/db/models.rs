use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the medicines table, including its store-assigned id.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub category: String,
}

/// Create-request body. The store assigns the id on insert.
#[derive(Deserialize, Debug)]
pub struct NewMedicine {
    pub name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

impl NewMedicine {
    /// Field checks beyond what deserialization already guarantees.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(())
    }
}
