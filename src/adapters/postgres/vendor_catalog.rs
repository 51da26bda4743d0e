//! PostgreSQL implementation of VendorCatalog.
//!
//! Reads the platform-owned `vendors` and `vendor_menu_bindings` tables;
//! this adapter never writes to them. Deleted vendors and deleted
//! bindings are filtered out here so the domain only ever sees live
//! candidates.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, MenuId, VendorId};
use crate::domain::recommendation::VendorCandidate;
use crate::ports::VendorCatalog;

/// PostgreSQL implementation of VendorCatalog.
#[derive(Clone)]
pub struct PostgresVendorCatalog {
    pool: PgPool,
}

impl PostgresVendorCatalog {
    /// Creates a new PostgresVendorCatalog.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VendorCatalog for PostgresVendorCatalog {
    async fn candidates_for_menu(
        &self,
        menu_id: &MenuId,
    ) -> Result<Vec<VendorCandidate>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT v.id, v.latitude, v.longitude,
                   b.min_order, b.max_order, b.vendor_price
            FROM vendor_menu_bindings b
            JOIN vendors v ON v.id = b.vendor_id
            WHERE b.menu_id = $1
              AND NOT b.is_deleted
              AND NOT v.is_deleted
            ORDER BY v.id
            "#,
        )
        .bind(menu_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to look up vendors for menu item: {}", e),
            )
            .with_detail("menu_id", menu_id.to_string())
        })?;

        let mut candidates = Vec::with_capacity(rows.len());
        for row in rows {
            candidates.push(VendorCandidate {
                vendor_id: VendorId::from_uuid(row.try_get("id").map_err(map_column_error)?),
                latitude: row.try_get("latitude").map_err(map_column_error)?,
                longitude: row.try_get("longitude").map_err(map_column_error)?,
                min_order: row
                    .try_get::<i32, _>("min_order")
                    .map_err(map_column_error)? as u32,
                max_order: row
                    .try_get::<i32, _>("max_order")
                    .map_err(map_column_error)? as u32,
                vendor_price: row.try_get("vendor_price").map_err(map_column_error)?,
            });
        }

        Ok(candidates)
    }
}

fn map_column_error(e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Malformed vendor catalog row: {}", e),
    )
}
