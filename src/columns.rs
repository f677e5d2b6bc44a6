//! Header validation and column resolution.
//!
//! Order values are matched by header name rather than position, so the
//! validator both checks that the required columns exist and records where
//! each one lives in the record.

use crate::error::{AnalyticsError, Result};
use csv::StringRecord;

/// Column names every order file must provide, sorted alphabetically.
///
/// Kept sorted so error messages list columns in a stable order.
pub const REQUIRED_COLUMNS: [&str; 3] = ["price", "quantity", "sku"];

/// Resolved positions of the required columns within a CSV record.
///
/// Produced by [`validate_columns`]; extra columns in the header are ignored
/// and, for duplicated header names, the first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub sku: usize,
    pub quantity: usize,
    pub price: usize,
}

/// Checks that all required columns exist in the CSV header.
///
/// Header names are trimmed and matched case-insensitively, so
/// `" SKU , Quantity, PRICE "` is accepted. Fails when the header record is
/// empty (no header row at all) or when any required column is absent after
/// normalization, listing the missing names sorted alphabetically.
pub fn validate_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    if headers.is_empty() {
        return Err(AnalyticsError::MissingHeader);
    }

    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
    };

    let sku = position("sku");
    let quantity = position("quantity");
    let price = position("price");

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| match *name {
            "sku" => sku.is_none(),
            "quantity" => quantity.is_none(),
            _ => price.is_none(),
        })
        .collect();

    if !missing.is_empty() {
        return Err(AnalyticsError::MissingColumns {
            missing: missing.join(", "),
            expected: REQUIRED_COLUMNS.join(", "),
        });
    }

    // Safety: the missing check above guarantees all three positions resolved
    Ok(ColumnIndices {
        sku: sku.expect("sku column resolved"),
        quantity: quantity.expect("quantity column resolved"),
        price: price.expect("price column resolved"),
    })
}
