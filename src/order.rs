//! Order line-item model and per-row parsing.

use crate::columns::ColumnIndices;
use crate::error::{AnalyticsError, Result};
use crate::money::Money;
use csv::StringRecord;
use std::str::FromStr;

/// A single validated order line item.
///
/// Only constructed when every field validates; a malformed row never yields
/// a partial `OrderRow`. Rows are ephemeral: the pipeline folds each one into
/// the running aggregates and drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    /// Product identifier, non-empty after trimming.
    pub sku: String,

    /// Units ordered. Parsing rejects negatives, so `u64` is safe here.
    pub quantity: u64,

    /// Unit price, non-negative.
    pub price: Money,
}

impl OrderRow {
    /// Parses and validates one CSV data record.
    ///
    /// `row_number` is the 1-based CSV position counting the header as row 1,
    /// so the first data row is 2. Checks run in field order (sku, quantity,
    /// price) and the first failure wins; every error message embeds the row
    /// number and, for malformed values, the offending text.
    pub fn parse(
        record: &StringRecord,
        columns: &ColumnIndices,
        row_number: usize,
    ) -> Result<OrderRow> {
        let sku = field(record, columns.sku).trim();
        if sku.is_empty() {
            return Err(AnalyticsError::EmptySku { row: row_number });
        }

        let raw_quantity = field(record, columns.quantity).trim();
        if raw_quantity.is_empty() {
            return Err(AnalyticsError::MissingQuantity { row: row_number });
        }
        let quantity: i64 =
            raw_quantity
                .parse()
                .map_err(|_| AnalyticsError::InvalidQuantity {
                    row: row_number,
                    value: raw_quantity.to_string(),
                })?;
        if quantity < 0 {
            return Err(AnalyticsError::NegativeQuantity {
                row: row_number,
                value: quantity,
            });
        }

        let raw_price = field(record, columns.price).trim();
        if raw_price.is_empty() {
            return Err(AnalyticsError::MissingPrice { row: row_number });
        }
        let price = Money::from_str(raw_price).map_err(|_| AnalyticsError::InvalidPrice {
            row: row_number,
            value: raw_price.to_string(),
        })?;
        if price.is_negative() {
            return Err(AnalyticsError::NegativePrice {
                row: row_number,
                value: raw_price.to_string(),
            });
        }

        Ok(OrderRow {
            sku: sku.to_string(),
            quantity: quantity as u64,
            price,
        })
    }
}

/// Reads a field by index, treating fields absent from short records as empty.
fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: ColumnIndices = ColumnIndices {
        sku: 0,
        quantity: 1,
        price: 2,
    };

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_valid_row() {
        let row = OrderRow::parse(&record(&["A-1", "2", "10.0"]), &COLUMNS, 2).unwrap();
        assert_eq!(row.sku, "A-1");
        assert_eq!(row.quantity, 2);
        assert_eq!(row.price.to_string(), "10.0000");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let row = OrderRow::parse(&record(&["  A  ", " 3 ", " 1.5 "]), &COLUMNS, 2).unwrap();
        assert_eq!(row.sku, "A");
        assert_eq!(row.quantity, 3);
        assert_eq!(row.price.to_string(), "1.5000");
    }

    #[test]
    fn test_parse_uses_resolved_column_indices() {
        let columns = ColumnIndices {
            price: 0,
            sku: 1,
            quantity: 2,
        };
        let row = OrderRow::parse(&record(&["5.0", "B", "4"]), &columns, 3).unwrap();
        assert_eq!(row.sku, "B");
        assert_eq!(row.quantity, 4);
        assert_eq!(row.price.to_string(), "5.0000");
    }

    #[test]
    fn test_empty_sku_fails() {
        let err = OrderRow::parse(&record(&["", "5", "1.0"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(err.to_string(), "Row 2: missing or empty 'sku' value.");

        let err = OrderRow::parse(&record(&["   ", "5", "1.0"]), &COLUMNS, 4).unwrap_err();
        assert_eq!(err.to_string(), "Row 4: missing or empty 'sku' value.");
    }

    #[test]
    fn test_missing_quantity_fails() {
        let err = OrderRow::parse(&record(&["A", "", "1.0"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(err.to_string(), "Row 2: missing 'quantity' value.");
    }

    #[test]
    fn test_non_integer_quantity_fails() {
        let err = OrderRow::parse(&record(&["A", "two", "1.0"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: invalid quantity 'two' (must be a whole number)."
        );

        let err = OrderRow::parse(&record(&["A", "2.5", "1.0"]), &COLUMNS, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 3: invalid quantity '2.5' (must be a whole number)."
        );
    }

    #[test]
    fn test_negative_quantity_fails() {
        let err = OrderRow::parse(&record(&["A", "-1", "2.0"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: negative quantity '-1' is not allowed."
        );
    }

    #[test]
    fn test_missing_price_fails() {
        let err = OrderRow::parse(&record(&["A", "5", ""]), &COLUMNS, 2).unwrap_err();
        assert_eq!(err.to_string(), "Row 2: missing 'price' value.");
    }

    #[test]
    fn test_non_numeric_price_fails() {
        let err = OrderRow::parse(&record(&["A", "5", "free"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: invalid price 'free' (must be a number)."
        );
    }

    #[test]
    fn test_negative_price_fails() {
        let err = OrderRow::parse(&record(&["A", "5", "-0.5"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: negative price '-0.5' is not allowed."
        );
    }

    #[test]
    fn test_short_record_reports_missing_value() {
        // flexible CSV can hand us ragged rows; absent fields read as empty
        let err = OrderRow::parse(&record(&["A", "5"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(err.to_string(), "Row 2: missing 'price' value.");
    }

    #[test]
    fn test_validation_order_sku_first() {
        let err = OrderRow::parse(&record(&["", "bad", "also bad"]), &COLUMNS, 2).unwrap_err();
        assert_eq!(err.to_string(), "Row 2: missing or empty 'sku' value.");
    }

    #[test]
    fn test_zero_quantity_and_price_are_valid() {
        let row = OrderRow::parse(&record(&["A", "0", "0.0"]), &COLUMNS, 2).unwrap();
        assert_eq!(row.quantity, 0);
        assert!(row.price.is_zero());
    }
}
