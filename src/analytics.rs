//! Core validation-and-aggregation pipeline.
//!
//! Processes order rows in file order, folding each one into running
//! aggregates, and reduces the final state into an [`AnalysisResult`].
//! Processing is all-or-nothing: the first malformed row aborts the whole
//! run and the partial state is discarded.

use crate::columns::validate_columns;
use crate::error::{AnalyticsError, Result};
use crate::money::Money;
use crate::order::OrderRow;
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// The best-selling SKU and its cumulative quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSellingSku {
    pub sku: String,
    pub total_quantity: u64,
}

/// Final analytics for one order file.
///
/// Built from the aggregate state once every row has folded; never partially
/// constructed. The per-SKU maps are sorted by key so serialized output is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_revenue: Money,
    pub best_selling_sku: BestSellingSku,
    pub sku_quantities: BTreeMap<String, u64>,
    pub sku_revenue: BTreeMap<String, Money>,
}

/// Cumulative totals for one SKU.
#[derive(Debug, Clone)]
struct SkuTotals {
    quantity: u64,
    revenue: Money,
    /// Position among distinct SKUs in file order, for deterministic
    /// tie-breaking when two SKUs share the maximum quantity.
    first_seen: usize,
}

/// Running aggregates for a single pipeline invocation.
///
/// One instance per run, owned by the pipeline; each valid row mutates it
/// exactly once via [`fold`](AggregateState::fold) and
/// [`finish`](AggregateState::finish) consumes it.
#[derive(Debug, Default)]
pub struct AggregateState {
    total_revenue: Money,
    skus: HashMap<String, SkuTotals>,
    rows_folded: usize,
}

impl AggregateState {
    /// Creates an empty state.
    pub fn new() -> Self {
        AggregateState::default()
    }

    /// Folds one validated row into the running aggregates.
    ///
    /// All arithmetic is checked: a subtotal or running total that exceeds
    /// the representable range fails with a row-scoped error instead of
    /// panicking, and no partial totals are committed.
    pub fn fold(&mut self, row: OrderRow, row_number: usize) -> Result<()> {
        let out_of_range = || AnalyticsError::ValueOutOfRange { row: row_number };

        let subtotal = row
            .price
            .checked_times(row.quantity)
            .ok_or_else(out_of_range)?;
        let total_revenue = self
            .total_revenue
            .checked_add(subtotal)
            .ok_or_else(out_of_range)?;

        let first_seen = self.skus.len();
        let totals = self.skus.entry(row.sku).or_insert_with(|| SkuTotals {
            quantity: 0,
            revenue: Money::ZERO,
            first_seen,
        });
        let quantity = totals
            .quantity
            .checked_add(row.quantity)
            .ok_or_else(out_of_range)?;
        let revenue = totals.revenue.checked_add(subtotal).ok_or_else(out_of_range)?;

        totals.quantity = quantity;
        totals.revenue = revenue;
        self.total_revenue = total_revenue;
        self.rows_folded += 1;
        Ok(())
    }

    /// Reduces the accumulated state into the final result.
    ///
    /// Fails when no rows were folded, even if the header was valid. The
    /// best-selling SKU is the one with the maximum cumulative quantity;
    /// ties go to the SKU encountered first in file order.
    pub fn finish(self) -> Result<AnalysisResult> {
        if self.rows_folded == 0 {
            return Err(AnalyticsError::NoDataRows);
        }

        // Safety: rows_folded > 0 implies at least one SKU entry
        let best = self
            .skus
            .iter()
            .min_by_key(|(_, totals)| (std::cmp::Reverse(totals.quantity), totals.first_seen))
            .map(|(sku, totals)| BestSellingSku {
                sku: sku.clone(),
                total_quantity: totals.quantity,
            })
            .expect("at least one folded row");

        let mut sku_quantities = BTreeMap::new();
        let mut sku_revenue = BTreeMap::new();
        for (sku, totals) in self.skus {
            sku_quantities.insert(sku.clone(), totals.quantity);
            sku_revenue.insert(sku, totals.revenue);
        }

        Ok(AnalysisResult {
            total_revenue: self.total_revenue,
            best_selling_sku: best,
            sku_quantities,
            sku_revenue,
        })
    }
}

/// Processes order CSV data from a reader.
///
/// Validates the header before reading any data row, then parses and folds
/// rows in a single pass. The first validation failure aborts the run with a
/// row-located error; there is no skip-and-continue mode.
pub fn process_csv<R: Read>(reader: R) -> Result<AnalysisResult> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = validate_columns(&headers)?;
    debug!(
        "Header validated: sku at {}, quantity at {}, price at {}",
        columns.sku, columns.quantity, columns.price
    );

    let mut state = AggregateState::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row
        let record = result?;
        let row = OrderRow::parse(&record, &columns, row_num)?;
        debug!(
            "Row {}: folding sku={} quantity={} price={}",
            row_num, row.sku, row.quantity, row.price
        );
        state.fold(row, row_num)?;
    }

    state.finish()
}

/// Processes a complete CSV document already decoded to text.
///
/// Convenience wrapper over [`process_csv`] for callers that hold the whole
/// file in memory, such as an upload handler.
pub fn process_orders(content: &str) -> Result<AnalysisResult> {
    process_csv(content.as_bytes())
}
