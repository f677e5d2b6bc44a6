//! # Order Analytics
//!
//! A validation-and-aggregation pipeline that turns untrusted order CSV text
//! (columns: `sku`, `quantity`, `price`) into aggregate sales analytics or a
//! precise, row-located error.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: revenue uses 4 decimal places via `rust_decimal`
//! - **Fail-fast validation**: the first malformed row aborts the whole run
//! - **Single pass**: rows are parsed and folded in one streaming sweep
//! - **Deterministic output**: per-SKU maps sorted by key; best-seller ties
//!   resolve to the SKU seen first in file order
//!
//! ## Example
//!
//! ```
//! use order_analytics::process_orders;
//!
//! let csv = "sku,quantity,price\nA,2,10.0\nB,1,5.0\n";
//! let result = process_orders(csv).unwrap();
//! assert_eq!(result.best_selling_sku.sku, "A");
//! ```

pub mod analytics;
pub mod columns;
pub mod error;
pub mod money;
pub mod order;

pub use analytics::{process_csv, process_orders, AggregateState, AnalysisResult, BestSellingSku};
pub use columns::{validate_columns, ColumnIndices, REQUIRED_COLUMNS};
pub use error::{AnalyticsError, Result};
pub use money::Money;
pub use order::OrderRow;
