//! Order Analytics CLI
//!
//! A thin transport shell around the analytics core: reads an order CSV file
//! and prints the analytics result as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- orders.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace header validation and row folding

use order_analytics::{process_orders, AnalyticsError, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(AnalyticsError::MissingArgument);
    }

    let input_path = &args[1];
    if !input_path.ends_with(".csv") {
        return Err(AnalyticsError::UnsupportedFileType);
    }

    // Decoding bytes to text is the transport's job; the core takes valid text
    let raw_bytes = fs::read(input_path)?;
    let content = String::from_utf8(raw_bytes).map_err(|_| AnalyticsError::InvalidEncoding)?;
    let result = process_orders(&content)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &result)?;
    writeln!(handle)?;

    Ok(())
}
