//! Offline seeding utilities for a D1/SQLite-backed app: `csv2sql` turns
//! seed CSVs into an INSERT script, `make-thumbnails` shrinks page scans.

pub mod config;
pub mod logger;
pub mod progress;
pub mod resize;
pub mod seed;
