//! Site-specific scrapers.
//!
//! Each scraper module owns the markup knowledge for one news site: which
//! elements carry headline links on the front page, and where the summary
//! and body text live on article pages.
//!
//! # Common Patterns
//!
//! Scraper modules keep extraction pure (markup in, values out) so it can be
//! tested against fixture HTML; only the orchestrating entry point touches
//! the network. Failed article fetches are logged and degrade to placeholder
//! content rather than aborting the run.

pub mod sozcu;
