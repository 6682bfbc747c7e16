//! Persistence into the search index.
//!
//! [`elastic`] is a thin REST client for the index server; [`indexer`]
//! drives the per-record upsert loop on top of it and reports how the run
//! went. Store failures never abort a scrape: a dead server downgrades the
//! run to scrape-only, and a failed write is counted and the loop moves on.

pub mod elastic;
pub mod indexer;
