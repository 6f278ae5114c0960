// src/specs/mod.rs
//! # Document parsing specs
//!
//! This module hosts the **section-specific parsing specifications** for the
//! league history document. Each spec focuses on one part of a season
//! section and encodes *where the ground truth lives in the Markdown* and
//! *how to extract it tolerantly*.
//!
//! ## What lives here
//! - **Pure text parsing** of the history dialect (`## <year> Season`
//!   headings, standings tables, emphasis-delimited playoff labels).
//! - **Label choice & precedence** (e.g., keyword finishes beat bare digits
//!   in the final-position cell; the first `**Note:**` line wins).
//! - **Tolerant extraction** using `core::md` / `core::sanitize` helpers:
//!   short rows, missing tables and absent playoff blocks degrade to empty
//!   values, never errors. The document is hand-maintained across 13+
//!   seasons and the early years are idiosyncratic.
//!
//! ## What does **not** live here
//! - **Aggregation**: the career, head-to-head and era folds live in `stats`.
//! - **Persistence**: the snapshot writer owns serialization and paths.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::seasons::parse_document
//!             ↘ standings::parse_table / playoffs::parse_block per section
//!          snapshot::build (outside of specs)
//! ```

pub mod playoffs;
pub mod seasons;
pub mod standings;
