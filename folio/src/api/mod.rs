//! Profile API access
//!
//! Three idempotent reads, no request bodies, no auth:
//!
//! | Path | Query | Response |
//! |------|-------|----------|
//! | `/api/profile` | - | [`folio_common::Profile`] |
//! | `/api/profile/projects` | `skill` | `[Project]` |
//! | `/api/profile/search` | `q` | [`folio_common::SearchResultSet`] |

pub mod client;

pub use client::{ApiClient, ProfileSource};
