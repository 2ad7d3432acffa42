//! Device identity reconciliation for a small access point.
//!
//! Three sources each know part of who is on the network: the access
//! point's station table (by MAC), the DHCP lease file (MAC to IP and
//! hostname), and a user-owned manual registry (MAC to IP and name).
//! This crate merges them into one ordered list of [`Row`]s, asking each
//! device for its own name over a small JSON management API and
//! expanding devices that act as range extenders into their sub-clients.
//!
//! - **[`Dashboard`]**: Facade over the whole pipeline:
//!   [`rows()`](Dashboard::rows), [`kick()`](Dashboard::kick),
//!   [`manual_add()`](Dashboard::manual_add),
//!   [`manual_delete()`](Dashboard::manual_delete).
//!
//! - **Sources** ([`source`]): [`StationSource`] over an [`AccessPoint`]
//!   and [`LeaseFile`]. Both absorb their own failures.
//!
//! - **[`ManualRegistry`]**: JSON store with serialized, atomic writes.
//!
//! - **[`DeviceProber`]** / **[`HttpProber`]**: Best-effort device queries
//!   that resolve every failure to absent, `false`, or empty.
//!
//! - **[`reconcile()`]** and **[`sort_rows()`]**: The merge and its
//!   deterministic ordering.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod prober;
pub mod reconcile;
pub mod registry;
pub mod resolve;
pub mod sort;
pub mod source;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use prober::{DeviceProber, HttpProber};
pub use reconcile::reconcile;
pub use registry::ManualRegistry;
pub use resolve::{Lookup, first_success, known};
pub use sort::sort_rows;
pub use source::{AccessPoint, LeaseFile, StationSource};

pub use model::{
    Lease, LeaseMap, MacAddress, ManualEntry, ManualMap, ProbeResult, Row, RowKind, RowOrigin,
    Station, SubClient,
};
