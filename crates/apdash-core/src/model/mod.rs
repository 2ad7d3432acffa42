// ── Domain model ──
//
// Types flowing through the reconciliation pipeline, from the three
// identity sources (stations, leases, manual entries) to output rows.

pub mod lease;
pub mod mac;
pub mod manual;
pub mod probe;
pub mod row;
pub mod station;

pub use lease::{Lease, LeaseMap};
pub use mac::MacAddress;
pub use manual::{ManualEntry, ManualMap};
pub use probe::{ProbeResult, SubClient};
pub use row::{
    EXTENDER_CLIENT_NAME, HIERARCHY_MARKER, Row, RowKind, RowOrigin, UNKNOWN_ADDRESS,
    UNKNOWN_NAME,
};
pub use station::Station;
