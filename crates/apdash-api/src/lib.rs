//! Adapters for the collaborators an access-point dashboard talks to.
//!
//! - [`DeviceClient`]: async JSON client for a device's own management API
//!   (device info, WiFi config, range-extender client table, legacy settings).
//! - [`HostapdCli`]: process adapter for `hostapd_cli` (station table, station
//!   details, deauthentication).
//!
//! Both return a typed [`Error`]; deciding which failures are soft is left
//! to `apdash-core`.

pub mod device;
pub mod error;
pub mod hostapd;
pub mod transport;

pub use device::{ApClient, DeviceClient, DeviceInfo, DevicePaths, LegacySettings, WifiConfig};
pub use error::Error;
pub use hostapd::HostapdCli;
pub use transport::{DEFAULT_PROBE_TIMEOUT, TransportConfig};
