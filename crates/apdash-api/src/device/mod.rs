// Device management API (the HTTP/JSON surface exposed by devices themselves)

pub mod client;
mod legacy;
pub mod models;
mod rpc;

pub use client::{DeviceClient, DevicePaths};
pub use models::{ApClient, DeviceInfo, LegacySettings, WifiConfig};
