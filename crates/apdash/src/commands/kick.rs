//! Station kick handler.

use apdash_core::{AccessPoint, Dashboard, DeviceProber, MacAddress};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub async fn handle<A: AccessPoint, P: DeviceProber>(
    dashboard: &Dashboard<A, P>,
    mac: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mac = MacAddress::parse(mac).ok_or_else(|| CliError::Validation {
        field: "mac".into(),
        reason: format!("'{mac}' is not a hardware address"),
    })?;

    // Outcome is visible on the next `apdash stations`; failures are logged only.
    dashboard.kick(&mac).await;
    if !global.quiet {
        eprintln!("Kick requested for {mac}");
    }
    Ok(())
}
