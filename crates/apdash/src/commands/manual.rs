//! Manual registry command handlers.

use apdash_core::{AccessPoint, Dashboard, DeviceProber, ManualEntry};
use tabled::Tabled;

use crate::cli::{GlobalOpts, ManualArgs, ManualCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ManualRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&ManualEntry> for ManualRow {
    fn from(e: &ManualEntry) -> Self {
        Self {
            mac: e.mac.to_string(),
            ip: e.ip.clone(),
            name: e.name().unwrap_or("-").to_owned(),
        }
    }
}

fn detail(e: &ManualEntry) -> String {
    [
        format!("MAC:   {}", e.mac),
        format!("IP:    {}", e.ip),
        format!("Name:  {}", e.name().unwrap_or("(probed)")),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle<A: AccessPoint, P: DeviceProber>(
    dashboard: &Dashboard<A, P>,
    args: ManualArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ManualCommand::List => {
            let entries: Vec<ManualEntry> = dashboard.manual_entries()?.into_values().collect();
            let out = output::render_list(
                &global.output,
                &entries,
                |e| ManualRow::from(e),
                |e| e.mac.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ManualCommand::Add { mac, ip, name } => {
            let entry = dashboard.manual_add(&mac, &ip, &name)?;
            let out = output::render_single(&global.output, &entry, detail, |e| {
                e.mac.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ManualCommand::Remove { mac } => {
            let existed = dashboard.manual_delete(&mac)?;
            if !global.quiet {
                if existed {
                    eprintln!("Manual entry removed");
                } else {
                    eprintln!("No manual entry for {mac}");
                }
            }
            Ok(())
        }
    }
}
