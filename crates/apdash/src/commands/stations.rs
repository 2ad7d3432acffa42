//! Station list rendering, one-shot or watched.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use apdash_config::Config;
use apdash_core::{AccessPoint, Dashboard, DeviceProber, Row, RowOrigin};
use owo_colors::OwoColorize;
use tabled::Tabled;
use tokio::time::MissedTickBehavior;

use crate::cli::{GlobalOpts, OutputFormat, StationsArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct StationRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Source")]
    origin: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "RX")]
    rx: String,
    #[tabled(rename = "TX")]
    tx: String,
    #[tabled(rename = "Connected")]
    uptime: String,
    #[tabled(rename = "Web")]
    web: String,
}

impl StationRow {
    fn new(row: &Row, color: bool) -> Self {
        let origin = row.origin.to_string();
        let origin = if color {
            match row.origin {
                RowOrigin::Manual => origin.cyan().to_string(),
                RowOrigin::Dhcp => origin.green().to_string(),
                RowOrigin::Extender => origin.dimmed().to_string(),
            }
        } else {
            origin
        };

        Self {
            mac: row.mac.to_string(),
            address: row.address.clone(),
            name: row.display_name.clone(),
            origin,
            signal: with_unit(&row.signal, "dBm"),
            rx: fmt_bytes(&row.rx_bytes),
            tx: fmt_bytes(&row.tx_bytes),
            uptime: fmt_duration(&row.uptime),
            web: row.web_url().unwrap_or_default(),
        }
    }
}

// ── Cell formatting ─────────────────────────────────────────────────

fn with_unit(value: &str, unit: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{value} {unit}")
    }
}

/// `1536` → `1.5 KiB`. Non-numeric input is passed through.
fn fmt_bytes(raw: &str) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let Ok(bytes) = raw.parse::<u64>() else {
        return raw.to_owned();
    };
    let mut scaled = bytes;
    let mut tenths = 0;
    let mut unit = 0;
    while scaled >= 1024 && unit < UNITS.len() - 1 {
        tenths = (scaled % 1024) * 10 / 1024;
        scaled /= 1024;
        unit += 1;
    }
    if unit == 0 {
        format!("{scaled} B")
    } else {
        format!("{scaled}.{tenths} {}", UNITS[unit])
    }
}

/// `3725` → `1h 2m`. Non-numeric input is passed through.
fn fmt_duration(raw: &str) -> String {
    let Ok(secs) = raw.parse::<u64>() else {
        return raw.to_owned();
    };
    let (days, hours, mins) = (secs / 86_400, secs % 86_400 / 3600, secs % 3600 / 60);
    match (days, hours, mins) {
        (0, 0, 0) => format!("{secs}s"),
        (0, 0, m) => format!("{m}m"),
        (0, h, m) => format!("{h}h {m}m"),
        (d, h, _) => format!("{d}d {h}h"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle<A: AccessPoint, P: DeviceProber>(
    dashboard: &Dashboard<A, P>,
    args: &StationsArgs,
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !args.watch {
        return render_once(dashboard, global, false).await;
    }

    let interval = match args.interval {
        Some(0) => {
            return Err(CliError::Validation {
                field: "interval".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        Some(secs) => Duration::from_secs(secs),
        None => cfg.refresh_interval()?,
    };

    let clear = matches!(global.output, OutputFormat::Table) && io::stdout().is_terminal();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => render_once(dashboard, global, clear).await?,
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

async fn render_once<A: AccessPoint, P: DeviceProber>(
    dashboard: &Dashboard<A, P>,
    global: &GlobalOpts,
    clear: bool,
) -> Result<(), CliError> {
    let rows = dashboard.rows().await;
    let color = output::should_color(&global.color);
    let out = output::render_list(
        &global.output,
        &rows,
        |r| StationRow::new(r, color),
        |r| r.mac.to_string(),
    )?;

    if clear && !global.quiet {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "\x1b[2J\x1b[H");
    }
    output::print_output(&out, global.quiet);
    Ok(())
}
