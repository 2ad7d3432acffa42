//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let toml = apdash_config::to_toml(&cfg)?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |_| toml.trim_end().to_owned(),
                |_| config::config_file(global).display().to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // Does not require the file to exist
        ConfigCommand::Path => {
            output::print_output(
                &config::config_file(global).display().to_string(),
                global.quiet,
            );
            Ok(())
        }
    }
}
