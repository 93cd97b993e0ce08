use anyhow::{Context, Result};

use mirrorbrain::{
    BrainScanner, cli::cli_args, commands::execute, config::Config, logging::init_tracing,
};

fn main() -> Result<()> {
    let args = cli_args()?;
    let config = Config::resolve(args.config_path.as_deref())
        .context("failed to load mirrorbrain config")?;
    let logging = init_tracing(&config.logging)?;

    let span = logging.command_span(args.command.name());
    let _entered = span.enter();

    let scanner = BrainScanner::from_config(&config);
    let output = execute(&scanner, args.command)?;
    let rendered = serde_json::to_string_pretty(&output).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
