use anyhow::{bail, Result};
use log::info;
use std::ffi::{OsStr, OsString};

use calculator_fixture::demo;

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let json = match args.as_slice() {
        [] => false,
        [arg] if arg == OsStr::new("--json") => true,
        [other] => bail!("Unknown argument: {:?}", other),
        _ => bail!("Expected at most one argument, got {}", args.len()),
    };

    let report = demo::run();
    info!("Demo finished with last result {}", report.last_result);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
