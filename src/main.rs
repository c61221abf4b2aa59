// SPDX-License-Identifier: MPL-2.0
use grimoire::app::{self, paths, Flags};
use grimoire::config;
use grimoire::logging::{self, LogConfig};
use grimoire::timer::RuntimeScheduler;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

const USAGE: &str = "\
grimoire - component demo

USAGE:
    grimoire [OPTIONS]

OPTIONS:
    --config-dir <DIR>    Read settings.toml from DIR
    --data-dir <DIR>      Keep state.cbor in DIR
    --log-level <FILTER>  Log filter, e.g. debug or grimoire=trace
    -h, --help            Print this help
";

struct Args {
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if let Some(unexpected) = rest.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {unexpected:?}"),
        });
    }
    Ok(Some(parsed))
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            process::exit(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);
    let (config, config_warning) = config::load();

    let log_config = LogConfig::default()
        .with_cli_level(args.log_level)
        .with_config_level(config.logging.level.clone());
    if let Err(err) = logging::init(&log_config) {
        eprintln!("warning: logging disabled: {err}");
    }

    // Timers run on their own runtime so they keep firing while iced blocks
    // the main thread in its event loop.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("grimoire-timers")
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "could not start timer runtime");
            process::exit(1);
        }
    };

    let flags = Flags {
        config,
        config_warning,
        scheduler: Arc::new(RuntimeScheduler::new(runtime.handle().clone())),
        data_dir: None,
    };

    info!(version = env!("CARGO_PKG_VERSION"), "starting");
    let result = app::run(flags);
    runtime.shutdown_background();
    result
}
