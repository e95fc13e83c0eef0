use clap::Parser;
use log::LevelFilter;

mod cli;

use cli::CliFlags;

fn main() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let flags = CliFlags::parse();
    init_logging(flags.verbose);

    if let Err(e) = cli::run(flags) {
        cli::prompts::error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries only passwords. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
