//! FriendNet CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use friendnet::cli::args::FriendNetArgs;
use friendnet::cli::commands::execute_command;

fn main() {
    let args = FriendNetArgs::parse();

    // Progress lines are info-level, so they show by default.
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Info,  // Default
        2 => LevelFilter::Debug, // Verbose
        _ => LevelFilter::Trace, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
