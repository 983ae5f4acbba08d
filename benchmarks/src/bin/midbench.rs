use midbench_benchmarks::{init_logging, MidbenchArgs};
use std::io::Write;
use std::process::exit;
use tracing::{debug, error};

fn main() {
    let args = match MidbenchArgs::new("midbench") {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            exit(2);
        }
    };
    init_logging(args.verbosity);

    let config = args.config;
    debug!(?config, "benchmark configuration");

    let mut output = match config.output.open() {
        Ok(output) => output,
        Err(e) => {
            error!(output = ?config.output, "cannot open output: {}", e);
            exit(1);
        }
    };

    let summary = config.suite().repeat(config.repeat);
    if let Err(e) = config.report().write(&mut output, &summary) {
        error!("{}", e);
        exit(1);
    }
    if let Err(e) = output.flush() {
        error!("cannot flush output: {}", e);
        exit(1);
    }
}
