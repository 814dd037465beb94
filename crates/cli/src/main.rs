use clap::Parser;
use detect_indent_cli::args::Args;
use detect_indent_cli::config::Config;
use detect_indent_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let format = args.format;
    let config = Config::from(args);
    log::debug!("resolved config: {config:?}");

    match detect_indent_engine::run(&config) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }

            if let Err(e) = presentation::print_results(&result, format) {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
