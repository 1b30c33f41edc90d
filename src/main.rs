use std::process;

use clap::{CommandFactory, Parser};
use html_checker::{cli::Args, CheckError, Checker};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !args.checks.exists() {
        eprintln!("{}", CheckError::MissingFile(args.checks.clone()));
        process::exit(1);
    }

    let source = match args.source() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", Args::command().render_help());
            process::exit(1);
        }
    };

    let report = match Checker::new() {
        Ok(checker) => checker.check(&source, &args.checks).await,
        Err(e) => Err(e),
    }
    .and_then(|result| result.to_pretty_json());

    match report {
        Ok(report) => println!("Check result:\n{}", report),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
