use clap::Parser;
use direct_deps::core::report::{render_configuration, render_dependencies};
use direct_deps::utils::logger;
use direct_deps::{CliArgs, DependencyFetcher, DepsError};
use std::process::ExitCode;

async fn run(args: CliArgs) -> Result<(), DepsError> {
    let config = args.resolve()?;
    tracing::debug!("Resolved config: {:?}", config);

    print!("{}", render_configuration(&config));

    let fetcher = DependencyFetcher::for_location(&config.repo, config.timeout)?;
    let dependencies = fetcher.fetch(&config.package).await?;

    println!();
    print!("{}", render_dependencies(&dependencies, &config.filter));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run failed: {:?} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}
