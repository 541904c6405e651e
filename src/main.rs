use cake_demo::utils::logger;
use cake_demo::CliConfig;
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    cake_demo::foo()
}
