use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "foo")]
#[command(about = "Prints a greeting and exits with a success status")]
#[command(version)]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
