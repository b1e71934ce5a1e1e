use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();

    let args = cli::Args::parse();

    let mut config = config::Config::load(args.config)?;
    if let Some(rpc) = args.rpc {
        config.eth.rpc = rpc;
    }
    if let Some(faucet) = args.faucet {
        config.eth.faucet = Some(faucet);
    }
    if let Some(gas_surplus) = args.gas_surplus {
        config.eth.gas_surplus = gas_surplus;
    }

    args.cmd.execute(config)
}
