use clap::Parser;
use picture_padding::{args::Cli, error::PadError, plan::ExecutionPlan};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // clap prints usage errors, --help and --version itself
    let cli = Cli::parse();

    if let Err(e) = real_main(cli) {
        log::debug!("{:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(cli: Cli) -> Result<(), PadError> {
    let plan = ExecutionPlan::try_from(cli)?;
    plan.execute()?;
    println!("{}", plan.confirmation());
    Ok(())
}
