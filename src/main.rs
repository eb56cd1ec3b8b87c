use clap::Parser;
use miette::Result;
use resgen::cli::{Cli, Commands};
use resgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => resgen::cli::generate::run(args, &printer)?,
        Commands::Validate(args) => resgen::cli::validate::run(args, &printer)?,
        Commands::Init(args) => resgen::cli::init::run(args, &printer)?,
        Commands::Completions(args) => resgen::cli::completions::run(args)?,
    }

    Ok(())
}
