//! styled2panda: rewrites styled-components tagged templates into Panda CSS
//! styled() calls.

mod cli;
mod driver;
mod output;

use clap::Parser;
use cli::Args;
use miette::Result;
use output::Formatter;

fn main() -> Result<()> {
    let args = Args::parse();
    let formatter = Formatter::new(args.output);

    match driver::run(&args) {
        Ok(summary) => {
            print!("{}", formatter.format(&summary));
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
