use clap::Parser;
use supertodo::cli::commands::Cli;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = supertodo::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
