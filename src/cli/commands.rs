use clap::Parser;

/// Command-line surface. There are no subcommands: without persistence,
/// nothing a one-shot command did could outlive the process, so the only
/// thing to do is launch the UI.
#[derive(Parser)]
#[command(
    name = "st",
    about = concat!("[\u{2713}] supertodo v", env!("CARGO_PKG_VERSION"), " - tasks that live for a session"),
    version
)]
pub struct Cli {}
