use anyhow::Result;
use clap::Parser;

use github_decode::cli::{self, Cli};

fn main() -> Result<()> {
    decode_common::init_tracing("github_decode")?;

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    cli::run(cli, &mut stdout)
}
