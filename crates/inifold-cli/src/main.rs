// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! inifold - Directive-Aware INI Section Expansion CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_check;
mod cmd_expand;
mod cmd_sections;

use cmd_check::CmdCheck;
use cmd_expand::CmdExpand;
use cmd_sections::CmdSections;

#[derive(Parser)]
#[clap(
    name = "inifold",
    about = "Directive-aware INI section expansion",
    version,
    long_about = "Expand INI sections whose option keys carry operation directives such as `use`"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print one fully expanded section
    Expand(CmdExpand),

    /// List the sections of a document
    Sections(CmdSections),

    /// Expand sections and report failures
    Check(CmdCheck),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Expand(mut cmd) => cmd.run(),
            Command::Sections(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
