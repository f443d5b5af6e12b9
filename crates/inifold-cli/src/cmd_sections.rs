// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `inifold sections` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// List the sections of a document
#[derive(Debug, Args)]
pub struct CmdSections {
    /// Document to load
    #[clap(short = 'f', long, env = "INIFOLD_FILE")]
    file: PathBuf,
}

impl CmdSections {
    pub fn run(&mut self) -> Result<i32> {
        let document = inifold::load(&self.file)?;

        println!("{}", "Sections:".bold());
        println!();

        if document.is_empty() {
            println!("  {}", "(no sections)".dimmed());
        } else {
            for (i, section) in document.sections().enumerate() {
                println!(
                    "  {}. {} {}",
                    i + 1,
                    section.name().cyan(),
                    format!("[{} option(s)]", section.len()).dimmed()
                );
            }
        }

        println!();
        println!("Total: {} section(s)", document.len());

        Ok(0)
    }
}
