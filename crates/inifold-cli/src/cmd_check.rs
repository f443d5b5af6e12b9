// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `inifold check` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

#[cfg(test)]
#[path = "./cmd_check_test.rs"]
mod cmd_check_test;

/// Expand sections and report failures
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// Document to load
    #[clap(short = 'f', long, env = "INIFOLD_FILE")]
    file: PathBuf,

    /// Sections to check (all sections when omitted)
    sections: Vec<String>,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        let document = inifold::load(&self.file)?;
        let engine = inifold::Engine::new(document);

        let sections: Vec<String> = if self.sections.is_empty() {
            engine.document().section_names().map(String::from).collect()
        } else {
            self.sections.clone()
        };

        let mut failures = 0;
        for name in &sections {
            match engine.expand_section(name) {
                Ok(resolved) => {
                    println!(
                        "{} [{}] ({} option(s))",
                        "ok".green().bold(),
                        name,
                        resolved.len()
                    );
                }
                Err(error) => {
                    failures += 1;
                    println!("{} [{}] {}", "FAIL".red().bold(), name, error);
                }
            }
        }

        println!();
        if failures == 0 {
            println!("✓ {} section(s) expand cleanly", sections.len());
            Ok(0)
        } else {
            println!(
                "{} of {} section(s) failed to expand",
                failures,
                sections.len()
            );
            Ok(1)
        }
    }
}
