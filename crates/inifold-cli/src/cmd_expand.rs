// Copyright (c) Contributors to the inifold project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `inifold expand` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

use inifold::ResolvedOption;

#[cfg(test)]
#[path = "./cmd_expand_test.rs"]
mod cmd_expand_test;

/// Print one fully expanded section
#[derive(Debug, Args)]
pub struct CmdExpand {
    /// Section to expand
    section: String,

    /// Document to load
    #[clap(short = 'f', long, env = "INIFOLD_FILE")]
    file: PathBuf,

    /// Output format: table, yaml, json
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdExpand {
    pub fn run(&mut self) -> Result<i32> {
        let document = inifold::load(&self.file)?;
        let engine = inifold::Engine::new(document);
        let resolved = engine.expand_section(&self.section)?;

        match self.format.as_str() {
            "yaml" => print!("{}", render_yaml(&resolved)?),
            "json" => println!("{}", render_json(&self.section, &resolved)),
            _ => self.show_table(&resolved),
        }

        Ok(0)
    }

    fn show_table(&self, resolved: &[ResolvedOption]) {
        println!("{}", format!("Expanded [{}]:", self.section).bold());
        println!();

        if resolved.is_empty() {
            println!("  {}", "(no options)".dimmed());
        } else {
            for (i, option) in resolved.iter().enumerate() {
                match &option.value {
                    Some(value) => {
                        println!("  {}. {} = {}", i + 1, option.key.cyan(), value.green())
                    }
                    None => println!("  {}. {}", i + 1, option.key.cyan()),
                }
            }
        }

        println!();
        println!("Total: {} option(s)", resolved.len());
    }
}

/// Render resolved options as a YAML sequence.
fn render_yaml(resolved: &[ResolvedOption]) -> Result<String> {
    serde_yaml::to_string(resolved).map_err(|e| miette::miette!("Failed to render YAML: {e}"))
}

/// Render resolved options as a JSON object.
///
/// Simple manual JSON output to avoid a serde_json dependency in the CLI.
fn render_json(section: &str, resolved: &[ResolvedOption]) -> String {
    let options = resolved
        .iter()
        .map(|option| {
            let value = match &option.value {
                Some(value) => format!("\"{}\"", json_escape(value)),
                None => "null".to_string(),
            };
            format!("{{\"key\": \"{}\", \"value\": {}}}", json_escape(&option.key), value)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{{\"section\": \"{}\", \"options\": [{}]}}",
        json_escape(section),
        options
    )
}

fn json_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
