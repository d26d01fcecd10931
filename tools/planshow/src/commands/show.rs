use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use planir_proto::{DEFAULT_MAX_DEPTH, DecodeOptions};

use crate::entity::Entity;

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the encoded fragment
    input: PathBuf,

    /// Kind of record the file holds
    #[arg(short, long, value_enum, default_value_t = Entity::Expr)]
    entity: Entity,

    /// Maximum nesting depth accepted while decoding
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Also print the full debug tree
    #[arg(short, long)]
    verbose: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let buf = fs::read(&self.input)
            .with_context(|| format!("reading {}", self.input.display()))?;
        let opts = DecodeOptions {
            max_depth: self.max_depth,
        };
        let text = self
            .entity
            .decode_to_text(&buf, &opts, self.verbose)
            .with_context(|| format!("decoding {}", self.input.display()))?;

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
