use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use planir_proto::{DEFAULT_MAX_DEPTH, DecodeOptions};

use crate::entity::Entity;

#[derive(Args)]
pub struct CheckArgs {
    /// Paths to encoded fragments
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Kind of record the files hold
    #[arg(short, long, value_enum, default_value_t = Entity::Expr)]
    entity: Entity,

    /// Maximum nesting depth accepted while decoding
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let opts = DecodeOptions {
            max_depth: self.max_depth,
        };
        let mut failures = 0usize;

        for path in &self.inputs {
            let buf = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            match self.entity.validate(&buf, &opts) {
                Ok(()) => println!("{}: ok", path.display()),
                Err(e) => {
                    failures += 1;
                    eprintln!("{}: {e}", path.display());
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{failures} of {} fragments failed to decode", self.inputs.len());
        }
        Ok(())
    }
}
