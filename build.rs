//! The building process.
//!
//! The shell completions for `prismscpfe` are generated from the CLI
//! definition and placed in `[output_dir]/completions/`.

#![allow(unused)]
#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::fs;

use anyhow::anyhow;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate_to;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::PowerShell;
use clap_complete::shells::Zsh;

include!("src/prismscpfe/cli/def.rs");

const BINARY_NAME: &str = "prismscpfe";

fn main() -> Result<()> {
    let outdir: PathBuf = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    }
    .into();

    println!("cargo::rerun-if-changed=src/prismscpfe/cli/def.rs");

    let target_dir = outdir
        .ancestors()
        .nth(3)
        .ok_or(anyhow!("OUT_DIR is not inside a cargo target directory"))?;

    let completions = target_dir.join("completions/");
    let _ = fs::create_dir(&completions);

    let mut completions_command = Cli::command();

    generate_to(Bash, &mut completions_command, BINARY_NAME, &completions)?;
    generate_to(Fish, &mut completions_command, BINARY_NAME, &completions)?;
    generate_to(PowerShell, &mut completions_command, BINARY_NAME, &completions)?;
    generate_to(Zsh, &mut completions_command, BINARY_NAME, &completions)?;

    Ok(())
}
