use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

#[path = "src/cli.rs"]
mod cli;

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = cli::build_command();

    generate_to(Bash, &mut cmd, "normtext", &outdir)?;
    generate_to(Zsh, &mut cmd, "normtext", &outdir)?;
    generate_to(Fish, &mut cmd, "normtext", &outdir)?;

    Ok(())
}
