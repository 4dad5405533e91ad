use bank::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Too many input arguments, expected at most a script file: {0:?}")]
    TooMany(Vec<String>),

    #[error("Script file not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments. The only, optional, argument is a transaction script to run in
/// place of the reference scenario.
pub fn parse_script_arg() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);

    let filename = match args.next() {
        None => return Ok(None),
        Some(filename) => filename,
    };

    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        Err(InputArgsError::TooMany(extra))?
    }

    let path = fs::canonicalize(&filename)
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(Some(path))
}
