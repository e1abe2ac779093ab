//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

mod index_util;

use self::index_util::{collect_entries, render, IndexError, OUTPUT_FILE, TOOL_NAME};
use chrono::{DateTime, Local};
use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// generate_index - write an HTML listing of the current directory to index.html
#[derive(Parser)]
#[command(version, about = gettext("generate_index - write an HTML listing of the current directory to index.html"))]
struct Args {}

/// Write the listing of `dir` to `dir/index.html`, replacing any previous
/// contents, and return the path written.
fn generate_index(dir: &Path, now: DateTime<Local>) -> Result<PathBuf, IndexError> {
    let dir_name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let entries = collect_entries(dir)?;
    let html = render(&dir_name, &entries, now);

    let output_path = dir.join(OUTPUT_FILE);
    fs::write(&output_path, html).map_err(|source| IndexError::Write {
        path: output_path.clone(),
        source,
    })?;

    log::debug!(
        "wrote {} entries to {}",
        entries.len(),
        output_path.display()
    );
    Ok(output_path)
}

/// Line reported after a successful run.
fn confirmation_message(cwd: &Path) -> String {
    gettext("Index file '{}' has been generated in {}")
        .replacen("{}", OUTPUT_FILE, 1)
        .replacen("{}", &cwd.display().to_string(), 1)
}

fn run() -> Result<PathBuf, IndexError> {
    let cwd = std::env::current_dir().map_err(IndexError::CurrentDir)?;
    generate_index(&cwd, Local::now())?;
    Ok(cwd)
}

fn main() -> ExitCode {
    setlocale(LocaleCategory::LcAll, "");
    if let Err(e) = textdomain(PROJECT_NAME) {
        eprintln!("{TOOL_NAME}: {e}");
    }
    if let Err(e) = bind_textdomain_codeset(PROJECT_NAME, "UTF-8") {
        eprintln!("{TOOL_NAME}: {e}");
    }

    env_logger::init();

    let _args = Args::parse();

    match run() {
        Ok(cwd) => {
            println!("{}", confirmation_message(&cwd));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{TOOL_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}
