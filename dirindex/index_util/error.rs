//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort index generation.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("cannot access '{}': {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
