//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use super::error::IndexError;
use chrono::{DateTime, Local};
use log::{debug, warn};
use std::{ffi::OsString, fs, io, path::Path};

/// Name of the generated document.
pub const OUTPUT_FILE: &str = "index.html";

/// Name of the generator binary itself.
pub const TOOL_NAME: &str = "generate_index";

/// Names that are never listed, matched exactly against the file name.
pub const EXCLUDED_NAMES: [&str; 2] = [OUTPUT_FILE, TOOL_NAME];

const HIDDEN_MARKER: char = '.';

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = 1024 * 1024;

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modified {
    At(DateTime<Local>),
    Unknown,
}

/// One direct child of the indexed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Meaningless for directories.
    pub size: u64,
    pub modified: Modified,
}

impl Entry {
    /// Build an entry from the outcome of a metadata lookup.
    ///
    /// A lookup that fails because the file vanished or is not accessible
    /// still yields an entry, with a size of zero and an unknown
    /// modification time. Every other failure is returned to the caller.
    pub fn from_metadata(name: String, metadata: io::Result<fs::Metadata>) -> io::Result<Self> {
        let metadata = match metadata {
            Ok(m) => m,
            Err(e) => match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    warn!("cannot read metadata of '{name}': {e}");
                    return Ok(Self::unreadable(name));
                }
                _ => return Err(e),
            },
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let modified = match metadata.modified() {
            Ok(time) => Modified::At(time.into()),
            Err(e) => match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    warn!("cannot read modification time of '{name}': {e}");
                    return Ok(Self::unreadable(name));
                }
                _ => return Err(e),
            },
        };

        Ok(Self {
            name,
            kind,
            size: metadata.len(),
            modified,
        })
    }

    fn unreadable(name: String) -> Self {
        Self {
            name,
            kind: EntryKind::File,
            size: 0,
            modified: Modified::Unknown,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name as shown in the listing, with a trailing `/` for directories.
    pub fn display_name(&self) -> String {
        if self.is_dir() {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn size_label(&self) -> String {
        if self.is_dir() {
            return String::from("Directory");
        }

        let size = self.size;
        if size < KILOBYTE {
            format!("{size} bytes")
        } else if size < MEGABYTE {
            format!("{:.1} KB", size as f64 / KILOBYTE as f64)
        } else {
            format!("{:.1} MB", size as f64 / MEGABYTE as f64)
        }
    }

    pub fn modified_label(&self) -> String {
        match &self.modified {
            Modified::At(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
            Modified::Unknown => String::from("Unknown"),
        }
    }
}

pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Names of the direct children of `dir`, in the order the OS lists them.
pub fn list_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        names.push(dir_entry?.file_name());
    }
    Ok(names)
}

/// A listed child name: the raw name for filesystem lookups and its lossy
/// UTF-8 form for display, filtering and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedName {
    pub raw: OsString,
    pub name: String,
}

impl ListedName {
    pub fn new(raw: OsString) -> Self {
        let name = raw.to_string_lossy().into_owned();
        Self { raw, name }
    }
}

/// Case-insensitive ordering; names equal after lowercasing keep their
/// listing order.
pub fn sort_names(names: &mut [ListedName]) {
    names.sort_by_cached_key(|listed| listed.name.to_lowercase());
}

/// Snapshot of the listable children of `dir`.
///
/// Excluded and hidden names are dropped before any metadata lookup, so
/// they are never stat'ed.
pub fn collect_entries(dir: &Path) -> Result<Vec<Entry>, IndexError> {
    let mut names: Vec<ListedName> = list_names(dir)
        .map_err(|source| IndexError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .into_iter()
        .map(ListedName::new)
        .collect();

    sort_names(&mut names);

    let mut entries = Vec::with_capacity(names.len());
    for ListedName { raw, name } in names {
        if is_excluded(&name) {
            debug!("excluding '{name}'");
            continue;
        }
        if is_hidden(&name) {
            debug!("skipping hidden '{name}'");
            continue;
        }

        let path = dir.join(&raw);
        let metadata = fs::metadata(&path);
        let entry = Entry::from_metadata(name, metadata)
            .map_err(|source| IndexError::Metadata { path, source })?;
        debug!(
            "listing '{}': {}, {}",
            entry.display_name(),
            entry.size_label(),
            entry.modified_label()
        );
        entries.push(entry);
    }

    Ok(entries)
}
