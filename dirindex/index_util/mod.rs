//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

mod entry;
mod error;
mod html;

pub use entry::{collect_entries, OUTPUT_FILE, TOOL_NAME};
pub use error::IndexError;
pub use html::render;
