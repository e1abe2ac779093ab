//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod testing;

/// gettext text domain shared by the workspace utilities
pub const PROJECT_NAME: &'static str = "dirindex-rs";

pub use testing::*;
