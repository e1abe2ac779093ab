//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the dirindex-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use super::entry::{Entry, DATE_TIME_FORMAT};
use chrono::{DateTime, Local};
use std::fmt::Write;

const STYLE: &str = r#"    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        h1 {
            color: #333;
            border-bottom: 2px solid #ddd;
            padding-bottom: 10px;
        }
        ul {
            list-style-type: none;
            padding: 0;
        }
        li {
            margin: 10px 0;
            padding: 10px;
            background-color: white;
            border-radius: 5px;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
            transition: background-color 0.2s;
        }
        li:hover {
            background-color: #f0f0f0;
        }
        a {
            color: #0066cc;
            text-decoration: none;
            display: block;
        }
        a:hover {
            text-decoration: underline;
        }
        .file-info {
            color: #666;
            font-size: 0.8em;
            margin-top: 4px;
        }
        .footer {
            margin-top: 30px;
            font-size: 0.8em;
            color: #666;
            text-align: center;
        }
    </style>
"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_item(html: &mut String, href: &str, label: &str, info: &str) {
    // Writing to a String cannot fail
    let _ = write!(
        html,
        "        <li>\n            <a href=\"{href}\">{label}</a>\n            <div class=\"file-info\">{info}</div>\n        </li>\n"
    );
}

/// Render the listing page for `dir_name`.
///
/// `entries` are written in the order given, after a link to the parent
/// directory. `generated` is stamped into the footer.
pub fn render(dir_name: &str, entries: &[Entry], generated: DateTime<Local>) -> String {
    let title = format!("Directory Listing: {}", escape_html(dir_name));

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>{title}</title>");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "    <h1>{title}</h1>");
    html.push_str("    <ul>\n");

    push_item(&mut html, "../", "../", "Parent Directory");

    for entry in entries {
        let info = format!(
            "{} - Last modified: {}",
            entry.size_label(),
            entry.modified_label()
        );
        push_item(
            &mut html,
            &escape_html(&entry.name),
            &escape_html(&entry.display_name()),
            &info,
        );
    }

    html.push_str("    </ul>\n");
    html.push_str("    <div class=\"footer\">\n");
    let _ = writeln!(
        html,
        "        Generated on {}",
        generated.format(DATE_TIME_FORMAT)
    );
    html.push_str("    </div>\n</body>\n</html>\n");

    html
}
