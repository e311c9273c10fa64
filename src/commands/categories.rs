// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::registry;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let cats = registry::all();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
            let data = cats
                .iter()
                .map(|c| {
                    vec![
                        c.id.as_str().to_string(),
                        c.name.to_string(),
                        c.icon.name().to_string(),
                        c.color.token().to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Category", "Icon", "Color"], data)
            );
        }
    }
    Ok(())
}
