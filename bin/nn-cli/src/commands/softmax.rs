// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nnk softmax` command: print the distribution of a value vector.

pub fn execute(values: &str) -> anyhow::Result<()> {
    let mut x = super::parse_values(values)?;
    nn_core::try_softmax(&mut x)?;

    let best = nn_core::argmax(&x);
    println!("  {:<8} {:>14}", "Index", "Probability");
    println!("  {}", "-".repeat(23));
    for (i, p) in x.iter().enumerate() {
        let marker = if i == best { " *" } else { "" };
        println!("  {i:<8} {p:>14.8}{marker}");
    }
    println!();
    println!("  sum = {:.8}", x.iter().sum::<f32>());
    Ok(())
}
