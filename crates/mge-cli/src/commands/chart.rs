use comfy_table::{ContentArrangement, Table};

use mge_oracle::OddsTier;
use mge_oracle::chaos::MAX_CHAOS;
use mge_oracle::oracle::fate_chart::{exceptional_no_bound, exceptional_yes_bound};
use mge_oracle::oracle::fate_threshold;

use super::Context;

/// Render one threshold cell as `exceptional-yes/yes/exceptional-no`.
fn cell(threshold: i32) -> String {
    let yes = exceptional_yes_bound(threshold);
    let no = exceptional_no_bound(threshold);
    let fmt = |n: i32| {
        if (1..=100).contains(&n) {
            n.to_string()
        } else {
            "-".to_string()
        }
    };
    format!("{}/{}/{}", fmt(yes), fmt(threshold), fmt(no))
}

pub fn run(ctx: &Context) -> Result<(), String> {
    let chaos_levels: Vec<u32> = (1..=MAX_CHAOS).rev().collect();

    if ctx.json {
        let rows: Vec<(OddsTier, Vec<i32>)> = OddsTier::ALL
            .iter()
            .map(|&tier| {
                let thresholds = chaos_levels
                    .iter()
                    .map(|&chaos| fate_threshold(tier, chaos))
                    .collect();
                (tier, thresholds)
            })
            .collect();
        return super::print_json(&rows);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Odds".to_string()];
    header.extend(chaos_levels.iter().map(|c| format!("Chaos {c}")));
    table.set_header(header);

    for tier in OddsTier::ALL {
        let mut row = vec![tier.name().to_string()];
        row.extend(chaos_levels.iter().map(|&c| cell(fate_threshold(tier, c))));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  Cells: exceptional yes / yes / exceptional no (\"-\" = impossible)");
    Ok(())
}
