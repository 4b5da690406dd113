use colored::Colorize;

use mge_oracle::{SceneAdjustment, SceneType};

use super::Context;

pub fn run(ctx: &Context, chaos: Option<i64>, game: Option<&str>) -> Result<(), String> {
    let chaos = ctx.chaos(chaos, game)?;
    let (oracle, mut rng) = ctx.oracle()?;
    let check = oracle.check_scene(chaos, &mut rng);

    if ctx.json {
        return super::print_json(&check);
    }

    let headline = check.roll.to_string();
    let headline = match check.roll.scene_type {
        SceneType::Expected => headline.green(),
        SceneType::Altered => headline.yellow(),
        SceneType::Interrupt => headline.red(),
    };
    println!("  {}", headline.bold());
    print_adjustments(&check.adjustments);
    if let Some(event) = &check.event {
        println!("  {} {event}", "Instead:".bold());
    }

    Ok(())
}

pub fn adjust(ctx: &Context) -> Result<(), String> {
    let (oracle, mut rng) = ctx.oracle()?;
    let adjustments = oracle.adjust_scene(&mut rng);

    if ctx.json {
        return super::print_json(&adjustments);
    }

    print_adjustments(&adjustments);
    Ok(())
}

fn print_adjustments(adjustments: &[SceneAdjustment]) {
    for adjustment in adjustments {
        println!("  {} {adjustment}", "-".dimmed());
    }
}
