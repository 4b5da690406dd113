use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let (oracle, mut rng) = ctx.oracle()?;
    let event = oracle.event(&mut rng);

    if ctx.json {
        return super::print_json(&event);
    }

    println!("  {} {}", "Focus:".bold(), event.focus);
    println!("  {} {} {}", "Event:".bold(), event.action, event.subject);
    if let Some(meaning) = &event.meaning {
        println!(
            "  {} {} / {}",
            "Actions:".dimmed(),
            meaning.actions[0],
            meaning.actions[1]
        );
        println!(
            "  {} {} / {}",
            "Descriptors:".dimmed(),
            meaning.descriptors[0],
            meaning.descriptors[1]
        );
    }

    Ok(())
}
