use colored::Colorize;

use mge_oracle::{OddsTier, OracleAnswer};

use super::Context;

pub fn run(ctx: &Context, tier: &str, chaos: Option<i64>, game: Option<&str>) -> Result<(), String> {
    let tier = OddsTier::parse(tier).map_err(|e| e.to_string())?;
    let chaos = ctx.chaos(chaos, game)?;
    let (oracle, mut rng) = ctx.oracle()?;

    let outcome = oracle.ask(tier, chaos, &mut rng);

    if ctx.json {
        return super::print_json(&outcome);
    }

    let answer = outcome.answer.to_string();
    let answer = match outcome.answer {
        OracleAnswer::ExceptionalYes => answer.green().bold(),
        OracleAnswer::Yes => answer.green(),
        OracleAnswer::No => answer.red(),
        OracleAnswer::ExceptionalNo => answer.red().bold(),
    };
    println!("  {answer}");
    println!(
        "  {}",
        format!(
            "{} | chaos {} | roll {} vs {}",
            outcome.tier, outcome.chaos, outcome.roll, outcome.threshold
        )
        .dimmed()
    );
    if let Some(event) = &outcome.event {
        println!("  {} {event}", "Random event!".yellow().bold());
    }

    Ok(())
}
