use colored::Colorize;

use mge_oracle::{PlotRoll, ThemeOrder, ThemeType};

use super::Context;

pub fn run(
    ctx: &Context,
    theme: Option<&str>,
    roll: Option<i32>,
    game: Option<&str>,
) -> Result<(), String> {
    let (oracle, mut rng) = ctx.oracle()?;

    let theme = match (theme, game) {
        (Some(name), _) => name.parse::<ThemeType>().map_err(|e| e.to_string())?,
        (None, Some(name)) => ctx.store().load(name)?.themes.sample(&mut rng),
        (None, None) => ThemeOrder::default().sample(&mut rng),
    };

    let result: PlotRoll = match roll {
        Some(roll) => oracle.plot_point_at(theme, roll),
        None => oracle.plot_point_for(theme, &mut rng),
    }
    .map_err(|e| e.to_string())?;

    if ctx.json {
        return super::print_json(&result);
    }

    println!("  {}", result.point.description.bold());
    println!(
        "  {}",
        format!("{} | roll {}", result.theme, result.roll).dimmed()
    );
    Ok(())
}

pub fn meta(ctx: &Context, roll: Option<i32>) -> Result<(), String> {
    let (oracle, mut rng) = ctx.oracle()?;
    let result = match roll {
        Some(roll) => oracle.meta_plot_point_at(roll),
        None => oracle.meta_plot_point(&mut rng),
    }
    .map_err(|e| e.to_string())?;

    if ctx.json {
        return super::print_json(&result);
    }

    println!("  {}", result.point.title.bold());
    println!("  {}", result.point.text);
    println!("  {}", format!("roll {}", result.roll).dimmed());
    Ok(())
}
