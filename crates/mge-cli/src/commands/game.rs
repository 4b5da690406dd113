use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mge_oracle::{ChaosFactor, GameSession};

use super::Context;

pub fn new(ctx: &Context, name: &str, chaos: i64) -> Result<(), String> {
    let mut rng = ctx.config().rng();
    let game =
        GameSession::new(name, ChaosFactor::new(chaos), &mut rng).map_err(|e| e.to_string())?;
    let path = ctx.store().create(&game)?;

    if ctx.json {
        return super::print_json(&game);
    }

    println!("  {} game '{}'", "Created".green().bold(), game.name);
    println!("  Chaos: {}/9 | Themes: {}", game.chaos, game.themes);
    println!("  {}", path.display().to_string().dimmed());
    Ok(())
}

pub fn show(ctx: &Context, name: &str) -> Result<(), String> {
    let game = ctx.store().load(name)?;

    if ctx.json {
        return super::print_json(&game);
    }

    println!("  {}", game.name.bold());
    println!("  Chaos:   {}/9", game.chaos);
    println!("  Themes:");
    for (i, theme) in game.themes.themes().iter().enumerate() {
        println!("    {}. {theme}", i + 1);
    }
    println!(
        "  {}",
        format!(
            "created {} | updated {}",
            game.created_at.format("%Y-%m-%d %H:%M"),
            game.updated_at.format("%Y-%m-%d %H:%M")
        )
        .dimmed()
    );
    Ok(())
}

pub fn list(ctx: &Context) -> Result<(), String> {
    let games = ctx.store().list()?;

    if ctx.json {
        return super::print_json(&games);
    }

    if games.is_empty() {
        println!("  No games found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Chaos", "Themes", "Updated"]);
    for game in &games {
        table.add_row(vec![
            game.name.clone(),
            game.chaos.to_string(),
            game.themes.to_string(),
            game.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} games", games.len());
    Ok(())
}

pub fn set_chaos(ctx: &Context, name: &str, value: i64) -> Result<(), String> {
    let store = ctx.store();
    let mut game = store.load(name)?;
    game.set_chaos(value);
    store.save(&game)?;
    report_chaos(ctx, &game)
}

pub fn end_scene(ctx: &Context, name: &str, went_well: bool) -> Result<(), String> {
    let store = ctx.store();
    let mut game = store.load(name)?;
    let before = game.chaos.value();
    game.end_scene(went_well);
    store.save(&game)?;

    if !ctx.json && before == game.chaos.value() {
        println!("  {}", "Chaos is already at its limit.".yellow());
    }
    report_chaos(ctx, &game)
}

fn report_chaos(ctx: &Context, game: &GameSession) -> Result<(), String> {
    if ctx.json {
        return super::print_json(game);
    }
    println!("  {}: chaos {}/9", game.name.bold(), game.chaos);
    Ok(())
}
