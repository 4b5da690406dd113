use mge_oracle::ThemeOrder;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut rng = ctx.config().rng();
    let order = ThemeOrder::new(&mut rng);

    if ctx.json {
        return super::print_json(&order);
    }

    for (i, theme) in order.themes().iter().enumerate() {
        println!("  {}. {theme}", i + 1);
    }
    Ok(())
}
