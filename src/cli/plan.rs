use anyhow::Result;
use askama::Template;
use mealkit::config::Config;
use mealkit::view::{PlanTemplate, ShoppingListTemplate};
use mealkit_mealplan::parse_slot;

#[tracing::instrument(skip(config))]
pub async fn show(config: Config) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;
    kitchen.resolve_plan().await;

    let template = PlanTemplate::from(&kitchen.slot_grid());
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn assign(config: Config, day: String, meal_type: String, id: String) -> Result<()> {
    let (day, meal_type) = parse_slot(&day, &meal_type)?;
    let mut kitchen = mealkit::open_kitchen(&config)?;

    kitchen.assign(day, meal_type, &id);
    println!("Added {id} to {} {}", day.label(), meal_type.label());

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn remove(config: Config, day: String, meal_type: String) -> Result<()> {
    let (day, meal_type) = parse_slot(&day, &meal_type)?;
    let mut kitchen = mealkit::open_kitchen(&config)?;

    kitchen.remove(day, meal_type);
    println!("Cleared {} {}", day.label(), meal_type.label());

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset(config: Config) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;

    kitchen.reset_plan();
    println!("Meal plan cleared");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn shopping(config: Config) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;
    kitchen.resolve_plan().await;

    let template = ShoppingListTemplate::from(&kitchen.shopping_list());
    println!("{}", template.render()?);

    Ok(())
}
