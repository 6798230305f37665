use anyhow::Result;
use askama::Template;
use mealkit::config::Config;
use mealkit::view::RecipeListTemplate;

#[tracing::instrument(skip(config))]
pub async fn list(config: Config) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;
    let recipes = kitchen.favorite_recipes().await;

    let template = RecipeListTemplate::new("Favorites", &recipes, kitchen.favorites());
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn toggle(config: Config, id: String) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;

    if kitchen.toggle_favorite(&id) {
        println!("Added {id} to favorites");
    } else {
        println!("Removed {id} from favorites");
    }

    Ok(())
}
