use anyhow::Result;
use askama::Template;
use mealkit::AppError;
use mealkit::config::Config;
use mealkit::view::{NameListTemplate, RecipeDetailTemplate, RecipeListTemplate};
use mealkit_recipe::BrowseFilter;

#[tracing::instrument(skip(config))]
pub async fn search(config: Config, query: String) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;
    let recipes = kitchen.search(&query).await;

    let template = RecipeListTemplate::new(
        format!("Results for \"{query}\""),
        &recipes,
        kitchen.favorites(),
    );
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn random(config: Config) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;

    let Some(recipe) = kitchen.random().await else {
        println!("Failed to load recipes. Please try again.");
        return Ok(());
    };

    let template = RecipeDetailTemplate::new(&recipe, kitchen.is_favorite(&recipe.id));
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn show(config: Config, id: String) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;

    let recipe = kitchen
        .recipe(&id)
        .await
        .ok_or_else(|| AppError::RecipeNotFound(id.clone()))?;

    let template = RecipeDetailTemplate::new(&recipe, kitchen.is_favorite(&recipe.id));
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn browse(config: Config, category: Option<String>, area: Option<String>) -> Result<()> {
    let mut kitchen = mealkit::open_kitchen(&config)?;
    let filter = BrowseFilter::new(category, area);
    let recipes = kitchen.browse(&filter).await;

    let title = match (&filter.category, &filter.area) {
        (Some(category), Some(area)) => format!("{area} {category} recipes"),
        (Some(category), None) => format!("{category} recipes"),
        (None, Some(area)) => format!("{area} recipes"),
        (None, None) => "All recipes".to_string(),
    };

    let template = RecipeListTemplate::new(title, &recipes, kitchen.favorites());
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn categories(config: Config) -> Result<()> {
    let kitchen = mealkit::open_kitchen(&config)?;
    let names = kitchen
        .categories()
        .await
        .into_iter()
        .map(|category| category.name)
        .collect();

    let template = NameListTemplate {
        title: "Categories".to_string(),
        names,
    };
    println!("{}", template.render()?);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn areas(config: Config) -> Result<()> {
    let kitchen = mealkit::open_kitchen(&config)?;
    let names = kitchen
        .areas()
        .await
        .into_iter()
        .map(|area| area.name)
        .collect();

    let template = NameListTemplate {
        title: "Cuisine areas".to_string(),
        names,
    };
    println!("{}", template.render()?);

    Ok(())
}
