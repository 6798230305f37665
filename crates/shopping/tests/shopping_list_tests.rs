use std::collections::HashMap;

use mealkit_shared::mealplan::{Day, MealType, WeeklyPlan};
use mealkit_shared::recipe::{Ingredient, Recipe};
use mealkit_shared::shopping::{ShoppingCategory, ShoppingListEntry};
use mealkit_shopping::build_shopping_list;

fn lookup(recipes: Vec<Recipe>) -> HashMap<String, Recipe> {
    recipes.into_iter().map(|r| (r.id.clone(), r)).collect()
}

fn plan_with(cells: &[(Day, MealType, &str)]) -> WeeklyPlan {
    let mut plan = WeeklyPlan::empty();
    for (day, meal_type, id) in cells {
        plan.set(*day, *meal_type, Some((*id).to_owned()));
    }
    plan
}

#[test]
fn test_empty_plan_gives_empty_sections() {
    let list = build_shopping_list(&WeeklyPlan::empty(), &HashMap::new());

    assert_eq!(list.sections.len(), 6);
    assert!(list.sections.iter().all(|s| s.entries.is_empty()));
    assert!(list.is_empty());
}

#[test]
fn test_unresolved_plan_gives_empty_sections() {
    let plan = plan_with(&[
        (Day::Monday, MealType::Breakfast, "1"),
        (Day::Saturday, MealType::Dinner, "2"),
    ]);
    let recipes = lookup(vec![Recipe::new("99", "Unrelated")
        .with_ingredients(vec![Ingredient::new("Tomato", "1")])]);

    let list = build_shopping_list(&plan, &recipes);

    assert_eq!(list.total_entries(), 0);
}

#[test]
fn test_tomato_scenario() {
    let recipes = lookup(vec![
        Recipe::new("A", "Bruschetta").with_ingredients(vec![Ingredient::new("Tomato", "2")]),
        Recipe::new("B", "Soup").with_ingredients(vec![Ingredient::new("tomato", "1 cup")]),
    ]);
    let plan = plan_with(&[
        (Day::Monday, MealType::Breakfast, "A"),
        (Day::Tuesday, MealType::Lunch, "B"),
    ]);

    let list = build_shopping_list(&plan, &recipes);

    assert_eq!(
        list.entries(ShoppingCategory::Produce),
        [ShoppingListEntry {
            name: "Tomato".to_owned(),
            measures: vec!["2".to_owned(), "1 cup".to_owned()],
        }]
    );
    assert_eq!(list.total_entries(), 1);
}

#[test]
fn test_unmatched_ingredient_lands_in_other() {
    let recipes = lookup(vec![
        Recipe::new("A", "Bowl").with_ingredients(vec![Ingredient::new("Quinoa", "200g")]),
    ]);
    let plan = plan_with(&[(Day::Thursday, MealType::Lunch, "A")]);

    let list = build_shopping_list(&plan, &recipes);

    assert_eq!(list.entries(ShoppingCategory::Other).len(), 1);
    assert_eq!(list.entries(ShoppingCategory::Other)[0].name, "Quinoa");
}

#[test]
fn test_sections_in_fixed_order_with_entries_in_encounter_order() {
    let recipes = lookup(vec![
        Recipe::new("A", "Curry").with_ingredients(vec![
            Ingredient::new("Chicken", "500g"),
            Ingredient::new("Curry Powder", "2 tbsp"),
            Ingredient::new("Onion", "1"),
            Ingredient::new("Rice", "300g"),
        ]),
        Recipe::new("B", "Fish pie").with_ingredients(vec![
            Ingredient::new("Salmon", "2 fillets"),
            Ingredient::new("Butter", "50g"),
            Ingredient::new("Potatoes", "1kg"),
            Ingredient::new("Parsley", ""),
        ]),
    ]);
    let plan = plan_with(&[
        (Day::Monday, MealType::Dinner, "A"),
        (Day::Wednesday, MealType::Dinner, "B"),
    ]);

    let list = build_shopping_list(&plan, &recipes);

    let categories: Vec<ShoppingCategory> = list.sections.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            ShoppingCategory::Produce,
            ShoppingCategory::MeatAndSeafood,
            ShoppingCategory::Dairy,
            ShoppingCategory::Pantry,
            ShoppingCategory::SpicesAndHerbs,
            ShoppingCategory::Other,
        ]
    );

    let names = |category| -> Vec<String> {
        list.entries(category)
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    };
    assert_eq!(names(ShoppingCategory::Produce), vec!["Onion", "Potatoes"]);
    assert_eq!(names(ShoppingCategory::MeatAndSeafood), vec!["Chicken", "Salmon"]);
    assert_eq!(names(ShoppingCategory::Dairy), vec!["Butter"]);
    assert_eq!(names(ShoppingCategory::Pantry), vec!["Rice"]);
    assert_eq!(
        names(ShoppingCategory::SpicesAndHerbs),
        vec!["Curry Powder", "Parsley"]
    );
    assert!(list.entries(ShoppingCategory::SpicesAndHerbs)[1].measures.is_empty());
    assert_eq!(list.non_empty_sections().count(), 5);
}
