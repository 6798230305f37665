use mealkit::Kitchen;
use mealkit_db::{JsonPlanStore, MemoryStore};
use mealkit_recipe::{InMemoryCatalog, RawMeal};

pub type TestKitchen = Kitchen<InMemoryCatalog, JsonPlanStore<MemoryStore>>;

pub fn meal(id: &str, name: &str, category: &str, area: &str, ingredients: &[(&str, &str)]) -> RawMeal {
    let mut meal = RawMeal::new()
        .with("idMeal", id)
        .with("strMeal", name)
        .with("strCategory", category)
        .with("strArea", area)
        .with("strInstructions", "Cook it.");

    for (index, (ingredient, measure)) in ingredients.iter().enumerate() {
        meal = meal
            .with(&format!("strIngredient{}", index + 1), *ingredient)
            .with(&format!("strMeasure{}", index + 1), *measure);
    }

    meal
}

pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        meal(
            "52772",
            "Teriyaki Chicken Casserole",
            "Chicken",
            "Japanese",
            &[("soy sauce", "3/4 cup"), ("Chicken Breasts", "2"), ("Rice", "1 cup")],
        ),
        meal(
            "52795",
            "Chicken Handi",
            "Chicken",
            "Indian",
            &[("Chicken", "1.2 kg"), ("Onion", "5 thinly sliced"), ("Tomatoes", "2")],
        ),
        meal(
            "52802",
            "Fish pie",
            "Seafood",
            "British",
            &[("Potatoes", "900g"), ("Milk", "600ml"), ("Parsley", "")],
        ),
        meal(
            "52771",
            "Spicy Arrabiata Penne",
            "Vegetarian",
            "Italian",
            &[("penne rigate", "1 pound"), ("olive oil", "1/4 cup"), ("chopped tomatoes", "1 tin")],
        ),
    ])
}

pub fn kitchen() -> TestKitchen {
    Kitchen::open(catalog(), JsonPlanStore::new(MemoryStore::new()))
}

/// Reopens a kitchen on the store left behind by `kitchen`.
pub fn reopen(kitchen: TestKitchen) -> TestKitchen {
    Kitchen::open(catalog(), kitchen.into_store())
}
