use mealkit_db::{
    FAVORITES_KEY, JsonFileStore, JsonPlanStore, KeyValueStore, MEAL_PLAN_KEY, MemoryStore,
    PREFERENCES_KEY, PlanStore,
};
use mealkit_shared::mealplan::{Day, MealType, WeeklyPlan};
use mealkit_shared::user::{FavoriteSet, Preferences};
use temp_dir::TempDir;

#[test]
fn test_empty_storage_yields_full_empty_plan() {
    let store = JsonPlanStore::new(MemoryStore::new());

    let plan = store.get_plan();

    assert_eq!(plan, WeeklyPlan::empty());
    assert_eq!(plan.cells().count(), 21);
    assert!(plan.cells().all(|(_, _, id)| id.is_none()));
}

#[test]
fn test_malformed_plan_falls_back_to_empty() {
    let kv = MemoryStore::new();
    kv.set(MEAL_PLAN_KEY, "{not json").unwrap();
    let store = JsonPlanStore::new(kv);

    assert_eq!(store.get_plan(), WeeklyPlan::empty());
}

#[test]
fn test_malformed_favorites_fall_back_to_empty() {
    let kv = MemoryStore::new();
    kv.set(FAVORITES_KEY, r#"{"oops":true}"#).unwrap();
    kv.set(PREFERENCES_KEY, "null").unwrap();
    let store = JsonPlanStore::new(kv);

    assert!(store.get_favorites().is_empty());
    assert_eq!(store.get_preferences(), Preferences::default());
}

#[test]
fn test_plan_written_with_every_cell() {
    let store = JsonPlanStore::new(MemoryStore::new());
    let mut plan = WeeklyPlan::empty();
    plan.set(Day::Wednesday, MealType::Dinner, Some("52772".to_owned()));

    store.save_plan(&plan);

    let raw = store.inner().get(MEAL_PLAN_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["wednesday"]["dinner"], "52772");
    assert!(value["sunday"]["breakfast"].is_null());
    assert_eq!(value.as_object().unwrap().len(), 7);
}

#[test]
fn test_file_backed_state_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = JsonPlanStore::new(JsonFileStore::open(dir.path()).unwrap());
        let mut plan = store.get_plan();
        plan.set(Day::Monday, MealType::Breakfast, Some("1".to_owned()));
        store.save_plan(&plan);

        let mut favorites = FavoriteSet::new();
        favorites.toggle("1");
        favorites.toggle("2");
        store.save_favorites(&favorites);

        store.save_preferences(&Preferences {
            last_category: "Seafood".to_owned(),
            last_area: "British".to_owned(),
        });
    }

    let store = JsonPlanStore::new(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(store.get_plan().get(Day::Monday, MealType::Breakfast), Some("1"));
    assert_eq!(store.get_favorites().ids(), ["1".to_owned(), "2".to_owned()]);
    assert_eq!(store.get_preferences().last_area, "British");
}
