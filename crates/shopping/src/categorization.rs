use mealkit_shared::shopping::ShoppingCategory;

/// Keyword table, checked top to bottom.
///
/// Order matters: "pepper" appears under both Produce and Pantry, and the
/// first section whose keywords occur in the name wins.
pub const CATEGORY_RULES: &[(ShoppingCategory, &[&str])] = &[
    (
        ShoppingCategory::Produce,
        &[
            "tomato",
            "onion",
            "garlic",
            "potato",
            "carrot",
            "lettuce",
            "spinach",
            "pepper",
            "cucumber",
            "mushroom",
            "apple",
            "banana",
            "lemon",
            "lime",
            "orange",
            "avocado",
            "broccoli",
            "cauliflower",
            "celery",
            "corn",
            "peas",
            "beans",
            "cabbage",
            "zucchini",
        ],
    ),
    (
        ShoppingCategory::MeatAndSeafood,
        &[
            "chicken", "beef", "pork", "fish", "salmon", "tuna", "shrimp", "turkey", "lamb",
            "bacon", "sausage", "ham", "duck", "prawn", "crab", "lobster",
        ],
    ),
    (
        ShoppingCategory::Dairy,
        &[
            "milk",
            "cheese",
            "butter",
            "cream",
            "yogurt",
            "egg",
            "parmesan",
            "mozzarella",
            "cheddar",
        ],
    ),
    (
        ShoppingCategory::Pantry,
        &[
            "flour", "sugar", "salt", "pepper", "oil", "rice", "pasta", "bread", "sauce", "stock",
            "vinegar", "honey", "soy",
        ],
    ),
    (
        ShoppingCategory::SpicesAndHerbs,
        &[
            "basil",
            "oregano",
            "thyme",
            "cumin",
            "paprika",
            "cinnamon",
            "ginger",
            "parsley",
            "rosemary",
            "bay",
            "chili",
            "curry",
            "turmeric",
            "coriander",
        ],
    ),
];

/// Categorization Service
///
/// Stateless domain service mapping an ingredient name to a shopping list
/// section by substring match against [`CATEGORY_RULES`].
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize an ingredient by name
    ///
    /// The name is trimmed and lower-cased before matching; names matching no
    /// keyword land in [`ShoppingCategory::Other`].
    pub fn categorize(ingredient_name: &str) -> ShoppingCategory {
        let normalized = ingredient_name.trim().to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| normalized.contains(keyword))
            })
            .map(|(category, _)| *category)
            .unwrap_or(ShoppingCategory::Other)
    }
}
