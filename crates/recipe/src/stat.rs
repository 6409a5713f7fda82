use std::collections::HashMap;

use serde::Serialize;

use crate::Category;

const TOP_INGREDIENTS: usize = 10;
const COOKING_TIME_BUCKETS: [(&str, u32); 4] = [
    ("0-15 min", 15),
    ("16-30 min", 30),
    ("31-60 min", 60),
    ("60+ min", u32::MAX),
];

/// What the statistics need to know about one favorited recipe.
#[derive(Debug, Clone)]
pub struct FavoriteRecipe {
    pub category: Category,
    pub total_time: u32,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub count: u32,
}

/// Chart series for a user's favorites.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteStats {
    pub top_ingredients: Vec<StatEntry>,
    pub categories: Vec<StatEntry>,
    pub cooking_time: Vec<StatEntry>,
}

impl FavoriteStats {
    /// Returns `None` when there is nothing to chart.
    pub fn from_recipes(recipes: &[FavoriteRecipe]) -> Option<Self> {
        if recipes.is_empty() {
            return None;
        }

        let mut ingredients: HashMap<&str, u32> = HashMap::new();
        let mut categories: HashMap<&'static str, u32> = HashMap::new();
        let mut cooking_time = [0u32; COOKING_TIME_BUCKETS.len()];

        for recipe in recipes {
            for name in &recipe.ingredients {
                *ingredients.entry(name.as_str()).or_default() += 1;
            }

            *categories.entry(recipe.category.label()).or_default() += 1;

            let bucket = COOKING_TIME_BUCKETS
                .iter()
                .position(|(_, max)| recipe.total_time <= *max)
                .unwrap_or(COOKING_TIME_BUCKETS.len() - 1);

            cooking_time[bucket] += 1;
        }

        let mut top_ingredients = into_entries(ingredients);
        top_ingredients.truncate(TOP_INGREDIENTS);

        Some(Self {
            top_ingredients,
            categories: into_entries(categories),
            cooking_time: COOKING_TIME_BUCKETS
                .iter()
                .zip(cooking_time)
                .map(|((label, _), count)| StatEntry {
                    label: label.to_string(),
                    count,
                })
                .collect(),
        })
    }
}

fn into_entries(counts: HashMap<&str, u32>) -> Vec<StatEntry> {
    let mut entries = counts
        .into_iter()
        .map(|(label, count)| StatEntry {
            label: label.to_owned(),
            count,
        })
        .collect::<Vec<_>>();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}
