use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Entree,
    Salad,
    Soup,
    Dessert,
    Snack,
    Drink,
    #[default]
    Other,
}

impl Category {
    /// Human readable name shown next to a recipe.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Entree => "Entree",
            Category::Salad => "Salad",
            Category::Soup => "Soup",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
            Category::Drink => "Drink",
            Category::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_category_string_forms() {
        assert_eq!(Category::Breakfast.to_string(), "breakfast");
        assert_eq!(Category::from_str("dessert").unwrap(), Category::Dessert);
        assert_eq!(Category::Entree.label(), "Entree");
        assert!(Category::from_str("Brunch").is_err());
    }

    #[test]
    fn test_every_category_round_trips_through_its_key() {
        for category in Category::VARIANTS {
            assert_eq!(
                Category::from_str(category.as_ref()).unwrap(),
                *category,
                "{category:?}"
            );
        }
    }
}
