use crate::{RecipeSummary, query::search_key};

/// Orders results so an exact name match (case-insensitive) comes first,
/// then by ascending total time. Ties keep their incoming order.
pub fn rank(recipes: &mut [RecipeSummary], name: Option<&str>) {
    let Some(name) = name.map(search_key).filter(|n| !n.is_empty()) else {
        recipes.sort_by_key(|r| r.total_time);
        return;
    };

    recipes.sort_by_cached_key(|r| (search_key(&r.name) != name, r.total_time));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Difficulty};

    fn summary(id: &str, name: &str, total_time: u32) -> RecipeSummary {
        RecipeSummary {
            id: id.to_owned(),
            name: name.to_owned(),
            category: Category::Dinner,
            category_label: Category::Dinner.label(),
            difficulty: Difficulty::Medium,
            prep_time: total_time,
            cooking_time: 0,
            total_time,
            servings: 2,
            ingredient_count: 3,
            description: String::new(),
            image: None,
        }
    }

    fn ids(recipes: &[RecipeSummary]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_exact_name_first() {
        let mut recipes = vec![
            summary("1", "Pancakes with Syrup", 10),
            summary("2", "pancakes", 40),
            summary("3", "Banana Pancakes", 5),
        ];

        rank(&mut recipes, Some("Pancakes"));

        assert_eq!(ids(&recipes), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_total_time_without_name() {
        let mut recipes = vec![
            summary("1", "Stew", 90),
            summary("2", "Toast", 5),
            summary("3", "Omelette", 15),
        ];

        rank(&mut recipes, None);

        assert_eq!(ids(&recipes), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_ties_keep_order() {
        let mut recipes = vec![
            summary("b", "Soup", 30),
            summary("a", "Salad", 30),
            summary("c", "Soup", 30),
        ];

        rank(&mut recipes, Some("soup"));

        assert_eq!(ids(&recipes), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_exact_name_ignores_accented_case() {
        let mut recipes = vec![
            summary("1", "Crème Brûlée Tart", 20),
            summary("2", "Crème Brûlée", 45),
        ];

        rank(&mut recipes, Some("CRÈME BRÛLÉE"));

        assert_eq!(ids(&recipes), vec!["2", "1"]);
    }

    #[test]
    fn test_blank_name_ranks_by_time() {
        let mut recipes = vec![summary("1", "Stew", 90), summary("2", "Toast", 5)];

        rank(&mut recipes, Some("   "));

        assert_eq!(ids(&recipes), vec!["2", "1"]);
    }
}
