use recipebook_db::table::{Ingredient, Recipe, RecipeIngredient};
use sea_query::{Alias, Cond, Expr, ExprTrait, JoinType, LikeExpr, Order, SelectStatement};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Category, Difficulty, RecipeSummary};

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct SearchInput {
    #[validate(length(max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub ingredients: Option<String>,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    #[validate(range(min = 1, max = 480))]
    pub max_cooking_time: Option<u32>,
    #[validate(range(min = 1, max = 20))]
    pub min_servings: Option<u32>,
    #[validate(range(min = 1, max = 20))]
    pub max_servings: Option<u32>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchResult {
    pub search_performed: bool,
    pub show_all: bool,
    pub count: usize,
    pub recipes: Vec<RecipeSummary>,
}

impl SearchInput {
    pub fn name_term(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// Comma separated pieces, trimmed, blanks dropped.
    pub fn ingredient_terms(&self) -> Vec<&str> {
        self.ingredients
            .as_deref()
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_criteria(&self) -> bool {
        self.name_term().is_some()
            || !self.ingredient_terms().is_empty()
            || self.category.is_some()
            || self.difficulty.is_some()
            || self.max_cooking_time.is_some()
            || self.min_servings.is_some()
            || self.max_servings.is_some()
    }

    /// Field rules plus the servings range check.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let (Some(min), Some(max)) = (self.min_servings, self.max_servings) {
            if min > max {
                errors.add(
                    "min_servings",
                    ValidationError::new("servings_range").with_message(
                        "Minimum servings cannot be greater than maximum servings.".into(),
                    ),
                );
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        Err(errors)
    }

    /// Store query for every criterion except difficulty, which depends on
    /// the derived ingredient count and is applied afterwards.
    pub(crate) fn statement(&self) -> SelectStatement {
        let mut statement = super::summary_statement();

        if let Some(name) = self.name_term() {
            statement
                .and_where(Expr::col((Recipe::Table, Recipe::SearchName)).like(contains(name)));
        }

        let terms = self.ingredient_terms();
        if !terms.is_empty() {
            let ri = Alias::new("ri");
            let i = Alias::new("i");
            let any = terms.into_iter().fold(Cond::any(), |cond, term| {
                cond.add(Expr::col((i.clone(), Ingredient::SearchName)).like(contains(term)))
            });

            let exists = sea_query::Query::select()
                .expr(Expr::val(1))
                .from_as(RecipeIngredient::Table, ri.clone())
                .join_as(
                    JoinType::InnerJoin,
                    Ingredient::Table,
                    i.clone(),
                    Expr::col((i.clone(), Ingredient::Id))
                        .equals((ri.clone(), RecipeIngredient::IngredientId)),
                )
                .cond_where(
                    Cond::all()
                        .add(
                            Expr::col((ri.clone(), RecipeIngredient::RecipeId))
                                .equals((Recipe::Table, Recipe::Id)),
                        )
                        .add(any),
                )
                .to_owned();

            statement.and_where(Expr::exists(exists));
        }

        if let Some(category) = self.category {
            statement
                .and_where(Expr::col((Recipe::Table, Recipe::Category)).eq(category.to_string()));
        }

        if let Some(max) = self.max_cooking_time {
            statement
                .and_where(Expr::col((Recipe::Table, Recipe::PrepTime)).lte(max))
                .and_where(Expr::col((Recipe::Table, Recipe::CookingTime)).lte(max));
        }

        if let Some(min) = self.min_servings {
            statement.and_where(Expr::col((Recipe::Table, Recipe::Servings)).gte(min));
        }

        if let Some(max) = self.max_servings {
            statement.and_where(Expr::col((Recipe::Table, Recipe::Servings)).lte(max));
        }

        statement
            .order_by((Recipe::Table, Recipe::Name), Order::Asc)
            .order_by((Recipe::Table, Recipe::Id), Order::Asc);

        statement
    }
}

/// Substring pattern over a `search_name` column.
fn contains(term: &str) -> LikeExpr {
    let escaped = super::search_key(term)
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

impl super::Query {
    /// Entry point of the recipe listing: `show_all` wins over criteria.
    pub async fn browse(
        &self,
        show_all: bool,
        input: SearchInput,
    ) -> recipebook_shared::Result<SearchResult> {
        if show_all {
            return Ok(self.list_all().await?);
        }

        self.search(input).await
    }

    pub async fn search(&self, input: SearchInput) -> recipebook_shared::Result<SearchResult> {
        input.check()?;

        if !input.has_criteria() {
            return Ok(SearchResult::default());
        }

        let mut recipes = super::fetch_summaries(&self.read_db, &input.statement()).await?;

        if let Some(difficulty) = input.difficulty {
            recipes.retain(|r| r.difficulty == difficulty);
        }

        crate::rank(&mut recipes, input.name_term());

        Ok(SearchResult {
            search_performed: true,
            show_all: false,
            count: recipes.len(),
            recipes,
        })
    }

    /// Every recipe ordered by name.
    pub async fn list_all(&self) -> anyhow::Result<SearchResult> {
        let statement = super::summary_statement()
            .order_by((Recipe::Table, Recipe::Name), Order::Asc)
            .order_by((Recipe::Table, Recipe::Id), Order::Asc)
            .to_owned();

        let recipes = super::fetch_summaries(&self.read_db, &statement).await?;

        Ok(SearchResult {
            search_performed: true,
            show_all: true,
            count: recipes.len(),
            recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::SqliteQueryBuilder;

    #[test]
    fn test_has_criteria() {
        assert!(!SearchInput::default().has_criteria());

        let input = SearchInput {
            name: Some("   ".to_owned()),
            ingredients: Some(" , ,".to_owned()),
            ..Default::default()
        };
        assert!(!input.has_criteria());

        let input = SearchInput {
            min_servings: Some(2),
            ..Default::default()
        };
        assert!(input.has_criteria());
    }

    #[test]
    fn test_ingredient_terms() {
        let input = SearchInput {
            ingredients: Some(" tomato,, garlic ,".to_owned()),
            ..Default::default()
        };

        assert_eq!(input.ingredient_terms(), vec!["tomato", "garlic"]);
    }

    #[test]
    fn test_servings_range() {
        let input = SearchInput {
            min_servings: Some(6),
            max_servings: Some(2),
            ..Default::default()
        };

        let errors = input.check().unwrap_err();
        assert!(errors.field_errors().contains_key("min_servings"));

        let input = SearchInput {
            min_servings: Some(2),
            max_servings: Some(2),
            ..Default::default()
        };
        assert!(input.check().is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let input = SearchInput {
            max_cooking_time: Some(481),
            max_servings: Some(0),
            ..Default::default()
        };

        let errors = input.check().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("max_cooking_time"));
        assert!(fields.contains_key("max_servings"));
    }

    #[test]
    fn test_statement_shape() {
        let input = SearchInput {
            name: Some("pasta".to_owned()),
            ingredients: Some("tomato, garlic".to_owned()),
            category: Some(Category::Dinner),
            max_cooking_time: Some(30),
            ..Default::default()
        };

        let sql = input.statement().to_string(SqliteQueryBuilder);

        assert!(sql.contains("EXISTS"));
        assert!(sql.contains("GROUP BY \"recipe\".\"id\""));
        assert!(sql.contains("\"recipe\".\"search_name\" LIKE '%pasta%'"));
        assert!(sql.contains("\"i\".\"search_name\" LIKE '%tomato%'"));
        assert!(sql.contains("'%tomato%'"));
        assert!(sql.contains("'%garlic%'"));
        assert!(sql.contains("'dinner'"));
    }

    #[test]
    fn test_like_wildcards_escaped() {
        let input = SearchInput {
            name: Some("100%_".to_owned()),
            ..Default::default()
        };

        let sql = input.statement().to_string(SqliteQueryBuilder);
        assert!(sql.contains("ESCAPE"));
    }

    #[test]
    fn test_terms_lowercased() {
        let input = SearchInput {
            name: Some("CRÈME".to_owned()),
            ingredients: Some("ÉPINARD".to_owned()),
            ..Default::default()
        };

        let sql = input.statement().to_string(SqliteQueryBuilder);
        assert!(sql.contains("'%crème%'"));
        assert!(sql.contains("'%épinard%'"));
        assert!(!sql.contains("CRÈME"));
    }
}
