use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use recipebook_recipe::{
    CategoryCount, RecipeDetail, RecipeSummary, SearchInput, SearchResult,
};
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

use crate::{auth::MaybeUser, error::AppError, routes::AppState};

const RELATED: u64 = 3;

/// Raw query string of the recipe listing. Every value arrives as text so
/// blank fields can be treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub max_cooking_time: Option<String>,
    pub min_servings: Option<String>,
    pub max_servings: Option<String>,
    pub show_all: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_field<T: FromStr>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
) -> Option<T> {
    let value = present(value)?;

    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(
                field,
                ValidationError::new("invalid").with_message("Invalid value".into()),
            );
            None
        }
    }
}

impl ListParams {
    pub fn show_all(&self) -> bool {
        matches!(
            self.show_all.as_deref().map(str::trim),
            Some("1" | "true" | "on" | "yes")
        )
    }

    pub fn into_input(self) -> Result<SearchInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let input = SearchInput {
            name: present(self.name),
            ingredients: present(self.ingredients),
            category: parse_field(&mut errors, "category", self.category),
            difficulty: parse_field(&mut errors, "difficulty", self.difficulty),
            max_cooking_time: parse_field(&mut errors, "max_cooking_time", self.max_cooking_time),
            min_servings: parse_field(&mut errors, "min_servings", self.min_servings),
            max_servings: parse_field(&mut errors, "max_servings", self.max_servings),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(input)
    }
}

#[derive(Serialize)]
pub struct ListPage {
    #[serde(flatten)]
    pub result: SearchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryCount>>,
}

pub async fn index(
    State(app): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListPage>, AppError> {
    let show_all = params.show_all();
    let input = params.into_input()?;
    let result = app.recipe_query.browse(show_all, input).await?;

    let categories = if result.show_all {
        Some(app.recipe_query.category_counts().await?)
    } else {
        None
    };

    Ok(Json(ListPage { result, categories }))
}

#[derive(Serialize)]
pub struct DetailPage {
    pub recipe: RecipeDetail,
    pub related: Vec<RecipeSummary>,
    pub is_favorite: bool,
}

pub async fn detail(
    State(app): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> Result<Json<DetailPage>, AppError> {
    let Some(recipe) = app.recipe_query.find(&id).await? else {
        return Err(AppError::NotFound);
    };

    let related = app
        .recipe_query
        .related(&recipe.id, recipe.category, RELATED)
        .await?;

    let is_favorite = match user {
        Some(user) => app.favorite_command.is_favorite(&user.id, &recipe.id).await?,
        None => false,
    };

    Ok(Json(DetailPage {
        recipe,
        related,
        is_favorite,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_recipe::{Category, Difficulty};

    #[test]
    fn test_blank_params_are_absent() {
        let params = ListParams {
            name: Some("  ".to_owned()),
            category: Some(String::new()),
            max_servings: Some(" ".to_owned()),
            ..Default::default()
        };

        let input = params.into_input().unwrap();
        assert!(!input.has_criteria());
    }

    #[test]
    fn test_params_parsed() {
        let params = ListParams {
            category: Some("dinner".to_owned()),
            difficulty: Some("Easy".to_owned()),
            max_cooking_time: Some("30".to_owned()),
            show_all: Some("true".to_owned()),
            ..Default::default()
        };

        assert!(params.show_all());

        let input = params.into_input().unwrap();
        assert_eq!(input.category, Some(Category::Dinner));
        assert_eq!(input.difficulty, Some(Difficulty::Easy));
        assert_eq!(input.max_cooking_time, Some(30));
    }

    #[test]
    fn test_unparsable_params() {
        let params = ListParams {
            category: Some("brunch".to_owned()),
            min_servings: Some("two".to_owned()),
            ..Default::default()
        };

        let errors = params.into_input().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("min_servings"));
    }
}
