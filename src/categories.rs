use axum::{Json, http::StatusCode};

use crate::constants::MAX_CATEGORY_NAME_LENGTH;
use crate::error::{Result, StoreError};
use crate::models::CategoryInfo;

/// Icon used for any category outside the known set.
pub const OTHER_ICON: &str = "💰";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Rent,
    Health,
    Utilities,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Rent,
        Category::Health,
        Category::Utilities,
        Category::Entertainment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Rent => "Rent",
            Category::Health => "Health",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Travel => "✈️",
            Category::Shopping => "🛍️",
            Category::Rent => "🏠",
            Category::Health => "💊",
            Category::Utilities => "💡",
            Category::Entertainment => "🎬",
        }
    }

    /// Exact, case-sensitive match against the known names.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

pub fn icon_for(category: &str) -> &'static str {
    Category::from_name(category).map_or(OTHER_ICON, Category::icon)
}

/// Display label used in summaries, e.g. "🍔 Food".
pub fn label_for(category: &str) -> String {
    format!("{} {}", icon_for(category), category)
}

pub fn validate_category_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::InvalidInput(
            "Category cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_CATEGORY_NAME_LENGTH {
        return Err(StoreError::InvalidInput(format!(
            "Category must be less than {} characters",
            MAX_CATEGORY_NAME_LENGTH
        )));
    }
    Ok(())
}

pub async fn list_categories() -> (StatusCode, Json<Vec<CategoryInfo>>) {
    let categories = Category::ALL
        .into_iter()
        .map(|c| CategoryInfo {
            name: c.name().to_string(),
            icon: c.icon().to_string(),
        })
        .collect();

    (StatusCode::OK, Json(categories))
}
