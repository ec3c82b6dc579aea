use serde::{Deserialize, Serialize};

use crate::error::PlatefulError;
use crate::{ingredients, scaling};

/// Serving count applied to every recipe at load time; the upstream API
/// does not report one.
pub const DEFAULT_SERVINGS: u32 = 4;

/// A single search result, enough to render a result row and to key a like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
}

/// One ingredient line after normalization.
///
/// `count` is `None` when the source line carried no quantity. `unit` is
/// either one of the canonical unit tokens or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

impl ParsedIngredient {
    /// Canonical string form: count, unit and description joined with
    /// single spaces. Parsing the rendered form yields an equal record.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(count) = self.count {
            parts.push(count.to_string());
        }
        if !self.unit.is_empty() {
            parts.push(self.unit.clone());
        }
        if !self.ingredient.is_empty() {
            parts.push(self.ingredient.clone());
        }
        parts.join(" ")
    }
}

/// A full recipe as held by the session.
///
/// `ingredients` is empty until [`Recipe::parse_ingredients`] has run once;
/// after that it replaces `ingredient_lines` as the source of truth for
/// display and scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    /// Raw ingredient lines as delivered by the API
    pub ingredient_lines: Vec<String>,
    /// Parsed ingredients, populated by `parse_ingredients`
    pub ingredients: Vec<ParsedIngredient>,
    /// Current serving count, always >= 1
    pub servings: u32,
    /// Estimated cook time in minutes, derived from the ingredient count
    pub cook_time: u32,
}

impl Recipe {
    /// Normalize the raw ingredient lines and derive serving count and
    /// cook-time estimate.
    pub fn parse_ingredients(&mut self) {
        self.ingredients = ingredients::parse_lines(&self.ingredient_lines);
        self.cook_time = scaling::estimate_cook_time(self.ingredients.len());
        self.servings = DEFAULT_SERVINGS;
    }

    /// Rescale every quantified ingredient to a new serving count.
    ///
    /// Counts are overwritten relative to the current servings, so scaling
    /// up and back down restores the original values up to float rounding.
    pub fn update_servings(&mut self, new_servings: u32) -> Result<(), PlatefulError> {
        scaling::rescale(&mut self.ingredients, self.servings, new_servings)?;
        self.servings = new_servings;
        Ok(())
    }
}

/// A purchasable item on the shopping list. Owned by the list; there is no
/// back-reference to the recipe it was copied from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Process-generated, unique for the life of the list, never reused
    pub id: u64,
    /// `None` when the source ingredient carried no quantity
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// A bookmarked recipe, persisted durably keyed by recipe id.
///
/// The durable representation uses the field names `author` and `img`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "author")]
    pub publisher: String,
    #[serde(rename = "img")]
    pub image_url: String,
}

/// Render a count for display: a mixed ASCII fraction when a small exact
/// denominator exists ("1 1/2"), otherwise the plain decimal.
pub fn format_count(count: f64) -> String {
    if !count.is_finite() || count <= 0.0 {
        return count.to_string();
    }
    let whole = count.trunc();
    let frac = count - whole;
    if frac < 1e-9 {
        return format!("{}", whole as u64);
    }
    for denom in 2u64..=8 {
        let numer = (frac * denom as f64).round();
        if numer >= 1.0 && numer < denom as f64 && (numer / denom as f64 - frac).abs() < 1e-9 {
            return if whole >= 1.0 {
                format!("{} {}/{}", whole as u64, numer as u64, denom)
            } else {
                format!("{}/{}", numer as u64, denom)
            };
        }
    }
    count.to_string()
}
