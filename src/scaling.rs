//! Serving scaler and cook-time estimate.

use crate::error::PlatefulError;
use crate::model::ParsedIngredient;

/// Rescale every quantified ingredient from `old_servings` to
/// `new_servings`. Ingredients without a count are left untouched.
///
/// Serving counts below 1 never reach this function in normal operation
/// (the session boundary enforces the minimum); a zero here is a caller
/// bug and is rejected.
pub fn rescale(
    ingredients: &mut [ParsedIngredient],
    old_servings: u32,
    new_servings: u32,
) -> Result<(), PlatefulError> {
    if new_servings == 0 {
        return Err(PlatefulError::InvalidServings(new_servings));
    }
    if old_servings == 0 {
        return Err(PlatefulError::InvalidServings(old_servings));
    }

    let factor = f64::from(new_servings) / f64::from(old_servings);
    for ingredient in ingredients.iter_mut() {
        if let Some(count) = ingredient.count {
            ingredient.count = Some(count * factor);
        }
    }
    Ok(())
}

/// Cook-time estimate in minutes: 15 minutes per started group of three
/// ingredients.
pub fn estimate_cook_time(num_ingredients: usize) -> u32 {
    (num_ingredients as u32).div_ceil(3) * 15
}
