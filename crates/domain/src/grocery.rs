use std::{collections::BTreeMap, fmt};

use derive_more::Deref;

use crate::{MealPlan, PlannedMeal};

/// Ingredient occurrences across a meal plan, keyed by lower-cased name.
///
/// Spelling variants of the same ingredient are counted separately.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct GroceryList(BTreeMap<String, u32>);

impl GroceryList {
    pub fn from_meals<'a>(meals: impl IntoIterator<Item = &'a PlannedMeal>) -> Self {
        let mut items = BTreeMap::new();

        for ingredient in meals.into_iter().flat_map(|m| &m.ingredients) {
            *items.entry(ingredient.to_lowercase()).or_insert(0) += 1;
        }

        Self(items)
    }
}

impl From<&MealPlan> for GroceryList {
    fn from(plan: &MealPlan) -> Self {
        Self::from_meals(plan.meals())
    }
}

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (ingredient, count) in &self.0 {
            if *count > 1 {
                writeln!(f, "{ingredient} {count}x")?;
            } else {
                writeln!(f, "{ingredient}")?;
            }
        }
        Ok(())
    }
}
