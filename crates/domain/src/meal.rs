use std::{
    collections::HashSet,
    fmt,
    iter::{Sum, successors},
    ops::{Add, AddAssign},
    str::FromStr,
};

use chrono::Weekday;
use log::{debug, warn};

use crate::{
    Avoid, Catalog, Diet, GroceryList, MealsPerDay, NutritionError, NutritionInput,
    NutritionTargets, Profile, calculate_targets, catalog, nutrition::round_half_up,
};

/// Lowest calorie target of a single meal slot.
pub const MIN_SLOT_CALORIES: u32 = 200;

const DAYS_PER_WEEK: usize = 7;

/// Catalog positions of the meals making up the sample day.
const SAMPLE_MEALS: [usize; 3] = [0, 2, 5];

pub trait MealPlanService {
    fn nutrition_targets(&self, profile: &Profile) -> Result<NutritionTargets, NutritionError>;
    fn generate_meal_plan(&self, profile: &Profile) -> Result<MealPlan, MealPlanError>;
    fn grocery_list(&self, plan: &MealPlan) -> GroceryList;
    fn sample_meal_plan(&self) -> MealPlan;
}

/// Meal days, with the nutrition targets they were assembled for.
///
/// Sample plans are not computed for a profile and carry no targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    pub targets: Option<NutritionTargets>,
    pub days: Vec<MealDay>,
}

impl MealPlan {
    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.days.iter().flat_map(|d| &d.meals)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDay {
    pub name: DayName,
    pub meals: Vec<PlannedMeal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayName {
    Weekday(Weekday),
    Sample,
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DayName::Weekday(weekday) => write!(f, "{weekday}"),
            DayName::Sample => write!(f, "Sample Day"),
        }
    }
}

impl FromStr for DayName {
    type Err = chrono::ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sample Day" => Ok(DayName::Sample),
            _ => s.parse().map(DayName::Weekday),
        }
    }
}

impl MealDay {
    #[must_use]
    pub fn totals(&self) -> Macros {
        self.meals.iter().map(|m| m.macros).sum()
    }

    #[must_use]
    pub fn calorie_balance(&self, target: u32) -> CalorieBalance {
        CalorieBalance::new(self.totals().calories, target)
    }
}

/// A catalog meal copied into a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMeal {
    pub name: String,
    pub diets: Vec<Diet>,
    pub macros: Macros,
    pub ingredients: Vec<String>,
    pub recipe: Vec<String>,
}

impl From<&catalog::Meal> for PlannedMeal {
    fn from(meal: &catalog::Meal) -> Self {
        Self {
            name: meal.name.to_string(),
            diets: meal.diets.to_vec(),
            macros: Macros {
                calories: meal.calories,
                protein: meal.protein,
                carbs: meal.carbs,
                fat: meal.fat,
            },
            ingredients: meal.ingredients.iter().map(ToString::to_string).collect(),
            recipe: meal.recipe.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Energy in kcal and macronutrients in grams.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Macros {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Add for Macros {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieBalance {
    Match,
    Surplus(u32),
    Deficit(u32),
}

impl CalorieBalance {
    #[must_use]
    pub fn new(calories: u32, target: u32) -> Self {
        match calories.cmp(&target) {
            std::cmp::Ordering::Equal => CalorieBalance::Match,
            std::cmp::Ordering::Greater => CalorieBalance::Surplus(calories - target),
            std::cmp::Ordering::Less => CalorieBalance::Deficit(target - calories),
        }
    }
}

impl fmt::Display for CalorieBalance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalorieBalance::Match => write!(f, "Matches target"),
            CalorieBalance::Surplus(kcal) => write!(f, "Surplus {kcal} kcal"),
            CalorieBalance::Deficit(kcal) => write!(f, "Deficit {kcal} kcal"),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MealPlanError {
    #[error("No meals match the dietary constraints")]
    NoMatchingMeals,
    #[error("Age is required when body fat is unknown")]
    MissingAge,
}

impl From<NutritionError> for MealPlanError {
    fn from(value: NutritionError) -> Self {
        match value {
            NutritionError::MissingAge => MealPlanError::MissingAge,
        }
    }
}

/// Meals compatible with `diet` that contain none of the avoided ingredients.
///
/// Meals tagged omnivore are always compatible.
pub fn candidate_pool<'a>(
    meals: &'a [catalog::Meal],
    diet: Diet,
    avoid: &Avoid,
) -> Vec<&'a catalog::Meal> {
    meals
        .iter()
        .filter(|m| m.diets.contains(&diet) || m.diets.contains(&Diet::Omnivore))
        .filter(|m| !avoid.matches(&m.ingredients.join(" ")))
        .collect()
}

#[must_use]
pub fn slot_calorie_target(calories: u32, meals_per_day: MealsPerDay) -> u32 {
    round_half_up(f64::from(calories) / f64::from(*meals_per_day)).max(MIN_SLOT_CALORIES)
}

/// Fill a week of meal slots from the candidate pool.
///
/// Each slot takes the meal closest to the slot calorie target among the
/// meals not yet used in this plan. Once every candidate has been used, the
/// used set is cleared and the whole pool is available again. Ties go to
/// the meal that comes first in the catalog.
pub fn assemble_meal_plan(
    meals: &[catalog::Meal],
    diet: Diet,
    avoid: &Avoid,
    meals_per_day: MealsPerDay,
    targets: NutritionTargets,
) -> Result<MealPlan, MealPlanError> {
    let pool = candidate_pool(meals, diet, avoid);

    if pool.is_empty() {
        warn!("no meals match diet {diet} avoiding {:?}", avoid.as_slice());
        return Err(MealPlanError::NoMatchingMeals);
    }

    let slot_target = slot_calorie_target(targets.calories, meals_per_day);
    let mut used = HashSet::new();

    debug!(
        "assembling meal plan from {} candidates with {slot_target} kcal per slot",
        pool.len()
    );

    let days = successors(Some(Weekday::Mon), |d| Some(d.succ()))
        .take(DAYS_PER_WEEK)
        .map(|weekday| {
            let meals = (0..*meals_per_day)
                .filter_map(|_| {
                    let meal = closest_meal(
                        pool.iter().copied().filter(|m| !used.contains(m.name)),
                        slot_target,
                    )
                    .or_else(|| {
                        used.clear();
                        closest_meal(pool.iter().copied(), slot_target)
                    })?;
                    used.insert(meal.name);
                    Some(PlannedMeal::from(meal))
                })
                .collect();
            MealDay {
                name: DayName::Weekday(weekday),
                meals,
            }
        })
        .collect();

    Ok(MealPlan {
        targets: Some(targets),
        days,
    })
}

fn closest_meal<'a>(
    meals: impl Iterator<Item = &'a catalog::Meal>,
    calories: u32,
) -> Option<&'a catalog::Meal> {
    meals.min_by_key(|m| m.calories.abs_diff(calories))
}

/// Compute the nutrition targets of `profile` and assemble a matching week of meals.
pub fn generate_meal_plan(profile: &Profile, catalog: &Catalog) -> Result<MealPlan, MealPlanError> {
    let targets = calculate_targets(&NutritionInput::from(profile))?;
    assemble_meal_plan(
        catalog.meals,
        profile.diet,
        &profile.avoid,
        profile.meals_per_day,
        targets,
    )
}

/// A single sample day made of fixed catalog meals.
#[must_use]
pub fn sample_meal_plan(catalog: &Catalog) -> MealPlan {
    MealPlan {
        targets: None,
        days: vec![MealDay {
            name: DayName::Sample,
            meals: SAMPLE_MEALS
                .iter()
                .filter_map(|&i| catalog.meals.get(i))
                .map(PlannedMeal::from)
                .collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Age, catalog::MEALS};

    const TARGETS: NutritionTargets = NutritionTargets {
        calories: 1000,
        protein: 100,
        carbs: 100,
        fat: 30,
    };

    const TEST_MEALS: [catalog::Meal; 4] = [
        catalog::Meal {
            name: "A",
            diets: &[Diet::Omnivore],
            calories: 300,
            protein: 20,
            carbs: 30,
            fat: 10,
            ingredients: &["Rice", "chicken"],
            recipe: &[],
        },
        catalog::Meal {
            name: "B",
            diets: &[Diet::Vegetarian, Diet::Vegan],
            calories: 500,
            protein: 25,
            carbs: 60,
            fat: 15,
            ingredients: &["rice", "tofu"],
            recipe: &[],
        },
        catalog::Meal {
            name: "C",
            diets: &[Diet::Omnivore, Diet::Pescatarian],
            calories: 700,
            protein: 40,
            carbs: 70,
            fat: 25,
            ingredients: &["salmon", "potato"],
            recipe: &[],
        },
        catalog::Meal {
            name: "D",
            diets: &[Diet::Vegetarian],
            calories: 450,
            protein: 30,
            carbs: 40,
            fat: 20,
            ingredients: &["eggs", "cheese"],
            recipe: &[],
        },
    ];

    fn names(plan: &MealPlan) -> Vec<Vec<&str>> {
        plan.days
            .iter()
            .map(|d| d.meals.iter().map(|m| m.name.as_str()).collect())
            .collect()
    }

    #[rstest]
    #[case(Diet::Omnivore, "", vec!["A", "C"])]
    #[case(Diet::Vegan, "", vec!["A", "B", "C"])]
    #[case(Diet::Vegetarian, "", vec!["A", "B", "C", "D"])]
    #[case(Diet::Vegetarian, "RICE", vec!["C", "D"])]
    #[case(Diet::Pescatarian, "salmon, chicken", vec![])]
    fn test_candidate_pool(#[case] diet: Diet, #[case] avoid: &str, #[case] expected: Vec<&str>) {
        assert_eq!(
            candidate_pool(&TEST_MEALS, diet, &Avoid::from(avoid))
                .iter()
                .map(|m| m.name)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_candidate_pool_matches_joined_ingredients() {
        assert_eq!(
            candidate_pool(&TEST_MEALS, Diet::Omnivore, &Avoid::from("rice chicken"))
                .iter()
                .map(|m| m.name)
                .collect::<Vec<_>>(),
            vec!["C"]
        );
    }

    #[rstest]
    #[case(1979, 3, 660)]
    #[case(2000, 4, 500)]
    #[case(1200, 6, 200)]
    #[case(900, 6, 200)]
    #[case(150, 1, 200)]
    #[case(0, 1, 200)]
    fn test_slot_calorie_target(#[case] calories: u32, #[case] meals: i64, #[case] expected: u32) {
        assert_eq!(
            slot_calorie_target(calories, MealsPerDay::from(meals)),
            expected
        );
    }

    #[test]
    fn test_assemble_meal_plan_reuses_after_exhaustion() {
        let plan = assemble_meal_plan(
            &TEST_MEALS,
            Diet::Vegan,
            &Avoid::default(),
            MealsPerDay::from(2),
            TARGETS,
        )
        .unwrap();

        assert_eq!(plan.targets, Some(TARGETS));
        assert_eq!(
            names(&plan),
            vec![
                vec!["B", "A"],
                vec!["C", "B"],
                vec!["A", "C"],
                vec!["B", "A"],
                vec!["C", "B"],
                vec!["A", "C"],
                vec!["B", "A"],
            ]
        );
    }

    #[test]
    fn test_assemble_meal_plan_weekdays() {
        let plan = assemble_meal_plan(
            &MEALS,
            Diet::Omnivore,
            &Avoid::default(),
            MealsPerDay::default(),
            TARGETS,
        )
        .unwrap();

        assert_eq!(
            plan.days
                .iter()
                .map(|d| d.name.to_string())
                .collect::<Vec<_>>(),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
        assert!(plan.days.iter().all(|d| d.meals.len() == 3));
    }

    #[rstest]
    fn test_assemble_meal_plan_uniqueness_until_exhausted(
        #[values(Diet::Omnivore, Diet::Vegetarian, Diet::Vegan, Diet::Pescatarian)] diet: Diet,
        #[values(1, 3, 6)] meals_per_day: i64,
        #[values(1200, 2500, 4000)] calories: u32,
    ) {
        let avoid = Avoid::default();
        let pool = candidate_pool(&MEALS, diet, &avoid);
        let plan = assemble_meal_plan(
            &MEALS,
            diet,
            &avoid,
            MealsPerDay::from(meals_per_day),
            NutritionTargets {
                calories,
                ..TARGETS
            },
        )
        .unwrap();

        let mut seen = BTreeSet::new();
        for meal in plan.meals() {
            if seen.contains(meal.name.as_str()) {
                assert_eq!(seen.len(), pool.len());
                seen.clear();
            }
            seen.insert(meal.name.as_str());
            assert!(pool.iter().any(|m| m.name == meal.name));
        }
    }

    #[test]
    fn test_assemble_meal_plan_no_matching_meals() {
        assert_eq!(
            assemble_meal_plan(
                &MEALS,
                Diet::Vegan,
                &Avoid::from("a, e, i, o, u"),
                MealsPerDay::default(),
                TARGETS,
            ),
            Err(MealPlanError::NoMatchingMeals)
        );
    }

    #[test]
    fn test_meal_day_totals() {
        let day = MealDay {
            name: DayName::Weekday(Weekday::Mon),
            meals: vec![
                PlannedMeal::from(&TEST_MEALS[0]),
                PlannedMeal::from(&TEST_MEALS[2]),
            ],
        };
        assert_eq!(
            day.totals(),
            Macros {
                calories: 1000,
                protein: 60,
                carbs: 100,
                fat: 35,
            }
        );
        assert_eq!(day.calorie_balance(1000), CalorieBalance::Match);
        assert_eq!(day.calorie_balance(800), CalorieBalance::Surplus(200));
        assert_eq!(day.calorie_balance(1250), CalorieBalance::Deficit(250));
    }

    #[rstest]
    #[case("Mon", DayName::Weekday(Weekday::Mon))]
    #[case("Sun", DayName::Weekday(Weekday::Sun))]
    #[case("Sample Day", DayName::Sample)]
    fn test_day_name(#[case] string: &str, #[case] name: DayName) {
        assert_eq!(name.to_string(), string);
        assert_eq!(string.parse::<DayName>(), Ok(name));
    }

    #[test]
    fn test_day_name_invalid() {
        assert!("Someday".parse::<DayName>().is_err());
    }

    #[test]
    fn test_sample_meal_plan() {
        let plan = sample_meal_plan(&Catalog::default());

        assert_eq!(plan.targets, None);
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].name.to_string(), "Sample Day");
        assert_eq!(
            names(&plan),
            vec![vec![MEALS[0].name, MEALS[2].name, MEALS[5].name]]
        );
    }

    #[test]
    fn test_sample_meal_plan_short_catalog() {
        let plan = sample_meal_plan(&Catalog {
            exercises: &[],
            meals: &TEST_MEALS,
        });

        assert_eq!(names(&plan), vec![vec!["A", "C"]]);
    }

    #[rstest]
    #[case(CalorieBalance::Match, "Matches target")]
    #[case(CalorieBalance::Surplus(120), "Surplus 120 kcal")]
    #[case(CalorieBalance::Deficit(45), "Deficit 45 kcal")]
    fn test_calorie_balance_display(#[case] balance: CalorieBalance, #[case] string: &str) {
        assert_eq!(balance.to_string(), string);
    }

    #[test]
    fn test_macros_add_assign() {
        let mut macros = Macros::default();
        macros += Macros {
            calories: 100,
            protein: 1,
            carbs: 2,
            fat: 3,
        };
        macros += macros;
        assert_eq!(
            macros,
            Macros {
                calories: 200,
                protein: 2,
                carbs: 4,
                fat: 6,
            }
        );
    }

    #[test]
    fn test_generate_meal_plan() {
        let profile = Profile {
            age: Some(Age::new(30).unwrap()),
            diet: Diet::Vegetarian,
            avoid: Avoid::from("tofu"),
            meals_per_day: MealsPerDay::from(4),
            ..Profile::default()
        };
        let plan = generate_meal_plan(&profile, &Catalog::default()).unwrap();

        assert_eq!(plan.targets.map(|t| t.calories), Some(1979));
        assert_eq!(plan.days.len(), 7);
        for meal in plan.meals() {
            assert!(
                meal.diets.contains(&Diet::Vegetarian) || meal.diets.contains(&Diet::Omnivore)
            );
            assert!(!meal.ingredients.iter().any(|i| i.contains("tofu")));
        }
    }

    #[test]
    fn test_generate_meal_plan_missing_age() {
        assert_eq!(
            generate_meal_plan(&Profile::default(), &Catalog::default()),
            Err(MealPlanError::MissingAge)
        );
    }
}
