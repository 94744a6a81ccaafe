use crate::{Diet, Equipment, MuscleGroup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub group: MuscleGroup,
    pub equipment: &'static [Equipment],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub name: &'static str,
    pub diets: &'static [Diet],
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub ingredients: &'static [&'static str],
    pub recipe: &'static [&'static str],
}

/// Read-only exercise and meal collections the engine draws from.
///
/// The built-in catalogs are used by default; tests and callers may inject
/// their own.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub exercises: &'a [Exercise],
    pub meals: &'a [Meal],
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self {
            exercises: &EXERCISES,
            meals: &MEALS,
        }
    }
}

pub static EXERCISES: [Exercise; 40] = [
    Exercise {
        name: "Push-Up",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Bench Press",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Barbell, Equipment::Dumbbells],
    },
    Exercise {
        name: "Dumbbell Shoulder Press",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Dumbbells],
    },
    Exercise {
        name: "Tricep Dip",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Pull-Up",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Bent-Over Row",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Barbell, Equipment::Dumbbells],
    },
    Exercise {
        name: "Lat Pulldown",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Bicep Curl",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Dumbbells, Equipment::Barbell],
    },
    Exercise {
        name: "Squat",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Barbell, Equipment::Dumbbells, Equipment::Bodyweight],
    },
    Exercise {
        name: "Romanian Deadlift",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Barbell, Equipment::Dumbbells],
    },
    Exercise {
        name: "Lunge",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells],
    },
    Exercise {
        name: "Leg Press",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Plank",
        group: MuscleGroup::Core,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Hanging Leg Raise",
        group: MuscleGroup::Core,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Mountain Climbers",
        group: MuscleGroup::Conditioning,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Rowing (machine)",
        group: MuscleGroup::Conditioning,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Incline Push-Up",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Chest Press (machine)",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Cable Fly",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Seated Dumbbell Press",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Dumbbells],
    },
    Exercise {
        name: "Chest-Supported Row",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Machines, Equipment::Dumbbells],
    },
    Exercise {
        name: "Seated Row",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Assisted Pull-Up",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Machines, Equipment::Bands],
    },
    Exercise {
        name: "TRX Row",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Bands, Equipment::Bodyweight],
    },
    Exercise {
        name: "Face Pull",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Cables, Equipment::Bands, Equipment::Machines],
    },
    Exercise {
        name: "Glute Bridge",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells],
    },
    Exercise {
        name: "Hip Thrust",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Dumbbells, Equipment::Barbell, Equipment::Machines],
    },
    Exercise {
        name: "Step-Up",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells],
    },
    Exercise {
        name: "Bulgarian Split Squat",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells],
    },
    Exercise {
        name: "Single-Leg Romanian Deadlift",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Dumbbells],
    },
    Exercise {
        name: "Calf Raise",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Machines],
    },
    Exercise {
        name: "Leg Extension",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Hamstring Curl",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Machines],
    },
    Exercise {
        name: "Farmer's Carry",
        group: MuscleGroup::Conditioning,
        equipment: &[Equipment::Dumbbells, Equipment::Kettlebell],
    },
    Exercise {
        name: "Kettlebell Swing",
        group: MuscleGroup::Conditioning,
        equipment: &[Equipment::Kettlebell],
    },
    Exercise {
        name: "Band Pull-Apart",
        group: MuscleGroup::Pull,
        equipment: &[Equipment::Bands],
    },
    Exercise {
        name: "TRX Chest Press",
        group: MuscleGroup::Push,
        equipment: &[Equipment::Bands, Equipment::Bodyweight],
    },
    Exercise {
        name: "Pallof Press",
        group: MuscleGroup::Core,
        equipment: &[Equipment::Bands, Equipment::Machines],
    },
    Exercise {
        name: "Side Plank",
        group: MuscleGroup::Core,
        equipment: &[Equipment::Bodyweight],
    },
    Exercise {
        name: "Walking Lunge",
        group: MuscleGroup::Legs,
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbells],
    },
];

pub static MEALS: [Meal; 36] = [
    Meal {
        name: "Oatmeal with Berries",
        diets: &[Diet::Omnivore, Diet::Vegetarian, Diet::Vegan],
        calories: 350,
        protein: 12,
        carbs: 55,
        fat: 8,
        ingredients: &["oats", "berries", "almond milk"],
        recipe: &[
            "Combine 1/2 cup rolled oats with 1 cup almond milk in a small pot.",
            "Bring to a simmer over medium heat, stirring occasionally, until thickened (about 5 minutes).",
            "Stir in a handful of fresh or frozen berries and a pinch of salt.",
        ],
    },
    Meal {
        name: "Greek Yogurt Bowl",
        diets: &[Diet::Omnivore, Diet::Vegetarian],
        calories: 320,
        protein: 20,
        carbs: 35,
        fat: 10,
        ingredients: &["greek yogurt", "honey", "nuts"],
        recipe: &[
            "Spoon 1 cup plain Greek yogurt into a bowl.",
            "Top with sliced fruit (banana or berries), a tablespoon of honey, and a small handful of chopped nuts.",
        ],
    },
    Meal {
        name: "Grilled Chicken & Veggies",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 520,
        protein: 42,
        carbs: 45,
        fat: 14,
        ingredients: &["chicken", "broccoli", "sweet potato"],
        recipe: &[
            "Season a chicken breast with salt, pepper, and a little olive oil.",
            "Grill or pan-sear over medium-high heat 6–8 minutes per side until cooked through.",
            "Roast or steam broccoli and roast cubed sweet potato tossed with a little oil.",
        ],
    },
    Meal {
        name: "Quinoa Salad",
        diets: &[Diet::Omnivore, Diet::Vegetarian, Diet::Vegan],
        calories: 410,
        protein: 14,
        carbs: 58,
        fat: 12,
        ingredients: &["quinoa", "beans", "vegetables"],
        recipe: &[
            "Cook quinoa and let cool.",
            "Toss with beans, chopped vegetables and a simple lemon-olive oil dressing.",
        ],
    },
    Meal {
        name: "Tofu Stir-Fry",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 450,
        protein: 22,
        carbs: 38,
        fat: 18,
        ingredients: &["tofu", "mixed veg", "soy sauce"],
        recipe: &[
            "Press and cube tofu and pan-fry until golden.",
            "Stir-fry mixed vegetables and toss with tofu and soy sauce.",
        ],
    },
    Meal {
        name: "Salmon & Rice",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 560,
        protein: 38,
        carbs: 48,
        fat: 22,
        ingredients: &["salmon", "rice", "asparagus"],
        recipe: &[
            "Season salmon and bake or pan-sear until flaky.",
            "Serve with cooked rice and steamed asparagus.",
        ],
    },
    Meal {
        name: "Lentil Soup",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 300,
        protein: 18,
        carbs: 40,
        fat: 6,
        ingredients: &["lentils", "carrot", "onion"],
        recipe: &[
            "Sauté onion, carrot, and celery; add lentils and stock; simmer until tender.",
        ],
    },
    Meal {
        name: "Avocado Toast",
        diets: &[Diet::Omnivore, Diet::Vegetarian, Diet::Vegan],
        calories: 320,
        protein: 8,
        carbs: 30,
        fat: 18,
        ingredients: &["bread", "avocado", "egg optional"],
        recipe: &[
            "Toast whole-grain bread and top with mashed avocado, lemon, salt.",
        ],
    },
    Meal {
        name: "Protein Smoothie",
        diets: &[Diet::Omnivore, Diet::Vegetarian, Diet::Vegan],
        calories: 380,
        protein: 28,
        carbs: 40,
        fat: 6,
        ingredients: &["banana", "protein powder", "milk"],
        recipe: &[
            "Blend banana, protein powder, milk and ice until smooth.",
        ],
    },
    Meal {
        name: "Turkey Wrap",
        diets: &[Diet::Omnivore],
        calories: 420,
        protein: 32,
        carbs: 38,
        fat: 12,
        ingredients: &["turkey", "wrap", "lettuce"],
        recipe: &[
            "Layer sliced turkey, lettuce, and tomato on a whole-grain wrap; roll and slice.",
        ],
    },
    Meal {
        name: "Chickpea Curry",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 460,
        protein: 16,
        carbs: 56,
        fat: 16,
        ingredients: &["chickpeas", "tomato", "spices"],
        recipe: &[
            "Sauté onion and spices, add chickpeas and tomatoes, simmer 10-15 minutes.",
        ],
    },
    Meal {
        name: "Tuna Salad",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 340,
        protein: 30,
        carbs: 10,
        fat: 18,
        ingredients: &["tuna", "leafy greens", "olive oil"],
        recipe: &[
            "Mix tuna with olive oil and lemon; serve over mixed greens.",
        ],
    },
    Meal {
        name: "Egg Scramble with Veg",
        diets: &[Diet::Omnivore, Diet::Vegetarian],
        calories: 300,
        protein: 22,
        carbs: 6,
        fat: 20,
        ingredients: &["eggs", "spinach", "tomato"],
        recipe: &[
            "Whisk eggs and scramble with chopped spinach and tomato until set.",
        ],
    },
    Meal {
        name: "Beef Stir-Fry",
        diets: &[Diet::Omnivore],
        calories: 480,
        protein: 36,
        carbs: 30,
        fat: 20,
        ingredients: &["beef", "broccoli", "soy sauce"],
        recipe: &[
            "Slice beef thin, sear in a hot pan, add vegetables and sauce; cook until done.",
        ],
    },
    Meal {
        name: "Shrimp Tacos",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 420,
        protein: 28,
        carbs: 40,
        fat: 12,
        ingredients: &["shrimp", "tortilla", "cabbage"],
        recipe: &[
            "Season and sear shrimp; assemble in tortillas with slaw and salsa.",
        ],
    },
    Meal {
        name: "Pasta with Tomato & Turkey",
        diets: &[Diet::Omnivore],
        calories: 560,
        protein: 36,
        carbs: 60,
        fat: 18,
        ingredients: &["pasta", "tomato sauce", "turkey mince"],
        recipe: &[
            "Cook pasta; brown turkey mince with sauce; combine and serve.",
        ],
    },
    Meal {
        name: "Black Bean Burrito Bowl",
        diets: &[Diet::Omnivore, Diet::Vegetarian, Diet::Vegan],
        calories: 500,
        protein: 20,
        carbs: 70,
        fat: 12,
        ingredients: &["black beans", "rice", "corn"],
        recipe: &[
            "Layer rice, beans, corn and salsa in a bowl; top with avocado if desired.",
        ],
    },
    Meal {
        name: "Veggie Omelette",
        diets: &[Diet::Vegetarian],
        calories: 330,
        protein: 20,
        carbs: 8,
        fat: 22,
        ingredients: &["eggs", "bell pepper", "mushroom"],
        recipe: &[
            "Whisk eggs and pour over sautéed vegetables; fold when set.",
        ],
    },
    Meal {
        name: "Cottage Cheese & Fruit",
        diets: &[Diet::Omnivore, Diet::Vegetarian],
        calories: 220,
        protein: 18,
        carbs: 18,
        fat: 6,
        ingredients: &["cottage cheese", "fruit"],
        recipe: &[
            "Spoon cottage cheese into a bowl and top with sliced fruit and a drizzle of honey.",
        ],
    },
    Meal {
        name: "Pancakes (Protein)",
        diets: &[Diet::Omnivore, Diet::Vegetarian],
        calories: 420,
        protein: 24,
        carbs: 50,
        fat: 10,
        ingredients: &["oats", "egg", "protein powder"],
        recipe: &[
            "Blend oats, egg and protein powder; cook small pancakes on a non-stick pan.",
        ],
    },
    Meal {
        name: "Baked Sweet Potato & Tuna",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 380,
        protein: 28,
        carbs: 46,
        fat: 6,
        ingredients: &["sweet potato", "tuna", "yogurt"],
        recipe: &[
            "Bake sweet potato until tender; top with flaked tuna mixed with yogurt and herbs.",
        ],
    },
    Meal {
        name: "Mushroom Risotto (veg)",
        diets: &[Diet::Vegetarian],
        calories: 480,
        protein: 12,
        carbs: 70,
        fat: 14,
        ingredients: &["rice", "mushroom", "parmesan"],
        recipe: &[
            "Sauté mushrooms; gradually add stock to rice while stirring until creamy; finish with parmesan.",
        ],
    },
    Meal {
        name: "Soba Noodle Salad",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 360,
        protein: 12,
        carbs: 60,
        fat: 8,
        ingredients: &["soba", "veg", "sesame"],
        recipe: &[
            "Cook soba, rinse cold; toss with chopped vegetables and a sesame-soy dressing.",
        ],
    },
    Meal {
        name: "Paneer Curry",
        diets: &[Diet::Vegetarian],
        calories: 520,
        protein: 28,
        carbs: 30,
        fat: 28,
        ingredients: &["paneer", "tomato", "spices"],
        recipe: &[
            "Sauté onions and spices; add tomato and paneer; simmer briefly.",
        ],
    },
    Meal {
        name: "Pork Tenderloin & Quinoa",
        diets: &[Diet::Omnivore],
        calories: 540,
        protein: 42,
        carbs: 46,
        fat: 16,
        ingredients: &["pork", "quinoa", "greens"],
        recipe: &[
            "Roast pork tenderloin and serve sliced over cooked quinoa and greens.",
        ],
    },
    Meal {
        name: "Eggplant Parmesan",
        diets: &[Diet::Vegetarian],
        calories: 460,
        protein: 22,
        carbs: 40,
        fat: 20,
        ingredients: &["eggplant", "tomato", "mozzarella"],
        recipe: &[
            "Bread and bake eggplant slices; layer with sauce and cheese and bake until bubbly.",
        ],
    },
    Meal {
        name: "Beef Chili",
        diets: &[Diet::Omnivore],
        calories: 520,
        protein: 36,
        carbs: 40,
        fat: 22,
        ingredients: &["beef", "beans", "tomato"],
        recipe: &[
            "Brown beef, add beans, tomatoes and spices; simmer 30 minutes.",
        ],
    },
    Meal {
        name: "Greek Salad with Feta",
        diets: &[Diet::Vegetarian],
        calories: 300,
        protein: 10,
        carbs: 14,
        fat: 22,
        ingredients: &["tomato", "cucumber", "feta"],
        recipe: &[
            "Chop vegetables and toss with feta, olives and olive oil.",
        ],
    },
    Meal {
        name: "Chia Pudding",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 260,
        protein: 8,
        carbs: 28,
        fat: 12,
        ingredients: &["chia seeds", "milk", "fruit"],
        recipe: &[
            "Mix chia seeds with milk and refrigerate overnight; top with fruit.",
        ],
    },
    Meal {
        name: "Stuffed Peppers",
        diets: &[Diet::Omnivore, Diet::Vegetarian],
        calories: 420,
        protein: 18,
        carbs: 48,
        fat: 14,
        ingredients: &["pepper", "rice", "cheese"],
        recipe: &[
            "Fill halved peppers with cooked rice and veggies (or mince); bake until tender.",
        ],
    },
    Meal {
        name: "Miso Soup with Tofu",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 140,
        protein: 10,
        carbs: 8,
        fat: 6,
        ingredients: &["miso", "tofu", "seaweed"],
        recipe: &[
            "Add miso paste to hot water, add tofu cubes and wakame, warm gently.",
        ],
    },
    Meal {
        name: "Grain Bowl with Tempeh",
        diets: &[Diet::Vegetarian, Diet::Vegan],
        calories: 520,
        protein: 26,
        carbs: 60,
        fat: 16,
        ingredients: &["tempeh", "brown rice", "veg"],
        recipe: &[
            "Pan-fry tempeh, assemble over grains with roasted vegetables and dressing.",
        ],
    },
    Meal {
        name: "Smoked Salmon Bagel",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 480,
        protein: 28,
        carbs: 46,
        fat: 18,
        ingredients: &["bagel", "smoked salmon", "cream cheese"],
        recipe: &[
            "Toast bagel, spread cream cheese and top with smoked salmon and capers.",
        ],
    },
    Meal {
        name: "Vegetable Frittata",
        diets: &[Diet::Vegetarian],
        calories: 340,
        protein: 20,
        carbs: 10,
        fat: 22,
        ingredients: &["eggs", "zucchini", "onion"],
        recipe: &[
            "Sauté vegetables, pour whisked eggs and bake until set.",
        ],
    },
    Meal {
        name: "Baked Cod & Veggies",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 360,
        protein: 34,
        carbs: 20,
        fat: 12,
        ingredients: &["cod", "vegetables", "lemon"],
        recipe: &[
            "Season cod and bake with mixed vegetables until cooked through.",
        ],
    },
    Meal {
        name: "Mediterranean Tuna Pasta",
        diets: &[Diet::Omnivore, Diet::Pescatarian],
        calories: 520,
        protein: 34,
        carbs: 62,
        fat: 12,
        ingredients: &["pasta", "tuna", "tomato"],
        recipe: &[
            "Cook pasta, toss with tuna, tomatoes, olives and olive oil.",
        ],
    },
];
