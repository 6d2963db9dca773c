use crate::domain::{
    meal_plan::entities::MealPlanPrompt, nutrition::value_objects::NutritionDossier,
    profile::entities::UserProfile,
};

/// Fixed dietary-guideline instructions appended to every prompt.
pub const MEAL_PLAN_INSTRUCTIONS: &str = "\
Instructions for Generating a Consistent Meal Plan:
Based on the American Dietary Guidelines and the user's personal information, create a personalized meal plan with the following specifications:

Daily Calorie Intake:

Set a daily calorie target for weight loss, adjusted based on the user's activity level and health goals. Create a daily caloric deficit while ensuring the user's nutrient needs are met.
If alcohol is included, ensure it follows the American Dietary Guidelines by allocating no more than 15% of total daily calories to low-calorie alcohol options.
Nutrient Distribution (from American Dietary Guidelines):

Distribute daily calorie intake using the macronutrient ranges from the American Dietary Guidelines:
Protein: 10-35% of total calories
Fat: 20-35% of total calories
Carbohydrates: 45-65% of total calories
Provide the total calories, protein, fat, and carbohydrates consumed per day in the meal plan summary.
Meal Plan Structure:

Create a 7-day meal plan with breakfast, lunch, dinner, and snacks each day.
List exact portion sizes for each meal, and provide the following nutritional breakdown for each food item:
Calories
Protein (grams)
Fat (grams)
Carbohydrates (grams)
Food Choices:

Prioritize foods regularly consumed by the user, as provided in the nutritional data.
Ensure the meal plan adheres to the user's dietary preferences and health conditions. Avoid foods they cannot consume.

Edge Case Considerations:
1. Avoid high-calorie, low-nutrient foods (e.g., processed snacks, sugary drinks).
2. Limit foods high in simple carbohydrates or added sugars to avoid hindering weight loss.
3. Avoid or limit foods high in saturated fats or trans fats to improve heart health and manage weight.
4. For users with health conditions (e.g., diabetes, hypertension), limit high-sugar or high-sodium foods to avoid exacerbating their conditions.
5. Ensure appropriate portion sizes to support the user's weight loss and health goals.
6. Avoid extreme macronutrient imbalances (e.g., excessive protein or too many carbs) that may conflict with dietary needs.
7. Restrict foods with high glycemic index for users managing blood sugar levels (e.g., white bread, refined sugars).
8. Eliminate foods that conflict with any provided allergies or dietary restrictions.
9. If the user consumes alcohol, include low-calorie alcohol options within the 15% calorie rule or suggest alternatives that will not hinder weight loss.
10. Prioritize nutrient-dense whole foods over processed options.

Alcohol Consideration (if applicable):

If the user consumes alcohol, include low-calorie alcohol options that follow the 15% calorie rule from the American Dietary Guidelines.
For alcohol-free plans, focus on foods that promote liver health and support the user's weight loss goals.
Consistency and Guidelines:

Follow the American Dietary Guidelines to ensure that the meals are balanced, nutrient-dense, and consistent across similar user profiles.
Maintain the same structure and rules for the meal plan, even if the food items change based on the user's preferences.
Final Summary:

Provide a daily summary for each day, listing the total calories, protein, fat, and carbohydrates consumed across all meals.
Include a table of food items used in the plan, showing their portion size and corresponding nutritional information.";

/// Renders a float the way a form shows it: whole numbers keep `.0`.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// One `Key: value` line per profile field, in form order.
pub fn render_profile(profile: &UserProfile, dossier: &NutritionDossier) -> String {
    let regular_foods = dossier
        .queries()
        .iter()
        .map(|q| q.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let drinks = if profile.drinks_alcohol { "Yes" } else { "No" };

    [
        format!("Age: {}", profile.age),
        format!("Gender: {}", profile.gender),
        format!("Height: {} cm", format_decimal(profile.height_cm)),
        format!("Weight: {} kg", format_decimal(profile.weight_kg)),
        format!("Activity Level: {}", profile.activity_level),
        format!(
            "Weekly Average Calories Burned: {} kcal",
            profile.weekly_calories_burned
        ),
        format!("Weekly Average Steps Walked: {}", profile.weekly_steps),
        format!(
            "Average Daily Sleep Hours: {}",
            format_decimal(profile.daily_sleep_hours)
        ),
        format!("Health Goals: {}", profile.health_goals),
        format!("Dietary Preferences: {}", profile.dietary_preferences),
        format!("Health Conditions: {}", profile.health_conditions),
        format!("Alcoholic: {drinks}"),
        format!(
            "Include Alcohol: {}",
            profile.effective_alcohol_choice().as_str()
        ),
        format!("Regular Foods: {regular_foods}"),
    ]
    .join("\n")
}

/// Deterministic: the same profile and dossier always give the same text.
pub fn compose(profile: &UserProfile, dossier: &NutritionDossier) -> MealPlanPrompt {
    let text = format!(
        "User Information:\n{}\n\nNutritional Data for Foods Consumed Regularly:\n{}\n\n{}",
        render_profile(profile, dossier),
        dossier.render(),
        MEAL_PLAN_INSTRUCTIONS
    );

    MealPlanPrompt::new(text)
}
