//! Prompt assembly for meal plan generation.
//!
//! The prompt is the concatenation, in order, of:
//! 1. the nutrition rules filled in with the pet profile,
//! 2. the food journal section (a placeholder sentence when there is no journal),
//! 3. the existing recipe titles, only when there are any,
//! 4. the closing block describing the JSON reply.
//!
//! Every section is wrapped in `[INST]` / `[/INST]`; the same markers are
//! passed to the model as stop sequences.

use crate::domain::{
    meal_plan::value_objects::FoodJournalEntry,
    pet::entities::{PetProfile, json_display},
};

pub const INSTRUCTION_OPEN: &str = "[INST]";
pub const INSTRUCTION_CLOSE: &str = "[/INST]";
pub const STOP_MARKERS: [&str; 2] = [INSTRUCTION_OPEN, INSTRUCTION_CLOSE];

pub const NO_FOOD_JOURNAL: &str = "No food journal provided";

const RULES_TEMPLATE: &str = "\
[INST] You are a pet nutritionist with expertise in creating personalized meal plans for pets. \
Based on the following pet details, generate a comprehensive and balanced meal plan:

- **Name:** {name} \n\
- **Breed:** {breed} \n\
- **Age:** {age} years \n\
- **Gender:** {gender} \n\
- **Species:** {species} \n\
- **Weight:** {weight} kg \n\
- **Activity Level:** {activity_level} (Low, Medium, High) \n\
- **Health Concerns:** {health_concerns} \n\n\
IMPORTANT CONSIDERATIONS:
1. Calculate calories based on species, weight, and activity level.
   ONLY USE THE GUIDELINES FOR THE SPECIFIC SPECIES ({species}) OF THIS PET:

   CATS (ONLY USE IF PET IS A CAT):
   - Indoor/Low Activity (3-6kg): 200-250 calories/day
   - Outdoor/Medium Activity (3-6kg): 250-300 calories/day
   - High Activity (3-6kg): 300-400 calories/day

   DOGS (ONLY USE IF PET IS A DOG):
   - Small Dogs (1-10kg):
     * Low Activity: 200-400 calories/day
     * Medium Activity: 400-600 calories/day
     * High Activity: 600-800 calories/day
   - Medium Dogs (10-25kg):
     * Low Activity: 800-1000 calories/day
     * Medium Activity: 1000-1200 calories/day
     * High Activity: 1200-1500 calories/day
   - Large Dogs (25kg+):
     * Low Activity: 1500-1800 calories/day
     * Medium Activity: 1800-2200 calories/day
     * High Activity: 2200-2500 calories/day

2. Portion Size Calculations:
   - Calculate dry food portions: Daily calories ÷ calories per cup (approximately 400 kcal/cup)
   - Calculate wet food portions: Daily calories ÷ calories per can (approximately 250 kcal/can)
   - Fresh food portions should be weighed in grams
   - Treats should not exceed 10% of daily caloric intake

3. Activity Level Adjustments:
   - Low Activity: Multiply base calories by 0.8
   - Medium Activity: Use base calories
   - High Activity: Multiply base calories by 1.2

4. Age Adjustments:
   - Puppies/Kittens: Multiply adult calories by 1.5-2
   - Senior Pets: Reduce adult calories by 20%

5. Health Considerations:
   - Overweight: Reduce calories by 20%
   - Underweight: Increase calories by 20%
   - Pregnant/Nursing: Increase calories by 50%

6. Breed-Specific Needs:
   - Small breeds: More frequent, smaller meals
   - Large breeds: Anti-bloat considerations
   - Brachycephalic breeds: Easy-to-eat food sizes
   - Working breeds: Higher protein requirements

7. Current weight of {weight}kg and activity level of {activity_level} must be used
   to calculate final portions using these guidelines.

REQUIRED RESPONSE ELEMENTS:
1. Caloric intake must be specified in calories/day
2. Meal plan must include specific times and portion sizes in grams
3. Nutrition balance must include all percentages (protein, fat, carbs, fiber, moisture)
4. Warnings must include health considerations or 'No specific warnings for this pet'
5. Ingredients must list all components of recommended foods
6. Feeding guidelines must include frequency, portion control, water intake, and tips
7. Supplements must specify recommendations or 'No supplements required'
8. Foods to avoid must list specific items or 'Standard diet is appropriate, avoid common harmful foods'
9. Transition guidelines must explain how to implement the meal plan

IMPORTANT SPECIES-SPECIFIC INSTRUCTIONS:
1. This pet is a {species}. ONLY provide information relevant to {species}.
2. Do NOT mention dietary needs or considerations for any other species.
3. All recommendations must be specifically tailored for a {species}.
4. Never mention cats if this is a dog, and never mention dogs if this is a cat.

Consider these factors for the meal plan:
1. Age-appropriate portions and nutritional needs
2. Activity level and energy requirements
3. Species-specific nutritional requirements
4. Breed-specific dietary considerations

IMPORTANT NOTES ABOUT INGREDIENTS:
1. Only include natural, whole food ingredients (like meats, vegetables, grains)
2. Do not include chemical compounds, preservatives, or synthetic additives
3. Keep ingredients simple and recognizable to pet owners
4. Example of good ingredients: chicken breast, brown rice, sweet potatoes, carrots
5. Focus on primary ingredients that make up the bulk of the meal
6. Only include ingredients that are safe and healthy for the pet
Consider these factors for the meal plan:
1. Age-appropriate portions and nutritional needs
2. Activity level and energy requirements
3. Species-specific nutritional requirements
4. Breed-specific dietary considerations [/INST]
";

const FOOD_JOURNAL_TEMPLATE: &str = "\
[INST] Consider this food journal when creating the meal plan:

{food_journal}

REQUIRED FOOD JOURNAL ANALYSIS:
1. Review and incorporate previously successful meals
2. Maintain consistent feeding times from the journal
3. Include familiar ingredients in new meal plan
4. Note any foods that should be continued or avoided
5. Calculate appropriate portion sizes based on recorded amounts
6. Consider the spacing between meals
7. Evaluate the variety of foods being offered
8. Assess the current nutritional balance

Use this information to create a meal plan that:
1. Maintains successful feeding patterns
2. Improves upon current diet where needed
3. Keeps familiar foods while introducing beneficial changes
4. Ensures all nutritional requirements are met
5. Provides specific portions and times based on established routine [/INST]
";

const EXISTING_RECIPES_TEMPLATE: &str = "\
[INST] The user already has the following recipe titles saved: {existing_recipes}. \
Please ensure that your suggested recipes have DIFFERENT titles than these existing ones. \
Create unique recipe names that do not duplicate any of the existing titles. [/INST]
";

const CLOSING_INSTRUCTIONS: &str = r#"[INST] Provide a complete JSON response. Every field must be filled with meaningful content. Empty or missing fields are not acceptable. Use this exact structure:
{
  "caloric_intake": "REQUIRED: daily calories with unit",
  "meal_plan": {
      "breakfast": "REQUIRED: food with gram portions and time",
      "lunch": "REQUIRED: food with gram portions and time",
      "dinner": "REQUIRED: food with gram portions and time",
      "snacks": "REQUIRED: specify snacks or state No snacks recommended"
  },
  "nutrition_balance": {
      "protein": "REQUIRED: percentage",
      "fat": "REQUIRED: percentage",
      "carbs": "REQUIRED: percentage",
      "fiber": "REQUIRED: percentage",
      "moisture": "REQUIRED: percentage"
  },
  "warnings": "REQUIRED: specific warnings or No specific warnings",
  "ingredients": [
    {
      "recipe_name": "REQUIRED: simple descriptive name for first recipe",
      "ingredients": ["REQUIRED: only whole food ingredients"],
      "preparation": ["REQUIRED: simple cooking instructions"],
      "description": "REQUIRED: Write at least 2 complete sentences and no more than 4 sentences describing the recipe. Each recipe description MUST be at least 2 full sentences."
    },
    {
      "recipe_name": "REQUIRED: simple descriptive name for second recipe",
      "ingredients": ["REQUIRED: only whole food ingredients"],
      "preparation": ["REQUIRED: simple cooking instructions"],
      "description": "REQUIRED: Write at least 2 complete sentences and no more than 4 sentences describing the recipe. Each recipe description MUST be at least 2 full sentences."
    }
  ],
  "feeding_guidelines": {
      "frequency": "REQUIRED: specific timing",
      "portion_control": "REQUIRED: specific guidelines",
      "water_intake": "REQUIRED: specific amounts",
      "feeding_tips": "REQUIRED: practical advice"
  },
  "supplements": "REQUIRED: specific supplements or No supplements required",
  "foods_to_avoid": "REQUIRED: specific foods or Standard cautions",
  "transition_guidelines": "REQUIRED: specific transition plan"
} [/INST]
"#;

/// Builds the full prompt sent to the completion service.
pub fn compose_prompt(
    profile: &PetProfile,
    food_journal: Option<&[FoodJournalEntry]>,
    existing_recipes: Option<&[String]>,
) -> String {
    let mut prompt = rule_section(profile);
    prompt.push_str(&food_journal_section(food_journal));
    if let Some(section) = existing_recipes_section(existing_recipes) {
        prompt.push_str(&section);
    }
    prompt.push_str(closing_section());
    prompt
}

pub fn rule_section(profile: &PetProfile) -> String {
    let age = profile.age.to_string();
    let weight = profile.weight.to_string();

    render_template(
        RULES_TEMPLATE,
        &[
            ("name", &profile.name),
            ("breed", &profile.breed),
            ("age", &age),
            ("gender", &profile.gender),
            ("species", &profile.species),
            ("weight", &weight),
            ("activity_level", &profile.activity_level),
            ("health_concerns", &profile.health_concerns),
        ],
    )
}

/// Always returns a section; an absent or empty journal yields the placeholder.
pub fn food_journal_section(food_journal: Option<&[FoodJournalEntry]>) -> String {
    let entries = match food_journal {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(render_journal_entry)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => NO_FOOD_JOURNAL.to_string(),
    };

    render_template(FOOD_JOURNAL_TEMPLATE, &[("food_journal", &entries)])
}

pub fn existing_recipes_section(existing_recipes: Option<&[String]>) -> Option<String> {
    let titles = existing_recipes.filter(|titles| !titles.is_empty())?;

    let quoted = titles
        .iter()
        .map(|title| format!("\"{title}\""))
        .collect::<Vec<_>>()
        .join(", ");

    Some(render_template(
        EXISTING_RECIPES_TEMPLATE,
        &[("existing_recipes", &quoted)],
    ))
}

pub fn closing_section() -> &'static str {
    CLOSING_INSTRUCTIONS
}

fn render_journal_entry(entry: &FoodJournalEntry) -> String {
    format!(
        "- {}: {} ({} {})",
        json_display(&entry.date_time),
        json_display(&entry.description),
        json_display(&entry.quantity),
        json_display(&entry.quantity_unit)
    )
}

/// Replaces `{key}` placeholders in one pass. Substituted values are never
/// scanned again, and unknown placeholders are kept as written.
fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let substitution = after.find('}').and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, *value))
        });

        match substitution {
            Some((end, value)) => {
                rendered.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::pet::entities::Measurement;

    fn profile() -> PetProfile {
        PetProfile {
            name: "Biscuit".to_string(),
            breed: "golden retriever".to_string(),
            age: Measurement::from_json(&json!("3")).unwrap(),
            gender: "Female".to_string(),
            species: "Dog".to_string(),
            weight: Measurement::from_json(&json!(25)).unwrap(),
            activity_level: "High".to_string(),
            health_concerns: "None".to_string(),
        }
    }

    fn journal() -> Vec<FoodJournalEntry> {
        vec![
            FoodJournalEntry {
                date_time: json!("2024-05-01 08:00"),
                description: json!("Dry kibble"),
                quantity: json!(120),
                quantity_unit: json!("g"),
            },
            FoodJournalEntry {
                date_time: json!("2024-05-01 18:00"),
                description: json!("Boiled chicken"),
                quantity: json!("0.5"),
                quantity_unit: json!("cup"),
            },
        ]
    }

    #[test]
    fn test_rule_section_substitutes_profile() {
        let section = rule_section(&profile());

        assert!(section.starts_with("[INST] You are a pet nutritionist"));
        assert!(section.contains("- **Name:** Biscuit \n- **Breed:** golden retriever \n"));
        assert!(section.contains("- **Age:** 3 years \n"));
        assert!(section.contains("- **Weight:** 25 kg \n"));
        assert!(section.contains("- **Activity Level:** High (Low, Medium, High) \n"));
        assert!(section.contains("- **Health Concerns:** None \n\nIMPORTANT CONSIDERATIONS:\n"));
        assert!(section.contains("THE SPECIFIC SPECIES (Dog) OF THIS PET"));
        assert!(section.contains("Current weight of 25kg and activity level of High"));
        assert!(!section.contains("{species}"));
        assert!(section.ends_with("[/INST]\n"));
    }

    #[test]
    fn test_substituted_values_are_not_expanded_again() {
        let mut pet = profile();
        pet.name = "{breed} {unknown".to_string();

        let section = rule_section(&pet);

        assert!(section.contains("- **Name:** {breed} {unknown \n"));
    }

    #[test]
    fn test_journal_section_renders_entries() {
        let entries = journal();

        let section = food_journal_section(Some(entries.as_slice()));

        assert!(section.contains(
            "- 2024-05-01 08:00: Dry kibble (120 g)\n- 2024-05-01 18:00: Boiled chicken (0.5 cup)\n"
        ));
        assert!(!section.contains(NO_FOOD_JOURNAL));
    }

    #[test]
    fn test_rule_section_repeats_the_factor_checklist() {
        let section = rule_section(&profile());

        assert_eq!(section.matches("Consider these factors for the meal plan:\n").count(), 2);
        assert!(section.contains(
            "4. Breed-specific dietary considerations\n\nIMPORTANT NOTES ABOUT INGREDIENTS:\n"
        ));
        assert!(section.contains(
            "safe and healthy for the pet\nConsider these factors for the meal plan:\n"
        ));
        assert!(section.ends_with("4. Breed-specific dietary considerations [/INST]\n"));
    }

    #[test]
    fn test_journal_entries_render_any_json_value() {
        let entries = vec![FoodJournalEntry {
            date_time: json!(1714550400),
            description: json!("Kibble"),
            quantity: json!(100),
            quantity_unit: json!("g"),
        }];

        let section = food_journal_section(Some(entries.as_slice()));

        assert!(section.contains("\n\n- 1714550400: Kibble (100 g)\n\n"));
    }

    #[test]
    fn test_missing_or_empty_journal_uses_placeholder() {
        for section in [food_journal_section(None), food_journal_section(Some(&[]))] {
            assert!(section.starts_with("[INST] Consider this food journal"));
            assert!(section.contains("\n\nNo food journal provided\n\n"));
            assert!(section.contains("REQUIRED FOOD JOURNAL ANALYSIS"));
        }
    }

    #[test]
    fn test_existing_recipes_section_only_when_titles_given() {
        assert_eq!(existing_recipes_section(None), None);
        assert_eq!(existing_recipes_section(Some(&[])), None);

        let titles = vec!["Chicken Delight".to_string(), "Salmon Bowl".to_string()];
        let section = existing_recipes_section(Some(titles.as_slice())).unwrap();

        assert!(section.contains(
            "following recipe titles saved: \"Chicken Delight\", \"Salmon Bowl\". "
        ));
        assert!(section.starts_with(INSTRUCTION_OPEN));
    }

    #[test]
    fn test_compose_orders_sections() {
        let entries = journal();
        let titles = vec!["Salmon Bowl".to_string()];

        let prompt = compose_prompt(&profile(), Some(entries.as_slice()), Some(titles.as_slice()));

        let rules = prompt.find("You are a pet nutritionist").unwrap();
        let journal = prompt.find("Consider this food journal").unwrap();
        let recipes = prompt.find("recipe titles saved").unwrap();
        let closing = prompt.find("Provide a complete JSON response").unwrap();
        assert!(rules < journal && journal < recipes && recipes < closing);
        assert!(prompt.ends_with("} [/INST]\n"));
    }

    #[test]
    fn test_compose_without_optional_inputs() {
        let prompt = compose_prompt(&profile(), None, None);

        assert!(prompt.contains(NO_FOOD_JOURNAL));
        assert!(!prompt.contains("recipe titles saved"));
        assert!(prompt.contains("\"caloric_intake\": \"REQUIRED: daily calories with unit\""));
        assert!(prompt.contains("state No snacks recommended"));
        assert!(prompt.contains("No supplements required"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let entries = journal();
        let titles = vec!["Salmon Bowl".to_string()];

        let first = compose_prompt(&profile(), Some(entries.as_slice()), Some(titles.as_slice()));
        let second = compose_prompt(&profile(), Some(entries.as_slice()), Some(titles.as_slice()));

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_section_is_bounded_by_markers() {
        let entries = journal();
        let titles = vec!["Salmon Bowl".to_string()];

        let prompt = compose_prompt(&profile(), Some(entries.as_slice()), Some(titles.as_slice()));

        assert_eq!(prompt.matches(INSTRUCTION_OPEN).count(), 4);
        assert_eq!(prompt.matches(INSTRUCTION_CLOSE).count(), 4);
    }
}
