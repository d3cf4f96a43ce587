//! Markdown rendering of structured replies for the CLI chat surface.
//!
//! Rendering is a pure function of the [`Reply`]; resolvers never format
//! text themselves. The server skips this module entirely and serializes
//! replies as JSON.

use std::fmt::Write;

use crate::catalog::Recipe;
use crate::resolve::{
    ConversionAnswer, DietaryAnswer, MealPlan, NutritionAnswer, RecipeList, Reply,
    SubstitutionAnswer, TechniqueAnswer, TimingAnswer,
};

/// Render a reply as markdown.
pub fn render(reply: &Reply) -> String {
    match reply {
        Reply::RecipeDetail { recipe } => render_recipe(recipe),
        Reply::RecipeList(list) => render_recipe_list(list),
        Reply::Substitutions(answer) => render_substitutions(answer),
        Reply::Technique(answer) => render_technique(answer),
        Reply::Conversion(answer) => render_conversion(answer),
        Reply::MealPlan(plan) => render_meal_plan(plan),
        Reply::Nutrition(answer) => render_nutrition(answer),
        Reply::Timing(answer) => render_timing(answer),
        Reply::Dietary(answer) => render_dietary(answer),
        Reply::General { capabilities, examples } => render_general(capabilities, examples),
    }
}

fn title_words(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", recipe.name);
    let _ = writeln!(out, "*{}*\n", recipe.description);
    let _ = writeln!(
        out,
        "**Cuisine:** {} | **Difficulty:** {}",
        title_words(recipe.cuisine.as_str()),
        title_words(recipe.difficulty.as_str()),
    );
    let _ = writeln!(
        out,
        "**Prep Time:** {} min | **Cook Time:** {} min | **Servings:** {}\n",
        recipe.prep_time_min, recipe.cook_time_min, recipe.servings
    );

    if !recipe.dietary_tags.is_empty() {
        let tags: Vec<String> = recipe
            .dietary_tags
            .iter()
            .map(|t| title_words(t.as_str()))
            .collect();
        let _ = writeln!(out, "**Dietary:** {}\n", tags.join(", "));
    }

    out.push_str("## Ingredients\n\n");
    for ing in &recipe.ingredients {
        let mut line = format!("- {} {} {}", ing.amount, ing.unit, ing.name)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(notes) = &ing.notes {
            let _ = write!(line, " *({notes})*");
        }
        let _ = writeln!(out, "{line}");
    }

    out.push_str("\n## Instructions\n\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }

    if !recipe.tips.is_empty() {
        out.push_str("\n## Tips\n\n");
        for tip in &recipe.tips {
            let _ = writeln!(out, "- {tip}");
        }
    }

    if let Some(n) = &recipe.nutrition {
        out.push_str("\n## Nutrition (per serving)\n\n");
        let _ = writeln!(out, "- Calories: {}", n.calories);
        let _ = writeln!(out, "- Protein: {}g", n.protein_g);
        let _ = writeln!(out, "- Carbs: {}g", n.carbs_g);
        let _ = writeln!(out, "- Fat: {}g", n.fat_g);
    }

    out
}

fn render_recipe_list(list: &RecipeList) -> String {
    if list.recipes.is_empty() {
        return format!("# {}\n\nNo recipes found. Try a different search!", list.title);
    }

    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", list.title);
    let _ = writeln!(out, "Found {} recipe(s):\n", list.total);
    for summary in &list.recipes {
        let _ = writeln!(out, "### {}", summary.name);
        let _ = writeln!(out, "{}", summary.description);
        let _ = writeln!(
            out,
            "{} min | {} | {} servings\n",
            summary.total_time_min,
            title_words(summary.difficulty.as_str()),
            summary.servings
        );
    }
    out.push_str("---\n*Ask me for the full recipe of any dish!*");
    out
}

fn render_substitutions(answer: &SubstitutionAnswer) -> String {
    let mut out = String::from("# Ingredient Substitutions\n\n");
    match answer {
        SubstitutionAnswer::Matches { sections } => {
            for section in sections {
                let _ = writeln!(out, "## Substitutes for {}\n", title_words(&section.ingredient));
                for sub in &section.substitutes {
                    let _ = writeln!(out, "- {sub}");
                }
                out.push('\n');
            }
        }
        SubstitutionAnswer::DefaultGuide { sections } => {
            out.push_str("Here are some common ingredient substitutions:\n\n");
            for section in sections {
                let _ = writeln!(
                    out,
                    "**{}:** {}",
                    title_words(&section.ingredient),
                    section.substitutes.join(", ")
                );
            }
            out.push_str("\n*Ask about a specific ingredient for more options!*");
        }
    }
    out
}

fn render_technique(answer: &TechniqueAnswer) -> String {
    match answer {
        TechniqueAnswer::Detail { technique } => {
            let mut out = String::new();
            let _ = writeln!(out, "# {}\n", technique.name);
            let _ = writeln!(out, "{}\n", technique.description);
            out.push_str("**Best for:**\n");
            for item in &technique.best_for {
                let _ = writeln!(out, "- {item}");
            }
            out.push_str("\n**Tips:**\n");
            for tip in &technique.tips {
                let _ = writeln!(out, "- {tip}");
            }
            out
        }
        TechniqueAnswer::Overview { techniques } => {
            let mut out = String::from("# Cooking Techniques\n\n");
            for technique in techniques {
                let _ = writeln!(out, "### {}", technique.name);
                let _ = writeln!(out, "{}\n", technique.description);
            }
            out.push_str("*Ask about any technique for detailed tips!*");
            out
        }
        TechniqueAnswer::Unknown { requested, available } => {
            format!(
                "Technique '{}' not found. Available techniques: {}",
                requested,
                available.join(", ")
            )
        }
    }
}

fn render_conversion(answer: &ConversionAnswer) -> String {
    match answer {
        ConversionAnswer::Converted { conversion } => {
            format!(
                "{} {} = **{} {}**",
                conversion.amount, conversion.from_unit, conversion.result, conversion.to_unit
            )
        }
        ConversionAnswer::Reference { volume, weight, temperature } => {
            let mut out = String::from("# Cooking Measurement Conversions\n\n");
            for (heading, rows) in [
                ("Volume", volume),
                ("Weight", weight),
                ("Temperature", temperature),
            ] {
                let _ = writeln!(out, "## {heading}");
                out.push_str("| Measurement | Equivalent |\n|-------------|------------|\n");
                for row in rows {
                    let _ = writeln!(out, "| {} | {} |", row.measurement, row.equivalent);
                }
                out.push('\n');
            }
            out.push_str("*Need a specific conversion? Just ask!*");
            out
        }
    }
}

fn render_meal_plan(plan: &MealPlan) -> String {
    const DAY_NAMES: [&str; 7] = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ];
    let mut out = String::from("# Weekly Meal Plan\n\n");
    out.push_str("Here's a suggested meal plan with variety:\n\n");
    for day in &plan.days {
        let label = DAY_NAMES
            .get((day.day as usize).saturating_sub(1))
            .copied()
            .unwrap_or("Day");
        let _ = writeln!(out, "### {}: {}", label, day.recipe_name);
        let _ = writeln!(
            out,
            "*{}* | {} min\n",
            title_words(day.cuisine.as_str()),
            day.total_time_min
        );
    }
    out.push_str("---\n*Ask for any full recipe, or tell me your dietary preferences for a customized plan!*");
    out
}

fn render_nutrition(answer: &NutritionAnswer) -> String {
    let mut out = String::from("# Nutrition Information\n\n");
    match answer {
        NutritionAnswer::Recipe { recipe_name, per_serving } => {
            let _ = writeln!(out, "## {recipe_name} (per serving)\n");
            let _ = writeln!(out, "- **Calories:** {}", per_serving.calories);
            let _ = writeln!(out, "- **Protein:** {}g", per_serving.protein_g);
            let _ = writeln!(out, "- **Carbohydrates:** {}g", per_serving.carbs_g);
            let _ = writeln!(out, "- **Fat:** {}g", per_serving.fat_g);
            let _ = writeln!(out, "- **Fiber:** {}g", per_serving.fiber_g);
            let _ = writeln!(out, "- **Sodium:** {}mg", per_serving.sodium_mg);
        }
        NutritionAnswer::Unavailable { recipe_name } => {
            let _ = writeln!(out, "Nutrition information is not available for {recipe_name}.");
        }
        NutritionAnswer::Overview { rows } => {
            out.push_str("Here's nutrition info for our recipes:\n\n");
            for row in rows {
                let _ = writeln!(out, "**{}** ({} servings)", row.recipe_name, row.servings);
                let _ = writeln!(
                    out,
                    "Per serving: {} cal | {}g protein | {}g carbs | {}g fat\n",
                    row.per_serving.calories,
                    row.per_serving.protein_g,
                    row.per_serving.carbs_g,
                    row.per_serving.fat_g
                );
            }
        }
    }
    out
}

fn render_timing(answer: &TimingAnswer) -> String {
    match answer {
        TimingAnswer::Times { food, method, details } => {
            let mut out = String::new();
            let _ = writeln!(out, "# {} — {}\n", title_words(food), title_words(method));
            for detail in details {
                let _ = writeln!(out, "- **{}:** {}", title_words(&detail.label), detail.value);
            }
            out.push_str("\n*Always use a meat thermometer for safety!*");
            out
        }
        TimingAnswer::MethodsAvailable { food, methods } => {
            format!(
                "I have timings for {} with these methods: {}",
                title_words(food),
                methods.join(", ")
            )
        }
        TimingAnswer::NotFound { general_tip, available_foods } => {
            format!(
                "No specific timing found. {}. Foods I know: {}",
                general_tip,
                available_foods.join(", ")
            )
        }
    }
}

fn render_dietary(answer: &DietaryAnswer) -> String {
    match answer {
        DietaryAnswer::List { list, .. } => render_recipe_list(list),
        DietaryAnswer::Options { options } => {
            let mut out = String::from("# Dietary Options\n\n");
            out.push_str("I can find recipes for these dietary needs:\n\n");
            for option in options {
                let _ = writeln!(
                    out,
                    "- **{}** - {}",
                    title_words(option.tag.as_str()),
                    option.description
                );
            }
            out.push_str("\n*Just tell me your dietary needs!*");
            out
        }
    }
}

fn render_general(capabilities: &[String], examples: &[String]) -> String {
    let mut out = String::from("# Cooking Assistant\n\n");
    out.push_str("Hello! I can help you with:\n\n");
    for capability in capabilities {
        let _ = writeln!(out, "- {capability}");
    }
    out.push_str("\n**Try asking:**\n");
    for example in examples {
        let _ = writeln!(out, "- *\"{example}\"*");
    }
    out
}
