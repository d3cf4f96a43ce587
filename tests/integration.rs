//! End-to-end tests for the full classify → resolve → reply pipeline.

use sous_chef::catalog::{Catalog, DietaryTag, SearchFilter};
use sous_chef::classify::{classify, Intent};
use sous_chef::convert::convert;
use sous_chef::error::{ChefError, ConvertError, NutritionError};
use sous_chef::render::render;
use sous_chef::resolve::{
    meal_plan, nutrition, substitute, ConversionAnswer, DietaryAnswer, NutritionAnswer, Reply,
    SubstituteLookup, SubstitutionAnswer, TimingAnswer,
};
use sous_chef::Assistant;

// ── Classification ────────────────────────────────────────────────────────

#[test]
fn classification_respects_rule_priority() {
    // "make" fires the recipe rule before "time" can fire the timing rule
    assert_eq!(classify("how do I make dinner in no time"), Intent::RecipeQuery);
    // substitution beats the conversion keyword "ml"
    assert_eq!(classify("substitute for 100 ml of milk"), Intent::Substitution);
    // no keyword at all falls through to general
    assert_eq!(classify("good morning"), Intent::General);
}

#[test]
fn every_intent_is_reachable() {
    let cases = [
        ("recipe for dumplings", Intent::RecipeQuery),
        ("what can replace butter", Intent::Substitution),
        ("how to roast vegetables", Intent::Technique),
        ("convert 3 tsp to tbsp", Intent::Conversion),
        ("plan meals for the week", Intent::MealPlan),
        ("protein content of salmon", Intent::Nutrition),
        ("how long for the stew", Intent::Timing),
        ("keto friendly ideas", Intent::Dietary),
        ("hi", Intent::General),
    ];
    for (utterance, expected) in cases {
        assert_eq!(classify(utterance), expected, "{utterance:?}");
    }
}

// ── Conversion laws ───────────────────────────────────────────────────────

#[test]
fn volume_conversions_round_trip() {
    let there = convert(2.0, "cup", "ml").unwrap().result;
    let back = convert(there, "ml", "cup").unwrap().result;
    assert!((back - 2.0).abs() < 0.01);
}

#[test]
fn temperature_fixed_points_hold() {
    assert_eq!(convert(0.0, "c", "f").unwrap().result, 32.0);
    assert_eq!(convert(100.0, "c", "f").unwrap().result, 212.0);
    assert_eq!(convert(32.0, "f", "c").unwrap().result, 0.0);
}

#[test]
fn cross_family_conversion_is_an_error() {
    let err = convert(1.0, "cup", "g").unwrap_err();
    assert!(matches!(err, ConvertError::IncompatibleUnits { .. }));
    // and it carries through the top-level error type
    let chef: ChefError = err.into();
    assert!(chef.to_string().contains("cup"));
}

// ── Catalog and dietary filtering ─────────────────────────────────────────

#[test]
fn vegan_filter_finds_the_vegan_recipes() {
    let catalog = Catalog::builtin();
    let vegan = catalog.search(&SearchFilter {
        dietary_tags: vec![DietaryTag::Vegan],
        ..SearchFilter::default()
    });
    let ids: Vec<&str> = vegan.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["vegetable_curry", "miso_soup"]);
}

#[test]
fn dietary_chat_turn_lists_and_remembers() {
    let assistant = Assistant::new();
    let reply = assistant.answer("diet", "only vegan food for me").unwrap();
    match reply {
        Reply::Dietary(DietaryAnswer::List { tag, list }) => {
            assert_eq!(tag, DietaryTag::Vegan);
            assert_eq!(list.total, 2);
        }
        other => panic!("expected dietary list, got {other:?}"),
    }
    let ctx = assistant.session("diet").unwrap();
    assert_eq!(ctx.dietary_preferences, vec![DietaryTag::Vegan]);
}

// ── Meal planning ─────────────────────────────────────────────────────────

#[test]
fn meal_plans_are_deterministic() {
    let catalog = Catalog::builtin();
    let first = meal_plan::plan(&catalog, 7, &[], true);
    let second = meal_plan::plan(&catalog, 7, &[], true);
    assert_eq!(
        first.days.iter().map(|d| &d.recipe_id).collect::<Vec<_>>(),
        second.days.iter().map(|d| &d.recipe_id).collect::<Vec<_>>(),
    );
}

#[test]
fn preference_filtered_plan_falls_back_when_unsatisfiable() {
    let catalog = Catalog::builtin();
    let plan = meal_plan::plan(&catalog, 5, &[DietaryTag::Paleo], true);
    assert_eq!(plan.days.len(), 5, "fallback pool must still fill the plan");
}

// ── Nutrition ─────────────────────────────────────────────────────────────

#[test]
fn nutrition_scales_linearly() {
    let catalog = Catalog::builtin();
    let recipe = catalog.recipe("kimchi_fried_rice").unwrap();
    let doubled = nutrition::scale(recipe, 2).unwrap().unwrap();
    assert_eq!(doubled.calories, 1040);
    assert_eq!(doubled.carbs_g, 124.0);
}

#[test]
fn nutrition_rejects_non_positive_servings() {
    let catalog = Catalog::builtin();
    let recipe = catalog.recipe("miso_soup").unwrap();
    assert!(matches!(
        nutrition::scale(recipe, 0),
        Err(NutritionError::InvalidServings { servings: 0 })
    ));
}

#[test]
fn nutrition_scaling_handles_large_serving_counts() {
    let catalog = Catalog::builtin();
    let recipe = catalog.recipe("kimchi_fried_rice").unwrap();
    let scaled = nutrition::scale(recipe, 1_000_000).unwrap().unwrap();
    assert_eq!(scaled.servings, 1_000_000);
    assert_eq!(scaled.calories, 520_000_000);
    assert!(matches!(
        nutrition::scale(recipe, 10_000_000),
        Err(NutritionError::InvalidServings { .. })
    ));
}

#[test]
fn unnamed_nutrition_questions_get_the_overview() {
    let assistant = Assistant::new();
    // viewing a recipe first must not change the answer shape
    assistant.answer("n", "show me the french omelette recipe").unwrap();
    let reply = assistant.answer("n", "what is healthy to eat?").unwrap();
    match reply {
        Reply::Nutrition(NutritionAnswer::Overview { rows }) => assert_eq!(rows.len(), 10),
        other => panic!("expected the nutrition overview, got {other:?}"),
    }
}

#[test]
fn named_nutrition_questions_answer_for_that_recipe() {
    let assistant = Assistant::new();
    let reply = assistant
        .answer("n2", "how many calories in the french omelette?")
        .unwrap();
    match reply {
        Reply::Nutrition(NutritionAnswer::Recipe { recipe_name, per_serving }) => {
            assert_eq!(recipe_name, "Classic French Omelette");
            assert_eq!(per_serving.calories, 310);
        }
        other => panic!("expected nutrition for the named recipe, got {other:?}"),
    }
}

// ── Substitution ──────────────────────────────────────────────────────────

#[test]
fn egg_substitution_is_never_empty() {
    let assistant = Assistant::new();
    let reply = assistant.answer("s", "what can I use instead of egg?").unwrap();
    match reply {
        Reply::Substitutions(SubstitutionAnswer::Matches { sections }) => {
            assert!(sections.iter().any(|s| s.ingredient == "egg" && !s.substitutes.is_empty()));
        }
        other => panic!("expected substitution matches, got {other:?}"),
    }
}

#[test]
fn unknown_ingredient_yields_default_guide() {
    let assistant = Assistant::new();
    let reply = assistant.answer("s", "alternative to saffron?").unwrap();
    assert!(matches!(
        reply,
        Reply::Substitutions(SubstitutionAnswer::DefaultGuide { .. })
    ));
}

#[test]
fn direct_lookup_walks_the_precedence_chain() {
    let catalog = Catalog::builtin();
    assert!(matches!(
        substitute::lookup(&catalog, "butter"),
        SubstituteLookup::Pantry { .. }
    ));
    assert!(matches!(
        substitute::lookup(&catalog, "achiote"),
        SubstituteLookup::NotFound { .. }
    ));
}

// ── Full chat turns ───────────────────────────────────────────────────────

#[test]
fn chat_turn_conversion_request_is_answered_inline() {
    let assistant = Assistant::new();
    let reply = assistant.answer("c", "convert 2 cups to ml").unwrap();
    match reply {
        Reply::Conversion(ConversionAnswer::Converted { conversion }) => {
            assert_eq!(conversion.result, 473.18);
        }
        other => panic!("expected an inline conversion, got {other:?}"),
    }
}

#[test]
fn chat_turn_timing_question_finds_food_and_method() {
    let assistant = Assistant::new();
    let reply = assistant.answer("t", "how long should I bake chicken?").unwrap();
    match reply {
        Reply::Timing(TimingAnswer::Times { food, method, details }) => {
            assert_eq!(food, "chicken_breast");
            assert_eq!(method, "bake");
            assert!(!details.is_empty());
        }
        other => panic!("expected timing details, got {other:?}"),
    }
}

#[test]
fn recipe_detail_turn_renders_full_markdown() {
    let assistant = Assistant::new();
    let reply = assistant.answer("r", "how do I make pad thai?").unwrap();
    let text = render(&reply);
    assert!(text.contains("# Pad Thai"));
    assert!(text.contains("## Ingredients"));
    assert!(text.contains("## Instructions"));
}

#[test]
fn sessions_are_isolated_and_resettable() {
    let assistant = Assistant::new();
    assistant.answer("a", "recipe for greek salad").unwrap();
    assistant.answer("b", "recipe for miso soup").unwrap();

    assert_eq!(
        assistant.session("a").unwrap().current_recipe.as_deref(),
        Some("greek_salad")
    );
    assert_eq!(
        assistant.session("b").unwrap().current_recipe.as_deref(),
        Some("miso_soup")
    );

    assert!(assistant.reset_session("a"));
    assert!(assistant.session("a").is_none());
    // b untouched
    assert!(assistant.session("b").is_some());
}

#[test]
fn search_history_is_recorded_for_lists() {
    let assistant = Assistant::new();
    assistant.answer("h", "show me italian recipes").unwrap();
    let ctx = assistant.session("h").unwrap();
    assert!(ctx.searched_recipes.contains(&"pasta_aglio_olio".to_string()));
}

#[test]
fn general_turn_offers_capabilities() {
    let assistant = Assistant::new();
    let reply = assistant.answer("g", "hey!").unwrap();
    match &reply {
        Reply::General { capabilities, examples } => {
            assert!(!capabilities.is_empty());
            assert!(!examples.is_empty());
        }
        other => panic!("expected the capability overview, got {other:?}"),
    }
    assert!(render(&reply).contains("Try asking"));
}
