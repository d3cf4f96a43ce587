//! Cooking time resolution.
//!
//! Times live in a static nested table of food → method → detail rows.
//! Food matching is a bidirectional substring test ("chicken" finds
//! "chicken_breast" and vice versa); method matching is exact after key
//! normalization. A food match without a method match reports the methods
//! the table does cover for that food.

use serde::Serialize;

/// food → [(method, [(label, value)])]
type FoodTimes = (&'static str, &'static [MethodTimes]);
type MethodTimes = (&'static str, &'static [(&'static str, &'static str)]);

const COOKING_TIMES: &[FoodTimes] = &[
    (
        "chicken_breast",
        &[
            (
                "bake",
                &[
                    ("temp", "375°F (190°C)"),
                    ("time", "20-25 min"),
                    ("internal_temp", "165°F (74°C)"),
                ],
            ),
            (
                "grill",
                &[
                    ("temp", "Medium-high"),
                    ("time", "6-8 min per side"),
                    ("internal_temp", "165°F (74°C)"),
                ],
            ),
            (
                "pan_fry",
                &[
                    ("temp", "Medium-high"),
                    ("time", "6-7 min per side"),
                    ("internal_temp", "165°F (74°C)"),
                ],
            ),
            (
                "poach",
                &[
                    ("temp", "Simmer"),
                    ("time", "15-20 min"),
                    ("internal_temp", "165°F (74°C)"),
                ],
            ),
        ],
    ),
    (
        "steak",
        &[
            (
                "grill",
                &[
                    ("rare", "2-3 min per side (125°F/52°C)"),
                    ("medium_rare", "3-4 min per side (135°F/57°C)"),
                    ("medium", "4-5 min per side (145°F/63°C)"),
                    ("well_done", "5-6 min per side (160°F/71°C)"),
                ],
            ),
            (
                "pan_sear",
                &[
                    ("rare", "2-3 min per side"),
                    ("medium_rare", "3-4 min per side"),
                    ("medium", "4-5 min per side"),
                ],
            ),
        ],
    ),
    (
        "eggs",
        &[
            (
                "boil",
                &[
                    ("soft_boil", "6-7 min"),
                    ("medium_boil", "9-10 min"),
                    ("hard_boil", "12-13 min"),
                ],
            ),
            (
                "fry",
                &[("sunny_side", "2-3 min"), ("over_easy", "1 min flip + 30 sec")],
            ),
            ("scramble", &[("time", "3-5 min"), ("tip", "Low heat, constantly stir")]),
            ("poach", &[("time", "3-4 min"), ("tip", "Simmer, don't boil")]),
        ],
    ),
    (
        "pasta",
        &[("boil", &[("dried", "8-12 min (check package)"), ("fresh", "2-4 min")])],
    ),
    (
        "rice",
        &[(
            "boil",
            &[
                ("white", "18-20 min"),
                ("brown", "40-45 min"),
                ("tip", "Let rest 5 min after cooking"),
            ],
        )],
    ),
    (
        "vegetables",
        &[
            (
                "steam",
                &[
                    ("broccoli", "5-7 min"),
                    ("carrots", "7-10 min"),
                    ("asparagus", "4-6 min"),
                ],
            ),
            (
                "roast",
                &[
                    ("temp", "400°F (200°C)"),
                    ("time", "20-30 min"),
                    ("tip", "Cut uniformly"),
                ],
            ),
            ("saute", &[("time", "5-8 min"), ("tip", "High heat, keep moving")]),
        ],
    ),
    (
        "fish",
        &[
            (
                "bake",
                &[("temp", "400°F (200°C)"), ("time", "10-12 min per inch thickness")],
            ),
            ("grill", &[("time", "3-4 min per side")]),
            ("pan_sear", &[("time", "3-4 min per side")]),
        ],
    ),
];

/// One label/value detail row, e.g. `("time", "20-25 min")`.
#[derive(Debug, Clone, Serialize)]
pub struct TimingDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimingAnswer {
    /// Food and method both matched.
    Times {
        food: String,
        method: String,
        details: Vec<TimingDetail>,
    },
    /// Food matched but the method is not in the table for it.
    MethodsAvailable { food: String, methods: Vec<String> },
    /// No food matched; guidance plus the foods the table covers.
    NotFound {
        general_tip: String,
        available_foods: Vec<String>,
    },
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

fn not_found() -> TimingAnswer {
    TimingAnswer::NotFound {
        general_tip: "Use a food thermometer for best results".to_string(),
        available_foods: COOKING_TIMES.iter().map(|(food, _)| food.to_string()).collect(),
    }
}

fn details_for(rows: &[(&str, &str)]) -> Vec<TimingDetail> {
    rows.iter()
        .map(|(label, value)| TimingDetail {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Look up cooking times for a food and method.
///
/// Food keys match bidirectionally by substring; the first table entry that
/// matches wins.
pub fn lookup(food: &str, method: &str) -> TimingAnswer {
    let food_key = normalize(food);
    let method_key = normalize(method);

    for (key, methods) in COOKING_TIMES {
        if food_key.contains(key) || key.contains(food_key.as_str()) {
            if let Some((name, rows)) = methods.iter().find(|(name, _)| *name == method_key) {
                return TimingAnswer::Times {
                    food: food.to_string(),
                    method: name.to_string(),
                    details: details_for(rows),
                };
            }
            return TimingAnswer::MethodsAvailable {
                food: food.to_string(),
                methods: methods.iter().map(|(name, _)| name.to_string()).collect(),
            };
        }
    }

    not_found()
}

/// Resolve a timing-intent utterance: scan it for a known food, then for a
/// method the table covers for that food.
pub fn resolve(utterance: &str) -> TimingAnswer {
    let lower = normalize(utterance);

    for (key, methods) in COOKING_TIMES {
        // the utterance was normalized, so "chicken breast" already reads as
        // the key; the leading segment catches bare "chicken"
        let short = key.split('_').next().unwrap_or(key);
        if lower.contains(key) || lower.contains(short) {
            if let Some((name, rows)) = methods
                .iter()
                .find(|(name, _)| lower.contains(name) || lower.contains(name.split('_').next().unwrap_or(name)))
            {
                return TimingAnswer::Times {
                    food: key.to_string(),
                    method: name.to_string(),
                    details: details_for(rows),
                };
            }
            return TimingAnswer::MethodsAvailable {
                food: key.to_string(),
                methods: methods.iter().map(|(name, _)| name.to_string()).collect(),
            };
        }
    }

    not_found()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_food_and_method() {
        match lookup("chicken_breast", "bake") {
            TimingAnswer::Times { details, .. } => {
                assert!(details.iter().any(|d| d.label == "time" && d.value == "20-25 min"));
            }
            other => panic!("expected times, got {other:?}"),
        }
    }

    #[test]
    fn food_matching_is_bidirectional_substring() {
        // "chicken" is a substring of the "chicken_breast" key
        assert!(matches!(lookup("chicken", "grill"), TimingAnswer::Times { .. }));
        // "chicken breast fillet" contains the key after normalization
        assert!(matches!(
            lookup("chicken breast fillet", "bake"),
            TimingAnswer::Times { .. }
        ));
    }

    #[test]
    fn method_normalization_folds_hyphens() {
        assert!(matches!(lookup("fish", "Pan-Sear"), TimingAnswer::Times { .. }));
    }

    #[test]
    fn unknown_method_reports_available_methods() {
        match lookup("steak", "microwave") {
            TimingAnswer::MethodsAvailable { methods, .. } => {
                assert_eq!(methods, vec!["grill".to_string(), "pan_sear".to_string()]);
            }
            other => panic!("expected methods, got {other:?}"),
        }
    }

    #[test]
    fn unknown_food_lists_known_foods() {
        match lookup("quinoa", "boil") {
            TimingAnswer::NotFound { available_foods, .. } => {
                assert_eq!(available_foods.len(), 7);
                assert!(available_foods.contains(&"pasta".to_string()));
            }
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[test]
    fn utterance_resolution_finds_food_and_method() {
        match resolve("how long should I bake chicken?") {
            TimingAnswer::Times { food, method, .. } => {
                assert_eq!(food, "chicken_breast");
                assert_eq!(method, "bake");
            }
            other => panic!("expected times, got {other:?}"),
        }
    }

    #[test]
    fn utterance_with_food_but_no_method_lists_methods() {
        match resolve("how long for eggs?") {
            TimingAnswer::MethodsAvailable { food, methods } => {
                assert_eq!(food, "eggs");
                assert!(methods.contains(&"boil".to_string()));
            }
            other => panic!("expected methods, got {other:?}"),
        }
    }

    #[test]
    fn utterance_without_known_food_gets_guidance() {
        assert!(matches!(
            resolve("how long does bread take?"),
            TimingAnswer::NotFound { .. }
        ));
    }
}
