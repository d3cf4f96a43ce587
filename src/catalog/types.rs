//! Core catalog record types and closed enumerations.
//!
//! Cuisine, difficulty, and dietary tags are closed sets: string-to-enum
//! coercion fails explicitly with a [`CatalogError`] naming the offending
//! value rather than defaulting silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulty levels, in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Wire/display name, e.g. `"easy"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(CatalogError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }
}

/// Cuisine of origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Korean,
    Japanese,
    Chinese,
    Italian,
    Mexican,
    American,
    French,
    Thai,
    Indian,
    Mediterranean,
}

impl Cuisine {
    /// All cuisines, in catalog declaration order.
    pub const ALL: [Cuisine; 10] = [
        Cuisine::Korean,
        Cuisine::Japanese,
        Cuisine::Chinese,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::American,
        Cuisine::French,
        Cuisine::Thai,
        Cuisine::Indian,
        Cuisine::Mediterranean,
    ];

    /// Wire/display name, e.g. `"korean"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Korean => "korean",
            Self::Japanese => "japanese",
            Self::Chinese => "chinese",
            Self::Italian => "italian",
            Self::Mexican => "mexican",
            Self::American => "american",
            Self::French => "french",
            Self::Thai => "thai",
            Self::Indian => "indian",
            Self::Mediterranean => "mediterranean",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cuisine {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "korean" => Ok(Self::Korean),
            "japanese" => Ok(Self::Japanese),
            "chinese" => Ok(Self::Chinese),
            "italian" => Ok(Self::Italian),
            "mexican" => Ok(Self::Mexican),
            "american" => Ok(Self::American),
            "french" => Ok(Self::French),
            "thai" => Ok(Self::Thai),
            "indian" => Ok(Self::Indian),
            "mediterranean" => Ok(Self::Mediterranean),
            other => Err(CatalogError::UnknownCuisine {
                value: other.to_string(),
            }),
        }
    }
}

/// Dietary classification attached to a recipe. Membership matters, order
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    LowCarb,
    HighProtein,
    Keto,
    Paleo,
}

impl DietaryTag {
    /// All dietary tags, in declaration order.
    pub const ALL: [DietaryTag; 8] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
        DietaryTag::LowCarb,
        DietaryTag::HighProtein,
        DietaryTag::Keto,
        DietaryTag::Paleo,
    ];

    /// Wire/display name, e.g. `"gluten_free"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "gluten_free" | "gluten-free" => Ok(Self::GlutenFree),
            "dairy_free" | "dairy-free" => Ok(Self::DairyFree),
            "low_carb" | "low-carb" | "low carb" => Ok(Self::LowCarb),
            "high_protein" | "high-protein" | "high protein" => Ok(Self::HighProtein),
            "keto" => Ok(Self::Keto),
            "paleo" => Ok(Self::Paleo),
            other => Err(CatalogError::UnknownDietaryTag {
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single recipe ingredient.
///
/// Amount and unit are free text ("1/2", "to taste") and are display-only;
/// no canonical unit system ties them together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub substitutes: Vec<String>,
}

impl Ingredient {
    pub fn new(name: &str, amount: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            unit: unit.to_string(),
            notes: None,
            substitutes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn with_substitutes(mut self, substitutes: &[&str]) -> Self {
        self.substitutes = substitutes.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Nutritional information, always per serving.
///
/// Scaling by a serving count is the nutrition resolver's job; the catalog
/// never stores scaled values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sodium_mg: u32,
}

/// A complete recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable catalog key, unique across the catalog.
    pub id: String,
    pub name: String,
    pub description: String,
    pub cuisine: Cuisine,
    pub difficulty: Difficulty,
    pub prep_time_min: u32,
    pub cook_time_min: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    /// Ordered cooking steps; sequence is meaningful.
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    #[serde(default)]
    pub dietary_tags: Vec<DietaryTag>,
    pub nutrition: Option<NutritionInfo>,
}

impl Recipe {
    /// Total time in minutes. Derived, never stored separately.
    pub fn total_time_min(&self) -> u32 {
        self.prep_time_min + self.cook_time_min
    }

    /// Whether this recipe carries the given dietary tag.
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary_tags.contains(&tag)
    }
}

/// A cooking technique record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technique {
    /// Stable catalog key.
    pub id: String,
    pub name: String,
    pub description: String,
    pub best_for: Vec<String>,
    pub tips: Vec<String>,
}

/// Reference information about a pantry ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInfo {
    /// Stable catalog key.
    pub id: String,
    pub name: String,
    pub category: String,
    pub storage: String,
    pub substitutes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_round_trip_through_from_str() {
        for cuisine in Cuisine::ALL {
            assert_eq!(cuisine.as_str().parse::<Cuisine>().unwrap(), cuisine);
        }
        for difficulty in Difficulty::ALL {
            assert_eq!(
                difficulty.as_str().parse::<Difficulty>().unwrap(),
                difficulty
            );
        }
        for tag in DietaryTag::ALL {
            assert_eq!(tag.as_str().parse::<DietaryTag>().unwrap(), tag);
        }
    }

    #[test]
    fn unknown_enum_values_fail_explicitly() {
        assert!(matches!(
            "klingon".parse::<Cuisine>(),
            Err(CatalogError::UnknownCuisine { value }) if value == "klingon"
        ));
        assert!(matches!(
            "impossible".parse::<Difficulty>(),
            Err(CatalogError::UnknownDifficulty { .. })
        ));
        assert!(matches!(
            "carnivore".parse::<DietaryTag>(),
            Err(CatalogError::UnknownDietaryTag { .. })
        ));
    }

    #[test]
    fn dietary_tag_accepts_hyphenated_spellings() {
        assert_eq!(
            "gluten-free".parse::<DietaryTag>().unwrap(),
            DietaryTag::GlutenFree
        );
        assert_eq!(
            "low carb".parse::<DietaryTag>().unwrap(),
            DietaryTag::LowCarb
        );
    }

    #[test]
    fn total_time_is_derived() {
        let recipe = Recipe {
            id: "t".into(),
            name: "T".into(),
            description: String::new(),
            cuisine: Cuisine::Korean,
            difficulty: Difficulty::Easy,
            prep_time_min: 10,
            cook_time_min: 15,
            servings: 2,
            ingredients: vec![],
            instructions: vec![],
            tips: vec![],
            dietary_tags: vec![],
            nutrition: None,
        };
        assert_eq!(recipe.total_time_min(), 25);
    }
}
