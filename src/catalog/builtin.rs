//! The bundled catalog dataset: recipes, pantry ingredients, and techniques.
//!
//! Declaration order is load-bearing: the catalog preserves it, list results
//! are capped in it, and meal-plan generation indexes into it.

use super::types::{
    Cuisine, DietaryTag, Difficulty, Ingredient, IngredientInfo, NutritionInfo, Recipe, Technique,
};

fn ing(name: &str, amount: &str, unit: &str) -> Ingredient {
    Ingredient::new(name, amount, unit)
}

/// All bundled recipes, in catalog order.
pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "kimchi_fried_rice".into(),
            name: "Kimchi Fried Rice (Kimchi Bokkeumbap)".into(),
            description: "A quick and flavorful Korean fried rice dish made with aged kimchi, \
                          perfect for using up leftover rice."
                .into(),
            cuisine: Cuisine::Korean,
            difficulty: Difficulty::Easy,
            prep_time_min: 10,
            cook_time_min: 15,
            servings: 2,
            ingredients: vec![
                ing("Cooked rice (day-old preferred)", "3", "cups").with_notes("Cold rice works best"),
                ing("Kimchi (aged)", "1", "cup")
                    .with_notes("Chopped")
                    .with_substitutes(&["Fresh cabbage with gochugaru"]),
                ing("Kimchi juice", "2", "tbsp"),
                ing("Pork belly or bacon", "100", "g")
                    .with_notes("Diced")
                    .with_substitutes(&["Spam", "Tofu for vegetarian"]),
                ing("Vegetable oil", "2", "tbsp"),
                ing("Sesame oil", "1", "tbsp"),
                ing("Soy sauce", "1", "tbsp"),
                ing("Green onions", "2", "stalks").with_notes("Chopped"),
                ing("Eggs", "2", "").with_notes("For topping"),
                ing("Sesame seeds", "1", "tsp").with_notes("For garnish"),
            ],
            instructions: vec![
                "Heat vegetable oil in a large pan or wok over high heat.".into(),
                "Add diced pork belly and cook until crispy, about 3-4 minutes.".into(),
                "Add chopped kimchi and stir-fry for 2-3 minutes until slightly caramelized.".into(),
                "Add the cold rice, breaking up any clumps with your spatula.".into(),
                "Pour in kimchi juice and soy sauce, mixing everything well.".into(),
                "Stir-fry for 3-4 minutes until rice is heated through and slightly crispy.".into(),
                "Drizzle sesame oil and add green onions, tossing to combine.".into(),
                "In a separate pan, fry eggs sunny-side up.".into(),
                "Serve rice in bowls, top with fried egg and sesame seeds.".into(),
            ],
            tips: vec![
                "Day-old refrigerated rice works best as it's drier and won't get mushy".into(),
                "Use well-aged, sour kimchi for the best flavor".into(),
                "Add gochujang for extra spiciness".into(),
                "Top with nori strips for extra umami".into(),
            ],
            dietary_tags: vec![DietaryTag::HighProtein],
            nutrition: Some(NutritionInfo {
                calories: 520,
                protein_g: 18.0,
                carbs_g: 62.0,
                fat_g: 22.0,
                fiber_g: 3.0,
                sodium_mg: 980,
            }),
        },
        Recipe {
            id: "pasta_aglio_olio".into(),
            name: "Pasta Aglio e Olio".into(),
            description: "Classic Italian pasta with garlic and olive oil - simple, quick, and \
                          incredibly delicious."
                .into(),
            cuisine: Cuisine::Italian,
            difficulty: Difficulty::Easy,
            prep_time_min: 5,
            cook_time_min: 15,
            servings: 4,
            ingredients: vec![
                ing("Spaghetti", "400", "g"),
                ing("Extra virgin olive oil", "1/2", "cup"),
                ing("Garlic", "8", "cloves").with_notes("Thinly sliced"),
                ing("Red pepper flakes", "1/2", "tsp").with_notes("Adjust to taste"),
                ing("Fresh parsley", "1/4", "cup").with_notes("Chopped"),
                ing("Salt", "1", "tbsp").with_notes("For pasta water"),
                ing("Parmesan cheese", "1/4", "cup")
                    .with_notes("Grated, optional")
                    .with_substitutes(&["Nutritional yeast for vegan"]),
                ing("Black pepper", "", "").with_notes("To taste"),
            ],
            instructions: vec![
                "Bring a large pot of salted water to boil and cook spaghetti according to \
                 package directions until al dente."
                    .into(),
                "While pasta cooks, heat olive oil in a large pan over medium-low heat.".into(),
                "Add sliced garlic and cook slowly, stirring occasionally, until golden (not \
                 brown), about 4-5 minutes."
                    .into(),
                "Add red pepper flakes to the oil and remove from heat.".into(),
                "Reserve 1 cup of pasta water before draining the spaghetti.".into(),
                "Add drained pasta directly to the garlic oil pan.".into(),
                "Toss well, adding pasta water a little at a time to create a light sauce.".into(),
                "Add parsley and toss again.".into(),
                "Serve immediately with Parmesan and black pepper.".into(),
            ],
            tips: vec![
                "Cook garlic low and slow - burnt garlic will make the dish bitter".into(),
                "Save pasta water! The starch helps create a silky sauce".into(),
                "Use good quality extra virgin olive oil as it's the star of this dish".into(),
                "Adding a squeeze of lemon juice at the end brightens the flavors".into(),
            ],
            dietary_tags: vec![DietaryTag::Vegetarian],
            nutrition: Some(NutritionInfo {
                calories: 450,
                protein_g: 11.0,
                carbs_g: 56.0,
                fat_g: 20.0,
                fiber_g: 3.0,
                sodium_mg: 320,
            }),
        },
        Recipe {
            id: "chicken_stir_fry".into(),
            name: "Easy Chicken Stir-Fry".into(),
            description: "A quick and healthy chicken stir-fry with colorful vegetables in a \
                          savory sauce."
                .into(),
            cuisine: Cuisine::Chinese,
            difficulty: Difficulty::Easy,
            prep_time_min: 15,
            cook_time_min: 10,
            servings: 4,
            ingredients: vec![
                ing("Chicken breast", "500", "g")
                    .with_notes("Sliced thin")
                    .with_substitutes(&["Tofu", "Shrimp"]),
                ing("Bell peppers", "2", "").with_notes("Mixed colors, sliced"),
                ing("Broccoli florets", "2", "cups"),
                ing("Carrots", "2", "").with_notes("Sliced diagonally"),
                ing("Garlic", "3", "cloves").with_notes("Minced"),
                ing("Ginger", "1", "tbsp").with_notes("Minced"),
                ing("Soy sauce", "3", "tbsp"),
                ing("Oyster sauce", "2", "tbsp").with_substitutes(&["Hoisin sauce"]),
                ing("Sesame oil", "1", "tbsp"),
                ing("Cornstarch", "1", "tbsp"),
                ing("Vegetable oil", "2", "tbsp"),
                ing("Chicken broth", "1/4", "cup"),
            ],
            instructions: vec![
                "Mix soy sauce, oyster sauce, sesame oil, cornstarch, and chicken broth in a \
                 bowl for the sauce."
                    .into(),
                "Heat 1 tbsp oil in a wok or large pan over high heat.".into(),
                "Add chicken and stir-fry until cooked through, about 4-5 minutes. Remove and \
                 set aside."
                    .into(),
                "Add remaining oil to the pan. Stir-fry garlic and ginger for 30 seconds.".into(),
                "Add carrots and broccoli, stir-fry for 2 minutes.".into(),
                "Add bell peppers, stir-fry for another 2 minutes.".into(),
                "Return chicken to the pan.".into(),
                "Pour sauce over everything and toss until sauce thickens and coats all \
                 ingredients."
                    .into(),
                "Serve immediately over steamed rice.".into(),
            ],
            tips: vec![
                "Cut all ingredients to similar sizes for even cooking".into(),
                "Don't overcrowd the pan - cook in batches if needed".into(),
                "High heat is key for that restaurant-style sear".into(),
                "Prep everything before you start cooking - stir-frying is fast!".into(),
            ],
            dietary_tags: vec![DietaryTag::HighProtein, DietaryTag::DairyFree],
            nutrition: Some(NutritionInfo {
                calories: 320,
                protein_g: 35.0,
                carbs_g: 18.0,
                fat_g: 12.0,
                fiber_g: 4.0,
                sodium_mg: 890,
            }),
        },
        Recipe {
            id: "tacos_al_pastor".into(),
            name: "Tacos al Pastor".into(),
            description: "Traditional Mexican tacos with marinated pork, pineapple, and fresh \
                          toppings."
                .into(),
            cuisine: Cuisine::Mexican,
            difficulty: Difficulty::Medium,
            prep_time_min: 30,
            cook_time_min: 20,
            servings: 6,
            ingredients: vec![
                ing("Pork shoulder", "700", "g").with_notes("Sliced thin"),
                ing("Dried guajillo chiles", "4", "").with_notes("Stemmed and seeded"),
                ing("Achiote paste", "2", "tbsp"),
                ing("Pineapple", "1/2", "").with_notes("Cubed"),
                ing("White onion", "1", "").with_notes("Quartered"),
                ing("Garlic", "4", "cloves"),
                ing("Apple cider vinegar", "2", "tbsp"),
                ing("Cumin", "1", "tsp"),
                ing("Oregano", "1", "tsp"),
                ing("Corn tortillas", "12", "").with_notes("Small"),
                ing("Fresh cilantro", "1/2", "cup").with_notes("Chopped"),
                ing("White onion", "1/2", "").with_notes("Diced, for topping"),
                ing("Lime wedges", "6", ""),
            ],
            instructions: vec![
                "Rehydrate guajillo chiles in hot water for 15 minutes.".into(),
                "Blend soaked chiles with achiote paste, 1/4 onion, garlic, vinegar, cumin, \
                 oregano, and 1/2 cup water until smooth."
                    .into(),
                "Marinate sliced pork in the chile mixture for at least 2 hours (overnight is \
                 best)."
                    .into(),
                "Heat a large skillet or grill pan over high heat.".into(),
                "Cook marinated pork in batches until charred and cooked through, about 3-4 \
                 minutes per side."
                    .into(),
                "In the same pan, quickly sear pineapple cubes until caramelized.".into(),
                "Chop cooked pork and pineapple together.".into(),
                "Warm tortillas on a dry pan.".into(),
                "Serve pork and pineapple on tortillas with cilantro, diced onion, and lime.".into(),
            ],
            tips: vec![
                "Freeze pork slightly for easier thin slicing".into(),
                "Marinate overnight for the most flavorful tacos".into(),
                "Char the pineapple for authentic flavor".into(),
                "Double the corn tortillas for structural integrity".into(),
            ],
            dietary_tags: vec![DietaryTag::DairyFree, DietaryTag::GlutenFree],
            nutrition: Some(NutritionInfo {
                calories: 380,
                protein_g: 28.0,
                carbs_g: 32.0,
                fat_g: 15.0,
                fiber_g: 4.0,
                sodium_mg: 420,
            }),
        },
        Recipe {
            id: "vegetable_curry".into(),
            name: "Vegetable Curry".into(),
            description: "A rich and aromatic vegetable curry with coconut milk, perfect for a \
                          comforting meal."
                .into(),
            cuisine: Cuisine::Indian,
            difficulty: Difficulty::Medium,
            prep_time_min: 20,
            cook_time_min: 30,
            servings: 4,
            ingredients: vec![
                ing("Chickpeas", "1", "can")
                    .with_notes("Drained")
                    .with_substitutes(&["Tofu cubes"]),
                ing("Cauliflower", "2", "cups").with_notes("Cut into florets"),
                ing("Potatoes", "2", "medium").with_notes("Cubed"),
                ing("Spinach", "2", "cups").with_notes("Fresh"),
                ing("Coconut milk", "400", "ml"),
                ing("Diced tomatoes", "1", "can"),
                ing("Onion", "1", "large").with_notes("Diced"),
                ing("Garlic", "4", "cloves").with_notes("Minced"),
                ing("Ginger", "2", "tbsp").with_notes("Grated"),
                ing("Curry powder", "2", "tbsp"),
                ing("Garam masala", "1", "tsp"),
                ing("Turmeric", "1", "tsp"),
                ing("Cumin", "1", "tsp"),
                ing("Vegetable oil", "2", "tbsp"),
                ing("Salt", "", "").with_notes("To taste"),
            ],
            instructions: vec![
                "Heat oil in a large pot over medium heat. Add onion and cook until softened, \
                 about 5 minutes."
                    .into(),
                "Add garlic and ginger, cook for 1 minute until fragrant.".into(),
                "Add curry powder, garam masala, turmeric, and cumin. Stir for 30 seconds.".into(),
                "Add potatoes and cauliflower, stirring to coat with spices.".into(),
                "Pour in diced tomatoes and coconut milk. Bring to a simmer.".into(),
                "Cover and cook for 15-20 minutes until vegetables are tender.".into(),
                "Add chickpeas and spinach, cook for another 5 minutes.".into(),
                "Season with salt to taste.".into(),
                "Serve over basmati rice with naan bread on the side.".into(),
            ],
            tips: vec![
                "Toast the spices briefly in oil to bloom their flavors".into(),
                "Add a splash of lime juice at the end for brightness".into(),
                "Adjust consistency with vegetable broth if too thick".into(),
                "Top with fresh cilantro and a dollop of yogurt".into(),
            ],
            dietary_tags: vec![
                DietaryTag::Vegan,
                DietaryTag::Vegetarian,
                DietaryTag::GlutenFree,
                DietaryTag::DairyFree,
            ],
            nutrition: Some(NutritionInfo {
                calories: 380,
                protein_g: 12.0,
                carbs_g: 42.0,
                fat_g: 20.0,
                fiber_g: 9.0,
                sodium_mg: 580,
            }),
        },
        Recipe {
            id: "pad_thai".into(),
            name: "Pad Thai".into(),
            description: "Thailand's famous stir-fried noodle dish with a perfect balance of \
                          sweet, sour, and savory flavors."
                .into(),
            cuisine: Cuisine::Thai,
            difficulty: Difficulty::Medium,
            prep_time_min: 20,
            cook_time_min: 15,
            servings: 4,
            ingredients: vec![
                ing("Rice noodles (flat)", "250", "g"),
                ing("Shrimp or chicken", "200", "g").with_substitutes(&["Tofu for vegetarian"]),
                ing("Eggs", "2", ""),
                ing("Bean sprouts", "1", "cup"),
                ing("Green onions", "3", "stalks").with_notes("Cut into 2-inch pieces"),
                ing("Garlic", "3", "cloves").with_notes("Minced"),
                ing("Tamarind paste", "2", "tbsp"),
                ing("Fish sauce", "2", "tbsp").with_substitutes(&["Soy sauce for vegetarian"]),
                ing("Palm sugar", "2", "tbsp").with_substitutes(&["Brown sugar"]),
                ing("Rice vinegar", "1", "tbsp"),
                ing("Chili flakes", "1/2", "tsp"),
                ing("Vegetable oil", "3", "tbsp"),
                ing("Crushed peanuts", "1/4", "cup"),
                ing("Lime wedges", "4", ""),
                ing("Fresh cilantro", "", "").with_notes("For garnish"),
            ],
            instructions: vec![
                "Soak rice noodles in warm water for 30-40 minutes until pliable. Drain.".into(),
                "Mix tamarind paste, fish sauce, palm sugar, and rice vinegar for the sauce.".into(),
                "Heat 1 tbsp oil in a wok over high heat. Scramble eggs and set aside.".into(),
                "Add remaining oil. Stir-fry protein until cooked. Set aside.".into(),
                "Add garlic to the wok, fry for 30 seconds.".into(),
                "Add drained noodles and the sauce. Toss continuously for 2-3 minutes.".into(),
                "Return eggs and protein to the wok.".into(),
                "Add bean sprouts and green onions, toss for 1 minute.".into(),
                "Serve topped with peanuts, cilantro, and lime wedges.".into(),
            ],
            tips: vec![
                "Don't over-soak noodles - they should be pliable but firm".into(),
                "High heat is essential for authentic wok hei flavor".into(),
                "Cook in batches if making large quantities".into(),
                "Serve immediately - pad thai doesn't keep well".into(),
            ],
            dietary_tags: vec![DietaryTag::DairyFree],
            nutrition: Some(NutritionInfo {
                calories: 420,
                protein_g: 22.0,
                carbs_g: 48.0,
                fat_g: 16.0,
                fiber_g: 3.0,
                sodium_mg: 1100,
            }),
        },
        Recipe {
            id: "caesar_salad".into(),
            name: "Classic Caesar Salad".into(),
            description: "Crisp romaine lettuce with creamy Caesar dressing, crunchy croutons, \
                          and Parmesan."
                .into(),
            cuisine: Cuisine::American,
            difficulty: Difficulty::Easy,
            prep_time_min: 15,
            cook_time_min: 10,
            servings: 4,
            ingredients: vec![
                ing("Romaine lettuce", "2", "heads").with_notes("Chopped"),
                ing("Egg yolks", "2", "").with_notes("Pasteurized"),
                ing("Garlic", "2", "cloves").with_notes("Minced"),
                ing("Anchovy fillets", "3", "").with_substitutes(&["1 tbsp anchovy paste"]),
                ing("Dijon mustard", "1", "tsp"),
                ing("Lemon juice", "2", "tbsp"),
                ing("Worcestershire sauce", "1", "tsp"),
                ing("Olive oil", "1/2", "cup"),
                ing("Parmesan cheese", "1/2", "cup").with_notes("Freshly grated"),
                ing("Bread", "4", "slices").with_notes("Cubed for croutons"),
                ing("Butter", "2", "tbsp"),
                ing("Black pepper", "", "").with_notes("To taste"),
            ],
            instructions: vec![
                "For croutons: Cube bread, toss with melted butter. Bake at 375°F (190°C) for \
                 10-12 minutes until golden."
                    .into(),
                "For dressing: Mash anchovies and garlic into a paste.".into(),
                "Whisk in egg yolks, mustard, lemon juice, and Worcestershire sauce.".into(),
                "Slowly drizzle in olive oil while whisking to emulsify.".into(),
                "Stir in half the Parmesan cheese.".into(),
                "In a large bowl, toss romaine with dressing.".into(),
                "Add croutons and toss again.".into(),
                "Top with remaining Parmesan and fresh black pepper.".into(),
                "Serve immediately.".into(),
            ],
            tips: vec![
                "Use pasteurized eggs for food safety".into(),
                "Make dressing in advance - it keeps well refrigerated".into(),
                "Tear lettuce by hand for better texture".into(),
                "Add grilled chicken for a complete meal".into(),
            ],
            dietary_tags: vec![DietaryTag::Vegetarian],
            nutrition: Some(NutritionInfo {
                calories: 380,
                protein_g: 12.0,
                carbs_g: 18.0,
                fat_g: 30.0,
                fiber_g: 4.0,
                sodium_mg: 680,
            }),
        },
        Recipe {
            id: "miso_soup".into(),
            name: "Miso Soup".into(),
            description: "Traditional Japanese soup with miso paste, tofu, and wakame seaweed."
                .into(),
            cuisine: Cuisine::Japanese,
            difficulty: Difficulty::Easy,
            prep_time_min: 10,
            cook_time_min: 10,
            servings: 4,
            ingredients: vec![
                ing("Dashi stock", "4", "cups")
                    .with_substitutes(&["4 cups water + 1 tbsp dashi powder"]),
                ing("White miso paste", "3", "tbsp"),
                ing("Silken tofu", "200", "g").with_notes("Cubed"),
                ing("Dried wakame seaweed", "2", "tbsp"),
                ing("Green onions", "2", "stalks").with_notes("Thinly sliced"),
            ],
            instructions: vec![
                "Rehydrate wakame in water for 5 minutes, then drain.".into(),
                "Bring dashi stock to a gentle simmer in a pot.".into(),
                "Add tofu cubes and wakame, simmer for 2 minutes.".into(),
                "Remove pot from heat.".into(),
                "Place miso paste in a ladle, lower into broth, and stir to dissolve. Do not \
                 boil after adding miso."
                    .into(),
                "Serve in bowls topped with green onions.".into(),
            ],
            tips: vec![
                "Never boil miso - it destroys the flavor and probiotics".into(),
                "Use a combination of white and red miso for depth".into(),
                "Add other ingredients like mushrooms, clams, or vegetables".into(),
                "Homemade dashi makes a significant difference".into(),
            ],
            dietary_tags: vec![
                DietaryTag::Vegetarian,
                DietaryTag::Vegan,
                DietaryTag::LowCarb,
            ],
            nutrition: Some(NutritionInfo {
                calories: 85,
                protein_g: 6.0,
                carbs_g: 8.0,
                fat_g: 3.0,
                fiber_g: 2.0,
                sodium_mg: 720,
            }),
        },
        Recipe {
            id: "french_omelette".into(),
            name: "Classic French Omelette".into(),
            description: "A perfectly cooked, silky French-style omelette with soft, creamy \
                          curds."
                .into(),
            cuisine: Cuisine::French,
            difficulty: Difficulty::Medium,
            prep_time_min: 5,
            cook_time_min: 5,
            servings: 1,
            ingredients: vec![
                ing("Eggs", "3", "").with_notes("Room temperature"),
                ing("Butter", "1", "tbsp"),
                ing("Salt", "1/8", "tsp"),
                ing("White pepper", "", "").with_notes("Pinch"),
                ing("Chives", "1", "tbsp").with_notes("Finely chopped, optional"),
                ing("Gruyere cheese", "2", "tbsp").with_notes("Grated, optional"),
            ],
            instructions: vec![
                "Beat eggs with salt and pepper until just combined - don't overbeat.".into(),
                "Heat an 8-inch non-stick pan over medium-high heat.".into(),
                "Add butter and swirl to coat the pan as it melts and foams.".into(),
                "When foam subsides, add eggs.".into(),
                "Immediately stir eggs with a fork or chopsticks while shaking the pan.".into(),
                "When eggs are almost set but still creamy, stop stirring.".into(),
                "Add cheese and chives if using to the center.".into(),
                "Tilt pan and use a spatula to fold the omelette in thirds onto a plate.".into(),
                "Serve immediately with a small pat of butter on top.".into(),
            ],
            tips: vec![
                "Room temperature eggs cook more evenly".into(),
                "Medium-high heat and constant movement create the signature curds".into(),
                "The whole process should take under 2 minutes".into(),
                "Practice makes perfect - don't be discouraged by first attempts".into(),
            ],
            dietary_tags: vec![
                DietaryTag::Vegetarian,
                DietaryTag::LowCarb,
                DietaryTag::Keto,
                DietaryTag::GlutenFree,
            ],
            nutrition: Some(NutritionInfo {
                calories: 310,
                protein_g: 18.0,
                carbs_g: 1.0,
                fat_g: 26.0,
                fiber_g: 0.0,
                sodium_mg: 450,
            }),
        },
        Recipe {
            id: "greek_salad".into(),
            name: "Greek Salad (Horiatiki)".into(),
            description: "Fresh Mediterranean salad with tomatoes, cucumbers, olives, and feta \
                          cheese."
                .into(),
            cuisine: Cuisine::Mediterranean,
            difficulty: Difficulty::Easy,
            prep_time_min: 15,
            cook_time_min: 0,
            servings: 4,
            ingredients: vec![
                ing("Tomatoes", "4", "large").with_notes("Cut into wedges"),
                ing("Cucumber", "1", "large").with_notes("Sliced"),
                ing("Red onion", "1", "small").with_notes("Thinly sliced"),
                ing("Green bell pepper", "1", "").with_notes("Sliced"),
                ing("Kalamata olives", "1/2", "cup"),
                ing("Feta cheese", "200", "g").with_notes("Block, not crumbled"),
                ing("Extra virgin olive oil", "4", "tbsp"),
                ing("Red wine vinegar", "1", "tbsp"),
                ing("Dried oregano", "1", "tsp"),
                ing("Salt", "", "").with_notes("To taste"),
            ],
            instructions: vec![
                "Cut tomatoes into large wedges and place in a bowl.".into(),
                "Add sliced cucumber, red onion, and bell pepper.".into(),
                "Add olives to the bowl.".into(),
                "Season with salt and dried oregano.".into(),
                "Drizzle with olive oil and vinegar, gently toss.".into(),
                "Place the block of feta cheese on top.".into(),
                "Drizzle more olive oil over the feta.".into(),
                "Serve immediately with crusty bread.".into(),
            ],
            tips: vec![
                "Use ripe, flavorful tomatoes - they're the star".into(),
                "Traditional Greek salad uses feta as a whole block, not crumbled".into(),
                "Don't add lettuce - it's not authentic".into(),
                "Let it sit for 10 minutes for flavors to meld".into(),
            ],
            dietary_tags: vec![
                DietaryTag::Vegetarian,
                DietaryTag::GlutenFree,
                DietaryTag::LowCarb,
            ],
            nutrition: Some(NutritionInfo {
                calories: 290,
                protein_g: 9.0,
                carbs_g: 12.0,
                fat_g: 24.0,
                fiber_g: 3.0,
                sodium_mg: 820,
            }),
        },
    ]
}

fn info(id: &str, name: &str, category: &str, storage: &str, subs: &[&str]) -> IngredientInfo {
    IngredientInfo {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        storage: storage.to_string(),
        substitutes: subs.iter().map(|s| s.to_string()).collect(),
    }
}

/// Pantry ingredient reference records, in catalog order.
pub fn ingredient_infos() -> Vec<IngredientInfo> {
    vec![
        info(
            "chicken_breast",
            "Chicken Breast",
            "protein",
            "Refrigerate raw up to 2 days, freeze up to 9 months",
            &["Turkey breast", "Pork tenderloin", "Tofu"],
        ),
        info(
            "olive_oil",
            "Olive Oil",
            "oil",
            "Store in cool, dark place for up to 2 years",
            &["Avocado oil", "Canola oil", "Butter"],
        ),
        info(
            "garlic",
            "Garlic",
            "vegetable",
            "Store in cool, dry place for up to 3 months",
            &["Garlic powder (1/4 tsp = 1 clove)", "Shallots"],
        ),
        info(
            "rice",
            "Rice",
            "grain",
            "Store in airtight container for up to 2 years",
            &["Quinoa", "Cauliflower rice", "Couscous"],
        ),
        info(
            "eggs",
            "Eggs",
            "protein",
            "Refrigerate for up to 5 weeks",
            &["Flax egg (1 tbsp flax + 3 tbsp water)", "Chia egg", "Aquafaba"],
        ),
        info(
            "soy_sauce",
            "Soy Sauce",
            "condiment",
            "Refrigerate after opening for up to 2 years",
            &["Tamari (gluten-free)", "Coconut aminos", "Worcestershire sauce"],
        ),
        info(
            "butter",
            "Butter",
            "dairy",
            "Refrigerate for up to 1 month, freeze for up to 6 months",
            &["Margarine", "Coconut oil", "Olive oil (for cooking)"],
        ),
        info(
            "tomatoes",
            "Tomatoes",
            "vegetable",
            "Room temperature until ripe, then refrigerate up to 1 week",
            &["Canned tomatoes", "Sun-dried tomatoes", "Red bell pepper"],
        ),
    ]
}

fn technique(id: &str, name: &str, description: &str, best_for: &[&str], tips: &[&str]) -> Technique {
    Technique {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        best_for: best_for.iter().map(|s| s.to_string()).collect(),
        tips: tips.iter().map(|s| s.to_string()).collect(),
    }
}

/// Cooking technique records, in catalog order.
pub fn techniques() -> Vec<Technique> {
    vec![
        technique(
            "saute",
            "Sauté",
            "Cooking food quickly in a small amount of fat over high heat",
            &["Vegetables", "Thin cuts of meat", "Shrimp"],
            &[
                "Use a wide pan to avoid overcrowding",
                "Have all ingredients prepped before you start",
                "Keep the food moving",
                "Use high smoke-point oils",
            ],
        ),
        technique(
            "braise",
            "Braise",
            "Slow-cooking in liquid after initial browning",
            &["Tough cuts of meat", "Root vegetables", "Beans"],
            &[
                "Brown the meat well first",
                "Use flavorful liquid like wine or stock",
                "Keep liquid at a gentle simmer",
                "Low and slow is the key",
            ],
        ),
        technique(
            "roast",
            "Roast",
            "Cooking with dry heat in an oven",
            &["Large cuts of meat", "Whole vegetables", "Poultry"],
            &[
                "Preheat oven thoroughly",
                "Use a meat thermometer",
                "Let meat rest before carving",
                "Baste occasionally for moisture",
            ],
        ),
        technique(
            "stir_fry",
            "Stir-Fry",
            "Quick cooking over very high heat with constant stirring",
            &["Vegetables", "Thin sliced meats", "Noodles"],
            &[
                "Use a wok if possible",
                "Cut ingredients uniformly",
                "Cook in batches to maintain heat",
                "Have sauce ready before cooking",
            ],
        ),
        technique(
            "poach",
            "Poach",
            "Gently cooking in simmering liquid",
            &["Eggs", "Fish", "Chicken", "Fruit"],
            &[
                "Keep liquid just below boiling",
                "Use flavorful poaching liquid",
                "Don't overcook",
                "A splash of vinegar helps eggs hold shape",
            ],
        ),
    ]
}
