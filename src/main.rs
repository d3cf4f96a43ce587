//! sous-chef CLI: cooking assistant engine.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use sous_chef::catalog::{Cuisine, DietaryTag, Difficulty, SearchFilter};
use sous_chef::resolve::{meal_plan, nutrition, substitute, technique, timing};
use sous_chef::{render, Assistant, AssistantConfig, Catalog};

#[derive(Parser)]
#[command(name = "sous-chef", version, about = "Cooking assistant engine")]
struct Cli {
    /// Maximum recipes shown in list answers.
    #[arg(long, global = true, default_value = "10")]
    list_limit: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question, or start an interactive session.
    Chat {
        /// The question; omit for an interactive prompt loop.
        utterance: Option<String>,

        /// Session id for conversational state.
        #[arg(long, default_value = "cli")]
        session: String,
    },

    /// Browse and search the recipe catalog.
    Recipes {
        #[command(subcommand)]
        action: RecipeAction,
    },

    /// Convert a cooking measurement.
    Convert {
        amount: f64,
        from_unit: String,
        to_unit: String,
    },

    /// Generate a meal plan.
    Plan {
        /// Days to plan for (max 7).
        #[arg(long, default_value = "7")]
        days: u32,

        /// Dietary preferences (comma-separated, e.g. "vegan,gluten_free").
        #[arg(long)]
        preferences: Option<String>,
    },

    /// List cooking techniques, or show one in detail.
    Techniques {
        /// Technique name; omit to list all.
        name: Option<String>,
    },

    /// Look up reference info.
    Info {
        #[command(subcommand)]
        action: InfoAction,
    },
}

#[derive(Subcommand)]
enum RecipeAction {
    /// List every recipe.
    List,
    /// Show a recipe in full.
    Show {
        /// Recipe id or name, e.g. "kimchi_fried_rice".
        id: String,
    },
    /// Search with filters.
    Search {
        /// Free-text query against names, descriptions, and ingredients.
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        cuisine: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,

        /// Dietary tags the recipe must ALL carry (comma-separated).
        #[arg(long)]
        dietary: Option<String>,

        /// Maximum total time in minutes.
        #[arg(long)]
        max_time: Option<u32>,
    },
}

#[derive(Subcommand)]
enum InfoAction {
    /// Substitutes and storage for an ingredient.
    Substitute { ingredient: String },
    /// Cooking time for a food and method.
    Timing { food: String, method: String },
    /// Nutrition for a recipe, scaled to a serving count.
    Nutrition {
        recipe: String,
        #[arg(long, default_value = "1")]
        servings: i64,
    },
    /// List known cuisines and dietary tags.
    Filters,
}

fn parse_tags(raw: &str) -> Result<Vec<DietaryTag>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| DietaryTag::from_str(s).into_diagnostic())
        .collect()
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = AssistantConfig {
        list_limit: cli.list_limit,
        ..AssistantConfig::default()
    };
    let assistant = Assistant::with_config(Catalog::builtin(), config);

    match cli.command {
        Commands::Chat { utterance, session } => match utterance {
            Some(text) => {
                let reply = assistant.answer(&session, &text)?;
                println!("{}", render::render(&reply));
            }
            None => {
                let stdin = io::stdin();
                let mut stdout = io::stdout();
                println!("sous-chef interactive chat (empty line to quit)");
                loop {
                    print!("> ");
                    stdout.flush().into_diagnostic()?;
                    let mut line = String::new();
                    if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
                        break;
                    }
                    let line = line.trim();
                    if line.is_empty() {
                        break;
                    }
                    let reply = assistant.answer(&session, line)?;
                    println!("{}\n", render::render(&reply));
                }
            }
        },

        Commands::Recipes { action } => match action {
            RecipeAction::List => {
                for recipe in assistant.catalog().recipes() {
                    println!(
                        "{:<22} {:<38} {} | {} | {} min",
                        recipe.id,
                        recipe.name,
                        recipe.cuisine,
                        recipe.difficulty,
                        recipe.total_time_min()
                    );
                }
            }
            RecipeAction::Show { id } => match assistant.catalog().recipe(&id) {
                Some(recipe) => {
                    println!(
                        "{}",
                        render::render(&sous_chef::Reply::RecipeDetail {
                            recipe: recipe.clone()
                        })
                    );
                }
                None => miette::bail!("no recipe named '{id}' in the catalog"),
            },
            RecipeAction::Search {
                query,
                cuisine,
                difficulty,
                dietary,
                max_time,
            } => {
                let filter = SearchFilter {
                    query,
                    cuisine: cuisine
                        .as_deref()
                        .map(Cuisine::from_str)
                        .transpose()
                        .into_diagnostic()?,
                    difficulty: difficulty
                        .as_deref()
                        .map(Difficulty::from_str)
                        .transpose()
                        .into_diagnostic()?,
                    dietary_tags: dietary.as_deref().map(parse_tags).transpose()?.unwrap_or_default(),
                    max_time_min: max_time,
                };
                let matches = assistant.catalog().search(&filter);
                println!("{} match(es)", matches.len());
                for recipe in matches {
                    println!("{:<22} {}", recipe.id, recipe.name);
                }
            }
        },

        Commands::Convert {
            amount,
            from_unit,
            to_unit,
        } => {
            let conversion = sous_chef::convert::convert(amount, &from_unit, &to_unit)?;
            println!(
                "{} {} = {} {}",
                conversion.amount, conversion.from_unit, conversion.result, conversion.to_unit
            );
        }

        Commands::Plan { days, preferences } => {
            let tags = preferences.as_deref().map(parse_tags).transpose()?.unwrap_or_default();
            let plan = meal_plan::plan(assistant.catalog(), days, &tags, true);
            println!(
                "{}",
                render::render(&sous_chef::Reply::MealPlan(plan))
            );
        }

        Commands::Techniques { name } => {
            let answer = match name {
                Some(name) => technique::lookup(assistant.catalog(), &name),
                None => technique::resolve(assistant.catalog(), ""),
            };
            println!("{}", render::render(&sous_chef::Reply::Technique(answer)));
        }

        Commands::Info { action } => match action {
            InfoAction::Substitute { ingredient } => {
                let lookup = substitute::lookup(assistant.catalog(), &ingredient);
                println!("{}", serde_json::to_string_pretty(&lookup).into_diagnostic()?);
            }
            InfoAction::Timing { food, method } => {
                let answer = timing::lookup(&food, &method);
                println!("{}", render::render(&sous_chef::Reply::Timing(answer)));
            }
            InfoAction::Nutrition { recipe, servings } => {
                let Some(found) = assistant.catalog().recipe(&recipe) else {
                    miette::bail!("no recipe named '{recipe}' in the catalog");
                };
                match nutrition::scale(found, servings).map_err(sous_chef::ChefError::from)? {
                    Some(scaled) => {
                        println!("{}", serde_json::to_string_pretty(&scaled).into_diagnostic()?)
                    }
                    None => println!("Nutrition information not available for {}", found.name),
                }
            }
            InfoAction::Filters => {
                println!("Cuisines: {}", assistant.catalog().cuisines().join(", "));
                println!("Dietary tags: {}", assistant.catalog().dietary_tags().join(", "));
            }
        },
    }

    Ok(())
}
