//! ironplan - Workout plan generator
//!
//! Answer a few questions, get a week of training. Not hard enough? Intensify it.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ironplan::db::Database;
use ironplan::exercises::{
    exercises_for_group, find_exercise, get_all_exercises, Exercise, ExperienceLevel, Goal, MuscleGroup,
};
use ironplan::generator::{intensify, PlanGenerator, SplitStyle};
use ironplan::plan::{FormData, WorkoutPlan};
use ironplan::theme::Theme;

#[derive(Parser)]
#[command(name = "ironplan")]
#[command(author, version, about = "Workout plan generator")]
struct Cli {
    /// SQLite file holding saved plans
    #[arg(long, global = true, env = "IRONPLAN_DB", default_value = "ironplan.db")]
    db: String,

    /// Label vocabulary for output (plain or cursed)
    #[arg(long, global = true, env = "IRONPLAN_THEME", default_value = "plain")]
    theme: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new weekly plan
    Generate {
        /// Training goal (e.g., "muscle gain", "strength", "fat loss")
        #[arg(short, long, default_value = "muscle gain")]
        goal: String,

        /// Experience level (beginner, novice, intermediate, advanced, elite)
        #[arg(short, long, default_value = "beginner")]
        level: String,

        /// Training days per week
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..=7))]
        days: u32,

        /// Split style (push pull legs, upper lower, body part, full body, classic)
        #[arg(short, long)]
        split: Option<String>,

        /// Muscle groups to prioritize (repeatable)
        #[arg(short, long)]
        priority: Vec<String>,

        /// Injuries or other limitations to keep with the plan
        #[arg(long)]
        limitations: Option<String>,

        /// Seed for reproducible plans
        #[arg(long)]
        seed: Option<u64>,

        /// Save the plan for this user
        #[arg(long)]
        save: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Make a saved plan harder and save the result as a new plan
    Intensify {
        /// Saved plan id
        id: i64,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        json: bool,
    },

    /// List saved plans of a user
    List {
        #[arg(short, long)]
        user: String,

        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show a saved plan
    Show {
        id: i64,

        #[arg(long)]
        json: bool,
    },

    /// Show the most recent plan of a user
    Latest {
        #[arg(short, long)]
        user: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the exercise catalog
    Catalog {
        /// Only this muscle group
        #[arg(short, long)]
        group: Option<String>,

        /// Show a single exercise with its description
        #[arg(short, long, conflicts_with = "group")]
        name: Option<String>,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_plan(plan: &WorkoutPlan, json: bool, theme: Theme) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        println!("{}", plan.format(theme));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let theme = Theme::from_label(&cli.theme);

    match cli.command {
        Commands::Generate { goal, level, days, split, priority, limitations, seed, save, json } => {
            let mut priority_muscles = Vec::new();
            for label in &priority {
                match MuscleGroup::parse(label) {
                    Some(group) => priority_muscles.push(group),
                    None => tracing::warn!(label = label.as_str(), "ignoring unknown muscle group"),
                }
            }

            let form = FormData {
                goal: Goal::from_label(&goal),
                experience_level: ExperienceLevel::from_label(&level),
                days_per_week: days,
                body_split: split.as_deref().map(SplitStyle::from_label),
                priority_muscles,
                limitations,
            };

            let plan = PlanGenerator::default().generate(&form, &mut rng_from(seed));
            print_plan(&plan, json, theme)?;

            if let Some(user) = save {
                let db = Database::open(&cli.db)?;
                let id = db.save_plan(&user, &plan)?;
                eprintln!("Saved plan {} for {}", id, user);
            }
        }

        Commands::Intensify { id, seed, json } => {
            let db = Database::open(&cli.db)?;
            let Some(saved) = db.load_plan(id)? else {
                bail!("no saved plan with id {}", id);
            };

            let harder = intensify(&saved.plan, &mut rng_from(seed));
            print_plan(&harder, json, theme)?;

            let new_id = db.save_plan(&saved.summary.user_id, &harder)?;
            eprintln!("Saved harder plan {} for {}", new_id, saved.summary.user_id);
        }

        Commands::List { user, limit } => {
            let db = Database::open(&cli.db)?;
            let plans = db.list_plans(&user)?;
            println!("Saved plans for {}:", user);
            println!("{:-<70}", "");
            for p in plans.iter().take(limit) {
                println!(
                    "{:>4} | {} | {:16} | {:12} | {} days | {}",
                    p.id,
                    p.created_at.format("%Y-%m-%d %H:%M"),
                    theme.goal(p.goal),
                    theme.level(p.experience_level),
                    p.days_per_week,
                    theme.split(p.body_split),
                );
            }
        }

        Commands::Show { id, json } => {
            let db = Database::open(&cli.db)?;
            match db.load_plan(id)? {
                Some(saved) => print_plan(&saved.plan, json, theme)?,
                None => bail!("no saved plan with id {}", id),
            }
        }

        Commands::Latest { user, json } => {
            let db = Database::open(&cli.db)?;
            match db.latest_plan(&user)? {
                Some(saved) => print_plan(&saved.plan, json, theme)?,
                None => println!("No saved plans for {}", user),
            }
        }

        Commands::Catalog { group, name } => {
            if let Some(name) = name {
                let Some(e) = find_exercise(&name) else {
                    bail!("no exercise named {}", name);
                };
                println!("{} ({})", e.name, theme.muscle_group(e.muscle_group));
                println!("{}", e.description.unwrap_or("No description."));
                return Ok(());
            }

            let exercises: Vec<&Exercise> = match group.as_deref() {
                Some(label) => match MuscleGroup::parse(label) {
                    Some(g) => exercises_for_group(g),
                    None => bail!("unknown muscle group: {}", label),
                },
                None => get_all_exercises().iter().collect(),
            };

            for e in exercises {
                let levels: Vec<_> = e.levels.iter().map(|l| theme.level(*l)).collect();
                let goals: Vec<_> = e.goals.iter().map(|g| theme.goal(*g)).collect();
                println!(
                    "{:24} | {:20} | {} | {}",
                    e.name,
                    theme.muscle_group(e.muscle_group),
                    levels.join(", "),
                    goals.join(", ")
                );
            }
        }
    }

    Ok(())
}
