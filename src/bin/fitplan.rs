// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitPlan command-line client.
//!
//! Submits a photo and goal to a FitPlan server, keeps the latest plan in a
//! local snapshot, and prints it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitplan::client::{
    load_persisted_plan, ClientState, FileSnapshotStore, HttpPlanApi, Orchestrator,
    SnapshotStore, GENERATING_STAGES,
};
use fitplan::models::UserPlan;
use fitplan::time_utils::display_created_at;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(author, version, about = "Personal workout and meal plans from a body photo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// FitPlan server URL
    #[arg(short, long, global = true, env = "FITPLAN_SERVER", default_value = "http://localhost:8080")]
    server: String,

    /// Snapshot file holding the latest plan
    #[arg(long, global = true, env = "FITPLAN_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new plan from a photo and a weight-loss goal
    Generate {
        /// Body photo (PNG or JPG, up to 5 MB)
        #[arg(short, long)]
        photo: PathBuf,

        /// Kilograms to lose (more than 0, at most 50)
        #[arg(short, long)]
        goal: String,

        /// Replace a saved plan instead of refusing
        #[arg(long)]
        replace: bool,
    },
    /// Show the saved plan
    Show,
    /// Delete the saved plan
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let snapshot_path = match cli.snapshot {
        Some(path) => path,
        None => FileSnapshotStore::default_path()
            .context("Could not determine data directory; pass --snapshot")?,
    };
    let store = FileSnapshotStore::new(snapshot_path);

    match cli.command {
        Commands::Generate {
            photo,
            goal,
            replace,
        } => {
            let api = HttpPlanApi::new(&cli.server);
            let mut client = Orchestrator::new(api, store).with_observer(|state| {
                if let ClientState::Generating = state {
                    eprintln!("Analyzing your photo...");
                    for stage in GENERATING_STAGES {
                        eprintln!("  • {stage}");
                    }
                }
            });

            if client.plan().is_some() {
                if !replace {
                    anyhow::bail!("A plan is already saved. Use --replace or run `fitplan reset`.");
                }
                client.reset()?;
            }

            client.select_photo_file(&photo)?;
            client.set_weight_goal(goal);
            client.submit().await?;

            if let Some(plan) = client.plan() {
                eprintln!("Plan generated and saved to {}", client.store().path().display());
                print_plan(plan, cli.format)?;
            }
        }
        Commands::Show => match load_persisted_plan(&store) {
            Some(plan) => print_plan(&plan, cli.format)?,
            None => println!("No saved plan. Run `fitplan generate` to create one."),
        },
        Commands::Reset => {
            store.clear()?;
            println!("Saved plan removed.");
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn print_plan(plan: &UserPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(plan)?),
        OutputFormat::Text => print_plan_text(plan),
    }
    Ok(())
}

fn print_plan_text(plan: &UserPlan) {
    println!("== Body analysis ({})", display_created_at(&plan.created_at));
    println!("Goal: lose {} kg", plan.weight_goal);
    println!("{}", plan.current_analysis);
    println!();

    println!("== Workout plan");
    for day in &plan.workout_plan.weekly_schedule {
        println!("{}", day.day);
        for exercise in &day.exercises {
            println!(
                "  - {}: {} · {} · {}",
                exercise.name, exercise.sets, exercise.reps, exercise.rest
            );
        }
    }
    print_tips(&plan.workout_plan.tips);
    println!();

    println!(
        "== Meal plan ({} kcal per day)",
        plan.meal_plan.daily_calories
    );
    for meal in &plan.meal_plan.meals {
        println!("{} {} ({} kcal)", meal.time, meal.name, meal.calories);
        for food in &meal.foods {
            println!("  - {food}");
        }
    }
    print_tips(&plan.meal_plan.tips);
}

fn print_tips(tips: &[String]) {
    if tips.is_empty() {
        return;
    }
    println!("Tips:");
    for tip in tips {
        println!("  • {tip}");
    }
}
