use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use nutrition_core::VERSION;

/// Longest trend `stats --days` accepts (about ten years).
pub const MAX_TREND_DAYS: i64 = 3660;

/// Calories - log meals and snacks, track macros against daily goals
#[derive(Parser)]
#[command(name = "calories")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the meal store (JSON file or SQLite database)
    #[arg(short, long, global = true, env = "CALORIES_STORE")]
    pub store: Option<String>,

    /// Store backend (json, sqlite)
    #[arg(long, global = true, value_name = "BACKEND")]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the meal store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Set timezone used to compute "today" (e.g. Europe/Paris)
    #[arg(long)]
    pub timezone: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Food name
    #[arg(long, value_name = "NAME")]
    pub food: Option<String>,

    /// Calories (kcal)
    #[arg(long, allow_negative_numbers = true)]
    pub calories: Option<f64>,

    /// Protein (g)
    #[arg(long, allow_negative_numbers = true)]
    pub protein: Option<f64>,

    /// Carbohydrates (g)
    #[arg(long, allow_negative_numbers = true)]
    pub carbs: Option<f64>,

    /// Fats (g)
    #[arg(long, allow_negative_numbers = true)]
    pub fats: Option<f64>,

    /// Calendar day (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Meal type (breakfast, lunch, dinner, snack)
    #[arg(short, long, value_name = "TYPE")]
    pub meal: Option<String>,

    /// Reject entries whose calories disagree with their macros
    #[arg(long)]
    pub strict: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New food name
    #[arg(long, value_name = "NAME")]
    pub food: Option<String>,

    /// New calories (kcal)
    #[arg(long, allow_negative_numbers = true)]
    pub calories: Option<f64>,

    /// New protein (g)
    #[arg(long, allow_negative_numbers = true)]
    pub protein: Option<f64>,

    /// New carbohydrates (g)
    #[arg(long, allow_negative_numbers = true)]
    pub carbs: Option<f64>,

    /// New fats (g)
    #[arg(long, allow_negative_numbers = true)]
    pub fats: Option<f64>,

    /// New calendar day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New meal type
    #[arg(short, long, value_name = "TYPE")]
    pub meal: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Single calendar day (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["since", "until", "last"])]
    pub date: Option<String>,

    /// Start day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// End day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Day window ending today (e.g., "7d")
    #[arg(long, conflicts_with = "since")]
    pub last: Option<String>,

    /// Filter by meal type
    #[arg(short, long, value_name = "TYPE")]
    pub meal: Option<String>,

    /// Case-insensitive food name search
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `today` command
#[derive(Args)]
pub struct TodayArgs {
    /// Day to summarize (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Start day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// End day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Length of the daily trend ending at --until or today
    #[arg(
        long,
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=MAX_TREND_DAYS)
    )]
    pub days: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Entered calories (kcal)
    #[arg(long, allow_negative_numbers = true)]
    pub calories: f64,

    /// Protein (g)
    #[arg(long, allow_negative_numbers = true)]
    pub protein: f64,

    /// Carbohydrates (g)
    #[arg(long, allow_negative_numbers = true)]
    pub carbs: f64,

    /// Fats (g)
    #[arg(long, allow_negative_numbers = true)]
    pub fats: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `goal show`
#[derive(Args)]
pub struct GoalShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `goal set`
#[derive(Args)]
pub struct GoalSetArgs {
    /// Daily calorie target (kcal)
    #[arg(long, allow_negative_numbers = true)]
    pub calories: Option<f64>,

    /// Daily protein target (g)
    #[arg(long, allow_negative_numbers = true)]
    pub protein: Option<f64>,

    /// Daily carbohydrate target (g)
    #[arg(long, allow_negative_numbers = true)]
    pub carbs: Option<f64>,

    /// Daily fat target (g)
    #[arg(long, allow_negative_numbers = true)]
    pub fats: Option<f64>,
}

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Show the daily goals
    Show(GoalShowArgs),
    /// Change one or more daily goals
    Set(GoalSetArgs),
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (json, jsonl, csv)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Start day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an empty meal store
    Init(InitArgs),

    /// Log a meal or snack
    Add(AddArgs),

    /// Change fields of an existing entry
    Edit(EditArgs),

    /// Remove an entry
    Delete(DeleteArgs),

    /// Remove every entry
    Clear(ClearArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// List entries
    List(ListArgs),

    /// Totals and goal progress for one day
    Today(TodayArgs),

    /// Averages, meal-type breakdown and daily trend
    Stats(StatsArgs),

    /// Compare calories against macro-derived calories
    Check(CheckArgs),

    /// Show or change daily goals
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// Export entries
    Export(ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
