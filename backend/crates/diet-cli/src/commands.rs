use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Identity operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Meal operations
    Meal {
        #[command(subcommand)]
        action: MealCommands,
    },

    /// Diet adherence summary for the current session
    Metrics,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create an identity and store its session token
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Avatar URL
        #[arg(long)]
        img_url: Option<String>,
    },

    /// List all identities
    List,
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// List your meals, most recent first
    List,

    /// Get one of your meals
    Get { id: String },

    /// Record a meal
    Create {
        #[command(flatten)]
        fields: MealFields,
    },

    /// Replace every field of a meal
    Update {
        id: String,

        #[command(flatten)]
        fields: MealFields,
    },

    /// Delete one of your meals
    Delete { id: String },
}

#[derive(clap::Args)]
pub struct MealFields {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Whether the meal was within the diet (true/false)
    #[arg(long = "on-diet", action = clap::ArgAction::Set)]
    pub is_on_diet: bool,

    /// YYYY-MM-DD or RFC 3339 date-time
    #[arg(long)]
    pub date: String,
}
