use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "actstream")]
#[command(about = "Manage activity stream items from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Platform state file (defaults to the per-user data dir)
    #[arg(long, global = true, env = "ACTSTREAM_DATA")]
    pub data: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Ids,
    Json,
    Count,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an activity item, randomizing anything left unspecified
    #[command(alias = "add")]
    Create {
        /// Component the item belongs to (e.g. groups, blogs)
        #[arg(long)]
        component: Option<String>,

        /// Activity type (e.g. activity_update, joined_group)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Feed line; generated from the type when omitted
        #[arg(long)]
        action: Option<String>,

        /// Item body; filler text is generated when omitted
        #[arg(long)]
        content: Option<String>,

        /// Primary link shown on the feed line
        #[arg(long)]
        primary_link: Option<String>,

        /// Acting user; a random existing user when omitted
        #[arg(long)]
        user_id: Option<u64>,

        /// Item id (meaning depends on the type: group id, blog id, ...)
        #[arg(long)]
        item_id: Option<u64>,

        /// Secondary item id (post id, comment id, parent row id, ...)
        #[arg(long)]
        secondary_item_id: Option<u64>,

        /// Recorded timestamp, RFC 3339 (defaults to now)
        #[arg(long)]
        date_recorded: Option<String>,

        /// Keep the item off sitewide feeds
        #[arg(long)]
        hide_sitewide: bool,

        /// Create the item already marked as spam
        #[arg(long)]
        is_spam: bool,
    },

    /// List activity items, newest first
    #[command(alias = "ls")]
    List {
        /// Only items by this user
        #[arg(long)]
        user_id: Option<u64>,

        /// Only items from this component
        #[arg(long)]
        component: Option<String>,

        /// Only items of this type
        #[arg(long = "type")]
        kind: Option<String>,

        /// Only items marked as spam
        #[arg(long)]
        spam: bool,

        /// Maximum number of items
        #[arg(long)]
        count: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Bulk-create synthetic activity items for seeding
    Generate {
        /// How many items to create
        #[arg(long, default_value_t = 100)]
        count: usize,

        /// Pin the component instead of rolling one for the batch
        #[arg(long)]
        component: Option<String>,

        /// Pin the type instead of rolling one for the batch
        #[arg(long = "type")]
        kind: Option<String>,

        /// Leave activity_comment out of the type draw
        #[arg(long)]
        skip_activity_comments: bool,
    },

    /// Fetch a single activity item
    Get {
        id: u64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Delete an activity item and its comments
    #[command(alias = "rm")]
    Delete {
        id: u64,
    },

    /// Mark an activity item as spam
    #[command(alias = "unham")]
    Spam {
        id: u64,
    },

    /// Clear the spam flag on an activity item
    #[command(alias = "unspam")]
    Ham {
        id: u64,
    },

    /// Post a status update for a user
    PostUpdate {
        /// Acting user
        #[arg(long)]
        user_id: u64,

        /// Update body; filler text is generated when omitted
        #[arg(long)]
        content: Option<String>,

        /// Post into this group instead of the user's own feed
        #[arg(long)]
        group_id: Option<u64>,
    },

    /// Add a comment to an activity item
    Comment {
        /// The activity item (or comment) being replied to
        activity_id: u64,

        /// Commenting user; a random existing user when omitted
        #[arg(long)]
        user_id: Option<u64>,

        /// Comment body; filler text is generated when omitted
        #[arg(long)]
        content: Option<String>,
    },

    /// Remove a comment (and its replies) from an activity item
    DeleteComment {
        activity_id: u64,
        comment_id: u64,
    },

    /// Print the permalink of an activity item
    #[command(alias = "url")]
    Permalink {
        id: u64,
    },
}
