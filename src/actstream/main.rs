use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use actstream::api::{ActivityApi, CmdMessage, CreateOpts, ListFilter, MessageLevel};
use actstream::error::{ActError, Result};
use actstream::model::Activity;
use actstream::platform::json::JsonPlatform;

mod args;
use args::{Cli, Commands, OutputFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ActivityApi<JsonPlatform, StdRng>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Create {
            component,
            kind,
            action,
            content,
            primary_link,
            user_id,
            item_id,
            secondary_item_id,
            date_recorded,
            hide_sitewide,
            is_spam,
        } => {
            let opts = CreateOpts {
                component,
                kind,
                action,
                content,
                primary_link,
                user_id,
                item_id,
                secondary_item_id,
                date_recorded: parse_date(date_recorded)?,
                hide_sitewide,
                is_spam,
            };
            let result = ctx.api.create(&opts)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::List {
            user_id,
            component,
            kind,
            spam,
            count,
            format,
        } => {
            let filter = ListFilter {
                user_id,
                component,
                kind,
                spam_only: spam,
                limit: count,
            };
            let result = ctx.api.list(&filter)?;
            print_activities(&result.activities, format)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Generate {
            count,
            component,
            kind,
            skip_activity_comments,
        } => {
            let opts = CreateOpts {
                component,
                kind,
                ..CreateOpts::default()
            };
            println!("Generating {} activity item(s)...", count);
            let result = ctx.api.generate(count, &opts, skip_activity_comments)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Get { id, format } => {
            let result = ctx.api.get(id)?;
            print_activities(&result.activities, format)?;
            Ok(())
        }
        Commands::Delete { id } => {
            let result = ctx.api.delete(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Spam { id } => {
            let result = ctx.api.spam(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Ham { id } => {
            let result = ctx.api.ham(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::PostUpdate {
            user_id,
            content,
            group_id,
        } => {
            let result = ctx.api.post_update(user_id, content, group_id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Comment {
            activity_id,
            user_id,
            content,
        } => {
            let result = ctx.api.comment(activity_id, user_id, content)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::DeleteComment {
            activity_id,
            comment_id,
        } => {
            let result = ctx.api.delete_comment(activity_id, comment_id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Permalink { id } => {
            let result = ctx.api.permalink(id)?;
            for link in &result.permalinks {
                println!("{}", link);
            }
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_path = match &cli.data {
        Some(path) => path.clone(),
        None => default_data_path()?,
    };
    let platform = JsonPlatform::open(&data_path)?;
    Ok(AppContext {
        api: ActivityApi::new(platform, StdRng::from_os_rng()),
    })
}

fn default_data_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("org", "actstream", "actstream")
        .ok_or_else(|| ActError::Api("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().join("platform.json"))
}

fn parse_date(input: Option<String>) -> Result<Option<DateTime<Utc>>> {
    input
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|d| d.with_timezone(&Utc))
                .map_err(|e| ActError::Api(format!("Invalid --date-recorded: {}", e)))
        })
        .transpose()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_activities(activities: &[Activity], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(activities),
        OutputFormat::Csv => print_csv(activities),
        OutputFormat::Ids => {
            let ids: Vec<String> = activities.iter().map(|a| a.id.to_string()).collect();
            println!("{}", ids.join(" "));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(activities)?);
        }
        OutputFormat::Count => println!("{}", activities.len()),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(activities)
                .map_err(|e| ActError::Api(e.to_string()))?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

const ACTION_WIDTH: usize = 52;
const TIME_WIDTH: usize = 14;

fn print_table(activities: &[Activity]) {
    if activities.is_empty() {
        println!("No activity items found.");
        return;
    }

    for activity in activities {
        let action = truncate_to_width(&strip_anchors(&activity.action), ACTION_WIDTH);
        let padding = ACTION_WIDTH.saturating_sub(action.width());
        let spam_marker = if activity.is_spam { " [spam]".red().to_string() } else { String::new() };

        println!(
            "{:>5}  {:<24}  {}{}  {}{}",
            activity.id.to_string().yellow(),
            format!("{}/{}", activity.component, activity.kind),
            action,
            " ".repeat(padding),
            format_time_ago(activity.date_recorded).dimmed(),
            spam_marker,
        );
    }
}

fn print_csv(activities: &[Activity]) {
    println!(
        "id,user_id,component,type,action,content,primary_link,item_id,secondary_item_id,date_recorded,hide_sitewide,is_spam"
    );
    for a in activities {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            a.id,
            a.user_id,
            csv_field(&a.component),
            csv_field(&a.kind),
            csv_field(&a.action),
            csv_field(&a.content),
            csv_field(&a.primary_link),
            a.item_id,
            a.secondary_item_id,
            a.date_recorded.to_rfc3339(),
            a.hide_sitewide,
            a.is_spam
        );
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Feed lines embed `<a>` markup; drop the tags for terminal display.
fn strip_anchors(action: &str) -> String {
    let mut out = String::with_capacity(action.len());
    let mut in_tag = false;
    for c in action.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
