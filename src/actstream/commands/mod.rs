use crate::model::Activity;

pub mod comment;
pub mod create;
pub mod delete;
pub mod delete_comment;
pub mod generate;
pub mod get;
pub mod list;
pub mod moderate;
pub mod permalink;
pub mod post_update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub activities: Vec<Activity>,
    pub created_ids: Vec<u64>,
    pub permalinks: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    pub fn with_permalinks(mut self, permalinks: Vec<String>) -> Self {
        self.permalinks = permalinks;
        self
    }
}

/// Options shared by `create`, `post_update` and `generate`, merged over
/// documented defaults before completion runs.
#[derive(Debug, Clone, Default)]
pub struct CreateOpts {
    pub component: Option<String>,
    pub kind: Option<String>,
    pub action: Option<String>,
    pub content: Option<String>,
    pub primary_link: Option<String>,
    pub user_id: Option<u64>,
    pub item_id: Option<u64>,
    pub secondary_item_id: Option<u64>,
    pub date_recorded: Option<chrono::DateTime<chrono::Utc>>,
    pub hide_sitewide: bool,
    pub is_spam: bool,
}
