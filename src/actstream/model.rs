use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted activity stream row, owned by the host platform.
///
/// Comments are stored as rows too: `kind == "activity_comment"` with
/// `item_id` pointing at the thread root and `secondary_item_id` at the
/// direct parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub user_id: u64,
    pub component: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub action: String,
    pub content: String,
    pub primary_link: String,
    pub item_id: u64,
    pub secondary_item_id: u64,
    pub date_recorded: DateTime<Utc>,
    pub hide_sitewide: bool,
    pub is_spam: bool,
}

impl Activity {
    pub fn is_comment(&self) -> bool {
        self.kind == "activity_comment"
    }
}

/// A create request being filled in. Blank strings mean "unset"; the
/// completion engine only writes into blank/None fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityRequest {
    pub component: String,
    pub kind: String,
    pub action: String,
    pub content: String,
    pub primary_link: String,
    pub user_id: Option<u64>,
    pub item_id: Option<u64>,
    pub secondary_item_id: Option<u64>,
    pub date_recorded: Option<DateTime<Utc>>,
    pub hide_sitewide: bool,
    pub is_spam: bool,
}

impl ActivityRequest {
    pub fn new(component: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}
