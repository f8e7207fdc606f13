//! # Platform Layer
//!
//! The host social platform is an external collaborator, reached only
//! through the [`Platform`] trait. The trait is deliberately narrow: entity
//! lookups by id, flat id lists for random selection, active-component
//! introspection, and the activity write API. Nothing above this layer knows
//! how the platform persists anything.
//!
//! ## Implementations
//!
//! - [`json::JsonPlatform`]: production backend, one JSON state file on disk
//! - [`memory::MemoryPlatform`]: in-memory backend for testing

use crate::error::Result;
use crate::model::{Activity, ActivityRequest};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod memory;

/// A platform user, reduced to what feed lines need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: u64,
    pub name: String,
    pub profile_link: String,
}

impl UserRef {
    /// The `<a>` fragment the platform uses wherever a user is named in a
    /// feed line.
    pub fn anchor(&self) -> String {
        format!(r#"<a href="{}">{}</a>"#, self.profile_link, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: u64,
    pub name: String,
    pub permalink: String,
    pub creator_id: u64,
}

impl GroupRef {
    pub fn anchor(&self) -> String {
        format!(r#"<a href="{}">{}</a>"#, self.permalink, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRef {
    pub id: u64,
    pub name: String,
    pub url: String,
}

impl BlogRef {
    pub fn anchor(&self) -> String {
        format!(r#"<a href="{}">{}</a>"#, self.url, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRef {
    pub id: u64,
    pub blog_id: u64,
    pub author_id: u64,
    pub title: String,
    pub permalink: String,
}

impl PostRef {
    pub fn anchor(&self) -> String {
        format!(r#"<a href="{}">{}</a>"#, self.permalink, self.title)
    }
}

/// A comment left on a blog post. `author_user_id` is only set when the
/// commenter matches a registered platform user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCommentRef {
    pub id: u64,
    pub post_id: u64,
    pub author_name: String,
    pub author_user_id: Option<u64>,
    pub permalink: String,
}

/// Narrow interface to the host platform.
///
/// Read methods are best-effort snapshots: an id obtained from a list call
/// may no longer resolve by the time it is looked up. Callers treat that as
/// a user-facing error, not a crash.
pub trait Platform {
    /// Components currently active on the platform (e.g. "groups", "blogs").
    fn active_components(&self) -> Vec<String>;

    /// Whether the platform runs as a network of sites. When false, blog
    /// lookups collapse onto the single primary site.
    fn is_multisite(&self) -> bool;

    fn user_ids(&self) -> Result<Vec<u64>>;
    fn group_ids(&self) -> Result<Vec<u64>>;
    fn blog_ids(&self) -> Result<Vec<u64>>;

    fn user(&self, id: u64) -> Result<Option<UserRef>>;
    fn group(&self, id: u64) -> Result<Option<GroupRef>>;
    fn blog(&self, id: u64) -> Result<Option<BlogRef>>;
    fn post(&self, id: u64) -> Result<Option<PostRef>>;

    /// All blog comments belonging to posts of the given blog.
    fn blog_comments(&self, blog_id: u64) -> Result<Vec<BlogCommentRef>>;

    fn activity(&self, id: u64) -> Result<Option<Activity>>;

    /// Every activity row, unordered. Filtering and sorting happen above
    /// this layer.
    fn activities(&self) -> Result<Vec<Activity>>;

    /// Persist a completed request; returns the new row id.
    fn add_activity(&mut self, request: &ActivityRequest) -> Result<u64>;

    /// Delete a row. Returns false if the id did not resolve.
    fn delete_activity(&mut self, id: u64) -> Result<bool>;

    fn set_spam(&mut self, id: u64, spam: bool) -> Result<bool>;

    fn activity_permalink(&self, id: u64) -> Result<Option<String>>;
}
