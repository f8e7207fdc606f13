use super::{BlogCommentRef, BlogRef, GroupRef, Platform, PostRef, UserRef};
use crate::error::{ActError, Result};
use crate::model::{Activity, ActivityRequest};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the platform owns, serialized as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformState {
    pub multisite: bool,
    pub active_components: Vec<String>,
    pub users: Vec<UserRef>,
    pub groups: Vec<GroupRef>,
    pub blogs: Vec<BlogRef>,
    pub posts: Vec<PostRef>,
    pub blog_comments: Vec<BlogCommentRef>,
    pub activities: Vec<Activity>,
    pub next_activity_id: u64,
}

impl PlatformState {
    /// A small seeded world so a fresh install can create and generate
    /// activity without hand-editing the state file first.
    pub fn seeded() -> Self {
        let users = ["Ada", "Grace", "Linus", "Barbara", "Dennis"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = i as u64 + 1;
                UserRef {
                    id,
                    name: name.to_string(),
                    profile_link: format!("https://example.org/members/{}/", id),
                }
            })
            .collect();

        let groups = ["Backpackers", "Home Cooks", "Night Owls"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = i as u64 + 1;
                GroupRef {
                    id,
                    name: name.to_string(),
                    permalink: format!("https://example.org/groups/{}/", id),
                    creator_id: id,
                }
            })
            .collect();

        let blogs = vec![BlogRef {
            id: 1,
            name: "Example Site".to_string(),
            url: "https://example.org/".to_string(),
        }];

        let posts = vec![
            PostRef {
                id: 1,
                blog_id: 1,
                author_id: 1,
                title: "Hello world".to_string(),
                permalink: "https://example.org/?p=1".to_string(),
            },
            PostRef {
                id: 2,
                blog_id: 1,
                author_id: 2,
                title: "Second thoughts".to_string(),
                permalink: "https://example.org/?p=2".to_string(),
            },
        ];

        let blog_comments = vec![
            BlogCommentRef {
                id: 1,
                post_id: 1,
                author_name: "Grace".to_string(),
                author_user_id: Some(2),
                permalink: "https://example.org/?p=1#comment-1".to_string(),
            },
            BlogCommentRef {
                id: 2,
                post_id: 2,
                author_name: "A passerby".to_string(),
                author_user_id: None,
                permalink: "https://example.org/?p=2#comment-2".to_string(),
            },
        ];

        Self {
            multisite: false,
            active_components: ["activity", "blogs", "friends", "groups", "profile"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            users,
            groups,
            blogs,
            posts,
            blog_comments,
            activities: Vec::new(),
            next_activity_id: 1,
        }
    }
}

/// File-backed platform: the whole state is read on open and written back
/// after every mutation. Good enough for a CLI that performs at most one
/// mutation per invocation.
pub struct JsonPlatform {
    path: PathBuf,
    state: PlatformState,
}

impl JsonPlatform {
    /// Open the state file, seeding it if it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            let platform = Self {
                path,
                state: PlatformState::seeded(),
            };
            platform.save()?;
            return Ok(platform);
        }

        let content = fs::read_to_string(&path).map_err(ActError::Io)?;
        let state: PlatformState =
            serde_json::from_str(&content).map_err(ActError::Serialization)?;
        Ok(Self { path, state })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ActError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.state).map_err(ActError::Serialization)?;
        fs::write(&self.path, content).map_err(ActError::Io)?;
        Ok(())
    }
}

impl Platform for JsonPlatform {
    fn active_components(&self) -> Vec<String> {
        self.state.active_components.clone()
    }

    fn is_multisite(&self) -> bool {
        self.state.multisite
    }

    fn user_ids(&self) -> Result<Vec<u64>> {
        Ok(self.state.users.iter().map(|u| u.id).collect())
    }

    fn group_ids(&self) -> Result<Vec<u64>> {
        Ok(self.state.groups.iter().map(|g| g.id).collect())
    }

    fn blog_ids(&self) -> Result<Vec<u64>> {
        Ok(self.state.blogs.iter().map(|b| b.id).collect())
    }

    fn user(&self, id: u64) -> Result<Option<UserRef>> {
        Ok(self.state.users.iter().find(|u| u.id == id).cloned())
    }

    fn group(&self, id: u64) -> Result<Option<GroupRef>> {
        Ok(self.state.groups.iter().find(|g| g.id == id).cloned())
    }

    fn blog(&self, id: u64) -> Result<Option<BlogRef>> {
        Ok(self.state.blogs.iter().find(|b| b.id == id).cloned())
    }

    fn post(&self, id: u64) -> Result<Option<PostRef>> {
        Ok(self.state.posts.iter().find(|p| p.id == id).cloned())
    }

    fn blog_comments(&self, blog_id: u64) -> Result<Vec<BlogCommentRef>> {
        Ok(self
            .state
            .blog_comments
            .iter()
            .filter(|c| {
                self.state
                    .posts
                    .iter()
                    .any(|p| p.id == c.post_id && p.blog_id == blog_id)
            })
            .cloned()
            .collect())
    }

    fn activity(&self, id: u64) -> Result<Option<Activity>> {
        Ok(self.state.activities.iter().find(|a| a.id == id).cloned())
    }

    fn activities(&self) -> Result<Vec<Activity>> {
        Ok(self.state.activities.clone())
    }

    fn add_activity(&mut self, request: &ActivityRequest) -> Result<u64> {
        let id = self.state.next_activity_id;
        self.state.next_activity_id += 1;
        self.state.activities.push(Activity {
            id,
            user_id: request.user_id.unwrap_or(0),
            component: request.component.clone(),
            kind: request.kind.clone(),
            action: request.action.clone(),
            content: request.content.clone(),
            primary_link: request.primary_link.clone(),
            item_id: request.item_id.unwrap_or(0),
            secondary_item_id: request.secondary_item_id.unwrap_or(0),
            date_recorded: request.date_recorded.unwrap_or_else(Utc::now),
            hide_sitewide: request.hide_sitewide,
            is_spam: request.is_spam,
        });
        self.save()?;
        Ok(id)
    }

    fn delete_activity(&mut self, id: u64) -> Result<bool> {
        let before = self.state.activities.len();
        self.state.activities.retain(|a| a.id != id);
        let removed = self.state.activities.len() < before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    fn set_spam(&mut self, id: u64, spam: bool) -> Result<bool> {
        let Some(activity) = self.state.activities.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        activity.is_spam = spam;
        self.save()?;
        Ok(true)
    }

    fn activity_permalink(&self, id: u64) -> Result<Option<String>> {
        Ok(self
            .state
            .activities
            .iter()
            .find(|a| a.id == id)
            .map(|a| format!("https://example.org/activity/p/{}/", a.id)))
    }
}
