use super::{BlogCommentRef, BlogRef, GroupRef, Platform, PostRef, UserRef};
use crate::error::Result;
use crate::model::{Activity, ActivityRequest};
use chrono::Utc;
use std::collections::BTreeMap;

/// In-memory platform for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryPlatform {
    pub active_components: Vec<String>,
    pub multisite: bool,
    pub users: BTreeMap<u64, UserRef>,
    pub groups: BTreeMap<u64, GroupRef>,
    pub blogs: BTreeMap<u64, BlogRef>,
    pub posts: BTreeMap<u64, PostRef>,
    pub blog_comments: BTreeMap<u64, BlogCommentRef>,
    pub activities: BTreeMap<u64, Activity>,
    next_activity_id: u64,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self {
            next_activity_id: 1,
            ..Self::default()
        }
    }
}

impl Platform for MemoryPlatform {
    fn active_components(&self) -> Vec<String> {
        self.active_components.clone()
    }

    fn is_multisite(&self) -> bool {
        self.multisite
    }

    fn user_ids(&self) -> Result<Vec<u64>> {
        Ok(self.users.keys().copied().collect())
    }

    fn group_ids(&self) -> Result<Vec<u64>> {
        Ok(self.groups.keys().copied().collect())
    }

    fn blog_ids(&self) -> Result<Vec<u64>> {
        Ok(self.blogs.keys().copied().collect())
    }

    fn user(&self, id: u64) -> Result<Option<UserRef>> {
        Ok(self.users.get(&id).cloned())
    }

    fn group(&self, id: u64) -> Result<Option<GroupRef>> {
        Ok(self.groups.get(&id).cloned())
    }

    fn blog(&self, id: u64) -> Result<Option<BlogRef>> {
        Ok(self.blogs.get(&id).cloned())
    }

    fn post(&self, id: u64) -> Result<Option<PostRef>> {
        Ok(self.posts.get(&id).cloned())
    }

    fn blog_comments(&self, blog_id: u64) -> Result<Vec<BlogCommentRef>> {
        Ok(self
            .blog_comments
            .values()
            .filter(|c| {
                self.posts
                    .get(&c.post_id)
                    .is_some_and(|p| p.blog_id == blog_id)
            })
            .cloned()
            .collect())
    }

    fn activity(&self, id: u64) -> Result<Option<Activity>> {
        Ok(self.activities.get(&id).cloned())
    }

    fn activities(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.values().cloned().collect())
    }

    fn add_activity(&mut self, request: &ActivityRequest) -> Result<u64> {
        let id = self.next_activity_id;
        self.next_activity_id += 1;
        self.activities.insert(
            id,
            Activity {
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
            },
        );
        Ok(id)
    }

    fn delete_activity(&mut self, id: u64) -> Result<bool> {
        Ok(self.activities.remove(&id).is_some())
    }

    fn set_spam(&mut self, id: u64, spam: bool) -> Result<bool> {
        match self.activities.get_mut(&id) {
            Some(activity) => {
                activity.is_spam = spam;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn activity_permalink(&self, id: u64) -> Result<Option<String>> {
        Ok(self
            .activities
            .get(&id)
            .map(|_| format!("https://example.org/activity/p/{}/", id)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct PlatformFixture {
        pub platform: MemoryPlatform,
    }

    impl Default for PlatformFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PlatformFixture {
        /// An empty single-site platform with every catalog component active.
        pub fn new() -> Self {
            let mut platform = MemoryPlatform::new();
            platform.active_components = ["activity", "blogs", "friends", "groups", "profile"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            Self { platform }
        }

        pub fn with_active_components(mut self, components: &[&str]) -> Self {
            self.platform.active_components =
                components.iter().map(|s| s.to_string()).collect();
            self
        }

        pub fn multisite(mut self) -> Self {
            self.platform.multisite = true;
            self
        }

        pub fn with_user(mut self, id: u64, name: &str) -> Self {
            self.platform.users.insert(
                id,
                UserRef {
                    id,
                    name: name.to_string(),
                    profile_link: format!("https://example.org/members/{}/", id),
                },
            );
            self
        }

        pub fn with_users(self, count: u64) -> Self {
            (1..=count).fold(self, |f, i| f.with_user(i, &format!("User {}", i)))
        }

        pub fn with_group(mut self, id: u64, name: &str, creator_id: u64) -> Self {
            self.platform.groups.insert(
                id,
                GroupRef {
                    id,
                    name: name.to_string(),
                    permalink: format!("https://example.org/groups/{}/", id),
                    creator_id,
                },
            );
            self
        }

        pub fn with_blog(mut self, id: u64, name: &str) -> Self {
            self.platform.blogs.insert(
                id,
                BlogRef {
                    id,
                    name: name.to_string(),
                    url: format!("https://example.org/sites/{}/", id),
                },
            );
            self
        }

        pub fn with_post(mut self, id: u64, blog_id: u64, author_id: u64, title: &str) -> Self {
            self.platform.posts.insert(
                id,
                PostRef {
                    id,
                    blog_id,
                    author_id,
                    title: title.to_string(),
                    permalink: format!("https://example.org/sites/{}/?p={}", blog_id, id),
                },
            );
            self
        }

        pub fn with_blog_comment(
            mut self,
            id: u64,
            post_id: u64,
            author_user_id: Option<u64>,
        ) -> Self {
            self.platform.blog_comments.insert(
                id,
                BlogCommentRef {
                    id,
                    post_id,
                    author_name: format!("Commenter {}", id),
                    author_user_id,
                    permalink: format!("https://example.org/?p={}#comment-{}", post_id, id),
                },
            );
            self
        }

        pub fn with_activity(mut self, request: &ActivityRequest) -> Self {
            self.platform.add_activity(request).unwrap();
            self
        }
    }
}
