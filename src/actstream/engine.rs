//! # Default-Completion Engine
//!
//! Takes a partially specified [`ActivityRequest`] and fills in every field
//! the host platform requires, keyed by the request's activity type. One
//! handler per type; the first matching type wins and unknown types pass
//! through untouched, since the engine only knows how to synthesize the
//! catalog's own types.
//!
//! Two rules hold across every handler:
//!
//! - A field the caller supplied (non-blank string, `Some` id) is never
//!   overwritten. The single exception is `content` in the blogs family,
//!   which the host platform blanks unconditionally; that behavior is
//!   preserved as observed.
//! - Reads only. The engine queries the platform for entities but never
//!   writes; submission happens in the command layer.

use crate::catalog;
use crate::error::{ActError, Result};
use crate::model::ActivityRequest;
use crate::platform::{Platform, UserRef};
use rand::Rng;

/// Fill every blank field of `request` according to its activity type.
///
/// `component` and `kind` must already be set; the create adapter resolves
/// those through the catalog before calling in here.
pub fn complete<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    match request.kind.as_str() {
        "activity_update" => complete_update(platform, rng, request),
        "activity_comment" => complete_comment(platform, rng, request),
        "new_blog" | "new_blog_post" | "new_blog_comment" => {
            complete_blog_family(platform, rng, request)
        }
        "friendship_created" => complete_friendship(platform, rng, request),
        "created_group" => complete_created_group(platform, rng, request),
        "joined_group" => complete_joined_group(platform, rng, request),
        "new_avatar" | "new_member" | "updated_profile" => {
            complete_profile(platform, rng, request)
        }
        _ => Ok(()),
    }
}

fn complete_update<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    let user = resolve_user(platform, rng, request)?;

    if request.component == "groups" {
        let group_id = request.item_id.ok_or(ActError::MissingGroupId)?;
        let group = platform
            .group(group_id)?
            .ok_or(ActError::GroupNotFound(group_id))?;
        if request.action.is_empty() {
            request.action = format!(
                "{} posted an update in the group {}",
                user.anchor(),
                group.anchor()
            );
        }
    } else if request.action.is_empty() {
        request.action = format!("{} posted an update", user.anchor());
    }

    if request.content.is_empty() {
        request.content = filler_text(rng);
    }
    if request.primary_link.is_empty() {
        request.primary_link = user.profile_link;
    }
    Ok(())
}

fn complete_comment<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    let user = resolve_user(platform, rng, request)?;

    let rows = platform.activities()?;
    if rows.is_empty() {
        return Err(ActError::NoEntitiesAvailable("activity"));
    }
    let parent = &rows[rng.random_range(0..rows.len())];

    if request.item_id.is_none() {
        request.item_id = Some(parent.id);
    }
    // Threads attach to the root: commenting on a comment inherits its
    // secondary item id instead of pointing at the intermediate row.
    if parent.is_comment() && request.secondary_item_id.is_none() {
        request.secondary_item_id = Some(parent.secondary_item_id);
    }

    if request.action.is_empty() {
        request.action = format!("{} posted a new activity comment", user.anchor());
    }
    if request.content.is_empty() {
        request.content = filler_text(rng);
    }
    if request.primary_link.is_empty() {
        request.primary_link = user.profile_link;
    }
    Ok(())
}

fn complete_blog_family<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    if !platform.active_components().iter().any(|c| c == "blogs") {
        return Ok(());
    }

    let blog_id = match request.item_id {
        Some(id) => id,
        None => {
            let id = catalog::random_blog_id(platform, rng)?;
            request.item_id = Some(id);
            id
        }
    };
    let blog = platform
        .blog(blog_id)?
        .ok_or_else(|| ActError::Platform(format!("blog {} does not resolve", blog_id)))?;

    let kind = request.kind.clone();
    match kind.as_str() {
        "new_blog" => {
            let user = resolve_user(platform, rng, request)?;
            if request.primary_link.is_empty() {
                request.primary_link = blog.url.clone();
            }
            if request.action.is_empty() {
                request.action =
                    format!("{} created the site {}", user.anchor(), blog.anchor());
            }
        }
        kind => {
            let comments = platform.blog_comments(blog_id)?;
            if comments.is_empty() {
                return Err(ActError::NoEntitiesAvailable("blog comment"));
            }
            let comment = &comments[rng.random_range(0..comments.len())];
            let post = platform.post(comment.post_id)?.ok_or_else(|| {
                ActError::Platform(format!("post {} does not resolve", comment.post_id))
            })?;

            if kind == "new_blog_post" {
                if request.user_id.is_none() {
                    request.user_id = Some(post.author_id);
                }
                let user = user_ref(platform, request.user_id.unwrap_or(post.author_id))?;
                if request.primary_link.is_empty() {
                    request.primary_link = post.permalink.clone();
                }
                if request.action.is_empty() {
                    request.action = format!(
                        "{} wrote a new post, {}, on the site {}",
                        user.anchor(),
                        post.anchor(),
                        blog.anchor()
                    );
                }
                if request.secondary_item_id.is_none() {
                    request.secondary_item_id = Some(post.id);
                }
            } else {
                if request.user_id.is_none() {
                    request.user_id = match comment.author_user_id {
                        Some(id) => Some(id),
                        None => Some(catalog::random_user_id(platform, rng)?),
                    };
                }
                let user = resolve_user(platform, rng, request)?;
                if request.primary_link.is_empty() {
                    request.primary_link = comment.permalink.clone();
                }
                if request.action.is_empty() {
                    request.action = format!(
                        "{} commented on the post, {}, on the site {}",
                        user.anchor(),
                        post.anchor(),
                        blog.anchor()
                    );
                }
                if request.secondary_item_id.is_none() {
                    request.secondary_item_id = Some(comment.id);
                }
            }
        }
    }

    // The host platform discards content for the whole blogs family, even
    // when the caller supplied some. Preserved as observed.
    request.content = String::new();
    Ok(())
}

fn complete_friendship<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    let user = resolve_user(platform, rng, request)?;

    let friend_id = match request.item_id {
        Some(id) => id,
        None => {
            let id = catalog::random_user_id(platform, rng)?;
            request.item_id = Some(id);
            id
        }
    };
    let friend = user_ref(platform, friend_id)?;

    if request.action.is_empty() {
        request.action = format!("{} and {} are now friends", user.anchor(), friend.anchor());
    }
    Ok(())
}

fn complete_created_group<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    let group_id = match request.item_id {
        Some(id) => id,
        None => {
            let id = catalog::random_group_id(platform, rng)?;
            request.item_id = Some(id);
            id
        }
    };
    let group = platform
        .group(group_id)?
        .ok_or(ActError::GroupNotFound(group_id))?;

    if request.user_id.is_none() {
        request.user_id = Some(group.creator_id);
    }
    let user = user_ref(platform, request.user_id.unwrap_or(group.creator_id))?;

    if request.action.is_empty() {
        request.action = format!("{} created the group {}", user.anchor(), group.anchor());
    }
    if request.primary_link.is_empty() {
        request.primary_link = group.permalink;
    }
    Ok(())
}

fn complete_joined_group<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    let group_id = match request.item_id {
        Some(id) => id,
        None => {
            let id = catalog::random_group_id(platform, rng)?;
            request.item_id = Some(id);
            id
        }
    };
    let group = platform
        .group(group_id)?
        .ok_or(ActError::GroupNotFound(group_id))?;

    let user = resolve_user(platform, rng, request)?;

    if request.action.is_empty() {
        request.action = format!("{} joined the group {}", user.anchor(), group.anchor());
    }
    if request.primary_link.is_empty() {
        request.primary_link = group.permalink;
    }
    Ok(())
}

fn complete_profile<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<()> {
    let user = resolve_user(platform, rng, request)?;

    if request.action.is_empty() {
        request.action = match request.kind.as_str() {
            "new_avatar" => format!("{} changed their profile picture", user.anchor()),
            "new_member" => format!("{} became a registered member", user.anchor()),
            _ => format!("{} updated their profile", user.anchor()),
        };
    }
    Ok(())
}

/// Fill `user_id` with a random user when unset, then load the reference.
fn resolve_user<P: Platform, R: Rng>(
    platform: &P,
    rng: &mut R,
    request: &mut ActivityRequest,
) -> Result<UserRef> {
    let id = match request.user_id {
        Some(id) => id,
        None => {
            let id = catalog::random_user_id(platform, rng)?;
            request.user_id = Some(id);
            id
        }
    };
    user_ref(platform, id)
}

fn user_ref<P: Platform>(platform: &P, id: u64) -> Result<UserRef> {
    platform.user(id)?.ok_or(ActError::UserNotFound(id))
}

const FILLER_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit",
];

/// Plausible throwaway prose for generated updates and comments.
fn filler_text<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(8..=24);
    let words: Vec<&str> = (0..count)
        .map(|_| FILLER_WORDS[rng.random_range(0..FILLER_WORDS.len())])
        .collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}
