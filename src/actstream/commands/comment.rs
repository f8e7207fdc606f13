use crate::commands::{CmdMessage, CmdResult};
use crate::engine;
use crate::error::{ActError, Result};
use crate::model::ActivityRequest;
use crate::platform::Platform;
use rand::Rng;

/// Add a comment to an existing activity item. Replying to a comment still
/// attaches the new row to the thread root.
pub fn run<P: Platform, R: Rng>(
    platform: &mut P,
    rng: &mut R,
    activity_id: u64,
    user_id: Option<u64>,
    content: Option<String>,
) -> Result<CmdResult> {
    let target = platform
        .activity(activity_id)?
        .ok_or(ActError::ActivityNotFound(activity_id))?;

    let root = if target.is_comment() {
        target.item_id
    } else {
        target.id
    };

    let mut request = ActivityRequest::new("activity", "activity_comment");
    request.user_id = user_id;
    request.content = content.unwrap_or_default();
    request.item_id = Some(root);
    request.secondary_item_id = Some(target.id);
    request.primary_link = platform.activity_permalink(root)?.unwrap_or_default();
    engine::complete(platform, rng, &mut request)?;

    let id = platform.add_activity(&request)?;

    let mut result = CmdResult::default();
    result.created_ids.push(id);
    result.add_message(CmdMessage::success(format!(
        "Added comment {} to activity item {}.",
        id, root
    )));
    Ok(result)
}
