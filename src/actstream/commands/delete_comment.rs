use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ActError, Result};
use crate::platform::Platform;

/// Remove one comment (and any replies under it) from an activity thread.
pub fn run<P: Platform>(platform: &mut P, activity_id: u64, comment_id: u64) -> Result<CmdResult> {
    if platform.activity(activity_id)?.is_none() {
        return Err(ActError::ActivityNotFound(activity_id));
    }

    let comment = platform
        .activity(comment_id)?
        .filter(|a| a.is_comment() && a.item_id == activity_id)
        .ok_or(ActError::CommentNotFound {
            activity_id,
            comment_id,
        })?;

    let thread: Vec<_> = platform
        .activities()?
        .into_iter()
        .filter(|a| a.is_comment() && a.item_id == activity_id)
        .collect();

    // the comment plus everything threaded beneath it
    let mut doomed = vec![comment.id];
    let mut cursor = 0;
    while cursor < doomed.len() {
        let parent = doomed[cursor];
        cursor += 1;
        for row in &thread {
            if row.secondary_item_id == parent && !doomed.contains(&row.id) {
                doomed.push(row.id);
            }
        }
    }

    for id in &doomed {
        platform.delete_activity(*id)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted comment {} from activity item {}.",
        comment_id, activity_id
    )));
    Ok(result)
}
