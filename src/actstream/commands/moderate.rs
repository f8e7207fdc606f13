use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ActError, Result};
use crate::platform::Platform;

/// Mark an activity item as spam (pulled from public feeds).
pub fn spam<P: Platform>(platform: &mut P, id: u64) -> Result<CmdResult> {
    set(platform, id, true)
}

/// Clear the spam flag.
pub fn ham<P: Platform>(platform: &mut P, id: u64) -> Result<CmdResult> {
    set(platform, id, false)
}

fn set<P: Platform>(platform: &mut P, id: u64, is_spam: bool) -> Result<CmdResult> {
    if !platform.set_spam(id, is_spam)? {
        return Err(ActError::ActivityNotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Activity item {} marked as {}.",
        id,
        if is_spam { "spam" } else { "ham" }
    )));
    Ok(result)
}
