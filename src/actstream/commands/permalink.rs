use crate::commands::CmdResult;
use crate::error::{ActError, Result};
use crate::platform::Platform;

pub fn run<P: Platform>(platform: &P, id: u64) -> Result<CmdResult> {
    let link = platform
        .activity_permalink(id)?
        .ok_or(ActError::ActivityNotFound(id))?;
    Ok(CmdResult::default().with_permalinks(vec![link]))
}
