use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ActError, Result};
use crate::platform::Platform;

/// Delete an activity row and any comment rows threaded onto it.
pub fn run<P: Platform>(platform: &mut P, id: u64) -> Result<CmdResult> {
    if platform.activity(id)?.is_none() {
        return Err(ActError::ActivityNotFound(id));
    }

    let thread: Vec<u64> = platform
        .activities()?
        .into_iter()
        .filter(|a| a.is_comment() && a.item_id == id)
        .map(|a| a.id)
        .collect();

    for comment_id in &thread {
        platform.delete_activity(*comment_id)?;
    }
    if !platform.delete_activity(id)? {
        return Err(ActError::ActivityNotFound(id));
    }

    let mut result = CmdResult::default();
    let note = if thread.is_empty() {
        format!("Deleted activity item {}.", id)
    } else {
        format!(
            "Deleted activity item {} and {} comment(s).",
            id,
            thread.len()
        )
    };
    result.add_message(CmdMessage::success(note));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityRequest;
    use crate::platform::memory::fixtures::PlatformFixture;

    #[test]
    fn deletes_the_row_and_its_comments() {
        let mut root = ActivityRequest::new("activity", "activity_update");
        root.action = "Ada posted an update".to_string();
        let mut comment = ActivityRequest::new("activity", "activity_comment");
        comment.action = "Grace posted a new activity comment".to_string();
        comment.item_id = Some(1);

        let mut fixture = PlatformFixture::new()
            .with_activity(&root)
            .with_activity(&comment);

        let result = run(&mut fixture.platform, 1).unwrap();
        assert!(result.messages[0].content.contains("1 comment"));
        assert!(fixture.platform.activities().unwrap().is_empty());
    }

    #[test]
    fn missing_id_is_an_error() {
        let mut fixture = PlatformFixture::new();
        let err = run(&mut fixture.platform, 3).unwrap_err();
        assert!(matches!(err, ActError::ActivityNotFound(3)));
    }
}
