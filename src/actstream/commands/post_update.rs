use crate::commands::{create, CmdResult, CreateOpts};
use crate::error::Result;
use crate::platform::Platform;
use rand::Rng;

/// Post an `activity_update` for a user, optionally inside a group.
/// A thin wrapper over `create`: the completion engine validates the group
/// and builds the feed line.
pub fn run<P: Platform, R: Rng>(
    platform: &mut P,
    rng: &mut R,
    user_id: u64,
    content: Option<String>,
    group_id: Option<u64>,
) -> Result<CmdResult> {
    let opts = CreateOpts {
        component: Some(if group_id.is_some() {
            "groups".to_string()
        } else {
            "activity".to_string()
        }),
        kind: Some("activity_update".to_string()),
        content,
        user_id: Some(user_id),
        item_id: group_id,
        ..CreateOpts::default()
    };
    create::run(platform, rng, &opts)
}
