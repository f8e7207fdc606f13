use crate::catalog;
use crate::commands::{CmdMessage, CmdResult, CreateOpts};
use crate::engine;
use crate::error::Result;
use crate::model::ActivityRequest;
use crate::platform::Platform;
use rand::Rng;

/// Create one activity item. Component and type are randomized when absent;
/// the completion engine fills every other blank field unless the caller
/// pinned both item ids, in which case the request is taken as-is.
pub fn run<P: Platform, R: Rng>(
    platform: &mut P,
    rng: &mut R,
    opts: &CreateOpts,
) -> Result<CmdResult> {
    let component = match &opts.component {
        Some(c) => c.clone(),
        None => catalog::random_component(platform, rng)?,
    };
    let kind = match &opts.kind {
        Some(k) => k.clone(),
        None => catalog::random_type(&component, rng)?,
    };

    let mut request = ActivityRequest {
        component,
        kind,
        action: opts.action.clone().unwrap_or_default(),
        content: opts.content.clone().unwrap_or_default(),
        primary_link: opts.primary_link.clone().unwrap_or_default(),
        user_id: opts.user_id,
        item_id: opts.item_id,
        secondary_item_id: opts.secondary_item_id,
        date_recorded: opts.date_recorded,
        hide_sitewide: opts.hide_sitewide,
        is_spam: opts.is_spam,
    };

    if request.item_id.is_none() || request.secondary_item_id.is_none() {
        engine::complete(platform, rng, &mut request)?;
    }

    let id = platform.add_activity(&request)?;

    let mut result = CmdResult::default();
    result.created_ids.push(id);
    if !catalog::is_catalog_type(&request.kind) {
        result.add_message(CmdMessage::warning(format!(
            "{} is not a catalog type; fields were taken as given.",
            request.kind
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Created activity item {} ({}/{}).",
        id, request.component, request.kind
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::fixtures::PlatformFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn create_with_pinned_ids_skips_completion() {
        let mut fixture = PlatformFixture::new().with_user(1, "Ada");
        let mut rng = StdRng::seed_from_u64(1);

        let opts = CreateOpts {
            component: Some("groups".to_string()),
            kind: Some("activity_update".to_string()),
            action: Some("Ada posted an update".to_string()),
            user_id: Some(1),
            item_id: Some(999),
            secondary_item_id: Some(0),
            ..CreateOpts::default()
        };
        // group 999 does not exist, but completion never runs
        let result = run(&mut fixture.platform, &mut rng, &opts).unwrap();
        assert_eq!(result.created_ids.len(), 1);
    }

    #[test]
    fn create_randomizes_component_and_type() {
        let mut fixture = PlatformFixture::new()
            .with_active_components(&["profile"])
            .with_user(1, "Ada");
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(&mut fixture.platform, &mut rng, &CreateOpts::default()).unwrap();
        let id = result.created_ids[0];
        let activity = fixture.platform.activity(id).unwrap().unwrap();
        assert_eq!(activity.component, "profile");
        assert!(
            ["new_avatar", "new_member", "updated_profile"].contains(&activity.kind.as_str())
        );
        assert!(!activity.action.is_empty());
    }

    #[test]
    fn create_reports_the_new_id() {
        let mut fixture = PlatformFixture::new().with_user(1, "Ada");
        let mut rng = StdRng::seed_from_u64(1);

        let opts = CreateOpts {
            component: Some("profile".to_string()),
            kind: Some("new_member".to_string()),
            ..CreateOpts::default()
        };
        let result = run(&mut fixture.platform, &mut rng, &opts).unwrap();
        assert_eq!(result.created_ids, vec![1]);
        assert!(result.messages[0].content.contains("Created activity item 1"));
    }
}
