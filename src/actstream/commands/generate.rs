use crate::catalog;
use crate::commands::{create, CmdMessage, CmdResult, CreateOpts};
use crate::error::{ActError, Result};
use crate::platform::Platform;
use rand::Rng;

/// Bulk-create synthetic activity items. The component/type pair is chosen
/// once and shared by the whole batch, not re-rolled per iteration.
/// `skip_comments` leaves `activity_comment` out of the draw; rebuilding
/// comment trees after every insert is expensive on the host side.
pub fn run<P: Platform, R: Rng>(
    platform: &mut P,
    rng: &mut R,
    count: usize,
    opts: &CreateOpts,
    skip_comments: bool,
) -> Result<CmdResult> {
    let component = match &opts.component {
        Some(c) => c.clone(),
        None => catalog::random_component(platform, rng)?,
    };
    let kind = match &opts.kind {
        Some(k) => k.clone(),
        None => {
            let types = catalog::types_for(&component)
                .ok_or_else(|| ActError::UnknownComponent(component.clone()))?;
            let eligible: Vec<&str> = types
                .iter()
                .copied()
                .filter(|t| !skip_comments || *t != "activity_comment")
                .collect();
            if eligible.is_empty() {
                return Err(ActError::NoEligibleComponent);
            }
            eligible[rng.random_range(0..eligible.len())].to_string()
        }
    };

    let batch_opts = CreateOpts {
        component: Some(component.clone()),
        kind: Some(kind.clone()),
        ..opts.clone()
    };

    let mut result = CmdResult::default();
    for _ in 0..count {
        let created = create::run(platform, rng, &batch_opts)?;
        result.created_ids.extend(created.created_ids);
    }

    result.add_message(CmdMessage::success(format!(
        "Generated {} activity item(s) ({}/{}).",
        result.created_ids.len(),
        component,
        kind
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::platform::memory::fixtures::PlatformFixture;

    #[test]
    fn zero_count_creates_nothing_and_succeeds() {
        let mut fixture = PlatformFixture::new().with_user(1, "Ada");
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(
            &mut fixture.platform,
            &mut rng,
            0,
            &CreateOpts::default(),
            false,
        )
        .unwrap();

        assert!(result.created_ids.is_empty());
        assert!(fixture.platform.activities().unwrap().is_empty());
    }

    #[test]
    fn the_whole_batch_shares_one_type() {
        let mut fixture = PlatformFixture::new().with_users(4);
        let mut rng = StdRng::seed_from_u64(9);

        let opts = CreateOpts {
            component: Some("profile".to_string()),
            ..CreateOpts::default()
        };
        run(&mut fixture.platform, &mut rng, 25, &opts, false).unwrap();

        let rows = fixture.platform.activities().unwrap();
        assert_eq!(rows.len(), 25);
        let first_kind = rows[0].kind.clone();
        assert!(rows.iter().all(|a| a.kind == first_kind));
    }

    #[test]
    fn skip_comments_never_draws_the_comment_type() {
        let mut fixture = PlatformFixture::new()
            .with_active_components(&["activity"])
            .with_users(2);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            run(
                &mut fixture.platform,
                &mut rng,
                1,
                &CreateOpts::default(),
                true,
            )
            .unwrap();
        }

        assert!(fixture
            .platform
            .activities()
            .unwrap()
            .iter()
            .all(|a| a.kind == "activity_update"));
    }
}
