//! The fixed component → activity-type catalog and uniform random selection
//! over it and over platform entities.
//!
//! The catalog is process-wide read-only state. Extending it at runtime is
//! a host-platform concern and out of scope here; the five entries below are
//! the complete set the completion engine knows how to synthesize.

use crate::error::{ActError, Result};
use crate::platform::Platform;
use once_cell::sync::Lazy;
use rand::Rng;

pub static CATALOG: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        ("activity", vec!["activity_comment", "activity_update"]),
        ("blogs", vec!["new_blog", "new_blog_post", "new_blog_comment"]),
        ("friends", vec!["friendship_created"]),
        ("groups", vec!["created_group", "joined_group"]),
        ("profile", vec!["new_avatar", "new_member", "updated_profile"]),
    ]
});

pub fn types_for(component: &str) -> Option<&'static [&'static str]> {
    CATALOG
        .iter()
        .find(|(c, _)| *c == component)
        .map(|(_, types)| types.as_slice())
}

/// Whether any catalog component registers this activity type. Group
/// updates reuse `activity_update` under the `groups` component, so the
/// check is deliberately component-agnostic.
pub fn is_catalog_type(kind: &str) -> bool {
    CATALOG.iter().any(|(_, types)| types.contains(&kind))
}

/// Pick a component uniformly from the intersection of platform-active
/// components and the catalog.
pub fn random_component<P: Platform, R: Rng>(platform: &P, rng: &mut R) -> Result<String> {
    let active = platform.active_components();
    let eligible: Vec<&str> = CATALOG
        .iter()
        .map(|(c, _)| *c)
        .filter(|c| active.iter().any(|a| a == c))
        .collect();

    if eligible.is_empty() {
        return Err(ActError::NoEligibleComponent);
    }
    Ok(eligible[rng.random_range(0..eligible.len())].to_string())
}

/// Pick a type uniformly from the catalog entry for `component`.
pub fn random_type<R: Rng>(component: &str, rng: &mut R) -> Result<String> {
    let types =
        types_for(component).ok_or_else(|| ActError::UnknownComponent(component.to_string()))?;
    Ok(types[rng.random_range(0..types.len())].to_string())
}

pub fn random_user_id<P: Platform, R: Rng>(platform: &P, rng: &mut R) -> Result<u64> {
    pick(platform.user_ids()?, rng, "user")
}

pub fn random_group_id<P: Platform, R: Rng>(platform: &P, rng: &mut R) -> Result<u64> {
    pick(platform.group_ids()?, rng, "group")
}

/// On a single-site platform every blog-flavored activity belongs to the
/// primary site, id 1.
pub fn random_blog_id<P: Platform, R: Rng>(platform: &P, rng: &mut R) -> Result<u64> {
    if !platform.is_multisite() {
        return Ok(1);
    }
    pick(platform.blog_ids()?, rng, "blog")
}

fn pick<R: Rng>(ids: Vec<u64>, rng: &mut R, what: &'static str) -> Result<u64> {
    if ids.is_empty() {
        return Err(ActError::NoEntitiesAvailable(what));
    }
    Ok(ids[rng.random_range(0..ids.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::fixtures::PlatformFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_type_stays_inside_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for (component, types) in CATALOG.iter() {
            for _ in 0..20 {
                let picked = random_type(component, &mut rng).unwrap();
                assert!(types.contains(&picked.as_str()));
            }
        }
    }

    #[test]
    fn random_type_rejects_unknown_component() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = random_type("gallery", &mut rng).unwrap_err();
        assert!(matches!(err, ActError::UnknownComponent(_)));
    }

    #[test]
    fn random_component_intersects_active_components() {
        let fixture = PlatformFixture::new().with_active_components(&["groups", "messages"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let c = random_component(&fixture.platform, &mut rng).unwrap();
            // "messages" is active but not in the catalog
            assert_eq!(c, "groups");
        }
    }

    #[test]
    fn random_component_fails_on_empty_intersection() {
        let fixture = PlatformFixture::new().with_active_components(&["messages"]);
        let mut rng = StdRng::seed_from_u64(7);
        let err = random_component(&fixture.platform, &mut rng).unwrap_err();
        assert!(matches!(err, ActError::NoEligibleComponent));
    }

    #[test]
    fn random_user_id_fails_when_platform_is_empty() {
        let fixture = PlatformFixture::new();
        let mut rng = StdRng::seed_from_u64(7);
        let err = random_user_id(&fixture.platform, &mut rng).unwrap_err();
        assert!(matches!(err, ActError::NoEntitiesAvailable("user")));
    }

    #[test]
    fn random_blog_id_is_fixed_on_single_site() {
        let fixture = PlatformFixture::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_blog_id(&fixture.platform, &mut rng).unwrap(), 1);
    }
}
