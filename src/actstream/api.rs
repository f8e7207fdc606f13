//! # API Facade
//!
//! Thin facade over the command layer, the single entry point for all
//! actstream operations. It dispatches, nothing more: business logic lives
//! in `commands/*.rs`, platform access behind the [`Platform`] trait, and
//! randomness in the injected [`Rng`].
//!
//! Generic over both collaborators so tests can pair `MemoryPlatform` with
//! a seeded `StdRng` while the binary pairs `JsonPlatform` with OS entropy.

use crate::commands;
use crate::error::Result;
use crate::platform::Platform;
use rand::Rng;

pub struct ActivityApi<P: Platform, R: Rng> {
    platform: P,
    rng: R,
}

impl<P: Platform, R: Rng> ActivityApi<P, R> {
    pub fn new(platform: P, rng: R) -> Self {
        Self { platform, rng }
    }

    pub fn create(&mut self, opts: &commands::CreateOpts) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.platform, &mut self.rng, opts)
    }

    pub fn list(&self, filter: &commands::list::ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.platform, filter)
    }

    pub fn get(&self, id: u64) -> Result<commands::CmdResult> {
        commands::get::run(&self.platform, id)
    }

    pub fn delete(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.platform, id)
    }

    pub fn spam(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::moderate::spam(&mut self.platform, id)
    }

    pub fn ham(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::moderate::ham(&mut self.platform, id)
    }

    pub fn post_update(
        &mut self,
        user_id: u64,
        content: Option<String>,
        group_id: Option<u64>,
    ) -> Result<commands::CmdResult> {
        commands::post_update::run(&mut self.platform, &mut self.rng, user_id, content, group_id)
    }

    pub fn comment(
        &mut self,
        activity_id: u64,
        user_id: Option<u64>,
        content: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::comment::run(
            &mut self.platform,
            &mut self.rng,
            activity_id,
            user_id,
            content,
        )
    }

    pub fn delete_comment(
        &mut self,
        activity_id: u64,
        comment_id: u64,
    ) -> Result<commands::CmdResult> {
        commands::delete_comment::run(&mut self.platform, activity_id, comment_id)
    }

    pub fn permalink(&self, id: u64) -> Result<commands::CmdResult> {
        commands::permalink::run(&self.platform, id)
    }

    pub fn generate(
        &mut self,
        count: usize,
        opts: &commands::CreateOpts,
        skip_comments: bool,
    ) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.platform, &mut self.rng, count, opts, skip_comments)
    }
}

pub use commands::list::ListFilter;
pub use commands::{CmdMessage, CmdResult, CreateOpts, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::fixtures::PlatformFixture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn dispatches_create_then_get() {
        let fixture = PlatformFixture::new().with_user(1, "Ada");
        let mut api = ActivityApi::new(fixture.platform, StdRng::seed_from_u64(1));

        let opts = CreateOpts {
            component: Some("profile".to_string()),
            kind: Some("new_member".to_string()),
            ..CreateOpts::default()
        };
        let created = api.create(&opts).unwrap();
        let fetched = api.get(created.created_ids[0]).unwrap();
        assert_eq!(fetched.activities[0].kind, "new_member");
    }
}
