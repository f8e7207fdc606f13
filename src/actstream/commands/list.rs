use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Activity;
use crate::platform::Platform;

#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub user_id: Option<u64>,
    pub component: Option<String>,
    pub kind: Option<String>,
    pub spam_only: bool,
    pub limit: Option<usize>,
}

/// List activity rows, newest first.
pub fn run<P: Platform>(platform: &P, filter: &ListFilter) -> Result<CmdResult> {
    let mut rows: Vec<Activity> = platform
        .activities()?
        .into_iter()
        .filter(|a| filter.user_id.is_none_or(|id| a.user_id == id))
        .filter(|a| {
            filter
                .component
                .as_deref()
                .is_none_or(|c| a.component == c)
        })
        .filter(|a| filter.kind.as_deref().is_none_or(|k| a.kind == k))
        .filter(|a| !filter.spam_only || a.is_spam)
        .collect();

    rows.sort_by(|a, b| b.date_recorded.cmp(&a.date_recorded).then(b.id.cmp(&a.id)));
    if let Some(limit) = filter.limit {
        rows.truncate(limit);
    }

    Ok(CmdResult::default().with_activities(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityRequest;
    use crate::platform::memory::fixtures::PlatformFixture;

    fn seeded_fixture() -> PlatformFixture {
        let mut update = ActivityRequest::new("activity", "activity_update");
        update.user_id = Some(1);
        update.action = "Ada posted an update".to_string();

        let mut joined = ActivityRequest::new("groups", "joined_group");
        joined.user_id = Some(2);
        joined.action = "Grace joined the group".to_string();

        PlatformFixture::new()
            .with_user(1, "Ada")
            .with_user(2, "Grace")
            .with_activity(&update)
            .with_activity(&joined)
    }

    #[test]
    fn filters_by_component() {
        let fixture = seeded_fixture();
        let result = run(
            &fixture.platform,
            &ListFilter {
                component: Some("groups".to_string()),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(result.activities.len(), 1);
        assert_eq!(result.activities[0].kind, "joined_group");
    }

    #[test]
    fn filters_by_user() {
        let fixture = seeded_fixture();
        let result = run(
            &fixture.platform,
            &ListFilter {
                user_id: Some(1),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(result.activities.len(), 1);
        assert_eq!(result.activities[0].user_id, 1);
    }

    #[test]
    fn newest_rows_come_first() {
        let fixture = seeded_fixture();
        let result = run(&fixture.platform, &ListFilter::default()).unwrap();
        assert_eq!(result.activities.len(), 2);
        // same timestamp resolution, so the higher id wins the tie
        assert!(result.activities[0].id > result.activities[1].id);
    }

    #[test]
    fn limit_truncates() {
        let fixture = seeded_fixture();
        let result = run(
            &fixture.platform,
            &ListFilter {
                limit: Some(1),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(result.activities.len(), 1);
    }
}
