//! Which edits a content file gets, depending on its publication date

use crate::core::front_matter::FrontMatter;
use chrono::{NaiveDate, Utc};
use log::debug;

/// Edit policy applied to every content file
///
/// With an "as of" date, entries dated after it are treated as scheduled:
/// they are marked unpublished and lose their redirect aliases. Without
/// one, every entry simply gets its canonical redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    as_of: Option<NaiveDate>,
}

impl Policy {
    /// Future-date handling relative to `today`
    pub fn scheduled(today: NaiveDate) -> Self {
        Self { as_of: Some(today) }
    }

    /// Future-date handling relative to the current UTC date
    pub fn scheduled_today() -> Self {
        Self::scheduled(Utc::now().date_naive())
    }

    /// Always insert the canonical redirect
    pub fn always_redirect() -> Self {
        Self { as_of: None }
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    /// Whether the entry's publish date is strictly after the "as of" date
    pub fn is_future(&self, front_matter: &FrontMatter) -> bool {
        match (self.as_of, front_matter.publish_date()) {
            (Some(today), Some(date)) => date > today,
            _ => false,
        }
    }

    /// Apply the policy, returning whether the front matter changed
    pub fn apply(&self, front_matter: &mut FrontMatter, collection: &str, slug: &str) -> bool {
        if self.is_future(front_matter) {
            debug!("{collection}/{slug} is scheduled, unpublishing");
            let flag_changed = front_matter.set_published(false);
            let removed = front_matter.remove_redirects();
            flag_changed || removed
        } else {
            front_matter.ensure_redirect(collection, slug)
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::scheduled_today()
    }
}
