//! Merges RSS items from several feeds into one display list.

pub mod annotate;
pub mod sort;
pub mod types;

use annotate::annotate;
use sort::sort_by_pub_date;
use tracing::debug;
use types::FeedEntry;

/// Number of items shown on the site by default.
pub const RSS_DISPLAY_COUNT: usize = 6;

/// Concatenates `lists`, applies per-source annotation, sorts newest first
/// and keeps at most `display_count` entries.
pub fn curate<I>(lists: I, display_count: usize) -> Vec<FeedEntry>
where
    I: IntoIterator<Item = Vec<FeedEntry>>,
{
    let annotated: Vec<FeedEntry> = lists.into_iter().flatten().map(annotate).collect();
    let total = annotated.len();

    let mut sorted = sort_by_pub_date(annotated);
    sorted.truncate(display_count);

    debug!(total, kept = sorted.len(), display_count, "Feed entries curated");
    sorted
}

/// [`curate`] with [`RSS_DISPLAY_COUNT`].
pub fn polish<I>(lists: I) -> Vec<FeedEntry>
where
    I: IntoIterator<Item = Vec<FeedEntry>>,
{
    curate(lists, RSS_DISPLAY_COUNT)
}
