//! Per-source cosmetic overrides for feed entries.

use crate::feed::types::FeedEntry;

pub const VITALIK_BLOG: &str = "https://vitalik.eth.limo/feed.xml";
pub const PANDA_OPS_BLOG: &str = "https://ethpandaops.io/posts/index.xml";
pub const SOLIDITY_BLOG: &str = "https://soliditylang.org/feed.xml";

/// Override applied to every entry whose `source_feed_url` equals `feed_url`.
#[derive(Debug)]
pub struct SourceRule {
    pub feed_url: &'static str,
    pub img_src: &'static str,
    /// Replaces the first occurrence of `.0` in the link with `.1`.
    pub link_rewrite: Option<(&'static str, &'static str)>,
}

static SOURCE_RULES: &[SourceRule] = &[
    SourceRule {
        feed_url: VITALIK_BLOG,
        img_src: "/images/vitalik-blog-banner.png",
        link_rewrite: Some((".ca", ".eth.limo")),
    },
    SourceRule {
        feed_url: PANDA_OPS_BLOG,
        img_src: "/images/panda-ops-banner.png",
        link_rewrite: None,
    },
    SourceRule {
        feed_url: SOLIDITY_BLOG,
        img_src: "/images/solidity-banner.png",
        link_rewrite: None,
    },
];

/// Looks up the rule for a source feed URL.
pub fn rule_for(feed_url: &str) -> Option<&'static SourceRule> {
    SOURCE_RULES.iter().find(|r| r.feed_url == feed_url)
}

/// Applies the matching [`SourceRule`], if any. Unknown sources pass through.
pub fn annotate(mut entry: FeedEntry) -> FeedEntry {
    let Some(rule) = rule_for(&entry.source_feed_url) else {
        return entry;
    };

    entry.img_src = Some(rule.img_src.to_string());
    if let Some((from, to)) = rule.link_rewrite {
        entry.link = entry.link.replacen(from, to, 1);
    }
    entry
}
