#![forbid(unsafe_code)]

//! Label grouping.
//!
//! [`group`] folds a flat control-name list into panels in three passes:
//!
//! 1. **Bucketing**: each name goes under the panel named after its first
//!    whitespace-delimited token. Panels and children keep first-seen order
//!    and a name is never listed twice.
//! 2. **Singleton promotion**: buckets holding a single control are renamed
//!    to the fallback label (`"Other"` by default). The panel keeps the
//!    original label and appends a copy decorated with the bucket token, so
//!    `"Pan"` shows up as both `"Pan"` and `"Pan Pan"`.
//! 3. **Prefix naming**: the remaining panels are renamed to the longest
//!    common character prefix of their children, trimmed so the label does not
//!    end in a dangling one-letter word.
//!
//! Each promoted bucket stays in place by default, so several panels may
//! carry the fallback label. [`FallbackLayout::Merged`] folds them into one
//! panel placed where the first singleton bucket was.

use crate::panel::Panel;
use ahash::{AHashMap, AHashSet};

/// Label used for the singleton catch-all panel.
pub const DEFAULT_FALLBACK_LABEL: &str = "Other";

/// What happens to the leaf of a promoted singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SingletonPolicy {
    /// Keep the original leaf and append the decorated copy (both visible).
    #[default]
    Duplicate,
    /// Replace the original leaf with the decorated copy.
    Replace,
}

/// How a computed common prefix is cut back into a panel label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrefixTrim {
    /// Drop the last two characters when the second-to-last one is
    /// whitespace (`"Filter C"` becomes `"Filter"`), then trailing whitespace.
    #[default]
    DanglingChar,
    /// Cut back to the last whitespace unless every child continues with
    /// whitespace or ends right after the prefix (`"Filter Cu"` becomes
    /// `"Filter"`).
    WordBoundary,
}

/// Where promoted singletons end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FallbackLayout {
    /// Every singleton bucket becomes its own fallback panel at its position.
    #[default]
    InPlace,
    /// All singletons share one fallback panel.
    Merged,
}

/// Grouping options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GroupOptions {
    /// Name of the singleton catch-all panel.
    pub fallback_label: String,
    /// Treatment of promoted singleton leaves.
    pub singleton_policy: SingletonPolicy,
    /// Prefix trimming rule for multi-control panels.
    pub prefix_trim: PrefixTrim,
    /// Placement of promoted singletons.
    pub fallback_layout: FallbackLayout,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            fallback_label: DEFAULT_FALLBACK_LABEL.to_owned(),
            singleton_policy: SingletonPolicy::default(),
            prefix_trim: PrefixTrim::default(),
            fallback_layout: FallbackLayout::default(),
        }
    }
}

impl GroupOptions {
    /// Set the fallback panel label.
    #[must_use]
    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = label.into();
        self
    }

    /// Set the singleton policy.
    #[must_use]
    pub fn with_singleton_policy(mut self, policy: SingletonPolicy) -> Self {
        self.singleton_policy = policy;
        self
    }

    /// Set the prefix trimming rule.
    #[must_use]
    pub fn with_prefix_trim(mut self, trim: PrefixTrim) -> Self {
        self.prefix_trim = trim;
        self
    }

    /// Set the fallback panel layout.
    #[must_use]
    pub fn with_fallback_layout(mut self, layout: FallbackLayout) -> Self {
        self.fallback_layout = layout;
        self
    }
}

/// Group control names with the default options.
#[must_use]
pub fn group<S: AsRef<str>>(names: &[S]) -> Vec<Panel> {
    group_with(names, &GroupOptions::default())
}

/// Group control names.
///
/// Pure: the same input (including order) always produces the same panels.
#[must_use]
pub fn group_with<S: AsRef<str>>(names: &[S], options: &GroupOptions) -> Vec<Panel> {
    let buckets = bucket(names);
    #[cfg(feature = "tracing")]
    let bucket_count = buckets.len();

    let mut panels: Vec<Panel> = Vec::with_capacity(buckets.len());
    let mut merged: Option<usize> = None;
    #[cfg(feature = "tracing")]
    let mut promoted = 0usize;
    for mut bucket in buckets {
        if bucket.children.len() == 1 {
            #[cfg(feature = "tracing")]
            {
                promoted += 1;
            }
            let slot = match options.fallback_layout {
                FallbackLayout::Merged => *merged.get_or_insert_with(|| {
                    panels.push(Panel::new(options.fallback_label.clone()));
                    panels.len() - 1
                }),
                FallbackLayout::InPlace => {
                    panels.push(Panel::new(options.fallback_label.clone()));
                    panels.len() - 1
                }
            };
            promote(&mut panels[slot], bucket, options.singleton_policy);
            continue;
        }
        let label = options.prefix_trim.apply(common_prefix(&bucket.children), &bucket.children);
        if !label.is_empty() {
            bucket.name = label.to_owned();
        }
        panels.push(bucket);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "panels.group",
        names = names.len(),
        buckets = bucket_count,
        panels = panels.len(),
        promoted,
    );
    panels
}

/// First whitespace-delimited token; empty when the name starts with
/// whitespace or is empty.
fn first_token(name: &str) -> &str {
    name.split(char::is_whitespace).next().unwrap_or_default()
}

fn bucket<S: AsRef<str>>(names: &[S]) -> Vec<Panel> {
    let mut buckets: Vec<Panel> = Vec::new();
    let mut by_token: AHashMap<&str, usize> = AHashMap::new();
    let mut seen: AHashSet<&str> = AHashSet::new();
    for name in names {
        let name = name.as_ref();
        // A name fixes its token, so one global set dedupes every bucket.
        if !seen.insert(name) {
            continue;
        }
        let token = first_token(name);
        let index = *by_token.entry(token).or_insert_with(|| {
            buckets.push(Panel::new(token));
            buckets.len() - 1
        });
        buckets[index].children.push(Panel::leaf(name));
    }
    buckets
}

fn promote(fallback: &mut Panel, bucket: Panel, policy: SingletonPolicy) {
    let Panel { name: token, children } = bucket;
    for leaf in children {
        let decorated = Panel::leaf(format!("{token} {}", leaf.name));
        if policy == SingletonPolicy::Duplicate {
            fallback.children.push(leaf);
        }
        fallback.children.push(decorated);
    }
}

fn common_prefix(children: &[Panel]) -> &str {
    let Some((first, rest)) = children.split_first() else {
        return "";
    };
    let mut end = first.name.len();
    for other in rest {
        end = shared_prefix_len(&first.name[..end], &other.name);
        if end == 0 {
            break;
        }
    }
    &first.name[..end]
}

/// Byte length of the longest common character prefix; always a char
/// boundary of `a`.
fn shared_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, left), right)| left != right)
        .map_or_else(|| a.len().min(b.len()), |((index, _), _)| index)
}

impl PrefixTrim {
    fn apply<'a>(self, prefix: &'a str, children: &[Panel]) -> &'a str {
        let cut = match self {
            Self::DanglingChar => {
                let mut tail = prefix.char_indices().rev();
                match (tail.next(), tail.next()) {
                    (Some(_), Some((index, ch))) if ch.is_whitespace() => &prefix[..index],
                    _ => prefix,
                }
            }
            Self::WordBoundary => {
                let at_boundary = children.iter().all(|child| {
                    child.name[prefix.len()..]
                        .chars()
                        .next()
                        .is_none_or(char::is_whitespace)
                });
                match prefix.rfind(char::is_whitespace) {
                    Some(index) if !at_boundary => &prefix[..index],
                    _ => prefix,
                }
            }
        };
        cut.trim_end()
    }
}
