#![no_main]

use libfuzzer_sys::fuzz_target;
use seqdeck_panels::{GroupOptions, PrefixTrim, SingletonPolicy, group, group_with, leaf_total};

fuzz_target!(|names: Vec<String>| {
    // Cap input size to keep fuzzing fast.
    if names.len() > 256 {
        return;
    }

    // Grouping must never panic, whatever the characters.
    let panels = group(&names);

    // Every name lands somewhere.
    for name in &names {
        assert!(
            panels
                .iter()
                .any(|panel| panel.child_names().any(|child| child == name.as_str())),
            "{name:?} was dropped"
        );
    }
    assert!(leaf_total(&panels) >= names.iter().collect::<std::collections::HashSet<_>>().len());

    // Alternate policies must never panic on multibyte prefixes.
    let options = GroupOptions::default()
        .with_singleton_policy(SingletonPolicy::Replace)
        .with_prefix_trim(PrefixTrim::WordBoundary);
    let _ = group_with(&names, &options);
});
