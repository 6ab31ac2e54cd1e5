use crate::domain::riskregister::risk::Risk;
use indexmap::IndexMap;
use std::sync::Arc;

/// Groups risks by an arbitrary string key, preserving first-seen key order
/// so chart labels stay stable across reloads.
///
/// Key functions resolve missing values to their documented defaults at the
/// call site (`"Unassigned"` owner, `Open` status, `Manual` scanner type,
/// `Security (CC)` category).
pub fn group_risks<F>(risks: &[Arc<Risk>], key_fn: F) -> IndexMap<String, Vec<Arc<Risk>>>
where
    F: Fn(&Risk) -> String,
{
    let mut groups: IndexMap<String, Vec<Arc<Risk>>> = IndexMap::new();
    for risk in risks {
        groups
            .entry(key_fn(risk))
            .or_default()
            .push(risk.clone());
    }
    groups
}

/// Counting variant of [`group_risks`], used for chart data series.
pub fn count_risks_by<F>(risks: &[Arc<Risk>], key_fn: F) -> IndexMap<String, usize>
where
    F: Fn(&Risk) -> String,
{
    group_risks(risks, key_fn)
        .into_iter()
        .map(|(key, group)| (key, group.len()))
        .collect()
}
