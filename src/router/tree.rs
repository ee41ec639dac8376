use std::collections::{HashMap, HashSet};

use crate::error::RouteSourceError;
use crate::types::{MenuRecord, MenuTreeNode};

/// Group menu records into a forest by parent reference.
///
/// Siblings are ordered by ascending rank, ties keep input order. Records whose
/// parent is set but unknown are dropped together with their descendants, as are
/// records caught in a parent cycle; neither is ever promoted to root.
pub fn build_menu_tree(records: &[MenuRecord]) -> Result<Vec<MenuTreeNode>, RouteSourceError> {
    let mut ids = HashSet::with_capacity(records.len());
    for record in records {
        if !ids.insert(record.id) {
            return Err(RouteSourceError::DuplicateId(record.id));
        }
    }

    let mut groups: HashMap<Option<u64>, Vec<&MenuRecord>> = HashMap::new();
    for record in records {
        match record.parent_id {
            Some(parent) if !ids.contains(&parent) => {
                tracing::warn!(
                    "Dropping menu '{}' (id {}): parent {} does not exist",
                    record.title,
                    record.id,
                    parent
                );
            }
            parent => groups.entry(parent).or_default().push(record),
        }
    }

    // sort_by_key is stable, so equal ranks keep input order
    for siblings in groups.values_mut() {
        siblings.sort_by_key(|r| r.rank);
    }

    let forest = attach(&groups, None);

    let placed: usize = forest.iter().map(MenuTreeNode::len).sum();
    if placed < records.len() {
        tracing::warn!(
            "{} of {} menu records are unreachable from a root and were dropped",
            records.len() - placed,
            records.len()
        );
    }

    Ok(forest)
}

fn attach(
    groups: &HashMap<Option<u64>, Vec<&MenuRecord>>,
    parent: Option<u64>,
) -> Vec<MenuTreeNode> {
    // Every node reached from a root has an acyclic ancestor chain, so this terminates
    groups
        .get(&parent)
        .map(|siblings| {
            siblings
                .iter()
                .map(|record| MenuTreeNode {
                    record: (*record).clone(),
                    children: attach(groups, Some(record.id)),
                })
                .collect()
        })
        .unwrap_or_default()
}
