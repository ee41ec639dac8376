use crate::types::MenuTreeNode;

/// True when the entry is open to everyone or shares a role with `roles`
pub fn is_permitted(access: &[String], roles: &[String]) -> bool {
    access.is_empty() || access.iter().any(|tag| roles.contains(tag))
}

/// Remove entries the given roles may not see.
///
/// A leaf survives when it is permitted. A parent survives when at least one
/// descendant survives, whatever its own tag says; a parent left without
/// children is dropped.
pub fn filter_by_roles(forest: &[MenuTreeNode], roles: &[String]) -> Vec<MenuTreeNode> {
    forest.iter().filter_map(|node| filter_node(node, roles)).collect()
}

fn filter_node(node: &MenuTreeNode, roles: &[String]) -> Option<MenuTreeNode> {
    if node.is_leaf() {
        return is_permitted(&node.record.access, roles).then(|| node.clone());
    }

    let children = filter_by_roles(&node.children, roles);
    if children.is_empty() {
        return None;
    }

    Some(MenuTreeNode {
        record: node.record.clone(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuRecord;

    fn node(title: &str, access: &[&str], children: Vec<MenuTreeNode>) -> MenuTreeNode {
        MenuTreeNode {
            record: MenuRecord {
                title: title.to_string(),
                access: access.iter().map(|s| s.to_string()).collect(),
                ..MenuRecord::default()
            },
            children,
        }
    }

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parent_without_permitted_descendants_is_excluded() {
        let forest = vec![node(
            "Access",
            &[],
            vec![node("Roles", &["admin"], vec![]), node("Users", &["admin"], vec![])],
        )];

        assert!(filter_by_roles(&forest, &roles(&["user"])).is_empty());
    }

    #[test]
    fn test_parent_kept_for_one_permitted_descendant() {
        let forest = vec![node(
            "Access",
            &["admin"],
            vec![node("Roles", &["admin"], vec![]), node("Profile", &["user"], vec![])],
        )];

        let filtered = filter_by_roles(&forest, &roles(&["user"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.title, "Access");
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].record.title, "Profile");
    }

    #[test]
    fn test_untagged_leaves_are_public() {
        let forest = vec![node("Dashboard", &[], vec![]), node("Secret", &["root"], vec![])];
        let filtered = filter_by_roles(&forest, &[]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].record.title, "Dashboard");
    }

    #[test]
    fn test_deep_filtering() {
        let forest = vec![node(
            "L1",
            &[],
            vec![node("L2", &[], vec![node("L3", &["ops"], vec![])]), node("Keep", &[], vec![])],
        )];

        let filtered = filter_by_roles(&forest, &roles(&["user"]));
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].record.title, "Keep");
    }
}
