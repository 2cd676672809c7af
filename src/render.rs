//! Tree rendering: the depth-marker dump produced by the `Display` script
//! command, and a termtree-based pretty view for the `tree` subcommand.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::album::AlbumTree;
use crate::config::Settings;

/// Render the whole tree as one line per node, pre-order.
///
/// Set lines carry the child count, photo lines just the name:
///
/// ```text
/// Set Album length :1
/// --Set Band length :2
/// ----Drummer
/// ----Singer
/// ```
///
/// The marker prefix repeats `depth` times and children render at
/// `depth + indent_step`.
#[instrument(level = "debug", skip(tree, settings))]
pub fn render_markers(tree: &AlbumTree, settings: &Settings) -> String {
    let mut out = String::new();
    render_node(tree, tree.root(), 0, settings, &mut out);
    out
}

fn render_node(tree: &AlbumTree, idx: Index, depth: usize, settings: &Settings, out: &mut String) {
    let node = match tree.get(idx) {
        Some(node) => node,
        None => return,
    };
    let markers = settings.marker.repeat(depth);
    if node.is_set() {
        out.push_str(&format!(
            "{}Set {} length :{}\n",
            markers,
            node.name,
            node.children().len()
        ));
        for &child in node.children() {
            render_node(tree, child, depth + settings.indent_step, settings, out);
        }
    } else {
        out.push_str(&format!("{}{}\n", markers, node.name));
    }
}

/// Convert the album into a [`termtree::Tree`] for connector-style output.
#[instrument(level = "debug", skip(tree))]
pub fn to_termtree(tree: &AlbumTree) -> Tree<String> {
    fn build(tree: &AlbumTree, idx: Index) -> Tree<String> {
        let name = tree
            .get(idx)
            .map(|n| n.name.clone())
            .unwrap_or_default();
        let leaves: Vec<_> = tree
            .get(idx)
            .map(|n| n.children().iter().map(|&c| build(tree, c)).collect())
            .unwrap_or_default();
        Tree::new(name).with_leaves(leaves)
    }

    build(tree, tree.root())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> AlbumTree {
        let mut tree = AlbumTree::new("Album");
        let band = tree.add_set(tree.root(), "Band").unwrap();
        tree.add_photo(band, "Drummer").unwrap();
        tree.add_photo(band, "Singer").unwrap();
        tree
    }

    #[test]
    fn test_marker_rendering() {
        let rendered = render_markers(&sample_tree(), &Settings::default());
        assert_eq!(
            rendered,
            "Set Album length :1\n--Set Band length :2\n----Drummer\n----Singer\n"
        );
    }

    #[test]
    fn test_one_line_per_node() {
        let tree = sample_tree();
        let rendered = render_markers(&tree, &Settings::default());
        assert_eq!(rendered.lines().count(), tree.node_count());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let tree = sample_tree();
        let settings = Settings::default();
        assert_eq!(
            render_markers(&tree, &settings),
            render_markers(&tree, &settings)
        );
    }

    #[test]
    fn test_custom_marker_and_step() {
        let settings = Settings {
            marker: "*".into(),
            indent_step: 1,
            ..Settings::default()
        };
        let rendered = render_markers(&sample_tree(), &settings);
        assert!(rendered.contains("*Set Band length :2\n"));
        assert!(rendered.contains("**Drummer\n"));
    }

    #[test]
    fn test_termtree_lists_all_nodes() {
        let out = to_termtree(&sample_tree()).to_string();
        for name in ["Album", "Band", "Drummer", "Singer"] {
            assert!(out.contains(name), "missing {name} in:\n{out}");
        }
    }
}
