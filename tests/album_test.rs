//! Tests for the composite album tree

use phototree::album::{AlbumTree, Removal};
use phototree::config::Settings;
use phototree::errors::AlbumError;
use phototree::render::render_markers;
use phototree::util::testing;

fn init() {
    testing::init_test_setup();
}

// ============================================================
// Structure Tests
// ============================================================

#[test]
fn given_add_sequence_when_rendering_then_one_line_per_node() {
    init();
    let mut tree = AlbumTree::new("Album");
    let root = tree.root();
    let a = tree.add_set(root, "a").unwrap();
    tree.add_photo(a, "p1").unwrap();
    tree.add_photo(a, "p2").unwrap();
    let b = tree.add_set(a, "b").unwrap();
    tree.add_photo(b, "p3").unwrap();

    let rendered = render_markers(&tree, &Settings::default());

    assert_eq!(rendered.lines().count(), tree.node_count());
    assert_eq!(tree.node_count(), 6);
}

#[test]
fn given_photo_parent_when_adding_then_errors_and_tree_is_unchanged() {
    init();
    let mut tree = AlbumTree::new("Album");
    let photo = tree.add_photo(tree.root(), "Drummer").unwrap();
    let before = render_markers(&tree, &Settings::default());

    let set_err = tree.add_set(photo, "Sub").unwrap_err();
    let photo_err = tree.add_photo(photo, "Singer").unwrap_err();

    assert!(matches!(set_err, AlbumError::PhotoCannotContain(_)));
    assert!(matches!(photo_err, AlbumError::PhotoCannotContain(_)));
    assert_eq!(render_markers(&tree, &Settings::default()), before);
}

// ============================================================
// Find Tests
// ============================================================

#[test]
fn given_added_photo_when_finding_then_match_has_that_name() {
    init();
    let mut tree = AlbumTree::new("Album");
    let band = tree.add_set(tree.root(), "Band").unwrap();
    tree.add_photo(band, "Drummer").unwrap();

    let m = tree.find("Drummer").expect("photo should be found");

    assert_eq!(tree.get(m.node).unwrap().name, "Drummer");
    assert_eq!(m.parent, Some(band));
}

#[test]
fn given_duplicate_names_when_finding_then_first_preorder_match_wins() {
    init();
    let mut tree = AlbumTree::new("Album");
    let root = tree.root();
    let first = tree.add_set(root, "Band").unwrap();
    let inner = tree.add_photo(first, "Band").unwrap();
    tree.add_set(root, "Band").unwrap();

    // Pre-order: root, first set, its photo, second set
    let m = tree.find("Band").unwrap();
    assert_eq!(m.node, first);

    // From inside the first set, the self-match comes first
    let m = tree.find_from(first, "Band").unwrap();
    assert_eq!(m.node, first);
    assert_eq!(m.parent, None);

    let m = tree.find_from(inner, "Band").unwrap();
    assert_eq!(m.node, inner);
}

#[test]
fn given_absent_name_when_finding_then_none() {
    init();
    let tree = AlbumTree::new("Album");
    assert!(tree.find("Nowhere").is_none());
}

// ============================================================
// Remove Tests
// ============================================================

#[test]
fn given_unique_name_when_removed_then_find_misses() {
    init();
    let mut tree = AlbumTree::new("Album");
    let band = tree.add_set(tree.root(), "Band").unwrap();
    tree.add_photo(band, "Drummer").unwrap();

    let removal = tree.remove_from(tree.root(), "Drummer").unwrap();

    assert_eq!(removal, Removal::Removed { parent: band });
    assert!(tree.find("Drummer").is_none());
}

#[test]
fn given_absent_name_when_removed_then_not_found_and_unchanged() {
    init();
    let mut tree = AlbumTree::new("Album");
    tree.add_set(tree.root(), "Band").unwrap();
    let before = render_markers(&tree, &Settings::default());

    let removal = tree.remove_from(tree.root(), "Nowhere").unwrap();

    assert_eq!(removal, Removal::NotFound);
    assert_eq!(render_markers(&tree, &Settings::default()), before);
}

#[test]
fn given_duplicate_names_when_removed_then_only_first_match_goes() {
    init();
    let mut tree = AlbumTree::new("Album");
    let root = tree.root();
    let band = tree.add_set(root, "Band").unwrap();
    tree.add_photo(band, "dup").unwrap();
    tree.add_photo(root, "dup").unwrap();

    tree.remove_from(root, "dup").unwrap();

    // The deeper, earlier match went; the root-level one remains
    let m = tree.find("dup").unwrap();
    assert_eq!(tree.get(m.node).unwrap().name, "dup");
    assert_eq!(m.parent, Some(root));
    assert_eq!(tree.get(band).unwrap().children().len(), 0);
}

#[test]
fn given_set_with_children_when_removed_then_subtree_is_gone() {
    init();
    let mut tree = AlbumTree::new("Album");
    let band = tree.add_set(tree.root(), "Band").unwrap();
    let sub = tree.add_set(band, "Sub").unwrap();
    tree.add_photo(sub, "Singer").unwrap();

    tree.remove_from(tree.root(), "Band").unwrap();

    assert_eq!(tree.node_count(), 1);
    assert!(tree.find("Singer").is_none());
}

#[test]
fn given_photo_start_when_removing_then_errors() {
    init();
    let mut tree = AlbumTree::new("Album");
    let photo = tree.add_photo(tree.root(), "Drummer").unwrap();

    let err = tree.remove_from(photo, "Drummer").unwrap_err();

    assert!(matches!(err, AlbumError::PhotoCannotRelease(ref n) if n == "Drummer"));
    assert!(tree.find("Drummer").is_some());
}
