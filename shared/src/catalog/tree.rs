//! Category hierarchy resolution
//!
//! Walks the nested category tree returned by `/categories`. All walks are
//! pre-order, so results follow document order.

use crate::models::{Category, CategoryLevel, Product};

/// Depth-first search for a node by id
pub fn find_category<'a>(tree: &'a [Category], id: &str) -> Option<&'a Category> {
    for node in tree {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_category(&node.sub_categories, id) {
            return Some(found);
        }
    }
    None
}

/// Ids of `node` and every descendant, pre-order
pub fn descendant_ids(node: &Category) -> Vec<&str> {
    let mut ids = Vec::new();
    collect_ids(node, &mut ids);
    ids
}

fn collect_ids<'a>(node: &'a Category, out: &mut Vec<&'a str>) {
    out.push(&node.id);
    for child in &node.sub_categories {
        collect_ids(child, out);
    }
}

fn subtree_contains(node: &Category, id: &str) -> bool {
    node.id == id || node.sub_categories.iter().any(|c| subtree_contains(c, id))
}

/// Whether `product` sits in `category_id` or any of its descendants
///
/// An empty `category_id` means "no filter" and always matches. An id that is
/// not in the tree never matches, unless the product references it directly.
pub fn belongs_to_category(product: &Product, category_id: &str, tree: &[Category]) -> bool {
    if category_id.is_empty() {
        return true;
    }
    if product.category_ids().any(|id| id == category_id) {
        return true;
    }

    match find_category(tree, category_id) {
        Some(node) => product.category_ids().any(|id| subtree_contains(node, id)),
        None => false,
    }
}

/// Every node at `level`, in document order
pub fn flatten_at_level(tree: &[Category], level: CategoryLevel) -> Vec<&Category> {
    let mut out = Vec::new();
    collect_level(tree, level, &mut out);
    out
}

fn collect_level<'a>(tree: &'a [Category], level: CategoryLevel, out: &mut Vec<&'a Category>) {
    for node in tree {
        if node.level == level {
            out.push(node);
        }
        collect_level(&node.sub_categories, level, out);
    }
}

/// Valid parents for a new category at `level`
pub fn parent_candidates(tree: &[Category], level: CategoryLevel) -> Vec<&Category> {
    match level.parent() {
        Some(parent_level) => flatten_at_level(tree, parent_level),
        None => Vec::new(),
    }
}

/// Root-to-node chain for breadcrumbs; empty when `id` is unknown
pub fn category_path<'a>(tree: &'a [Category], id: &str) -> Vec<&'a Category> {
    let mut path = Vec::new();
    if walk_path(tree, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn walk_path<'a>(tree: &'a [Category], id: &str, path: &mut Vec<&'a Category>) -> bool {
    for node in tree {
        path.push(node);
        if node.id == id || walk_path(&node.sub_categories, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Products matching `category_id` (see [`belongs_to_category`]), order kept
pub fn filter_products<'a>(
    products: &'a [Product],
    tree: &[Category],
    category_id: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| belongs_to_category(p, category_id, tree))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductOptions;
    use std::collections::BTreeMap;

    fn tree() -> Vec<Category> {
        vec![
            Category::new("phones", "Phones", CategoryLevel::Main).with_children(vec![
                Category::new("android", "Android", CategoryLevel::Sub)
                    .with_parent("phones")
                    .with_children(vec![
                        Category::new("pixel", "Pixel", CategoryLevel::SubSub).with_parent("android"),
                    ]),
                Category::new("ios", "iOS", CategoryLevel::Sub).with_parent("phones"),
            ]),
            Category::new("laptops", "Laptops", CategoryLevel::Main).with_children(vec![
                Category::new("ultrabooks", "Ultrabooks", CategoryLevel::Sub).with_parent("laptops"),
            ]),
        ]
    }

    fn product(main: &str, sub: Option<&str>, sub_sub: Option<&str>) -> Product {
        Product {
            id: "p1".into(),
            name: "Item".into(),
            brand: "Acme".into(),
            base_price: 10.0,
            purchased_price: 8.0,
            selling_price: 10.0,
            main_category: main.into(),
            sub_category: sub.map(Into::into),
            sub_sub_category: sub_sub.map(Into::into),
            description: String::new(),
            images: vec!["a.png".into()],
            specifications: BTreeMap::new(),
            available_options: ProductOptions::default(),
            variants: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let p = product("laptops", None, None);
        assert!(belongs_to_category(&p, "", &tree()));
        assert!(belongs_to_category(&p, "", &[]));
    }

    #[test]
    fn test_direct_reference_matches() {
        let p = product("phones", Some("android"), None);
        assert!(belongs_to_category(&p, "phones", &tree()));
        assert!(belongs_to_category(&p, "android", &tree()));
        // main category matches even without a tree
        assert!(belongs_to_category(&p, &p.main_category, &[]));
    }

    #[test]
    fn test_ancestor_matches_descendant_reference() {
        // product only references the leaf, ancestors still match
        let p = product("misc", None, Some("pixel"));
        assert!(belongs_to_category(&p, "phones", &tree()));
        assert!(belongs_to_category(&p, "android", &tree()));
        assert!(!belongs_to_category(&p, "ios", &tree()));
        assert!(!belongs_to_category(&p, "laptops", &tree()));
    }

    #[test]
    fn test_unknown_category_never_matches() {
        let t = tree();
        for p in [
            product("phones", Some("android"), Some("pixel")),
            product("laptops", Some("ultrabooks"), None),
        ] {
            assert!(!belongs_to_category(&p, "tablets", &t));
        }
    }

    #[test]
    fn test_flatten_at_level_document_order() {
        let t = tree();
        let subs: Vec<_> = flatten_at_level(&t, CategoryLevel::Sub)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(subs, vec!["android", "ios", "ultrabooks"]);

        let leaves = flatten_at_level(&t, CategoryLevel::SubSub);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].id, "pixel");
    }

    #[test]
    fn test_parent_candidates() {
        let t = tree();
        assert!(parent_candidates(&t, CategoryLevel::Main).is_empty());
        let mains: Vec<_> = parent_candidates(&t, CategoryLevel::Sub)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(mains, vec!["phones", "laptops"]);
    }

    #[test]
    fn test_descendant_ids_and_path() {
        let t = tree();
        let phones = find_category(&t, "phones").unwrap();
        assert_eq!(descendant_ids(phones), vec!["phones", "android", "pixel", "ios"]);

        let path: Vec<_> = category_path(&t, "pixel").into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(path, vec!["Phones", "Android", "Pixel"]);
        assert!(category_path(&t, "nope").is_empty());
    }

    #[test]
    fn test_filter_products_keeps_order() {
        let t = tree();
        let mut a = product("phones", Some("ios"), None);
        a.id = "a".into();
        let mut b = product("laptops", None, None);
        b.id = "b".into();
        let mut c = product("phones", Some("android"), Some("pixel"));
        c.id = "c".into();
        let products = vec![a, b, c];

        let ids: Vec<_> = filter_products(&products, &t, "phones")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(filter_products(&products, &t, "").len(), 3);
    }
}
