use crate::tests::fixtures::{find, id, owned, reference_children, reference_parents, sample};
use crate::{Item, ROOT, TreeStore};

#[test]
fn get_all_keeps_input_order_and_payload() {
    let items = sample();
    let store = TreeStore::new(items.clone()).unwrap();
    assert_eq!(owned(store.get_all()), items);
}

#[test]
fn iter_matches_get_all() {
    let store = TreeStore::new(sample()).unwrap();
    let iter = store.iter();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.collect::<Vec<_>>(), store.get_all());

    let reversed: Vec<_> = store.iter().rev().map(|item| item.id.clone()).collect();
    assert_eq!(reversed.first(), Some(&id(8)));

    let mut count = 0;
    for _ in &store {
        count += 1;
    }
    assert_eq!(count, 8);
}

#[test]
fn root() {
    let store = TreeStore::new(sample()).unwrap();
    assert_eq!(store.root(), &Item::new(1, ROOT));
}

#[test]
fn get_item_for_every_id() {
    let items = sample();
    let store = TreeStore::new(items.clone()).unwrap();
    for item in &items {
        assert_eq!(store.get_item(&item.id).unwrap(), &find(&items, &item.id));
    }
}

#[test]
fn get_children_for_every_id() {
    let items = sample();
    let store = TreeStore::new(items.clone()).unwrap();
    for item in &items {
        assert_eq!(
            owned(store.get_children(&item.id).unwrap()),
            reference_children(&items, &item.id),
            "children of {}",
            item.id
        );
    }
}

#[test]
fn get_children_first_seen_order() {
    let store = TreeStore::new(sample()).unwrap();
    let ids: Vec<_> = store
        .get_children(&id(2))
        .unwrap()
        .into_iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(ids, [id(4), id(5), id(6)]);
}

#[test]
fn get_children_of_leaf_is_empty() {
    let store = TreeStore::new(sample()).unwrap();
    assert!(store.get_children(&id(7)).unwrap().is_empty());
}

#[test]
fn children_interleaved_with_other_subtrees() {
    let store = TreeStore::new([
        Item::new(1, ROOT),
        Item::new(2, 1),
        Item::new(3, 2),
        Item::new(4, 1),
        Item::new(5, 2),
        Item::new(6, 1),
    ])
    .unwrap();

    let of = |n| -> Vec<_> {
        store
            .get_children(&id(n))
            .unwrap()
            .into_iter()
            .map(|item| item.id.clone())
            .collect()
    };
    assert_eq!(of(1), [id(2), id(4), id(6)]);
    assert_eq!(of(2), [id(3), id(5)]);
}

#[test]
fn get_all_parents_for_every_id() {
    let items = sample();
    let store = TreeStore::new(items.clone()).unwrap();
    for item in &items {
        assert_eq!(
            owned(store.get_all_parents(&item.id).unwrap()),
            reference_parents(&items, &item.id),
            "parents of {}",
            item.id
        );
    }
}

#[test]
fn get_all_parents_nearest_first() {
    let items = sample();
    let store = TreeStore::new(items.clone()).unwrap();
    assert_eq!(
        owned(store.get_all_parents(&id(7)).unwrap()),
        [find(&items, &id(4)), find(&items, &id(2)), find(&items, &id(1))]
    );
    assert!(store.get_all_parents(&id(1)).unwrap().is_empty());
}

#[test]
fn get_parent() {
    let items = sample();
    let store = TreeStore::new(items.clone()).unwrap();
    assert_eq!(store.get_parent(&id(1)).unwrap(), None);
    assert_eq!(store.get_parent(&id(5)).unwrap(), Some(&find(&items, &id(2))));
}

#[test]
fn queries_are_idempotent() {
    let store = TreeStore::new(sample()).unwrap();
    for _ in 0..3 {
        assert_eq!(store.get_all().len(), 8);
        assert_eq!(store.get_children(&id(2)).unwrap().len(), 3);
        assert_eq!(store.get_all_parents(&id(8)).unwrap().len(), 3);
        assert_eq!(store.get_item(&id(6)).unwrap().id, id(6));
    }
    assert_eq!(store.get_children(&id(4)).unwrap(), store.get_children(&id(4)).unwrap());
}

// ---------------------------------------------------------------------------
// NodeRef
// ---------------------------------------------------------------------------

#[test]
fn node_is_root() {
    let store = TreeStore::new(sample()).unwrap();
    assert!(store.node(&id(1)).unwrap().is_root());
    assert!(!store.node(&id(2)).unwrap().is_root());
}

#[test]
fn node_parent_chain() {
    let store = TreeStore::new(sample()).unwrap();
    let leaf = store.node(&id(8)).unwrap();

    assert_eq!(leaf.id(), &id(8));
    assert_eq!(leaf.depth(), 3);
    assert_eq!(leaf.parent().map(|item| &item.id), Some(&id(4)));

    let parent = leaf.parent_node().unwrap();
    assert_eq!(parent.record(), store.get_item(&id(4)).unwrap());
    assert!(store.node(&id(1)).unwrap().parent_node().is_none());
}

#[test]
fn node_ancestors_is_exact_size() {
    let store = TreeStore::new(sample()).unwrap();
    let node = store.node(&id(7)).unwrap();

    let mut ancestors = node.ancestors();
    assert_eq!(ancestors.len(), 3);
    ancestors.next();
    assert_eq!(ancestors.len(), 2);
    assert_eq!(ancestors.map(|item| item.id.clone()).collect::<Vec<_>>(), [id(2), id(1)]);
    assert_eq!(node.parents().len(), 3);
}

#[test]
fn node_children() {
    let store = TreeStore::new(sample()).unwrap();
    let node = store.node(&id(4)).unwrap();
    assert_eq!(node.children().len(), 2);
    assert_eq!(
        node.children().map(|item| item.id.clone()).collect::<Vec<_>>(),
        [id(7), id(8)]
    );
}

#[test]
fn node_ref_is_copy() {
    let store = TreeStore::new(sample()).unwrap();
    let a = store.node(&id(3)).unwrap();
    let b = a;
    assert_eq!(a.record(), b.record());
}
