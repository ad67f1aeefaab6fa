use crate::tasks::store::TaskStore;

#[test]
fn first_id_is_one() {
    let mut store = TaskStore::new();
    let task = store.create("taskOne", "low");
    assert_eq!(task.id, 1);
}

#[test]
fn ids_strictly_increase() {
    let mut store = TaskStore::new();
    let ids: Vec<u64> = (0..5).map(|_| store.create("taskName", "low").id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut store = TaskStore::new();
    let first = store.create("taskOne", "low");
    let second = store.create("taskTwo", "normal");
    store.remove(first.id);
    store.remove(second.id);
    assert!(store.is_empty());

    let third = store.create("taskThree", "high");
    assert_eq!(third.id, 3);
}

#[test]
fn create_then_get_agree() {
    let mut store = TaskStore::new();
    let created = store.create("taskOne", "low");
    assert_eq!(store.get(created.id), Some(&created));
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = TaskStore::new();
    let one = store.create("taskOne", "low");
    let two = store.create("taskTwo", "normal");
    let three = store.create("taskThree", "high");

    assert_eq!(store.all(), [one, two, three]);
    assert_eq!(store.len(), 3);
}

#[test]
fn store_accepts_unvalidated_input() {
    // Validation is the caller's concern; the store takes what it is given
    let mut store = TaskStore::new();
    let task = store.create("", "not a priority");
    assert_eq!(task.name, "");
    assert_eq!(task.priority, "not a priority");
}
