use super::*;

fn ids(list: &HabitList) -> Vec<HabitId> {
    list.iter().map(|r| r.id).collect()
}

#[test]
fn add_ignores_empty_and_blank_names() {
    let mut list = HabitList::from_names(["stretch"]);
    let before = ids(&list);

    assert_eq!(list.add(""), None);
    assert_eq!(list.add("   "), None);
    assert_eq!(list.add("\t\n"), None);

    assert_eq!(ids(&list), before);
    assert_eq!(list.names(), vec!["stretch"]);
}

#[test]
fn add_appends_one_record_with_fresh_id() {
    let mut list = HabitList::from_names(["stretch", "journal"]);
    let existing = ids(&list);

    let id = list.add("X").expect("non-empty name is accepted");

    assert_eq!(list.len(), 3);
    let last = list.get(2).unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.name, "X");
    assert!(!existing.contains(&id));
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut list = HabitList::new();
    list.add("  make coffee \t");
    assert_eq!(list.names(), vec!["make coffee"]);
}

#[test]
fn ids_are_never_reused_after_removal() {
    let mut list = HabitList::new();
    let a = list.add("A").unwrap();
    assert!(list.remove(a));
    let b = list.add("B").unwrap();
    assert_ne!(a, b);
}

#[test]
fn remove_absent_id_is_noop() {
    let mut list = HabitList::from_names(["A", "B"]);
    let before = ids(&list);

    assert!(!list.remove(HabitId::raw(999)));
    assert_eq!(ids(&list), before);
}

#[test]
fn remove_present_id_keeps_relative_order() {
    let mut list = HabitList::from_names(["A", "B", "C", "D"]);
    let b = list.get(1).unwrap().id;

    assert!(list.remove(b));

    assert_eq!(list.names(), vec!["A", "C", "D"]);
    assert_eq!(list.position(b), None);
}

#[test]
fn move_to_uses_post_removal_target() {
    let mut list = HabitList::from_names(["A", "B", "C"]);
    assert!(list.move_to(0, 2));
    assert_eq!(list.names(), vec!["B", "C", "A"]);

    let mut list = HabitList::from_names(["A", "B", "C"]);
    assert!(list.move_to(2, 0));
    assert_eq!(list.names(), vec!["C", "A", "B"]);
}

#[test]
fn move_to_same_index_is_identity() {
    for i in 0..3 {
        let mut list = HabitList::from_names(["A", "B", "C"]);
        let before = ids(&list);
        assert!(!list.move_to(i, i));
        assert_eq!(ids(&list), before);
    }
}

#[test]
fn move_to_is_a_permutation() {
    for source in 0..4 {
        for target in 0..4 {
            let mut list = HabitList::from_names(["A", "B", "C", "D"]);
            let mut before = ids(&list);
            list.move_to(source, target);
            let mut after = ids(&list);

            assert_eq!(after.len(), before.len());
            before.sort();
            after.sort();
            assert_eq!(after, before, "move_to({source}, {target})");
        }
    }
}

#[test]
fn move_to_out_of_bounds_source_is_noop() {
    let mut list = HabitList::from_names(["A", "B"]);
    assert!(!list.move_to(2, 0));
    assert!(!list.move_to(usize::MAX, 0));
    assert_eq!(list.names(), vec!["A", "B"]);

    let mut empty = HabitList::new();
    assert!(!empty.move_to(0, 0));
}

#[test]
fn move_to_target_past_end_appends() {
    let mut list = HabitList::from_names(["A", "B", "C"]);
    assert!(list.move_to(0, 10));
    assert_eq!(list.names(), vec!["B", "C", "A"]);
}

#[test]
fn from_names_skips_blank_seeds() {
    let list = HabitList::from_names(["stretch", " ", "", "journal"]);
    assert_eq!(list.names(), vec!["stretch", "journal"]);
}
