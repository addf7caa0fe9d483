use super::*;
use crate::models::HabitList;

fn chain(names: &[&str]) -> String {
    format_chain(HabitList::from_names(names.iter().copied()).as_slice())
}

#[test]
fn empty_chain_shows_placeholder() {
    assert_eq!(format_chain(&[]), CHAIN_PLACEHOLDER);
    assert_eq!(format_chain(&[]), "Start building your habit chain...");
}

#[test]
fn single_habit_has_no_period() {
    assert_eq!(chain(&["stretch"]), "I stretch");
}

#[test]
fn two_habits_are_joined_and_terminated() {
    assert_eq!(chain(&["stretch", "journal"]), "I stretch, then I journal.");
}

#[test]
fn every_later_habit_uses_the_same_joiner() {
    assert_eq!(
        chain(&["stretch", "drink water", "journal"]),
        "I stretch, then I drink water, then I journal."
    );
    assert_eq!(
        chain(&["a", "b", "c", "d"]),
        "I a, then I b, then I c, then I d."
    );
}

#[test]
fn step_prefix_distinguishes_first_row() {
    assert_eq!(step_prefix(0), "I ");
    assert_eq!(step_prefix(1), "Then I ");
    assert_eq!(step_prefix(7), "Then I ");
}
