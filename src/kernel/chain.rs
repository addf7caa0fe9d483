//! Habit chain sentence composition.

use crate::models::HabitRecord;

/// Shown when the chain has no habits yet.
pub const CHAIN_PLACEHOLDER: &str = "Start building your habit chain...";

const FIRST_PREFIX: &str = "I ";
const NEXT_PREFIX: &str = "Then I ";
const JOINER: &str = ", then I ";

/// `"I a"` for one habit, `"I a, then I b, then I c."` for more.
pub fn format_chain(records: &[HabitRecord]) -> String {
    let Some((first, rest)) = records.split_first() else {
        return CHAIN_PLACEHOLDER.to_string();
    };

    let mut text = String::with_capacity(
        FIRST_PREFIX.len()
            + records
                .iter()
                .map(|r| r.name.len() + JOINER.len())
                .sum::<usize>(),
    );
    text.push_str(FIRST_PREFIX);
    text.push_str(&first.name);

    if rest.is_empty() {
        return text;
    }

    for record in rest {
        text.push_str(JOINER);
        text.push_str(&record.name);
    }
    text.push('.');
    text
}

/// Lead-in for the `index`th row of the list view.
pub fn step_prefix(index: usize) -> &'static str {
    if index == 0 {
        FIRST_PREFIX
    } else {
        NEXT_PREFIX
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/chain.rs"]
mod tests;
