//! Row Transitions
//!
//! Works out which rows are entering, staying or leaving when the rendered
//! list changes. Only drives CSS classes; the todo list itself is untouched.

use std::collections::{HashMap, HashSet};

use crate::models::{Todo, TodoId};

/// How long leaving rows stay on screen (matches `styles.css`)
pub const TRANSITION_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Entering,
    Present,
    Leaving,
}

impl Phase {
    pub fn class(&self) -> &'static str {
        match self {
            Phase::Entering => "todo-row entering",
            Phase::Present => "todo-row",
            Phase::Leaving => "todo-row leaving",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedRow {
    pub todo: Todo,
    pub phase: Phase,
}

/// Merge the previously rendered rows with the new list.
///
/// New rows come out in `next` order. A vanished row is kept as `Leaving`
/// right after the nearest row that preceded it and is still present.
pub fn reconcile(previous: &[AnimatedRow], next: &[Todo]) -> Vec<AnimatedRow> {
    let next_ids: HashSet<&TodoId> = next.iter().map(|t| &t.id).collect();
    let shown: HashSet<&TodoId> = previous
        .iter()
        .filter(|r| r.phase != Phase::Leaving)
        .map(|r| &r.todo.id)
        .collect();

    // anchor (None = top) -> leaving rows, in previous order
    let mut leaving: HashMap<Option<&TodoId>, Vec<AnimatedRow>> = HashMap::new();
    let mut anchor: Option<&TodoId> = None;
    for row in previous {
        if next_ids.contains(&row.todo.id) {
            anchor = Some(&row.todo.id);
        } else {
            leaving.entry(anchor).or_default().push(AnimatedRow {
                todo: row.todo.clone(),
                phase: Phase::Leaving,
            });
        }
    }

    let mut result = Vec::with_capacity(next.len() + previous.len());
    result.extend(leaving.remove(&None).unwrap_or_default());
    for todo in next {
        let phase = if shown.contains(&todo.id) { Phase::Present } else { Phase::Entering };
        result.push(AnimatedRow { todo: todo.clone(), phase });
        if let Some(rows) = leaving.remove(&Some(&todo.id)) {
            result.extend(rows);
        }
    }
    result
}

/// Rows currently mid-transition, as `(id, phase)`
pub fn animating(rows: &[AnimatedRow]) -> Vec<(TodoId, Phase)> {
    rows.iter()
        .filter(|r| r.phase != Phase::Present)
        .map(|r| (r.todo.id.clone(), r.phase))
        .collect()
}

/// Finish the transitions captured by `animating` when they started.
///
/// Captured leaving rows are dropped and captured entering rows become present.
/// Rows whose transition started later are left alone so each gets its full duration.
pub fn settle(rows: &[AnimatedRow], animating: &[(TodoId, Phase)]) -> Vec<AnimatedRow> {
    let captured: HashSet<(&TodoId, Phase)> = animating.iter().map(|(id, phase)| (id, *phase)).collect();
    rows.iter()
        .filter(|r| !(r.phase == Phase::Leaving && captured.contains(&(&r.todo.id, Phase::Leaving))))
        .map(|r| {
            let phase = if r.phase == Phase::Entering && captured.contains(&(&r.todo.id, Phase::Entering)) {
                Phase::Present
            } else {
                r.phase
            };
            AnimatedRow { todo: r.todo.clone(), phase }
        })
        .collect()
}
