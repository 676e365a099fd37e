//! Directional navigation and range extend/shrink.
//!
//! Navigation moves the focused run one step through a pool of ids ordered
//! per `available`; which pool depends on the mode and the selection size.
//! Extend/shrink grows or trims the selection from one edge, where the
//! remembered [`ExtendSide`](crate::ExtendSide) decides whether a key press
//! grows or shrinks.

use crate::state::{ExtendSide, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Left,
    Right,
}

impl SelectionState {
    pub fn nav_right(&mut self) {
        self.nav(Dir::Right);
    }

    pub fn nav_left(&mut self) {
        self.nav(Dir::Left);
    }

    pub fn extend_right(&mut self) {
        self.extend(Dir::Right);
    }

    pub fn extend_left(&mut self) {
        self.extend(Dir::Left);
    }

    fn nav(&mut self, dir: Dir) {
        if self.compare_mode && self.selected.len() > 2 && self.current.is_some() {
            self.nav_compare(dir);
        } else {
            self.nav_current(dir);
        }
        self.apply_implicit_compare();
    }

    /// In compare mode with more than two runs selected, the arrow keys
    /// cycle the compare run through the other selected runs while the
    /// focused run stays fixed.
    fn nav_compare(&mut self, dir: Dir) {
        let current = self.current.clone();
        let pool: Vec<String> = self
            .ordered_selected()
            .into_iter()
            .filter(|key| current.as_deref() != Some(key.as_str()))
            .collect();
        if let Some(next) = nav_next(self.compare(), &pool, dir) {
            self.set_compare(Some(next));
        }
    }

    fn nav_current(&mut self, dir: Dir) {
        let pool: Vec<String> = if self.selected.len() > 1 {
            self.ordered_selected()
        } else {
            self.available.clone()
        };
        if let Some(next) = nav_next(self.current(), &pool, dir) {
            self.set_current(Some(next.clone()));
            if self.selected.len() <= 1 {
                // Selection follows the cursor while at most one run is
                // selected; larger selections are left alone.
                self.set_all_selected(vec![next]);
            }
        }
    }

    fn extend(&mut self, dir: Dir) {
        if self.available.is_empty() {
            return;
        }
        let side = self.extend_side.unwrap_or(match dir {
            Dir::Right => ExtendSide::Right,
            Dir::Left => ExtendSide::Left,
        });
        self.extend_select(side, dir);
        // A single remaining run has no direction to keep extending from.
        self.extend_side = if self.selected.len() > 1 {
            Some(side)
        } else {
            None
        };
        self.apply_implicit_compare();
    }

    /// A press aligned with the established side grows the selection one run
    /// past its `side` edge; any other press shrinks it by removing the run
    /// at that same edge.
    fn extend_select(&mut self, side: ExtendSide, dir: Dir) {
        let growing = matches!(
            (side, dir),
            (ExtendSide::Right, Dir::Right) | (ExtendSide::Left, Dir::Left)
        );
        if growing {
            if let Some(key) = self.next_avail_for_extend(side) {
                self.selected.insert(key);
            }
        } else if let Some((_, key)) = self.selected_end(side) {
            let key = key.clone();
            self.selected.remove(&key);
        }
    }

    fn next_avail_for_extend(&self, side: ExtendSide) -> Option<String> {
        let next = match (self.selected_end(side), side) {
            (Some((index, _)), ExtendSide::Right) => Some(index + 1).filter(|i| *i < self.available.len()),
            (Some((index, _)), ExtendSide::Left) => index.checked_sub(1),
            // Growing right with nothing selected seeds at the list head.
            (None, ExtendSide::Right) => Some(0).filter(|_| !self.available.is_empty()),
            (None, ExtendSide::Left) => None,
        };
        next.map(|index| self.available[index].clone())
    }

    /// Index and id of the outermost selected run on the given side, in
    /// `available` order.
    fn selected_end(&self, side: ExtendSide) -> Option<(usize, &String)> {
        match side {
            ExtendSide::Right => self
                .available
                .iter()
                .enumerate()
                .rev()
                .find(|(_, key)| self.selected.contains(*key)),
            ExtendSide::Left => self
                .available
                .iter()
                .enumerate()
                .find(|(_, key)| self.selected.contains(*key)),
        }
    }
}

/// One navigation step through `pool` from `at`.
///
/// A missing starting point seeds at the pool's first (rightward) or last
/// (leftward) element. Stepping past either end stays put. A stale starting
/// point that is no longer in the pool snaps to the pool head.
fn nav_next(at: Option<&str>, pool: &[String], dir: Dir) -> Option<String> {
    let Some(at) = at else {
        return match dir {
            Dir::Right => pool.first().cloned(),
            Dir::Left => pool.last().cloned(),
        };
    };
    if pool.len() <= 1 {
        return Some(at.to_owned());
    }
    let Some(index) = pool.iter().position(|key| key == at) else {
        return pool.first().cloned();
    };
    let next = match dir {
        Dir::Right => Some(index + 1).filter(|i| *i < pool.len()),
        Dir::Left => index.checked_sub(1),
    };
    match next {
        Some(index) => Some(pool[index].clone()),
        None => Some(at.to_owned()),
    }
}
