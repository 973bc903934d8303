//! Union-find over grid cells.
//!
//! Every owned cell belongs to exactly one tree; the tree's root is the
//! area's representative. Union is by rank and `find` compresses paths.
//!
//! Union-find has no deletion. Removing a cell from an area (the golden
//! move) is done by resetting the whole area to singletons with
//! [`Grid::reset_root`] and re-linking the surviving fragments.

use crate::core::Coord;

use super::grid::Grid;

impl Grid {
    /// Representative of the tree containing `at`, with path compression.
    ///
    /// Iterative: walks to the root, then relinks every visited cell
    /// directly to it. Only meaningful for owned cells.
    pub fn find(&mut self, at: Coord) -> Coord {
        let root = self.root_of(at);

        let mut current = at;
        while current != root {
            let cell = self.cell_mut(current);
            let next = cell.parent;
            cell.parent = root;
            current = next;
        }

        root
    }

    /// Representative of the tree containing `at`, without compression.
    #[must_use]
    pub fn root_of(&self, at: Coord) -> Coord {
        let mut current = at;
        loop {
            let parent = self.cell(current).parent;
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Whether `at` is the representative of its own tree.
    #[must_use]
    pub fn is_root(&self, at: Coord) -> bool {
        self.cell(at).parent == at
    }

    /// Join the trees containing `a` and `b`.
    ///
    /// The lower-rank root goes under the higher-rank one; on a tie `a`'s
    /// root goes under `b`'s and `b`'s root gains a rank. Returns `true`
    /// when two distinct trees were merged.
    pub fn link(&mut self, a: Coord, b: Coord) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.cell(root_a).rank;
        let rank_b = self.cell(root_b).rank;

        if rank_a > rank_b {
            self.cell_mut(root_b).parent = root_a;
        } else {
            self.cell_mut(root_a).parent = root_b;
            if rank_a == rank_b {
                self.cell_mut(root_b).rank += 1;
            }
        }

        true
    }

    /// Make `at` a singleton root without touching its owner.
    pub fn reset_root(&mut self, at: Coord) {
        let cell = self.cell_mut(at);
        cell.parent = at;
        cell.rank = 0;
    }
}
