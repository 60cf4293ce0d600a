//! Weighted quick-union over the cells of one grid.
//!
//! Elements are addressed by [`GridLocation`] and stored in an arena indexed
//! by `row * cols + col`, so a single instance can be reset and reused across
//! queries on grids of the same shape.

use crate::grid::GridLocation;

#[derive(Debug, Clone)]
pub struct UnionFind {
    rows: usize,
    cols: usize,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Every cell of a `rows` x `cols` grid starts as its own singleton set.
    pub fn new(rows: usize, cols: usize) -> Self {
        let total = rows.saturating_mul(cols);
        Self {
            rows,
            cols,
            parent: (0..total).collect(),
            size: vec![1; total],
        }
    }

    /// Return every element to a singleton set, keeping the allocation.
    pub fn reset(&mut self) {
        for (idx, parent) in self.parent.iter_mut().enumerate() {
            *parent = idx;
        }
        self.size.fill(1);
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `loc`.
    ///
    /// # Panics
    ///
    /// Panics if `loc` lies outside the grid this structure was built for.
    pub fn find(&mut self, loc: GridLocation) -> GridLocation {
        let root = self.find_index(self.index(loc));
        GridLocation::new(root / self.cols, root % self.cols)
    }

    /// Merge the sets containing `a` and `b`. Returns `false` when they were
    /// already in the same set.
    ///
    /// The smaller tree is hung under the larger one; on a tie `b`'s root goes
    /// under `a`'s.
    ///
    /// # Panics
    ///
    /// Panics if either location lies outside the grid.
    pub fn union(&mut self, a: GridLocation, b: GridLocation) -> bool {
        let (ia, ib) = (self.index(a), self.index(b));
        self.union_indices(ia, ib)
    }

    /// Number of elements in the set containing `loc`.
    ///
    /// # Panics
    ///
    /// Panics if `loc` lies outside the grid.
    pub fn component_size(&mut self, loc: GridLocation) -> usize {
        let root = self.find_index(self.index(loc));
        self.size[root]
    }

    pub fn connected(&mut self, a: GridLocation, b: GridLocation) -> bool {
        let (ia, ib) = (self.index(a), self.index(b));
        self.find_index(ia) == self.find_index(ib)
    }

    pub(crate) fn union_indices(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find_index(a);
        let rb = self.find_index(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
        }
        true
    }

    // Path halving: each visited node skips to its grandparent.
    pub(crate) fn find_index(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    fn index(&self, loc: GridLocation) -> usize {
        assert!(
            loc.row < self.rows && loc.col < self.cols,
            "{loc} outside {}x{} union-find",
            self.rows,
            self.cols
        );
        loc.row * self.cols + loc.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> GridLocation {
        GridLocation::new(row, col)
    }

    #[test]
    fn starts_as_singletons() {
        let mut uf = UnionFind::new(2, 3);
        assert_eq!(uf.len(), 6);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(uf.find(loc(row, col)), loc(row, col));
                assert_eq!(uf.component_size(loc(row, col)), 1);
            }
        }
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = UnionFind::new(3, 3);
        assert!(uf.union(loc(0, 0), loc(0, 1)));
        assert!(uf.union(loc(0, 1), loc(2, 2)));
        assert!(uf.connected(loc(0, 0), loc(2, 2)));
        assert!(!uf.connected(loc(0, 0), loc(1, 1)));
        assert_eq!(uf.component_size(loc(2, 2)), 3);
        assert_eq!(uf.component_size(loc(1, 1)), 1);
        assert!(!uf.union(loc(2, 2), loc(0, 0)), "already merged");
    }

    #[test]
    fn tie_attaches_second_under_first() {
        let mut uf = UnionFind::new(1, 4);
        uf.union(loc(0, 0), loc(0, 1));
        assert_eq!(uf.find(loc(0, 1)), loc(0, 0));

        // Smaller set joins the larger one regardless of argument order.
        uf.union(loc(0, 3), loc(0, 1));
        assert_eq!(uf.find(loc(0, 3)), loc(0, 0));
        assert_eq!(uf.component_size(loc(0, 3)), 3);
    }

    #[test]
    fn reset_restores_singletons() {
        let mut uf = UnionFind::new(2, 2);
        uf.union(loc(0, 0), loc(1, 1));
        uf.union(loc(0, 1), loc(1, 1));
        assert_eq!(uf.component_size(loc(0, 0)), 3);
        uf.reset();
        assert_eq!(uf.component_size(loc(0, 0)), 1);
        assert!(!uf.connected(loc(0, 0), loc(1, 1)));
    }

    #[test]
    fn long_chain_stays_consistent() {
        let mut uf = UnionFind::new(1, 64);
        for col in 1..64 {
            uf.union(loc(0, col - 1), loc(0, col));
        }
        assert_eq!(uf.component_size(loc(0, 37)), 64);
        let root = uf.find(loc(0, 63));
        assert!((0..64).all(|col| uf.find(loc(0, col)) == root));
    }

    #[test]
    #[should_panic]
    fn out_of_range_location_panics() {
        let mut uf = UnionFind::new(2, 2);
        uf.find(loc(2, 0));
    }
}
