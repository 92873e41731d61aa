use glam::{IVec2, UVec2};
use rand::{Rng, RngCore};

/// A 2D boolean vertex field, stored row-major.
///
/// `true` means the vertex is open (floor), `false` closed (wall).
/// Anything outside the `size` bounds reads as closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub size: UVec2,
    pub data: Vec<bool>,
}

impl Grid {
    pub fn new(size: UVec2) -> Self {
        Self { size, data: vec![] }
    }

    pub fn fill(&mut self, value: bool) {
        self.data
            .resize((self.size.x * self.size.y) as usize, value);
    }

    /// Initializes each vertex independently from `prng`: a vertex is open
    /// when its uniform `[0, 1)` draw is at least `fill_chance`, so a higher
    /// chance yields fewer open vertices.
    pub fn fill_rand(&mut self, fill_chance: f32, mut prng: impl RngCore) {
        let capacity = (self.size.x * self.size.y) as usize;
        let mut data = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            let p: f32 = prng.gen_range(0.0..1.0);
            data.push(p >= fill_chance);
        }
        self.data = data;
    }

    #[inline]
    pub fn cell(&self, pos: IVec2) -> Option<bool> {
        if pos.x < 0 || pos.y < 0 || pos.x as u32 >= self.size.x || pos.y as u32 >= self.size.y {
            None
        } else {
            let index = pos.y as u32 * self.size.x + pos.x as u32;
            Some(self.data[index as usize])
        }
    }

    #[inline]
    pub fn cell_mut(&mut self, pos: IVec2) -> Option<&mut bool> {
        if pos.x < 0 || pos.y < 0 || pos.x as u32 >= self.size.x || pos.y as u32 >= self.size.y {
            None
        } else {
            let index = pos.y as u32 * self.size.x + pos.x as u32;
            Some(&mut self.data[index as usize])
        }
    }

    /// Total query for inspection panels; out-of-range reads as closed, so a
    /// stale hover position after a resize stays well-defined.
    #[inline]
    pub fn is_open(&self, pos: IVec2) -> bool {
        self.cell(pos).unwrap_or(false)
    }

    #[inline]
    pub fn to_index(&self, pos: UVec2) -> usize {
        (pos.y * self.size.x + pos.x) as usize
    }

    #[inline]
    pub fn from_index(&self, index: usize) -> UVec2 {
        UVec2::new(index as u32 % self.size.x, index as u32 / self.size.x)
    }

    pub fn open_count(&self) -> usize {
        self.data.iter().filter(|open| **open).count()
    }

    /// Counts open vertices among the up to 8 neighbors of `pos`.
    /// Out-of-bounds neighbors never count; no wrap-around, no clamping.
    pub fn count_open_neighbors(&self, pos: IVec2) -> u8 {
        let mut count = 0;
        let mut xy = pos;
        for j in (pos.y - 1)..=(pos.y + 1) {
            xy.y = j;
            for i in (pos.x - 1)..=(pos.x + 1) {
                xy.x = i;
                if xy != pos && self.cell(xy).unwrap_or(false) {
                    count += 1;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let grid = {
            let mut grid = Grid::new(UVec2::new(5, 3));
            grid.fill(false);
            grid
        };
        for y in 0..3 {
            for x in 0..5 {
                let pos = UVec2::new(x, y);
                let index = grid.to_index(pos);
                assert_eq!(index, (y * 5 + x) as usize);
                assert_eq!(grid.from_index(index), pos);
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_closed() {
        let mut grid = Grid::new(UVec2::new(2, 2));
        grid.fill(true);

        assert_eq!(grid.cell(IVec2::new(-1, 0)), None);
        assert_eq!(grid.cell(IVec2::new(0, -1)), None);
        assert_eq!(grid.cell(IVec2::new(2, 0)), None);
        assert_eq!(grid.cell(IVec2::new(0, 2)), None);

        assert!(!grid.is_open(IVec2::new(-1, -1)));
        assert!(!grid.is_open(IVec2::new(100, 100)));
        assert!(grid.is_open(IVec2::new(1, 1)));
    }

    #[test]
    fn corner_sees_three_neighbors() {
        // 2x2 grid with every vertex open: a corner has only 3 in-bounds
        // neighbors, while an interior vertex would have 8.
        let mut grid = Grid::new(UVec2::new(2, 2));
        grid.fill(true);
        assert_eq!(grid.count_open_neighbors(IVec2::new(0, 0)), 3);
        assert_eq!(grid.count_open_neighbors(IVec2::new(1, 1)), 3);
    }

    #[test]
    fn neighbors_skip_self() {
        let mut grid = Grid::new(UVec2::new(3, 3));
        grid.fill(false);
        *grid.cell_mut(IVec2::ONE).unwrap() = true;

        // The center is open but is not its own neighbor.
        assert_eq!(grid.count_open_neighbors(IVec2::ONE), 0);
        // Every other vertex sees exactly the open center.
        for j in 0..3 {
            for i in 0..3 {
                let pos = IVec2::new(i, j);
                if pos != IVec2::ONE {
                    assert_eq!(grid.count_open_neighbors(pos), 1);
                }
            }
        }
    }
}
