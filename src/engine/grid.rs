/// Integer address of one cube in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Real-valued grid position the tilt is centered on. Not bound to a cell
/// and allowed to lie outside the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusPoint {
    pub row: f64,
    pub col: f64,
}

impl FocusPoint {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn distance_to(&self, cell: Cell) -> f64 {
        (cell.row as f64 - self.row).hypot(cell.col as f64 - self.col)
    }
}

impl From<Cell> for FocusPoint {
    fn from(cell: Cell) -> Self {
        FocusPoint::new(cell.row as f64, cell.col as f64)
    }
}

/// Fixed `size x size` set of cells in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size * self.size
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }

    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        (index < self.len()).then(|| Cell::new(index / self.size, index % self.size))
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..self.len()).map(move |i| Cell::new(i / size, i % size))
    }
}
