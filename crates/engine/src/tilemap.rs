use thiserror::Error;

/// Edge length of one tile in pixels.
pub const TILE_SIZE: i32 = 16;

/// Tile kinds stored in a [`TileMap`].
///
/// Integer codes follow the level-data convention: `-1` is empty, `0` and
/// above are solid kinds. Each kind owns its surface rule, so new solid kinds
/// only need a variant here and an arm in [`TileKind::surface_height`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    #[default]
    Empty,
    Block,
}

impl TileKind {
    pub const EMPTY_CODE: i32 = -1;
    pub const BLOCK_CODE: i32 = 0;

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::EMPTY_CODE => Some(Self::Empty),
            Self::BLOCK_CODE => Some(Self::Block),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Empty => Self::EMPTY_CODE,
            Self::Block => Self::BLOCK_CODE,
        }
    }

    pub fn is_solid(self) -> bool {
        self.code() > Self::EMPTY_CODE
    }

    /// Pixel y of the walkable surface at `(pixel_x, pixel_y)`, or `None` for
    /// kinds without a surface.
    pub fn surface_height(self, _pixel_x: i32, pixel_y: i32) -> Option<i32> {
        match self {
            Self::Empty => None,
            Self::Block => Some(tile_floor(pixel_y) - 1),
        }
    }
}

/// Grid coordinate of a pixel coordinate (floor division, so negative pixels
/// land in negative cells).
pub fn pixel_to_grid(pixel: i32) -> i32 {
    pixel.div_euclid(TILE_SIZE)
}

/// Pixel coordinate rounded down to the start of its tile.
pub fn tile_floor(pixel: i32) -> i32 {
    pixel - pixel.rem_euclid(TILE_SIZE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileMapError {
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
    #[error("unknown tile code {code} at index {index}")]
    UnknownTileCode { index: usize, code: i32 },
    #[error("cell ({x},{y}) is outside the {width}x{height} map")]
    CellOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Fixed-size tile grid, row-major (`index = x + y * width`).
///
/// Lookups are total: any cell outside the grid reads as [`TileKind::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    width: u32,
    height: u32,
    cells: Vec<TileKind>,
}

impl TileMap {
    pub fn new(width: u32, height: u32, cells: Vec<TileKind>) -> Result<Self, TileMapError> {
        let expected = width as usize * height as usize;
        let actual = cells.len();
        if expected != actual {
            return Err(TileMapError::CellCountMismatch { expected, actual });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn from_codes(width: u32, height: u32, codes: &[i32]) -> Result<Self, TileMapError> {
        let cells = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                TileKind::from_code(code).ok_or(TileMapError::UnknownTileCode { index, code })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(width, height, cells)
    }

    /// Grid with a one-cell `border` ring around an `interior` fill.
    pub fn bordered(width: u32, height: u32, border: TileKind, interior: TileKind) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                cells.push(if on_border { border } else { interior });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Sets every listed cell to `kind`. Used once while building a level.
    pub fn with_cells(mut self, kind: TileKind, cells: &[(i32, i32)]) -> Result<Self, TileMapError> {
        for &(x, y) in cells {
            let index = self
                .index_of(x, y)
                .ok_or(TileMapError::CellOutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                })?;
            self.cells[index] = kind;
        }
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width_px(&self) -> i32 {
        self.width as i32 * TILE_SIZE
    }

    pub fn height_px(&self) -> i32 {
        self.height as i32 * TILE_SIZE
    }

    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Grid-space lookup.
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        self.index_of(x, y)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(TileKind::Empty)
    }

    /// Pixel-space lookup.
    pub fn tile_at_pixel(&self, pixel_x: i32, pixel_y: i32) -> TileKind {
        self.tile_at(pixel_to_grid(pixel_x), pixel_to_grid(pixel_y))
    }

    pub fn surface_height(&self, pixel_x: i32, pixel_y: i32, tile: TileKind) -> Option<i32> {
        tile.surface_height(pixel_x, pixel_y)
    }

    /// Solid cells as `(x, y, kind)`, row by row.
    pub fn solid_cells(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        let width = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.is_solid())
            .map(move |(index, &kind)| ((index % width) as i32, (index / width) as i32, kind))
    }
}
