use platformer_engine::{
    KinematicBody, MotionParams, TileKind, TileMap, TileMapError, Vec2, TILE_SIZE,
};

pub(crate) const PLAYER_WIDTH: i32 = 8;
pub(crate) const PLAYER_HEIGHT: i32 = 16;

const SAMPLE_WIDTH: u32 = 20;
const SAMPLE_HEIGHT: u32 = 12;
const SAMPLE_BLOCKS: [(i32, i32); 10] = [
    (3, 8),
    (4, 8),
    (5, 8),
    (8, 6),
    (9, 6),
    (10, 6),
    (13, 7),
    (14, 7),
    (15, 7),
    (1, 10),
];

/// Static description of a room: size, border ring and interior blocks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Level {
    pub width: u32,
    pub height: u32,
    pub border: TileKind,
    pub blocks: Vec<(i32, i32)>,
}

impl Level {
    /// The one room the game ships with: a walled 20x12 box with three
    /// floating platforms and a step in the bottom-left corner.
    pub(crate) fn sample() -> Self {
        Self {
            width: SAMPLE_WIDTH,
            height: SAMPLE_HEIGHT,
            border: TileKind::Block,
            blocks: SAMPLE_BLOCKS.to_vec(),
        }
    }

    pub(crate) fn width_px(&self) -> i32 {
        self.width as i32 * TILE_SIZE
    }

    pub(crate) fn height_px(&self) -> i32 {
        self.height as i32 * TILE_SIZE
    }

    pub(crate) fn build_map(&self) -> Result<TileMap, TileMapError> {
        TileMap::bordered(self.width, self.height, self.border, TileKind::Empty)
            .with_cells(TileKind::Block, &self.blocks)
    }

    /// Bottom-center spawn: horizontally centered, standing on the floor
    /// row.
    pub(crate) fn spawn_point(&self) -> Vec2 {
        Vec2::new(
            (self.width_px() / 2) as f32,
            (self.height_px() - TILE_SIZE - 1) as f32,
        )
    }

    pub(crate) fn spawn_player(&self) -> KinematicBody {
        KinematicBody::new(
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
            self.spawn_point(),
            MotionParams::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_level_layout() {
        let level = Level::sample();
        let map = level.build_map().expect("sample map");
        assert_eq!((map.width(), map.height()), (20, 12));
        assert_eq!((map.width_px(), map.height_px()), (320, 192));

        for (x, y) in SAMPLE_BLOCKS {
            assert_eq!(map.tile_at(x, y), TileKind::Block, "({x},{y})");
        }
        assert_eq!(map.tile_at(6, 8), TileKind::Empty);
        assert_eq!(map.tile_at(10, 10), TileKind::Empty);
        assert_eq!(map.tile_at(0, 5), TileKind::Block);
        assert_eq!(map.tile_at(19, 11), TileKind::Block);

        let interior_solids = map
            .solid_cells()
            .filter(|(x, y, _)| *x > 0 && *y > 0 && *x < 19 && *y < 11)
            .count();
        assert_eq!(interior_solids, SAMPLE_BLOCKS.len());
    }

    #[test]
    fn spawn_stands_on_the_floor_row() {
        let level = Level::sample();
        assert_eq!(level.spawn_point(), Vec2::new(160.0, 175.0));

        let player = level.spawn_player();
        assert_eq!((player.width, player.height), (PLAYER_WIDTH, PLAYER_HEIGHT));
        assert_eq!(player.velocity, Vec2::ZERO);
        assert_eq!(player.params, MotionParams::default());
    }

    #[test]
    fn block_outside_the_room_is_rejected() {
        let level = Level {
            blocks: vec![(20, 3)],
            ..Level::sample()
        };
        assert!(matches!(
            level.build_map(),
            Err(TileMapError::CellOutOfBounds { x: 20, y: 3, .. })
        ));
    }
}
