//! Tile map data.
//!
//! A tile map lives in a directory `<dir>/<name>/` holding a JSON
//! description `<name>.txt` and the tileset image `<name>.png`, the layout
//! exported by Tilesetter. Layers are listed back to front; tile ids index
//! the tileset left-to-right, top-to-bottom.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use serde::{Deserialize, Serialize};

/// Single tile placement within a layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tileposition {
    /// X coordinate in tiles.
    pub x: u32,
    /// Y coordinate in tiles.
    pub y: u32,
    /// Tile identifier (tileset-local).
    pub id: u32,
}

/// A named tile layer containing positions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    #[serde(default)]
    pub positions: Vec<Tileposition>,
}

/// Tilemap metadata and layers.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    /// Clear color as RGBA.
    #[serde(default)]
    pub background_color: Option<[u8; 4]>,
    pub layers: Vec<Tilelayer>,
}

/// Files making up a tile map directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilemapFiles {
    pub json: PathBuf,
    pub png: PathBuf,
}

impl TilemapFiles {
    /// `<dir>/<name>.txt` and `<dir>/<name>.png` where `name` is the last
    /// component of `dir`.
    pub fn for_dir(dir: &Path) -> anyhow::Result<Self> {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("not a valid tilemap directory: {}", dir.display()))?;
        Ok(Self {
            json: dir.join(format!("{name}.txt")),
            png: dir.join(format!("{name}.png")),
        })
    }
}

/// Tileset texture the map's tile ids index into.
///
/// Kept apart from the texture itself so the scene can be rebuilt without
/// touching the GPU.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Tileset {
    /// Key of the texture in the [`TextureStore`](super::texturestore::TextureStore).
    pub tex_key: String,
    /// Tiles per texture row.
    pub columns: u32,
}

impl Tileset {
    /// Describe a tileset texture `tex_width` pixels wide holding square
    /// tiles of `tile_size` pixels.
    pub fn new(tex_key: impl Into<String>, tex_width: i32, tile_size: u32) -> Self {
        let columns = (tex_width.max(0) as u32 / tile_size.max(1)).max(1);
        Self {
            tex_key: tex_key.into(),
            columns,
        }
    }

    /// Pixel offset of tile `id` inside the tileset texture.
    pub fn source_offset(&self, id: u32, tile_size: u32) -> (f32, f32) {
        let col = id % self.columns;
        let row = id / self.columns;
        (
            col.saturating_mul(tile_size) as f32,
            row.saturating_mul(tile_size) as f32,
        )
    }
}

impl Tilemap {
    /// Parse and validate a JSON map description.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let tilemap: Tilemap = serde_json::from_str(json).context("invalid tilemap JSON")?;
        tilemap.validate()?;
        Ok(tilemap)
    }

    /// Read and parse the JSON description at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tilemap {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in tilemap {}", path.display()))
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.tile_size == 0 {
            bail!("tile_size must be positive");
        }
        for layer in &self.layers {
            if let Some(p) = layer
                .positions
                .iter()
                .find(|p| p.x >= self.map_width || p.y >= self.map_height)
            {
                bail!(
                    "tile ({}, {}) in layer '{}' lies outside the {}x{} map",
                    p.x,
                    p.y,
                    layer.name,
                    self.map_width,
                    self.map_height
                );
            }
        }
        Ok(())
    }

    pub fn layer(&self, name: &str) -> Option<&Tilelayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Map extent in world pixels once tiles are drawn at `scaling`.
    pub fn pixel_size(&self, scaling: f32) -> (f32, f32) {
        let grid = self.tile_size as f32 * scaling;
        (self.map_width as f32 * grid, self.map_height as f32 * grid)
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
            .map(|[r, g, b, a]| Color::new(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"{
        "tile_size": 16,
        "map_width": 4,
        "map_height": 3,
        "background_color": [120, 180, 255, 255],
        "layers": [
            { "name": "Platforms", "positions": [ {"x": 0, "y": 2, "id": 1}, {"x": 1, "y": 2, "id": 1} ] },
            { "name": "Sammelbares", "positions": [ {"x": 2, "y": 1, "id": 7} ] },
            { "name": "Player" }
        ]
    }"#;

    #[test]
    fn test_parse_map() {
        let map = Tilemap::from_json_str(MAP).unwrap();
        assert_eq!(map.layers.len(), 3);
        assert_eq!(map.layer("Platforms").unwrap().positions.len(), 2);
        assert!(map.layer("Player").unwrap().positions.is_empty());
        assert!(map.layer("Boden").is_none());
        let bg = map.background_color().unwrap();
        assert_eq!((bg.r, bg.g, bg.b, bg.a), (120, 180, 255, 255));
    }

    #[test]
    fn test_pixel_size_uses_scaling() {
        let map = Tilemap::from_json_str(MAP).unwrap();
        assert_eq!(map.pixel_size(3.0), (192.0, 144.0));
    }

    #[test]
    fn test_rejects_tiles_outside_map() {
        let bad = MAP.replace(r#"{"x": 2, "y": 1, "id": 7}"#, r#"{"x": 9, "y": 1, "id": 7}"#);
        let err = Tilemap::from_json_str(&bad).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Tilemap::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_tileset_offsets_run_left_to_right() {
        let tileset = Tileset::new("tilemap", 64, 16);
        assert_eq!(tileset.columns, 4);
        assert_eq!(tileset.source_offset(0, 16), (0.0, 0.0));
        assert_eq!(tileset.source_offset(3, 16), (48.0, 0.0));
        assert_eq!(tileset.source_offset(6, 16), (32.0, 16.0));
    }

    #[test]
    fn test_tileset_offset_saturates_for_huge_ids() {
        let tileset = Tileset::new("tilemap", 16, 16);
        assert_eq!(tileset.source_offset(u32::MAX, 16), (0.0, u32::MAX as f32));
    }

    #[test]
    fn test_tileset_narrower_than_a_tile_has_one_column() {
        assert_eq!(Tileset::new("tilemap", 8, 16).columns, 1);
    }

    #[test]
    fn test_files_for_dir() {
        let files = TilemapFiles::for_dir(Path::new("./assets/tilemaps/meine_map")).unwrap();
        assert_eq!(
            files.json,
            PathBuf::from("./assets/tilemaps/meine_map/meine_map.txt")
        );
        assert_eq!(
            files.png,
            PathBuf::from("./assets/tilemaps/meine_map/meine_map.png")
        );
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Tilemap::load(Path::new("./nope/nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
