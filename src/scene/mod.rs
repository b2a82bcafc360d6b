//! Animated scene of spinning rectangles

mod spinner;

pub use spinner::Spinner;

use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::raster::LineRasterizer;
use crate::util::Rng;

/// Spin rates are drawn per 8 ms animation tick and stored per second
const TICKS_PER_SECOND: f32 = 125.0;
const MAX_SIZE: f32 = 100.0;
const MIN_SIZE: f32 = 2.0;

/// Anything that animates and draws a frame
pub trait Effect {
    /// Advance the animation by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Draw one full frame
    fn render(&self, raster: &mut LineRasterizer);

    /// Effect name for UI/debugging
    fn name(&self) -> &str;
}

/// A set of spinners, saved to and loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    #[serde(default)]
    pub spinners: Vec<Spinner>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spinners: Vec::new(),
        }
    }

    /// Scatter `count` spinners over a `width` x `height` frame
    pub fn random(count: usize, width: u32, height: u32, rng: &mut Rng) -> Self {
        let spinners = (0..count)
            .map(|_| {
                let x = rng.next_f32() * width as f32;
                let y = rng.next_f32() * height as f32;
                let w = (rng.next_f32() * MAX_SIZE).max(MIN_SIZE);
                let h = (rng.next_f32() * MAX_SIZE).max(MIN_SIZE);
                let color = Color::new((rng.next_f64() * 0xFFFFFF as f64) as u32).brighter();
                let angle = rng.next_f32() * PI;
                let spin = rng.range_f32(-0.05, 0.05) * TICKS_PER_SECOND;
                Spinner::new(x, y, w, h, color).with_rotation(angle, spin)
            })
            .collect();

        Self {
            name: "random".to_string(),
            spinners,
        }
    }

    pub fn add_spinner(&mut self, spinner: Spinner) {
        self.spinners.push(spinner);
    }

    /// Save scene to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        debug!(path = %path.as_ref().display(), spinners = self.spinners.len(), "scene saved");
        Ok(())
    }

    /// Load scene from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let scene: Self = serde_json::from_str(&json)?;
        debug!(path = %path.as_ref().display(), spinners = scene.spinners.len(), "scene loaded");
        Ok(scene)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

impl Effect for Scene {
    fn update(&mut self, dt: f32) {
        for spinner in &mut self.spinners {
            spinner.update(dt);
        }
    }

    fn render(&self, raster: &mut LineRasterizer) {
        raster.clear(Color::BLACK);
        for spinner in &self.spinners {
            spinner.render(raster);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_random_scene_ranges() {
        let mut rng = Rng::new(1234);
        let scene = Scene::random(200, 320, 200, &mut rng);
        assert_eq!(scene.spinners.len(), 200);
        for s in &scene.spinners {
            assert!((0.0..=320.0).contains(&s.x));
            assert!((0.0..=200.0).contains(&s.y));
            assert!((MIN_SIZE..=MAX_SIZE).contains(&s.width));
            assert!((MIN_SIZE..=MAX_SIZE).contains(&s.height));
            assert!((0.0..=PI).contains(&s.angle));
            assert!(s.spin.abs() <= 0.05 * TICKS_PER_SECOND + 1e-4);
            // brighter() never yields black
            assert_ne!(s.color, Color::BLACK);
        }
    }

    #[test]
    fn test_random_scene_is_reproducible() {
        let a = Scene::random(16, 640, 480, &mut Rng::new(5));
        let b = Scene::random(16, 640, 480, &mut Rng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_update_moves_every_spinner() {
        let mut scene = Scene::new("test");
        scene.add_spinner(Spinner::new(0.0, 0.0, 4.0, 4.0, Color::WHITE).with_rotation(0.0, 1.0));
        scene.add_spinner(Spinner::new(0.0, 0.0, 4.0, 4.0, Color::WHITE).with_rotation(0.5, -2.0));
        scene.update(0.5);
        assert_eq!(scene.spinners[0].angle, 0.5);
        assert_eq!(scene.spinners[1].angle, -0.5);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut raster = LineRasterizer::new(64, 64).unwrap();
        raster.draw_line(1.0, 60.0, 60.0, 60.0, Color::WHITE);

        let mut scene = Scene::new("one");
        scene.add_spinner(Spinner::new(20.0, 20.0, 10.0, 10.0, Color::new(0xFF0000)));
        scene.render(&mut raster);

        let buffer = raster.buffer();
        assert_eq!(buffer.get_pixel(30, 60), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(20, 15), Some(Color::new(0xFF0000)));
        assert_eq!(scene.name(), "one");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        let scene = Scene::random(8, 100, 100, &mut Rng::new(3));
        scene.save(&path).unwrap();
        let loaded = Scene::load(&path).unwrap();
        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_load_hand_written_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hand.json");
        fs::write(
            &path,
            r#"{ "name": "hand", "spinners": [
                { "x": 5, "y": 6, "width": 3, "height": 4, "color": 16711680, "angle": 0, "spin": 1.5 }
            ] }"#,
        )
        .unwrap();

        let scene = Scene::load(&path).unwrap();
        assert_eq!(scene.spinners.len(), 1);
        assert_eq!(scene.spinners[0].color, Color::new(0xFF0000));
        assert_eq!(scene.spinners[0].spin, 1.5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scene::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Scene::load(&path), Err(Error::Json(_))));
    }
}
