//! Command line configuration

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_SPINNERS: usize = 256;
/// Redraw interval of the animation timer
pub const DEFAULT_FRAME_MS: u64 = 8;
pub const WINDOW_TITLE: &str = "Xiaolin Wu's line algorithm - now in colour!";

/// Runtime settings for the demo window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub spinners: usize,
    /// `None` seeds from the clock
    pub seed: Option<u64>,
    /// Load spinners from this JSON file instead of generating them
    pub scene: Option<PathBuf>,
    /// Write the starting scene to this JSON file
    pub save_scene: Option<PathBuf>,
    /// Exit after this many frames
    pub frames: Option<u64>,
    /// Minimum frame interval in milliseconds, 0 = unpaced
    pub frame_ms: u64,
    pub debug: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            spinners: DEFAULT_SPINNERS,
            seed: None,
            scene: None,
            save_scene: None,
            frames: None,
            frame_ms: DEFAULT_FRAME_MS,
            debug: false,
            help: false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{} expects a number, got '{}'", flag, value)))
}

/// Parse WxH format (e.g., 1920x1080)
fn parse_resolution(value: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = value.split('x').collect();
    if let [w, h] = parts.as_slice() {
        if let (Ok(w), Ok(h)) = (w.parse::<u32>(), h.parse::<u32>()) {
            return Ok((w, h));
        }
    }
    Err(Error::InvalidArgument(format!(
        "--resolution expects WxH, got '{}'",
        value
    )))
}

impl Config {
    /// Parse command line arguments, not including the program name
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_str();
            let mut value = || {
                args.next()
                    .ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", flag)))
            };

            match flag {
                "--no-vsync" => config.vsync = false,
                "--debug" => config.debug = true,
                "--help" => config.help = true,
                "--width" | "-w" => config.width = parse_number(flag, &value()?)?,
                "--height" | "-h" => config.height = parse_number(flag, &value()?)?,
                "--resolution" | "-r" => {
                    (config.width, config.height) = parse_resolution(&value()?)?;
                },
                "--count" | "-n" => config.spinners = parse_number(flag, &value()?)?,
                "--seed" => config.seed = Some(parse_number(flag, &value()?)?),
                "--scene" => config.scene = Some(PathBuf::from(value()?)),
                "--save-scene" => config.save_scene = Some(PathBuf::from(value()?)),
                "--frames" => config.frames = Some(parse_number(flag, &value()?)?),
                "--frame-ms" => config.frame_ms = parse_number(flag, &value()?)?,
                _ => return Err(Error::InvalidArgument(format!("unknown option '{}'", flag))),
            }
        }

        if config.width < 2 || config.height < 2 {
            return Err(Error::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        Ok(config)
    }

    pub fn usage() -> String {
        format!(
            "Usage: wuline [OPTIONS]

Options:
  --width W, -w W           Set window width (default: {DEFAULT_WIDTH})
  --height H, -h H          Set window height (default: {DEFAULT_HEIGHT})
  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)
  --count N, -n N           Number of spinning rectangles (default: {DEFAULT_SPINNERS})
  --seed S                  Seed for scene generation (default: clock)
  --scene PATH              Load the scene from a JSON file
  --save-scene PATH         Save the starting scene to a JSON file
  --frames N                Exit after N frames
  --frame-ms MS             Minimum frame interval, 0 = unpaced (default: {DEFAULT_FRAME_MS})
  --no-vsync                Disable VSync for uncapped framerate
  --debug                   Debug logging (honours RUST_LOG)
  --help                    Show this help message

Keys:
  Escape  Quit
  Space   Pause / resume
  R       New random scene
  S       Save scene to scene.json
  F       Toggle FPS log
"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.width, config.height), (1280, 800));
        assert_eq!(config.spinners, 256);
        assert_eq!(config.frame_ms, 8);
    }

    #[test]
    fn test_resolution_and_flags() {
        let config = parse(&["-r", "640x480", "--no-vsync", "--seed", "99", "-n", "12"]).unwrap();
        assert_eq!((config.width, config.height), (640, 480));
        assert!(!config.vsync);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.spinners, 12);
    }

    #[test]
    fn test_paths_and_frames() {
        let config = parse(&["--scene", "a.json", "--save-scene", "b.json", "--frames", "3"]).unwrap();
        assert_eq!(config.scene, Some(PathBuf::from("a.json")));
        assert_eq!(config.save_scene, Some(PathBuf::from("b.json")));
        assert_eq!(config.frames, Some(3));
    }

    #[test]
    fn test_bad_number_is_an_error() {
        let err = parse(&["--width", "wide"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("wide")));
    }

    #[test]
    fn test_bad_resolution_is_an_error() {
        assert!(parse(&["-r", "640by480"]).is_err());
        assert!(parse(&["-r", "640x480x2"]).is_err());
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(matches!(parse(&["--seed"]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        assert!(parse(&["--fullscreen"]).is_err());
    }

    #[test]
    fn test_tiny_window_rejected() {
        assert!(matches!(
            parse(&["-w", "1"]),
            Err(Error::InvalidDimensions { width: 1, .. })
        ));
    }

    #[test]
    fn test_help_flag() {
        assert!(parse(&["--help"]).unwrap().help);
        assert!(Config::usage().contains("--resolution"));
    }
}
