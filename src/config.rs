//! Startup scene parameters
//!
//! Everything is a constant in spirit; LocalStorage may override the defaults
//! so the scene can be re-dressed without a rebuild.

use serde::{Deserialize, Serialize};

/// Face-color palette for the big torus (white, vanilla, cotton candy,
/// cotton candy darker, green pastel, green pastel dark, blue pastel,
/// grey, black, black)
pub const FACE_PALETTE: [u32; 10] = [
    0xffffff, 0xffee94, 0xffc0dd, 0xff8ac0, 0xbffbcb, 0x9ae3a9, 0x72b8db, 0xa3a3a3, 0x222222,
    0x010101,
];

/// Parameters for the hairy-sphere line field and line colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneParams {
    /// Base line radius before per-line jitter
    pub radius: f32,
    /// Number of lines around the sphere
    pub lines: usize,
    /// Dots per line
    pub line_dots: usize,
    /// Dominant line color (0xRRGGBB)
    pub color1: u32,
    /// Accent line color (0xRRGGBB)
    pub color2: u32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            radius: 25.0,
            lines: 56,
            line_dots: 35,
            color1: 0xff1493, // deep pink
            color2: 0xff69ba, // hot pink
        }
    }
}

impl SceneParams {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "memphis_beauty_params";

    /// Load parameters from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(params) = serde_json::from_str(&json) {
                    log::info!("Loaded scene params from LocalStorage");
                    return params;
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let p = SceneParams::default();
        assert_eq!(p.lines, 56);
        assert_eq!(p.line_dots, 35);
        assert_eq!(p.radius, 25.0);
        assert_eq!(p.color1, 0xff1493);
    }

    #[test]
    fn test_params_deserialize_partial() {
        // Unknown fields rejected, known fields parsed
        let p: SceneParams = serde_json::from_str(
            r#"{"radius":30.0,"lines":10,"line_dots":5,"color1":16711680,"color2":255}"#,
        )
        .unwrap();
        assert_eq!(p.lines, 10);
        assert_eq!(p.color1, 0xff0000);
    }
}
