//! Bundled game assets: the bird sprite and sound effects.
//!
//! Loading happens once at startup, before the terminal enters raw mode,
//! so any warnings land on a readable stderr. Nothing here is fatal.

pub mod audio;
pub mod sprite;

use std::path::PathBuf;

use audio::{AudioOutput, SoundCue};

pub struct Assets {
    pub bird_art: Vec<String>,
    pub audio: Option<AudioOutput>,
}

impl Assets {
    pub fn load() -> Assets {
        let dir = asset_dir();
        Assets {
            bird_art: sprite::load_bird_art(&dir.join("bird.txt")),
            audio: AudioOutput::init(&dir),
        }
    }

    pub fn play(&self, cue: SoundCue) {
        if let Some(audio) = &self.audio {
            audio.play(cue);
        }
    }
}

fn asset_dir() -> PathBuf {
    PathBuf::from("assets")
}
