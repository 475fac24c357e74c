//! Sound output. Each cue plays a WAV clip when one is shipped in the
//! asset directory, otherwise a short synthesized tone. The game runs
//! silent when no output device is available.

use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

/// One playable sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Flap,
    Coin,
    Hit,
}

impl SoundCue {
    const ALL: [SoundCue; 3] = [SoundCue::Flap, SoundCue::Coin, SoundCue::Hit];

    fn clip_name(self) -> &'static str {
        match self {
            SoundCue::Flap => "flap.wav",
            SoundCue::Coin => "coin.wav",
            SoundCue::Hit => "hit.wav",
        }
    }

    fn index(self) -> usize {
        match self {
            SoundCue::Flap => 0,
            SoundCue::Coin => 1,
            SoundCue::Hit => 2,
        }
    }
}

/// Handle to the output device plus any decoded clips.
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: [Option<Vec<u8>>; 3],
}

impl AudioOutput {
    /// Open the default output device and pick up any WAV clips from the
    /// asset directory. Returns `None` when no device can be opened.
    pub fn init(asset_dir: &Path) -> Option<AudioOutput> {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(err) => {
                eprintln!("warning: no audio output, playing silent: {}", err);
                return None;
            }
        };

        let mut clips: [Option<Vec<u8>>; 3] = [None, None, None];
        for cue in SoundCue::ALL {
            clips[cue.index()] = load_clip(&asset_dir.join(cue.clip_name()));
        }

        Some(AudioOutput {
            _stream: stream,
            handle,
            clips,
        })
    }

    /// Play a cue on a detached sink so overlapping sounds mix.
    pub fn play(&self, cue: SoundCue) {
        if let Some(bytes) = &self.clips[cue.index()] {
            if self.play_clip(bytes) {
                return;
            }
        }
        self.play_tone(cue);
    }

    fn play_clip(&self, bytes: &[u8]) -> bool {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(_) => return false,
        };
        match Decoder::new(Cursor::new(bytes.to_vec())) {
            Ok(source) => {
                sink.append(source);
                sink.detach();
                true
            }
            Err(_) => false,
        }
    }

    fn play_tone(&self, cue: SoundCue) {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(_) => return,
        };
        match cue {
            SoundCue::Flap => {
                sink.append(tone(700.0, 60, 0.18));
            }
            SoundCue::Coin => {
                // Two quick ascending notes.
                sink.append(tone(880.0, 70, 0.15));
                sink.append(tone(1175.0, 90, 0.15));
            }
            SoundCue::Hit => {
                sink.append(tone(160.0, 250, 0.22));
            }
        }
        sink.detach();
    }
}

fn tone(freq: f32, millis: u64, volume: f32) -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(freq)
        .take_duration(Duration::from_millis(millis))
        .amplify(volume)
}

/// Read a clip and make sure it decodes. Missing files are fine (the
/// synthesized tones cover them); unreadable ones get a warning.
fn load_clip(path: &Path) -> Option<Vec<u8>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return None,
    };
    if Decoder::new(Cursor::new(bytes.clone())).is_err() {
        eprintln!("warning: {} is not a playable clip, ignoring", path.display());
        return None;
    }
    Some(bytes)
}
