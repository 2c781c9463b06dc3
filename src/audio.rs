//! Sound effects and background music via sdl2_mixer
//!
//! Two short effects (shoot, button click) plus a looping music track.
//! Loading failures abort startup like any other asset error; a playback
//! failure mid-game is only logged, since dropping one sound effect should
//! not kill a running round.

use log::warn;
use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, AUDIO_S16LSB, DEFAULT_CHANNELS};

pub struct AudioPlayer {
    _mixer_context: mixer::Sdl2MixerContext,
    shoot: Chunk,
    click: Chunk,
    music: Music<'static>,
}

impl AudioPlayer {
    /// Initializes the mixer and loads every sound the game plays
    pub fn new() -> Result<Self, String> {
        let mixer_context = mixer::init(InitFlag::OGG)?;
        mixer::open_audio(44_100, AUDIO_S16LSB, DEFAULT_CHANNELS, 1_024)?;
        mixer::allocate_channels(4);

        Ok(AudioPlayer {
            _mixer_context: mixer_context,
            shoot: Chunk::from_file("assets/shoot.ogg")?,
            click: Chunk::from_file("assets/click.ogg")?,
            music: Music::from_file("assets/music.ogg")?,
        })
    }

    /// Starts the background music loop (repeats until process exit)
    pub fn start_music(&self) -> Result<(), String> {
        self.music.play(-1)
    }

    /// Played when an even ball is hit
    pub fn play_shoot(&self) {
        if let Err(e) = Channel::all().play(&self.shoot, 0) {
            warn!("failed to play shoot sound: {}", e);
        }
    }

    /// Played when PLAY or REPLAY is clicked
    pub fn play_click(&self) {
        if let Err(e) = Channel::all().play(&self.click, 0) {
            warn!("failed to play click sound: {}", e);
        }
    }
}
