//! Background-music track list and playback seam.
//!
//! The core never touches an audio device. It owns the playlist, the
//! silence sentinel and the selection semantics; actually producing sound
//! is behind [`AudioSink`], implemented by the host shell.

use thiserror::Error;

/// A named audio track reference. The silence sentinel has an empty url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: &'static str,
    pub url: &'static str,
}

impl Track {
    pub fn is_silence(&self) -> bool {
        self.url.is_empty()
    }
}

/// The fixed playlist. The silence sentinel always comes first.
pub fn playlist() -> Vec<Track> {
    vec![
        Track {
            name: "silence",
            url: "",
        },
        Track {
            name: "Tranquil Night",
            url: "https://cdn.pixabay.com/download/audio/2022/03/29/audio_38bcb5f6f1.mp3",
        },
        Track {
            name: "Warm Embrace",
            url: "https://cdn.pixabay.com/download/audio/2023/04/12/audio_3963f04ba2.mp3",
        },
        Track {
            name: "Meditation Hour",
            url: "https://cdn.pixabay.com/download/audio/2022/10/13/audio_5c6cc6e7b2.mp3",
        },
        Track {
            name: "Morning Dew",
            url: "https://cdn.pixabay.com/download/audio/2022/02/07/audio_1822e11604.mp3",
        },
        Track {
            name: "Forest Whispers",
            url: "https://cdn.pixabay.com/download/audio/2022/05/27/audio_1808fbf07a.mp3",
        },
    ]
}

#[derive(Debug, Error)]
#[error("playback rejected by host: {0}")]
pub struct PlaybackError(pub String);

/// Host-provided audio output.
pub trait AudioSink {
    /// Begin looping playback of `track`, replacing any current source.
    fn play_looping(&mut self, track: &Track) -> Result<(), PlaybackError>;

    /// Stop playback and clear the source.
    fn stop(&mut self);
}

/// Apply a playlist selection to the sink.
///
/// Silence stops playback; anything else loops until the next selection.
/// A rejected start is logged and otherwise ignored -- it never disturbs
/// other state.
pub fn apply_selection(sink: &mut dyn AudioSink, track: &Track) {
    if track.is_silence() {
        sink.stop();
    } else if let Err(e) = sink.play_looping(track) {
        tracing::warn!("could not start \"{}\": {e}", track.name);
    }
}

/// Sink used by the terminal shell: announces playback in the log and
/// leaves the actual sound to whatever the host wires up.
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play_looping(&mut self, track: &Track) -> Result<(), PlaybackError> {
        tracing::info!("looping \"{}\" ({})", track.name, track.url);
        Ok(())
    }

    fn stop(&mut self) {
        tracing::info!("music stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        playing: Option<String>,
        stops: usize,
        reject_next: bool,
    }

    impl AudioSink for RecordingSink {
        fn play_looping(&mut self, track: &Track) -> Result<(), PlaybackError> {
            if self.reject_next {
                return Err(PlaybackError("gesture required".into()));
            }
            self.playing = Some(track.url.to_string());
            Ok(())
        }

        fn stop(&mut self) {
            self.playing = None;
            self.stops += 1;
        }
    }

    #[test]
    fn playlist_leads_with_the_silence_sentinel() {
        let tracks = playlist();
        assert!(tracks[0].is_silence());
        assert!(tracks.iter().skip(1).all(|t| !t.is_silence()));
    }

    #[test]
    fn selecting_a_track_loops_it() {
        let mut sink = RecordingSink::default();
        let tracks = playlist();
        apply_selection(&mut sink, &tracks[1]);
        assert_eq!(sink.playing.as_deref(), Some(tracks[1].url));

        // A different selection replaces the source.
        apply_selection(&mut sink, &tracks[2]);
        assert_eq!(sink.playing.as_deref(), Some(tracks[2].url));
    }

    #[test]
    fn selecting_silence_stops_playback() {
        let mut sink = RecordingSink::default();
        let tracks = playlist();
        apply_selection(&mut sink, &tracks[3]);
        apply_selection(&mut sink, &tracks[0]);
        assert_eq!(sink.playing, None);
        assert_eq!(sink.stops, 1);
    }

    #[test]
    fn rejected_start_is_swallowed() {
        let mut sink = RecordingSink {
            reject_next: true,
            ..Default::default()
        };
        let tracks = playlist();
        apply_selection(&mut sink, &tracks[1]);
        assert_eq!(sink.playing, None);
        assert_eq!(sink.stops, 0);
    }
}
