use std::path::{Path, PathBuf};

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::config::Settings;

use super::session::SoundCue;

const MATCH_RESOURCE: &str = "/io/github/MatchingGame/sounds/match.wav";
const MISMATCH_RESOURCE: &str = "/io/github/MatchingGame/sounds/mismatch.wav";

/// Where a cue's audio comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CueSource {
    Resource(&'static str),
    File(PathBuf),
    Bell,
}

fn default_resource(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Match => MATCH_RESOURCE,
        SoundCue::Mismatch => MISMATCH_RESOURCE,
    }
}

/// A configured path overrides the bundled cue; a path that isn't a file falls back to the bell.
fn cue_source(path: Option<&Path>, cue: SoundCue) -> CueSource {
    let Some(path) = path else {
        return CueSource::Resource(default_resource(cue));
    };
    if !path.is_file() {
        warn!(?cue, path = %path.display(), "sound file not found, using the display bell");
        return CueSource::Bell;
    }
    CueSource::File(path.to_path_buf())
}

fn load_cue(path: Option<&Path>, cue: SoundCue) -> Option<gtk::MediaFile> {
    match cue_source(path, cue) {
        CueSource::Resource(resource) => Some(gtk::MediaFile::for_resource(resource)),
        CueSource::File(path) => Some(gtk::MediaFile::for_filename(path)),
        CueSource::Bell => None,
    }
}

fn beep() {
    if let Some(display) = gtk::gdk::Display::default() {
        display.beep();
    }
}

#[derive(Default)]
pub struct SoundBank {
    match_cue: Option<gtk::MediaFile>,
    mismatch_cue: Option<gtk::MediaFile>,
}

impl SoundBank {
    pub fn load(settings: &Settings) -> Self {
        SoundBank {
            match_cue: load_cue(settings.match_sound.as_deref(), SoundCue::Match),
            mismatch_cue: load_cue(settings.mismatch_sound.as_deref(), SoundCue::Mismatch),
        }
    }

    pub fn play(&self, cue: SoundCue) {
        let media = match cue {
            SoundCue::Match => &self.match_cue,
            SoundCue::Mismatch => &self.mismatch_cue,
        };
        let Some(media) = media else {
            beep();
            return;
        };
        if let Some(err) = media.error() {
            warn!(?cue, error = %err, "sound cue failed to load, using the display bell");
            beep();
            return;
        }
        // Rewind so a cue that is still playing starts over.
        if media.is_seekable() {
            media.seek(0);
        }
        media.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_cues_use_distinct_bundled_sounds() {
        let matched = cue_source(None, SoundCue::Match);
        let mismatched = cue_source(None, SoundCue::Mismatch);
        assert_eq!(matched, CueSource::Resource(MATCH_RESOURCE));
        assert_eq!(mismatched, CueSource::Resource(MISMATCH_RESOURCE));
        assert_ne!(matched, mismatched);
    }

    #[test]
    fn configured_file_overrides_bundled_sound() {
        let path = std::env::temp_dir().join(format!("matching-game-cue-{}.wav", std::process::id()));
        std::fs::write(&path, b"RIFF").expect("write cue file");
        let source = cue_source(Some(&path), SoundCue::Match);
        std::fs::remove_file(&path).expect("remove cue file");
        assert_eq!(source, CueSource::File(path));
    }

    #[test]
    fn missing_file_falls_back_to_bell() {
        let path = Path::new("/nonexistent/matching-game/mismatch.wav");
        assert_eq!(cue_source(Some(path), SoundCue::Mismatch), CueSource::Bell);
    }

    #[test]
    fn directory_is_not_a_sound_file() {
        let dir = std::env::temp_dir();
        assert_eq!(cue_source(Some(&dir), SoundCue::Match), CueSource::Bell);
    }
}
