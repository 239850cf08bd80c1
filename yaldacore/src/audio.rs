//! Chime playback for the encouragement button.
//!
//! The output stream is opened lazily on the first trigger. Playback is
//! fire-and-forget: a new trigger stops whatever was still playing and
//! starts the clip from the beginning. The chime is decorative, so every
//! failure is returned as an error for the shell to show on the status
//! line — nothing here may interrupt editing.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;

/// Name of the bundled audio clip.
pub const CHIME_FILE: &str = "encouragement.mp3";

#[derive(Error, Debug)]
pub enum ChimeError {
    #[error("no audio output device")]
    NoOutput,
    #[error("audio asset not found: {0}")]
    MissingAsset(String),
    #[error("audio file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("audio decode error: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("playback error: {0}")]
    Play(#[from] rodio::PlayError),
}

pub struct Chime {
    stream: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Sink>,
    initialized: bool,
}

impl Default for Chime {
    fn default() -> Self {
        Self::new()
    }
}

impl Chime {
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
            initialized: false,
        }
    }

    /// Play the bundled clip from the beginning, stopping any prior
    /// instance. Opens the output stream on first use.
    pub fn play(&mut self) -> Result<(), ChimeError> {
        if !self.initialized {
            self.stream = OutputStream::try_default().ok();
            self.initialized = true;
        }
        let handle = match &self.stream {
            Some((_, handle)) => handle,
            None => return Err(ChimeError::NoOutput),
        };

        let path = find_chime().ok_or_else(|| ChimeError::MissingAsset(CHIME_FILE.to_string()))?;
        let file = File::open(&path)?;
        let source = Decoder::new(BufReader::new(file))?;

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        let sink = Sink::try_new(handle)?;
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }
}

/// Locate the bundled clip: next to the executable first, then an `assets`
/// subdirectory, then the standard install dir.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(CHIME_FILE));
            paths.push(dir.join("assets").join(CHIME_FILE));
        }
    }
    paths.push(PathBuf::from("assets").join(CHIME_FILE));
    paths.push(PathBuf::from("/usr/share/yaldaedit").join(CHIME_FILE));
    paths
}

fn find_chime() -> Option<PathBuf> {
    find_in(&search_paths())
}

fn find_in(paths: &[PathBuf]) -> Option<PathBuf> {
    paths.iter().find(|p| p.is_file()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope").join(CHIME_FILE);
        let present = dir.path().join(CHIME_FILE);
        std::fs::write(&present, b"x").unwrap();
        let found = find_in(&[missing, present.clone()]);
        assert_eq!(found, Some(present));
    }

    #[test]
    fn test_find_in_empty_is_none() {
        assert_eq!(find_in(&[]), None);
    }
}
