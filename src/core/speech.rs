//! Mandarin text-to-speech.
//!
//! Speech is fire-and-forget: `speak` returns immediately and a missing or
//! failing TTS engine never interrupts the study session.

use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Engines probed in order when no command is configured.
const KNOWN_ENGINES: [(&str, &str); 3] =
    [("espeak-ng", "cmn"), ("espeak", "zh"), ("say", "Tingting")];

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("No text-to-speech engine found (tried espeak-ng, espeak, say)")]
    NoEngine,

    #[error("TTS command not found: {0}")]
    CommandNotFound(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg_attr(test, mockall::automock)]
pub trait SpeechOutput: Send + Sync {
    /// Speak `text` in Mandarin without blocking the caller.
    fn speak(&self, text: &str);
}

/// Speaks by running an external TTS program.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: PathBuf,
    voice: Option<String>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<PathBuf>, voice: Option<String>) -> Self {
        Self {
            program: program.into(),
            voice,
        }
    }

    /// Resolve a configured command, or probe for a known engine on PATH.
    pub fn detect(command: Option<&str>, voice: Option<String>) -> Result<Self, SpeechError> {
        if let Some(command) = command {
            let program = which::which(command)
                .map_err(|_| SpeechError::CommandNotFound(command.to_string()))?;
            return Ok(Self::new(program, voice));
        }

        for (engine, default_voice) in KNOWN_ENGINES {
            if let Ok(program) = which::which(engine) {
                let voice = voice.or_else(|| Some(default_voice.to_string()));
                return Ok(Self::new(program, voice));
            }
        }
        Err(SpeechError::NoEngine)
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    fn args(&self, text: &str) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if let Some(voice) = &self.voice {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        args.push(text.to_string());
        args
    }

    fn spawn(&self, text: &str) -> Result<std::process::Child, SpeechError> {
        Command::new(&self.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.display().to_string(),
                source,
            })
    }
}

impl SpeechOutput for CommandSpeech {
    fn speak(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let mut child = match self.spawn(text) {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(error = %e, "Speech unavailable");
                return;
            }
        };
        // Reap off the UI thread so finished engines don't linger as zombies.
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!(%status, "TTS engine exited with failure");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to wait for TTS engine"),
        });
    }
}

/// Used when speech is disabled or no engine is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeech;

impl SpeechOutput for SilentSpeech {
    fn speak(&self, text: &str) {
        tracing::debug!(text, "Speech disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_with_voice() {
        let speech = CommandSpeech::new("espeak-ng", Some("cmn".into()));
        assert_eq!(speech.args("你好"), vec!["-v", "cmn", "你好"]);
    }

    #[test]
    fn test_args_without_voice() {
        let speech = CommandSpeech::new("say", None);
        assert_eq!(speech.args("谢谢"), vec!["谢谢"]);
    }

    #[test]
    fn test_detect_unknown_command() {
        let result = CommandSpeech::detect(Some("definitely-not-a-tts-engine-xyz"), None);
        assert!(matches!(result, Err(SpeechError::CommandNotFound(_))));
    }

    #[test]
    fn test_speak_with_missing_program_does_not_panic() {
        let speech = CommandSpeech::new("/nonexistent/tts-engine", None);
        speech.speak("你好");
        assert!(speech.spawn("你好").is_err());
    }

    #[test]
    fn test_silent_speech_is_noop() {
        SilentSpeech.speak("你好");
    }
}
