use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::gateway::{ContentGateway, GeminiGateway, OfflineGateway};
use crate::core::speech::{CommandSpeech, SilentSpeech, SpeechOutput};

use super::events::{AppEvent, Notification, NotificationLevel};

/// Centralized handle to the external collaborators.
///
/// Created once at startup, then passed by ref to views that need to
/// generate content or speak.
pub struct Services {
    pub gateway: Arc<dyn ContentGateway>,
    pub speech: Arc<dyn SpeechOutput>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    pub fn new(
        gateway: Arc<dyn ContentGateway>,
        speech: Arc<dyn SpeechOutput>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            gateway,
            speech,
            event_tx,
        }
    }

    /// Initialize services from config.
    ///
    /// Never fails: a missing API key or TTS engine degrades to the offline
    /// gateway / silent speech, and the user is told through a notification.
    pub fn init(config: &AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let gateway = gateway_from_config(config, &event_tx);
        let speech = speech_from_config(config, &event_tx);
        Self::new(gateway, speech, event_tx)
    }
}

fn notify(event_tx: &mpsc::UnboundedSender<AppEvent>, message: String, level: NotificationLevel) {
    let _ = event_tx.send(AppEvent::Notification(Notification::new(message, level)));
}

fn gateway_from_config(
    config: &AppConfig,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Arc<dyn ContentGateway> {
    let Some(api_key) = config.ai.api_key() else {
        log::info!("No Gemini API key configured, AI content disabled");
        notify(
            event_tx,
            "AI content disabled: set GEMINI_API_KEY".into(),
            NotificationLevel::Info,
        );
        return Arc::new(OfflineGateway);
    };
    match GeminiGateway::new(api_key, config.ai.model.clone(), config.ai.timeout()) {
        Ok(gateway) => {
            let gateway = gateway.with_base_url(config.ai.base_url.clone());
            log::info!("Gemini gateway initialized (model {})", gateway.model());
            Arc::new(gateway)
        }
        Err(e) => {
            log::error!("Failed to create Gemini client: {e}");
            notify(event_tx, format!("AI content disabled: {e}"), NotificationLevel::Error);
            Arc::new(OfflineGateway)
        }
    }
}

fn speech_from_config(
    config: &AppConfig,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Arc<dyn SpeechOutput> {
    if !config.speech.enabled {
        log::info!("Speech disabled by config");
        return Arc::new(SilentSpeech);
    }
    match CommandSpeech::detect(config.speech.command.as_deref(), config.speech.voice.clone()) {
        Ok(speech) => {
            log::info!(
                "Speech via {} (voice {})",
                speech.program().display(),
                speech.voice().unwrap_or("default")
            );
            Arc::new(speech)
        }
        Err(e) => {
            log::warn!("{e}; speech disabled");
            notify(event_tx, format!("Speech unavailable: {e}"), NotificationLevel::Warning);
            Arc::new(SilentSpeech)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifications(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let AppEvent::Notification(n) = event {
                out.push(n);
            }
        }
        out
    }

    #[tokio::test]
    async fn test_init_degrades_without_speech_engine() {
        let mut config = AppConfig::default();
        config.speech.command = Some("definitely-not-a-tts-engine-xyz".into());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let services = Services::init(&config, tx);
        services.speech.speak("你好");

        let warnings: Vec<_> = notifications(&mut rx)
            .into_iter()
            .filter(|n| n.level == NotificationLevel::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.starts_with("Speech unavailable"));
    }

    #[tokio::test]
    async fn test_init_with_key_and_speech_disabled_is_quiet() {
        let mut config = AppConfig::default();
        config.ai.api_key = Some("AIza-test".into());
        config.speech.enabled = false;
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _services = Services::init(&config, tx);
        assert!(notifications(&mut rx).is_empty());
    }
}
