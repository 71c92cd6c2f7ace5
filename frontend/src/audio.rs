use shared::audio::AudioCue;
use shared::PlaybackError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlAudioElement};

pub const SPIN_SOUND_ID: &str = "spin-sound";
pub const VICTORY_SOUND_ID: &str = "victory-sound";

/// An `<audio>` element on the page, looked up by id on every play.
pub struct HtmlAudioCue {
    element_id: String,
}

impl HtmlAudioCue {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into() }
    }

    fn element(&self) -> Option<HtmlAudioElement> {
        window()?
            .document()?
            .get_element_by_id(&self.element_id)?
            .dyn_into::<HtmlAudioElement>()
            .ok()
    }
}

impl AudioCue for HtmlAudioCue {
    fn name(&self) -> &str {
        &self.element_id
    }

    fn try_play(&self) -> Result<(), PlaybackError> {
        let audio = self
            .element()
            .ok_or_else(|| PlaybackError::Missing(self.element_id.clone()))?;
        audio.set_current_time(0.0);

        let promise: js_sys::Promise = audio.play().map_err(|e| PlaybackError::Rejected {
            cue: self.element_id.clone(),
            reason: format!("{:?}", e),
        })?;

        // Autoplay policies reject the promise later; that is only worth a log line
        let cue = self.element_id.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Could not play {} sound: {:?}", cue, e);
            }
        });
        Ok(())
    }
}
