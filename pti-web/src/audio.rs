//! One-shot audio cues.

use pti_core::Cue;

#[cfg(target_arch = "wasm32")]
mod player {
    use crate::dom;
    use pti_core::Cue;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlAudioElement;

    thread_local! {
        static BANK: RefCell<HashMap<Cue, HtmlAudioElement>> = RefCell::new(HashMap::new());
    }

    fn element_for(cue: Cue) -> Option<HtmlAudioElement> {
        BANK.with(|bank| {
            let mut bank = bank.borrow_mut();
            if let Some(audio) = bank.get(&cue) {
                return Some(audio.clone());
            }
            match HtmlAudioElement::new_with_src(cue.asset_path()) {
                Ok(audio) => {
                    bank.insert(cue, audio.clone());
                    Some(audio)
                }
                Err(err) => {
                    log::trace!("Cue {cue} unavailable: {}", dom::js_error_message(&err));
                    None
                }
            }
        })
    }

    pub fn play(cue: Cue) {
        let Some(audio) = element_for(cue) else {
            return;
        };
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::trace!("Cue {cue} playback rejected: {}", dom::js_error_message(&err));
                }
            }),
            Err(err) => log::trace!("Cue {cue} playback failed: {}", dom::js_error_message(&err)),
        }
    }
}

/// Rewind and play `cue` if `audible`. Playback failures are swallowed.
pub fn play_cue(cue: Cue, audible: bool) {
    if !audible {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    player::play(cue);
    #[cfg(not(target_arch = "wasm32"))]
    log::trace!("Cue {cue} requested outside the browser");
}

/// Play each cue in order.
pub fn play_cues(cues: &[Cue], audible: bool) {
    for cue in cues {
        play_cue(*cue, audible);
    }
}
