//! Sound cues. Playback is fire-and-forget: the game asks for a cue and never waits
//! on (or learns about) the result.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlAudioElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Click, // any successful consumption
    Burn,  // additionally, when the consumed marshmallow was burnt
}

/// Capability the game calls whenever a cue should play.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Drops every cue.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Remembers requested cues. Clones share the same log so a test can keep one handle
/// and give the other to the game.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    log: Rc<RefCell<Vec<Cue>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn cues(&self) -> Vec<Cue> {
        self.log.borrow().clone()
    }
    pub fn count(&self, cue: Cue) -> usize {
        self.log.borrow().iter().filter(|c| **c == cue).count()
    }
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue) {
        self.log.borrow_mut().push(cue);
    }
}

/// Browser playback through two `<audio>` elements. Either element may be missing
/// (construction failed); that cue is then silent.
pub struct HtmlAudio {
    click: Option<HtmlAudioElement>,
    burn: Option<HtmlAudioElement>,
}

impl HtmlAudio {
    pub fn new(click_src: &str, burn_src: &str) -> Self {
        Self {
            click: HtmlAudioElement::new_with_src(click_src).ok(),
            burn: HtmlAudioElement::new_with_src(burn_src).ok(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.click.is_some() && self.burn.is_some()
    }
}

impl AudioSink for HtmlAudio {
    fn play(&mut self, cue: Cue) {
        let el = match cue {
            Cue::Click => self.click.as_ref(),
            Cue::Burn => self.burn.as_ref(),
        };
        if let Some(el) = el {
            // Rewind so rapid clicks retrigger instead of being swallowed mid-playback.
            el.set_current_time(0.0);
            let _ = el.play(); // promise intentionally dropped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_clones_share_log() {
        let rec = RecordingAudio::new();
        let mut handle: Box<dyn AudioSink> = Box::new(rec.clone());
        handle.play(Cue::Click);
        handle.play(Cue::Burn);
        handle.play(Cue::Click);
        assert_eq!(rec.cues(), vec![Cue::Click, Cue::Burn, Cue::Click]);
        assert_eq!(rec.count(Cue::Click), 2);
        rec.clear();
        assert!(rec.cues().is_empty());
    }
}
