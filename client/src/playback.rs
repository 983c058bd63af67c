/// Transport state for the native MP4 player. Plain data mutated by element
/// playback events and by the custom controls; the view derives everything
/// it shows from here and mirrors `muted`/`looping` back onto the element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub playing: bool,
    pub muted: bool,
    pub looping: bool,
    pub current_secs: f64,
    pub duration_secs: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            looping: true,
            current_secs: 0.0,
            duration_secs: 0.0,
        }
    }
}

impl Playback {
    /// The element's `play` event (also fired after a replay).
    pub fn mark_playing(&mut self) {
        self.playing = true;
    }

    /// The element's `pause` event.
    pub fn mark_paused(&mut self) {
        self.playing = false;
    }

    /// The element's `ended` event. Only fires when looping is off; a
    /// looping element restarts without ending.
    pub fn mark_ended(&mut self) {
        self.playing = false;
    }

    /// `loadedmetadata`: the real duration becomes known.
    pub fn set_duration(&mut self, secs: f64) {
        self.duration_secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    }

    /// `timeupdate`, or a seek applied to the element.
    pub fn set_position(&mut self, secs: f64) {
        self.current_secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
    }

    /// Replay: back to the start and playing, whatever the current state.
    pub fn replay(&mut self) {
        self.current_secs = 0.0;
        self.playing = true;
    }

    /// Fraction of the video already played, 0..=1. Zero until metadata
    /// arrives.
    pub fn progress_fraction(&self) -> f64 {
        if self.duration_secs > 0.0 {
            (self.current_secs / self.duration_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Horizontal click position as a fraction of the progress bar, clamped to
/// 0..=1. Clicks left of the bar map to 0, right of the bar to 1.
pub fn seek_fraction(pointer_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if bar_width <= 0.0 {
        return 0.0;
    }
    ((pointer_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

/// Seek target in seconds for a click on the progress bar.
pub fn seek_target_secs(pointer_x: f64, bar_left: f64, bar_width: f64, duration_secs: f64) -> f64 {
    seek_fraction(pointer_x, bar_left, bar_width) * duration_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_player() {
        let p = Playback::default();
        assert!(!p.playing);
        assert!(!p.muted);
        assert!(p.looping);
        assert_eq!(p.current_secs, 0.0);
        assert_eq!(p.duration_secs, 0.0);
    }

    #[test]
    fn loop_double_toggle_is_identity() {
        let mut p = Playback::default();
        p.toggle_loop();
        assert!(!p.looping);
        p.toggle_loop();
        assert_eq!(p, Playback::default());
    }

    #[test]
    fn mute_is_independent_of_playing() {
        let mut p = Playback::default();
        p.mark_playing();
        p.toggle_mute();
        assert!(p.playing);
        assert!(p.muted);
        p.mark_paused();
        assert!(p.muted);
    }

    #[test]
    fn replay_rewinds_and_plays() {
        let mut p = Playback::default();
        p.set_duration(120.0);
        p.set_position(87.3);
        p.mark_paused();
        p.replay();
        assert_eq!(p.current_secs, 0.0);
        assert!(p.playing);
    }

    #[test]
    fn ended_leaves_the_player_paused() {
        let mut p = Playback::default();
        p.toggle_loop();
        p.mark_playing();
        p.mark_ended();
        assert!(!p.playing);
    }

    #[test]
    fn metadata_rejects_nan_duration() {
        let mut p = Playback::default();
        p.set_duration(f64::NAN);
        assert_eq!(p.duration_secs, 0.0);
        assert_eq!(p.progress_fraction(), 0.0);
    }

    #[test]
    fn progress_fraction_tracks_position() {
        let mut p = Playback::default();
        p.set_duration(200.0);
        p.set_position(50.0);
        assert_eq!(p.progress_fraction(), 0.25);
    }

    #[test]
    fn midpoint_click_seeks_to_half() {
        // Bar spans x = 100..200; click dead center with a 100s video.
        assert_eq!(seek_target_secs(150.0, 100.0, 100.0, 100.0), 50.0);
    }

    #[test]
    fn clicks_outside_the_bar_clamp() {
        assert_eq!(seek_target_secs(40.0, 100.0, 100.0, 100.0), 0.0);
        assert_eq!(seek_target_secs(260.0, 100.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn degenerate_bar_width_seeks_to_start() {
        assert_eq!(seek_fraction(150.0, 100.0, 0.0), 0.0);
    }
}
