//! Audio event bus
//!
//! The simulation never touches an audio device. It pushes effects onto this
//! bus during the tick and a frontend drains them afterwards, playing each
//! event with whatever backend it has.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Cannon fires a bullet
    CannonFire,
    /// Bullet damages a teapot (doesn't wreck it)
    TeapotHit,
    /// Teapot wrecked
    TeapotWreck,
    /// Ship crashes into a teapot
    ShipCrash,
    /// Game over
    GameOver,
}

/// Queued sound events plus the volume settings a frontend should honor
#[derive(Debug, Clone)]
pub struct AudioBus {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    queue: Vec<SoundEffect>,
}

impl Default for AudioBus {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBus {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            queue: Vec::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Volume a frontend should play drained effects at
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Queue a sound effect
    ///
    /// Muted or zero-volume buses drop events instead of queueing them, so
    /// a frontend that never drains a silent bus leaks nothing.
    pub fn play(&mut self, effect: SoundEffect) {
        if self.effective_volume() <= 0.0 {
            return;
        }
        self.queue.push(effect);
    }

    /// Take every queued effect, oldest first.
    pub fn drain(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.queue)
    }

    /// Drop queued effects without playing them, e.g. on session restart.
    /// Volume settings persist.
    pub fn reset(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut bus = AudioBus::new();
        bus.play(SoundEffect::CannonFire);
        bus.play(SoundEffect::TeapotHit);

        assert_eq!(
            bus.drain(),
            vec![SoundEffect::CannonFire, SoundEffect::TeapotHit]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_muted_bus_drops_events() {
        let mut bus = AudioBus::new();
        bus.set_muted(true);
        bus.play(SoundEffect::GameOver);
        assert!(bus.drain().is_empty());

        bus.set_muted(false);
        bus.play(SoundEffect::GameOver);
        assert_eq!(bus.drain(), vec![SoundEffect::GameOver]);
    }

    #[test]
    fn test_effective_volume_clamps_and_multiplies() {
        let mut bus = AudioBus::new();
        bus.set_master_volume(2.0);
        bus.set_sfx_volume(0.5);
        assert!((bus.effective_volume() - 0.5).abs() < 1e-6);

        bus.set_master_volume(-1.0);
        assert_eq!(bus.effective_volume(), 0.0);
    }
}
