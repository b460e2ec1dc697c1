//! Volume bookkeeping
//!
//! The controller only tracks the 0-100 level the user sees; amplitude
//! scaling is the engine's job. Mute stores the level it replaced so that
//! un-muting restores exactly the pre-mute volume.

/// Volume level with mute-restore
#[derive(Debug, Clone, Default)]
pub struct VolumeControl {
    /// Volume level (0-100)
    level: u8,

    /// Level in effect before the last mute, if muted
    before_mute: Option<u8>,
}

impl VolumeControl {
    /// Create a new control at the given level (clamped to 0-100)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            before_mute: None,
        }
    }

    /// Set the level, clamping to 0-100
    ///
    /// An explicit volume change ends any mute in effect. Returns the
    /// clamped level actually applied.
    pub fn set_level(&mut self, level: u8) -> u8 {
        self.level = level.min(100);
        self.before_mute = None;
        self.level
    }

    /// Get the current level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.before_mute.is_some()
    }

    /// Toggle mute
    ///
    /// Muting stores the current level and drops to zero; un-muting restores
    /// the stored level exactly. Returns the resulting level.
    pub fn toggle_mute(&mut self) -> u8 {
        match self.before_mute.take() {
            Some(level) => self.level = level,
            None => {
                self.before_mute = Some(self.level);
                self.level = 0;
            }
        }
        self.level
    }

    /// Step the level up, clamping at 100
    pub fn step_up(&mut self, step: u8) -> u8 {
        let level = self.level.saturating_add(step);
        self.set_level(level)
    }

    /// Step the level down, clamping at 0
    pub fn step_down(&mut self, step: u8) -> u8 {
        let level = self.level.saturating_sub(step);
        self.set_level(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_level_clamps() {
        let mut vol = VolumeControl::new(50);
        assert_eq!(vol.set_level(150), 100);
        assert_eq!(vol.level(), 100);

        assert_eq!(vol.set_level(0), 0);
        assert_eq!(vol.level(), 0);
    }

    #[test]
    fn new_clamps() {
        let vol = VolumeControl::new(200);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn mute_restores_exact_level() {
        let mut vol = VolumeControl::new(73);

        assert_eq!(vol.toggle_mute(), 0);
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0);

        assert_eq!(vol.toggle_mute(), 73);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 73);
    }

    #[test]
    fn volume_change_ends_mute() {
        let mut vol = VolumeControl::new(80);
        vol.toggle_mute();
        assert!(vol.is_muted());

        vol.set_level(40);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 40);

        // The next mute stores the new level, not the old one
        vol.toggle_mute();
        assert_eq!(vol.toggle_mute(), 40);
    }

    #[test]
    fn steps_go_through_clamping() {
        let mut vol = VolumeControl::new(98);
        assert_eq!(vol.step_up(5), 100);

        let mut vol = VolumeControl::new(3);
        assert_eq!(vol.step_down(5), 0);
    }

    #[test]
    fn step_while_muted_unmutes() {
        let mut vol = VolumeControl::new(60);
        vol.toggle_mute();

        assert_eq!(vol.step_up(5), 5);
        assert!(!vol.is_muted());
    }
}
