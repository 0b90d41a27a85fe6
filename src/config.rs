/// Immutable game configuration, built once at startup and passed into the
/// loop.  Replaces the ad-hoc screen-size globals a quick script would use.

use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    /// World extent in abstract units.  The terminal is a viewport onto
    /// this, so gameplay is independent of the terminal's cell grid.
    pub world_w: i32,
    pub world_h: i32,

    /// Units the player moves per held direction per frame.
    pub player_step: i32,

    /// Entity extents in world units (width, height).
    pub player_size: (i32, i32),
    pub missile_size: (i32, i32),
    pub cloud_size: (i32, i32),

    /// Per-missile speed, drawn once at spawn.
    pub missile_speed: RangeInclusive<i32>,
    /// Clouds all drift at the same speed.
    pub cloud_speed: i32,

    /// New mobs get a center x this far past the right edge.
    pub spawn_margin: RangeInclusive<i32>,

    pub missile_interval: Duration,
    pub cloud_interval: Duration,

    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            world_w: 800,
            world_h: 600,
            player_step: 5,
            player_size: (75, 25),
            missile_size: (20, 10),
            cloud_size: (70, 35),
            missile_speed: 1..=5,
            cloud_speed: 1,
            spawn_margin: 20..=100,
            missile_interval: Duration::from_millis(250),
            cloud_interval: Duration::from_millis(1000),
            target_fps: 50,
        }
    }
}

impl Config {
    /// Duration budget of a single frame at the target rate.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}
