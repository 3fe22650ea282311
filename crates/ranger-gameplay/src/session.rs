//! Game session: one timed patrol over a generated park.
//!
//! The session owns its map, entities, tasks and a seeded random stream,
//! so a given config and input sequence always plays out the same way.

use ranger_common::{WorldPos, TILE_SIZE};
use ranger_world::{MapGenerator, ParkMap, ParkRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::entity::Entity;
use crate::tasks::{TaskKind, TaskQueue};

// ============================================================================
// Tuning
// ============================================================================

/// Longest frame step the simulation accepts, in seconds.
pub const MAX_FRAME_DT: f32 = 0.033;

/// Player spawn, world space (centre of tile (1, 1)).
pub const PLAYER_SPAWN: WorldPos = WorldPos::new(24.0, 24.0);

/// Player speed, world units per second.
pub const PLAYER_SPEED: f32 = 120.0;

/// Poacher spawn, world space.
pub const POACHER_SPAWN: WorldPos = WorldPos::new(760.0, 560.0);

/// Poacher speed, world units per second.
pub const POACHER_SPEED: f32 = 100.0;

/// Camp centre, world space.
pub const CAMP_CENTER: WorldPos = WorldPos::new(760.0, 40.0);

/// Camp radius, world units.
pub const CAMP_RADIUS: f32 = 32.0;

/// Reach of the interact action.
pub const INTERACT_RADIUS: f32 = 20.0;

/// Birds can be photographed from this far away.
pub const PHOTO_RANGE: f32 = 80.0;

/// Tagging the poacher needs the player this close.
pub const TAG_RANGE: f32 = 18.0;

/// Points for tagging the poacher.
pub const TAG_POINTS: u32 = 25;

/// A poacher this close to the playfield edge has escaped.
pub const ESCAPE_MARGIN: f32 = 4.0;

/// Carried rescues ride this far above the player.
pub const CARRY_OFFSET: f32 = 18.0;

/// Length of one day/night cycle in seconds.
pub const DAY_CYCLE_SECS: f32 = 60.0;

// ============================================================================
// Configuration
// ============================================================================

/// Session rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the park map; every new game reuses it
    pub map_seed: u32,
    /// Seed for task placement and poacher respawns
    pub rules_seed: u32,
    /// Whether the poacher plays at all
    pub poacher_enabled: bool,
    /// Seconds before the poacher appears
    pub poacher_delay_secs: f32,
    /// Escapes that lose the game
    pub max_escapes: u32,
    /// Session length in seconds
    pub time_limit_secs: f32,
    /// Active tasks kept on the map
    pub task_target: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_seed: 3,
            rules_seed: 1,
            poacher_enabled: false,
            poacher_delay_secs: 45.0,
            max_escapes: 5,
            time_limit_secs: 60.0,
            task_target: 5,
        }
    }
}

impl SessionConfig {
    /// Clamps values into workable ranges.
    pub fn validate(&mut self) {
        self.poacher_delay_secs = self.poacher_delay_secs.max(0.0);
        self.max_escapes = self.max_escapes.max(1);
        self.time_limit_secs = self.time_limit_secs.clamp(1.0, 3600.0);
        self.task_target = self.task_target.min(64);
    }
}

// ============================================================================
// State
// ============================================================================

/// Quarter of the day/night cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    /// First quarter
    Morning,
    /// Second quarter
    Day,
    /// Third quarter
    Evening,
    /// Last quarter
    Night,
}

impl DayPhase {
    /// Phase for a cycle position in `[0, 1)`.
    #[must_use]
    pub fn from_cycle(t: f32) -> Self {
        match t {
            t if t < 0.25 => Self::Morning,
            t if t < 0.5 => Self::Day,
            t if t < 0.75 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Day => "Day",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

/// Result of an interact press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Trash picked up
    Cleaned,
    /// Rescue lifted, now following the player
    PickedUp,
    /// Carried rescue dropped off at camp
    Delivered,
    /// Bird photographed
    Photographed,
}

/// Circular delivery zone around the camp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    /// Centre, world space
    pub center: WorldPos,
    /// Radius, world units
    pub radius: f32,
}

impl SafeZone {
    /// Whether `pos` lies strictly inside the zone.
    #[must_use]
    pub fn contains(&self, pos: WorldPos) -> bool {
        pos.distance(self.center) < self.radius
    }
}

/// A running game.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    generator: MapGenerator,
    rng: ParkRng,
    map: ParkMap,
    player: Entity,
    poacher: Entity,
    poacher_active: bool,
    safe_zone: SafeZone,
    tasks: TaskQueue,
    score: u32,
    escapes: u32,
    elapsed: f32,
    lost: bool,
    finished: bool,
}

impl Session {
    /// Starts a session on the default map generator.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_generator(config, MapGenerator::default())
    }

    /// Starts a session on a custom map generator.
    #[must_use]
    pub fn with_generator(mut config: SessionConfig, generator: MapGenerator) -> Self {
        config.validate();
        let map = generator.generate(config.map_seed);
        let rng = ParkRng::new(config.rules_seed);
        let mut session = Self {
            config,
            generator,
            rng,
            map,
            player: Entity::new(PLAYER_SPAWN, PLAYER_SPEED),
            poacher: Entity::new(POACHER_SPAWN, POACHER_SPEED),
            poacher_active: false,
            safe_zone: SafeZone {
                center: CAMP_CENTER,
                radius: CAMP_RADIUS,
            },
            tasks: TaskQueue::new(),
            score: 0,
            escapes: 0,
            elapsed: 0.0,
            lost: false,
            finished: false,
        };
        session.new_game();
        session
    }

    /// Regenerates the map and resets every piece of play state.
    pub fn new_game(&mut self) {
        self.map = self.generator.generate(self.config.map_seed);
        self.rng = ParkRng::new(self.config.rules_seed);
        self.tasks = TaskQueue::new();
        self.player = Entity::new(PLAYER_SPAWN, PLAYER_SPEED);
        self.poacher = Entity::new(POACHER_SPAWN, POACHER_SPEED);
        self.poacher_active = false;
        self.score = 0;
        self.escapes = 0;
        self.elapsed = 0.0;
        self.lost = false;
        self.finished = false;
        info!(seed = self.config.map_seed, "new game");
    }

    /// Advances the simulation by `dt` seconds with the player steering
    /// along `axis` (normalised here; zero stands still).
    pub fn update(&mut self, dt: f32, axis: WorldPos) {
        if self.finished {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.elapsed += dt;

        self.player.vel = axis.normalized();
        self.player.step(dt, &self.map);
        let carry_pos = WorldPos::new(self.player.pos.x, self.player.pos.y - CARRY_OFFSET);
        for task in self.tasks.carried_mut() {
            task.pos = carry_pos;
        }

        self.tasks
            .ensure(self.config.task_target, &self.map, &mut self.rng);

        if self.config.poacher_enabled {
            self.update_poacher(dt);
        }

        if self.escapes >= self.config.max_escapes && !self.lost {
            self.lost = true;
            info!(escapes = self.escapes, "poachers prevailed");
        }

        if self.time_left() <= 0.0 {
            self.finished = true;
            info!(score = self.score, "time up");
        }
    }

    fn update_poacher(&mut self, dt: f32) {
        if !self.poacher_active && self.elapsed >= self.config.poacher_delay_secs {
            self.poacher_active = true;
            debug!("poacher active");
        }
        if !self.poacher_active {
            return;
        }

        let heading = self.player.pos - self.poacher.pos;
        if heading.length() > 1e-3 {
            self.poacher.vel = heading.normalized();
        }
        self.poacher.step(dt, &self.map);

        let (w, h) = self.canvas_size();
        let p = self.poacher.pos;
        if p.x < ESCAPE_MARGIN
            || p.x > w - ESCAPE_MARGIN
            || p.y < ESCAPE_MARGIN
            || p.y > h - ESCAPE_MARGIN
        {
            self.escapes += 1;
            debug!(escapes = self.escapes, "poacher escaped");
            self.reset_poacher();
        }

        if self.player.distance_to(&self.poacher) < TAG_RANGE {
            self.add_score(TAG_POINTS);
            debug!("poacher tagged");
            self.reset_poacher();
        }
    }

    /// Sends the poacher back to a random spot one tile inside the left or
    /// right edge and deactivates it until the next frame.
    fn reset_poacher(&mut self) {
        let (w, h) = self.canvas_size();
        let x = if self.rng.chance(0.5) {
            TILE_SIZE
        } else {
            w - TILE_SIZE
        };
        let y = (self.rng.next_f64() as f32 * h).clamp(TILE_SIZE, h - TILE_SIZE);
        self.poacher.pos = WorldPos::new(x, y);
        self.poacher.vel = WorldPos::ZERO;
        self.poacher_active = false;
    }

    /// The interact (tap / space) action on the nearest task in reach.
    /// Does nothing once the game is lost or the clock has run out.
    pub fn interact(&mut self) -> Option<Interaction> {
        if self.lost || self.finished {
            return None;
        }
        let player = self.player.pos;
        let in_camp = self.safe_zone.contains(player);
        let task = self.tasks.nearest_mut(player, INTERACT_RADIUS)?;
        let distance = task.pos.distance(player);

        let outcome = match task.kind {
            TaskKind::Trash => {
                task.active = false;
                Interaction::Cleaned
            },
            TaskKind::Rescue if !task.carried && distance < INTERACT_RADIUS => {
                task.carried = true;
                Interaction::PickedUp
            },
            TaskKind::Rescue if task.carried && in_camp => {
                task.active = false;
                Interaction::Delivered
            },
            TaskKind::Rescue => return None,
            TaskKind::Bird if distance < PHOTO_RANGE => {
                task.active = false;
                Interaction::Photographed
            },
            TaskKind::Bird => return None,
        };

        let points = match outcome {
            Interaction::PickedUp => 0,
            _ => task.kind.points(),
        };
        self.add_score(points);
        debug!(?outcome, score = self.score, "interaction");
        Some(outcome)
    }

    fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Playfield size in world units.
    #[must_use]
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.map.width() as f32 * TILE_SIZE,
            self.map.height() as f32 * TILE_SIZE,
        )
    }

    /// Seconds remaining on the clock.
    #[must_use]
    pub fn time_left(&self) -> f32 {
        (self.config.time_limit_secs - self.elapsed).max(0.0)
    }

    /// Current day/night phase.
    #[must_use]
    pub fn day_phase(&self) -> DayPhase {
        DayPhase::from_cycle((self.elapsed % DAY_CYCLE_SECS) / DAY_CYCLE_SECS)
    }

    /// The park map.
    #[must_use]
    pub const fn map(&self) -> &ParkMap {
        &self.map
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Entity {
        &self.player
    }

    /// The poacher.
    #[must_use]
    pub const fn poacher(&self) -> &Entity {
        &self.poacher
    }

    /// Whether the poacher is currently chasing.
    #[must_use]
    pub const fn is_poacher_active(&self) -> bool {
        self.poacher_active
    }

    /// The delivery zone.
    #[must_use]
    pub const fn safe_zone(&self) -> SafeZone {
        self.safe_zone
    }

    /// Tasks issued so far.
    #[must_use]
    pub const fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    /// Total score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Poacher escapes so far.
    #[must_use]
    pub const fn escapes(&self) -> u32 {
        self.escapes
    }

    /// Seconds played.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Too many poachers got away.
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.lost
    }

    /// The clock has run out.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Session rules.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Moves the player directly, ignoring terrain. For scripted setups.
    pub fn teleport_player(&mut self, pos: WorldPos) {
        self.player.pos = pos;
    }
}
