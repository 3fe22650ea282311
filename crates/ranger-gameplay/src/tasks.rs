//! Pickup and delivery tasks scattered over the park.

use ranger_common::{TileCoord, WorldPos};
use ranger_world::{ParkMap, ParkRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Random tiles sampled before a task falls back to [`FALLBACK_TASK_POS`].
pub const PLACEMENT_ATTEMPTS: usize = 200;

/// Offset from a tile's top-left corner to where its task sits.
pub const TASK_TILE_OFFSET: f32 = 8.0;

/// Where a task lands if no walkable tile was found.
pub const FALLBACK_TASK_POS: WorldPos = WorldPos::new(24.0, 24.0);

/// Default search radius for [`TaskQueue::nearest`].
pub const DEFAULT_NEAREST_RADIUS: f32 = 18.0;

/// What the player has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Pick up litter on the spot
    Trash,
    /// Carry an animal back to camp
    Rescue,
    /// Photograph a bird
    Bird,
}

impl TaskKind {
    /// All kinds, in the order random picks index them.
    pub const ALL: [Self; 3] = [Self::Trash, Self::Rescue, Self::Bird];

    /// Points awarded on completion.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Trash => 10,
            Self::Rescue => 20,
            Self::Bird => 15,
        }
    }
}

/// A single task instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, increasing from 1
    pub id: u32,
    /// Task kind
    pub kind: TaskKind,
    /// World position
    pub pos: WorldPos,
    /// Still waiting to be completed
    pub active: bool,
    /// A rescue currently being carried
    pub carried: bool,
}

impl Task {
    /// Places a task on a random walkable tile.
    #[must_use]
    pub fn random(id: u32, kind: TaskKind, map: &ParkMap, rng: &mut ParkRng) -> Self {
        let pos = (0..PLACEMENT_ATTEMPTS)
            .find_map(|_| {
                let tile = TileCoord::new(
                    rng.below(map.width()) as i32,
                    rng.below(map.height()) as i32,
                );
                map.is_walkable_at(tile).then(|| {
                    let origin = tile.to_world_origin();
                    WorldPos::new(origin.x + TASK_TILE_OFFSET, origin.y + TASK_TILE_OFFSET)
                })
            })
            .unwrap_or(FALLBACK_TASK_POS);

        Self {
            id,
            kind,
            pos,
            active: true,
            carried: false,
        }
    }
}

/// All tasks issued during a session, completed ones included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskQueue {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawns random tasks until `count` are active.
    pub fn ensure(&mut self, count: usize, map: &ParkMap, rng: &mut ParkRng) {
        while self.active_count() < count {
            let kind = TaskKind::ALL[rng.below(TaskKind::ALL.len())];
            let task = Task::random(self.next_id, kind, map, rng);
            trace!(id = task.id, ?kind, x = task.pos.x, y = task.pos.y, "task spawned");
            self.next_id += 1;
            self.tasks.push(task);
        }
    }

    /// Number of tasks still active.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.active).count()
    }

    /// Closest active task to `pos`, if it lies within `radius`.
    #[must_use]
    pub fn nearest(&self, pos: WorldPos, radius: f32) -> Option<&Task> {
        self.nearest_index(pos, radius).map(|i| &self.tasks[i])
    }

    /// Index form of [`TaskQueue::nearest`].
    fn nearest_index(&self, pos: WorldPos, radius: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, task) in self.tasks.iter().enumerate().filter(|(_, t)| t.active) {
            let d = task.pos.distance(pos);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best.filter(|&(_, d)| d <= radius).map(|(i, _)| i)
    }

    /// Mutable access to the closest active task within `radius`.
    pub fn nearest_mut(&mut self, pos: WorldPos, radius: f32) -> Option<&mut Task> {
        let index = self.nearest_index(pos, radius)?;
        self.tasks.get_mut(index)
    }

    /// Active tasks currently being carried.
    pub fn carried_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut().filter(|t| t.active && t.carried)
    }

    /// Whether any active task is being carried.
    #[must_use]
    pub fn is_carrying(&self) -> bool {
        self.tasks.iter().any(|t| t.active && t.carried)
    }

    /// All tasks, oldest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Active tasks only.
    pub fn active(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.active)
    }
}
