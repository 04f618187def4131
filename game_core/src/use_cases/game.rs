use super::types::{DespawnCause, GameEvent, GamePhase, HudState, WorldEvent, WorldUpdate};
use crate::domain::systems::{
    SpawnController, advance_bullets, advance_enemies, bullets_vs_enemies, move_player,
    player_vs_enemies, spawn_position,
};
use crate::domain::{
    Action, Bullet, Enemy, EntityId, EntityKind, EntityPool, EntitySnapshot, GameTuning,
    InputState, KeyBindings, Player, SpawnRng, Vec3,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Owns every piece of gameplay state and runs one tick at a time.
///
/// Phases: Idle -> Running (start) -> GameOver (lives reach zero) -> Running
/// (restart). While not Running, ticks only advance the starfield.
pub struct GameStateMachine<R> {
    tuning: GameTuning,
    rng: R,

    phase: GamePhase,
    score: u32,
    lives: u32,
    tick: u64,

    player: Player,
    enemies: EntityPool<Enemy>,
    bullets: EntityPool<Bullet>,
    spawner: SpawnController,

    bindings: KeyBindings,
    input: InputState,
    // Set by a Fire key-down; consumed (at most one bullet) on the next tick.
    fire_requested: bool,

    next_entity_id: EntityId,
    starfield_rotation: f32,
    // Events raised since the last tick was published.
    events: Vec<WorldEvent>,
}

impl<R: SpawnRng> GameStateMachine<R> {
    pub fn new(tuning: GameTuning, rng: R) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            lives: tuning.rules.starting_lives,
            tick: 0,
            player: Player::at(tuning.player.home),
            enemies: EntityPool::with_capacity(tuning.enemy.max_live),
            bullets: EntityPool::new(),
            spawner: SpawnController::new(&tuning.enemy),
            bindings: KeyBindings::default(),
            input: InputState::default(),
            fire_requested: false,
            // 0 is reserved for the player.
            next_entity_id: 1,
            starfield_rotation: 0.0,
            events: Vec::new(),
            tuning,
            rng,
        }
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &EntityPool<Enemy> {
        &self.enemies
    }

    pub fn bullets(&self) -> &EntityPool<Bullet> {
        &self.bullets
    }

    pub fn hud(&self) -> HudState {
        HudState {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
        }
    }

    /// Idle -> Running. Resets the counters but leaves entities alone.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            debug!(phase = ?self.phase, "start ignored");
            return false;
        }

        self.score = 0;
        self.lives = self.tuning.rules.starting_lives;
        self.enter(GamePhase::Running);
        info!(lives = self.lives, "game started");
        true
    }

    /// GameOver -> Running. Clears both pools and sends the player home.
    pub fn restart(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::GameOver { .. }) {
            debug!(phase = ?self.phase, "restart ignored");
            return false;
        }

        for enemy in self.enemies.clear() {
            self.despawned(enemy.id, EntityKind::Enemy, DespawnCause::Reset);
        }
        for bullet in self.bullets.clear() {
            self.despawned(bullet.id, EntityKind::Bullet, DespawnCause::Reset);
        }
        self.player = Player::at(self.tuning.player.home);
        self.spawner.reset();
        self.fire_requested = false;

        self.score = 0;
        self.lives = self.tuning.rules.starting_lives;
        self.enter(GamePhase::Running);
        info!(lives = self.lives, "game restarted");
        true
    }

    /// Records a raw key transition. A Fire key-down while Running queues one
    /// shot for the next tick.
    pub fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(bound) = self.bindings.resolve(key) else {
            return;
        };
        self.input.set(bound, pressed);

        if pressed && bound.action == Action::Fire && self.is_running() {
            self.fire_requested = true;
        }
    }

    /// Spawns a bullet just ahead of the player. Ignored unless Running.
    pub fn fire(&mut self) -> Option<EntityId> {
        if !self.is_running() {
            return None;
        }

        let id = self.allocate_id();
        let position =
            self.player.position + Vec3::new(0.0, 0.0, self.tuning.projectile.spawn_offset_z);
        self.bullets.add(Bullet { id, position });
        self.events.push(WorldEvent::Spawned {
            id,
            kind: EntityKind::Bullet,
            position,
        });
        Some(id)
    }

    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Start => {
                self.start();
            }
            GameEvent::Restart => {
                self.restart();
            }
            GameEvent::Key { key, pressed } => self.handle_key(&key, pressed),
        }
    }

    /// Runs one logical frame and returns what the adapters need to render it.
    pub fn tick(&mut self) -> WorldUpdate {
        self.tick += 1;

        if self.is_running() {
            self.step();
        }

        // Cosmetic; keeps going in every phase.
        self.starfield_rotation += self.tuning.rules.starfield_spin;

        self.world_update()
    }

    // Fixed order: fire, player, spawn, enemies/bullets (+cull), collisions.
    fn step(&mut self) {
        if std::mem::take(&mut self.fire_requested) {
            self.fire();
        }

        move_player(&mut self.player, &self.input, &self.tuning.player);

        if self.spawner.tick(self.enemies.len()) {
            self.spawn_enemy();
        }

        for enemy in advance_enemies(&mut self.enemies, &self.tuning.enemy) {
            debug!(enemy_id = enemy.id, "enemy missed");
            self.despawned(enemy.id, EntityKind::Enemy, DespawnCause::Missed);
        }
        for bullet in advance_bullets(&mut self.bullets, &self.tuning.projectile) {
            self.despawned(bullet.id, EntityKind::Bullet, DespawnCause::OffScreen);
        }

        self.resolve_collisions();
    }

    fn spawn_enemy(&mut self) {
        let position = spawn_position(&mut self.rng, &self.tuning.enemy);
        let id = self.allocate_id();
        self.enemies.add(Enemy::new(id, position));
        debug_assert!(self.enemies.len() <= self.tuning.enemy.max_live);

        debug!(enemy_id = id, x = position.x, y = position.y, "enemy spawned");
        self.events.push(WorldEvent::Spawned {
            id,
            kind: EntityKind::Enemy,
            position,
        });
    }

    fn resolve_collisions(&mut self) {
        let lives_before = self.lives;
        let hits = player_vs_enemies(
            &self.player,
            &mut self.enemies,
            &mut self.lives,
            self.tuning.player.hit_radius,
        );

        for (n, enemy) in hits.enemies.into_iter().enumerate() {
            let lives = lives_before.saturating_sub(n as u32 + 1);
            info!(enemy_id = enemy, lives, "player hit");
            self.despawned(enemy, EntityKind::Enemy, DespawnCause::Collision);
            self.events.push(WorldEvent::PlayerHit { enemy, lives });
        }

        if hits.defeated {
            // Nothing else resolves this tick.
            self.enter(GamePhase::GameOver {
                final_score: self.score,
            });
            info!(final_score = self.score, "game over");
            return;
        }

        let kills = bullets_vs_enemies(
            &mut self.bullets,
            &mut self.enemies,
            self.tuning.projectile.hit_radius,
        );

        for kill in kills {
            self.score += self.tuning.rules.points_per_kill;
            debug!(
                bullet_id = kill.bullet,
                enemy_id = kill.enemy,
                score = self.score,
                "enemy destroyed"
            );
            self.despawned(kill.bullet, EntityKind::Bullet, DespawnCause::Collision);
            self.despawned(kill.enemy, EntityKind::Enemy, DespawnCause::Collision);
            self.events.push(WorldEvent::EnemyKilled {
                bullet: kill.bullet,
                enemy: kill.enemy,
                score: self.score,
            });
        }
    }

    fn enter(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.events.push(WorldEvent::PhaseChanged(phase));
    }

    fn despawned(&mut self, id: EntityId, kind: EntityKind, cause: DespawnCause) {
        self.events.push(WorldEvent::Despawned { id, kind, cause });
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }

    fn world_update(&mut self) -> WorldUpdate {
        WorldUpdate {
            tick: self.tick,
            hud: self.hud(),
            starfield_rotation: self.starfield_rotation,
            player: EntitySnapshot::from(&self.player),
            enemies: self.enemies.iter().map(EntitySnapshot::from).collect(),
            bullets: self.bullets.iter().map(EntitySnapshot::from).collect(),
            events: std::mem::take(&mut self.events),
        }
    }
}

/// Drives the state machine at a fixed frame rate.
///
/// Queued events are applied at the start of each frame, then exactly one
/// tick runs and its update is published.
pub async fn run_game_loop<R: SpawnRng>(
    mut machine: GameStateMachine<R>,
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    hud_tx: watch::Sender<HudState>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
) {
    let mut interval = tokio::time::interval(tick_interval);
    // One update per frame; never burst to catch up.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(ev) = input_rx.try_recv() {
            machine.apply(ev);
        }

        let update = machine.tick();

        hud_tx.send_if_modified(|hud| {
            if *hud == update.hud {
                return false;
            }
            *hud = update.hud;
            true
        });
        // No subscribers is fine; frames are not buffered for late joiners.
        let _ = world_tx.send(update);
    }

    info!(score = machine.score(), "game loop stopped");
}
