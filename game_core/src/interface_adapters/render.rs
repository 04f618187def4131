// Rendering adapter: mirrors world updates into an external scene graph.

use crate::domain::{EntityId, EntityKind, EntitySnapshot, Vec3};
use crate::use_cases::{WorldEvent, WorldUpdate};
use std::collections::{HashMap, HashSet};
use tokio::sync::{broadcast, watch};
use tracing::{debug, trace, warn};

/// Opaque handle the scene graph hands out per renderable.
pub type RenderHandle = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl From<&EntitySnapshot> for Transform {
    fn from(snapshot: &EntitySnapshot) -> Self {
        Self {
            position: snapshot.position,
            rotation: snapshot.rotation,
        }
    }
}

/// What the core needs from a renderer. Implementations own all geometry,
/// materials and lights.
pub trait SceneGraph {
    fn insert(&mut self, kind: EntityKind, transform: Transform) -> RenderHandle;
    fn remove(&mut self, handle: RenderHandle);
    fn set_transform(&mut self, handle: RenderHandle, transform: Transform);
    fn set_starfield_rotation(&mut self, radians: f32);
    fn set_projection(&mut self, camera: &Camera);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Perspective camera looking down -z from behind the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 15.0),
        }
    }
}

impl Camera {
    /// Updates the aspect ratio; degenerate viewports are ignored.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.width == 0 || viewport.height == 0 {
            return false;
        }
        self.aspect = viewport.width as f32 / viewport.height as f32;
        true
    }
}

/// Keeps one scene handle per live entity.
///
/// Spawned/Despawned events drive insert/remove; snapshots then update
/// transforms. Anything that no longer appears in a snapshot is removed too,
/// so a subscriber that skipped frames converges on the next one.
pub struct SceneSync<S> {
    scene: S,
    camera: Camera,
    player: Option<RenderHandle>,
    handles: HashMap<EntityId, RenderHandle>,
}

impl<S: SceneGraph> SceneSync<S> {
    pub fn new(mut scene: S, camera: Camera) -> Self {
        scene.set_projection(&camera);
        Self {
            scene,
            camera,
            player: None,
            handles: HashMap::new(),
        }
    }

    pub fn apply(&mut self, update: &WorldUpdate) {
        for event in &update.events {
            match event {
                WorldEvent::Spawned { id, kind, position } => {
                    let transform = Transform {
                        position: *position,
                        rotation: Vec3::ZERO,
                    };
                    if !self.handles.contains_key(id) {
                        let handle = self.scene.insert(*kind, transform);
                        self.handles.insert(*id, handle);
                    }
                }
                WorldEvent::Despawned { id, .. } => {
                    if let Some(handle) = self.handles.remove(id) {
                        self.scene.remove(handle);
                    }
                }
                _ => {}
            }
        }

        let player = match self.player {
            Some(handle) => handle,
            None => {
                let handle = self
                    .scene
                    .insert(EntityKind::Player, Transform::from(&update.player));
                self.player = Some(handle);
                handle
            }
        };
        self.scene
            .set_transform(player, Transform::from(&update.player));

        let mut live = HashSet::with_capacity(update.enemies.len() + update.bullets.len());
        for snapshot in update.enemies.iter().chain(update.bullets.iter()) {
            live.insert(snapshot.id);
            let transform = Transform::from(snapshot);
            match self.handles.get(&snapshot.id) {
                Some(handle) => self.scene.set_transform(*handle, transform),
                None => {
                    let handle = self.scene.insert(snapshot.kind, transform);
                    self.handles.insert(snapshot.id, handle);
                }
            }
        }

        let stale: Vec<EntityId> = self
            .handles
            .keys()
            .filter(|id| !live.contains(id))
            .copied()
            .collect();
        for id in stale {
            if let Some(handle) = self.handles.remove(&id) {
                self.scene.remove(handle);
            }
        }

        self.scene.set_starfield_rotation(update.starfield_rotation);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if !self.camera.resize(viewport) {
            debug!(?viewport, "ignoring degenerate viewport");
            return;
        }
        self.scene.set_projection(&self.camera);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Live handles, not counting the player.
    pub fn live_handles(&self) -> usize {
        self.handles.len()
    }
}

/// Scene that only records mutations in the trace log (headless runs).
#[derive(Debug, Default)]
pub struct TracingScene {
    next_handle: RenderHandle,
    live: usize,
}

impl SceneGraph for TracingScene {
    fn insert(&mut self, kind: EntityKind, transform: Transform) -> RenderHandle {
        self.next_handle += 1;
        self.live += 1;
        trace!(
            handle = self.next_handle,
            ?kind,
            position = ?transform.position,
            "scene insert"
        );
        self.next_handle
    }

    fn remove(&mut self, handle: RenderHandle) {
        self.live = self.live.saturating_sub(1);
        trace!(handle, live = self.live, "scene remove");
    }

    fn set_transform(&mut self, _handle: RenderHandle, _transform: Transform) {}

    fn set_starfield_rotation(&mut self, _radians: f32) {}

    fn set_projection(&mut self, camera: &Camera) {
        debug!(aspect = camera.aspect, "camera projection updated");
    }
}

/// Feeds world updates and viewport changes into a [`SceneSync`].
pub async fn run_renderer<S: SceneGraph>(
    mut sync: SceneSync<S>,
    mut world_rx: broadcast::Receiver<WorldUpdate>,
    mut viewport_rx: watch::Receiver<Viewport>,
) {
    let mut viewport_open = true;
    loop {
        tokio::select! {
            update = world_rx.recv() => match update {
                Ok(update) => sync.apply(&update),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!(missed = n, "renderer lagged; resyncing on next frame");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("world updates closed; renderer exiting");
                    break;
                }
            },
            changed = viewport_rx.changed(), if viewport_open => {
                if changed.is_err() {
                    // Viewport source is gone; keep the last camera.
                    viewport_open = false;
                    continue;
                }
                let viewport = *viewport_rx.borrow_and_update();
                sync.resize(viewport);
            }
        }
    }
}
