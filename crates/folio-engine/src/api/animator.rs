use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::config::SceneConfig;
use crate::api::types::SceneEvent;
use crate::assets::{spawn_elements, ElementDesc};
use crate::core::clock::SceneClock;
use crate::core::scene::Scene;
use crate::errors::AssetError;
use crate::renderer::camera::{Camera3D, CameraUniform};
use crate::renderer::instance::ElementBuffer;
use crate::systems::assembly::Assembly;
use crate::systems::viewpoint::Viewpoint;

/// Where the asset load attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    /// The attempt failed; the scene stays empty for this session.
    Failed,
}

/// Per-frame driver for the hero scene: element assembly, camera dolly and
/// look-target drift, all derived from one monotonic clock.
///
/// The host calls [`SceneAnimator::frame`] once per display refresh and
/// [`SceneAnimator::asset_loaded`] once when the model fetch settles.
pub struct SceneAnimator {
    config: SceneConfig,
    scene: Scene,
    clock: SceneClock,
    assembly: Assembly,
    viewpoint: Viewpoint,
    camera: Camera3D,
    element_buffer: ElementBuffer,
    camera_uniform: CameraUniform,
    events: Vec<SceneEvent>,
    rng: StdRng,
    load: LoadState,
}

impl SceneAnimator {
    pub fn new(config: SceneConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("scene config: {}; continuing with fallbacks", err);
        }
        let assembly = Assembly::new(config.assembly_duration_ms, config.assembly_easing);
        let dolly = Viewpoint::dolly(
            config.camera_start,
            config.camera_end,
            config.viewpoint_delay_ms(),
            config.viewpoint_duration_ms,
            config.viewpoint_easing,
        );
        let viewpoint = Viewpoint::new(dolly, config.focus, config.initial_target, config.damping);

        let mut camera = Camera3D::new(config.fov_deg, 1.0, config.near, config.far);
        camera.position = viewpoint.position();
        camera.target = viewpoint.target();
        let camera_uniform = camera.uniform();

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            scene: Scene::new(),
            clock: SceneClock::new(),
            assembly,
            viewpoint,
            camera,
            element_buffer: ElementBuffer::new(),
            camera_uniform,
            events: Vec::with_capacity(4),
            rng,
            load: LoadState::Pending,
        }
    }

    /// Hand over the outcome of the asset load. Only the first call counts:
    /// it spawns the elements (or logs the failure) and queues the single
    /// `Ready` event. Returns whether this call fired `Ready`.
    pub fn asset_loaded(&mut self, result: Result<Vec<ElementDesc>, AssetError>) -> bool {
        if self.load != LoadState::Pending {
            log::debug!("ignoring asset result: load already settled ({:?})", self.load);
            return false;
        }

        let failed = match result {
            Ok(descs) => {
                spawn_elements(
                    &mut self.scene,
                    descs,
                    self.config.offset_min,
                    self.config.offset_max,
                    &mut self.rng,
                );
                self.load = LoadState::Loaded;
                false
            }
            Err(err) => {
                log::warn!("Failed to load model {}: {}", self.config.asset_path, err);
                self.load = LoadState::Failed;
                true
            }
        };

        let element_count = self.scene.len() as u32;
        self.events.push(SceneEvent::Ready { element_count, failed });
        log::info!("hero scene ready: {} elements", element_count);

        // Place new elements for the current time right away, so nothing
        // is drawn at its raw dropped position before the next frame.
        self.assembly.tick(&mut self.scene, self.clock.elapsed_ms());
        self.element_buffer.rebuild(&self.scene);
        true
    }

    /// Run one frame at host timestamp `now_ms` (the first call starts the clock).
    pub fn frame(&mut self, now_ms: f64) {
        self.clock.sync(now_ms);
        self.update();
    }

    /// Run one frame `dt_ms` after the previous one.
    pub fn tick(&mut self, dt_ms: f64) {
        self.clock.advance(dt_ms);
        self.update();
    }

    fn update(&mut self) {
        let elapsed = self.clock.elapsed_ms();
        self.assembly.tick(&mut self.scene, elapsed);
        self.viewpoint.tick(elapsed, self.clock.last_dt_ms());

        self.camera.position = self.viewpoint.position();
        self.camera.target = self.viewpoint.target();
        self.camera_uniform = self.camera.uniform();
        self.element_buffer.rebuild(&self.scene);
    }

    /// Follow a container resize. The animation clock is untouched.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        if self.camera.resize(width, height, pixel_ratio, self.config.max_pixel_ratio) {
            log::debug!("viewport resized to {}x{} (aspect {:.3})", width, height, self.camera.aspect());
        }
        self.camera_uniform = self.camera.uniform();
    }

    /// Release the loaded geometry. The animator keeps running with an empty scene.
    pub fn dispose(&mut self) {
        self.scene.clear();
        self.element_buffer.clear();
    }

    /// Drain queued events for the host.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SceneEvent> + '_ {
        self.events.drain(..)
    }

    // ---- Accessors ----

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn camera_uniform(&self) -> &CameraUniform {
        &self.camera_uniform
    }

    pub fn element_buffer(&self) -> &ElementBuffer {
        &self.element_buffer
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Whether the `Ready` event has been fired.
    pub fn is_ready(&self) -> bool {
        self.load != LoadState::Pending
    }
}
