//! A mounted background: entities, surface and frame driver in one owner.

use rand::rngs::StdRng;
use skyfall_core::{BackgroundKind, CellMetrics, Dimensions, Speed};

use crate::animations::Effect;
use crate::driver::{FrameDriver, FrameHandle, FrameStatus};
use crate::surface::{CellSurface, Surface};

/// Tracks the drawing-area size and reports when it changes.
#[derive(Debug, Clone, Default)]
pub struct SurfaceManager {
    dimensions: Option<Dimensions>,
}

impl SurfaceManager {
    /// Record the current viewport size. Returns `true` on the first call and
    /// whenever the size differs from the previous one.
    pub fn observe(&mut self, dimensions: Dimensions) -> bool {
        if self.dimensions == Some(dimensions) {
            return false;
        }
        self.dimensions = Some(dimensions);
        true
    }

    /// Last observed size, if any.
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }
}

/// One mounted background.
///
/// The backdrop exclusively owns its entity state and its surface. Dropping
/// it is unmounting: the frame driver is cancelled and the state is gone.
#[derive(Debug)]
pub struct Backdrop {
    effect: Effect,
    viewport: SurfaceManager,
    surface: Option<CellSurface>,
    driver: FrameDriver,
    metrics: CellMetrics,
}

impl Backdrop {
    /// Mount a fresh background. It has no surface until the first
    /// [`Backdrop::resize`], and frames before that are skipped.
    pub fn mount(kind: BackgroundKind, metrics: CellMetrics, rng: StdRng) -> Self {
        log::debug!("mounting {kind:?} background");
        Self {
            effect: Effect::new(kind, rng),
            viewport: SurfaceManager::default(),
            surface: None,
            driver: FrameDriver::new(),
            metrics,
        }
    }

    pub fn kind(&self) -> BackgroundKind {
        self.effect.kind()
    }

    /// React to the terminal being `cols` x `rows` cells. A size change
    /// resizes the surface and regenerates every entity.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let dimensions = Dimensions::from_cells(cols, rows, self.metrics);
        if !self.viewport.observe(dimensions) {
            return;
        }
        match &mut self.surface {
            Some(surface) => surface.resize(cols, rows),
            None => self.surface = Some(CellSurface::new(cols, rows, self.metrics)),
        }
        self.effect.regenerate(dimensions);
        log::debug!(
            "{:?} regenerated {} entities for {}x{}px",
            self.kind(),
            self.effect.entity_count(),
            dimensions.width,
            dimensions.height
        );
    }

    /// Run one frame at `speed`.
    pub fn tick(&mut self, speed: Speed) -> FrameStatus {
        let surface = self.surface.as_mut().map(|s| s as &mut dyn Surface);
        self.driver.step(&mut self.effect, surface, speed)
    }

    /// Handle that cancels this backdrop's frames.
    pub fn frame_handle(&self) -> FrameHandle {
        self.driver.handle()
    }

    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.viewport.dimensions()
    }

    pub fn surface(&self) -> Option<&CellSurface> {
        self.surface.as_ref()
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn entity_count(&self) -> usize {
        self.effect.entity_count()
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.driver.cancel();
        log::debug!(
            "unmounted {:?} background after {} frames",
            self.kind(),
            self.driver.frames()
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn mount(kind: BackgroundKind) -> Backdrop {
        Backdrop::mount(kind, CellMetrics::default(), StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_surface_manager_reports_changes() {
        let mut viewport = SurfaceManager::default();
        assert_eq!(viewport.dimensions(), None);
        assert!(viewport.observe(Dimensions::default()));
        assert!(!viewport.observe(Dimensions::default()));
        assert!(viewport.observe(Dimensions::new(10, 10)));
        assert_eq!(viewport.dimensions(), Some(Dimensions::new(10, 10)));
    }

    #[test]
    fn test_no_surface_before_first_resize() {
        let mut backdrop = mount(BackgroundKind::Starfall);
        assert!(backdrop.surface().is_none());
        assert_eq!(backdrop.tick(Speed::default()), FrameStatus::Skipped);
        assert_eq!(backdrop.frames(), 0);
    }

    #[test]
    fn test_resize_builds_surface_and_entities() {
        let mut backdrop = mount(BackgroundKind::Matrix);
        backdrop.resize(120, 40);
        assert_eq!(backdrop.dimensions(), Some(Dimensions::new(1080, 720)));
        assert_eq!(backdrop.surface().map(CellSurface::size), Some((120, 40)));
        assert_eq!(backdrop.entity_count(), 60);

        backdrop.resize(60, 20);
        assert_eq!(backdrop.entity_count(), 30);
        assert_eq!(backdrop.surface().map(CellSurface::size), Some((60, 20)));
    }

    #[test]
    fn test_same_size_does_not_regenerate() {
        let mut backdrop = mount(BackgroundKind::Matrix);
        backdrop.resize(120, 40);
        let before = match backdrop.effect() {
            Effect::Matrix(rain) => rain.columns().to_vec(),
            Effect::Starfall(_) => unreachable!(),
        };
        backdrop.resize(120, 40);
        match backdrop.effect() {
            Effect::Matrix(rain) => assert_eq!(rain.columns(), before.as_slice()),
            Effect::Starfall(_) => unreachable!(),
        }
    }

    #[test]
    fn test_tick_draws_onto_surface() {
        let mut backdrop = mount(BackgroundKind::Starfall);
        backdrop.resize(120, 40);
        assert_eq!(backdrop.tick(Speed::default()), FrameStatus::Drawn);
        assert_eq!(backdrop.frames(), 1);
        let lit = backdrop.surface().map(CellSurface::lit_cells).unwrap_or(0);
        assert!(lit > 0 && lit <= 120);
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let backdrop = {
            let mut backdrop = mount(BackgroundKind::Matrix);
            backdrop.resize(120, 40);
            backdrop.tick(Speed::default());
            backdrop
        };
        let handle = backdrop.frame_handle();
        assert!(!handle.is_cancelled());
        drop(backdrop);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_remount_same_size_same_count() {
        let mut first = mount(BackgroundKind::Starfall);
        first.resize(120, 40);
        let mut second = Backdrop::mount(
            BackgroundKind::Starfall,
            CellMetrics::default(),
            StdRng::seed_from_u64(12),
        );
        second.resize(120, 40);
        assert_eq!(first.entity_count(), second.entity_count());

        let (Effect::Starfall(a), Effect::Starfall(b)) = (first.effect(), second.effect()) else {
            unreachable!();
        };
        assert_ne!(a.stars(), b.stars());
    }
}
