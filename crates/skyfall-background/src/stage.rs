//! Top-level background state: speed, selection and the mounted backdrop.

use rand::{SeedableRng, rngs::StdRng};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use skyfall_core::{BackgroundKind, CellMetrics, Speed};

use crate::backdrop::Backdrop;
use crate::driver::FrameStatus;

/// Owns the speed and background selection and keeps exactly one
/// [`Backdrop`] mounted.
#[derive(Debug)]
pub struct Stage {
    speed: Speed,
    metrics: CellMetrics,
    /// Base seed for reproducible runs; `None` uses OS entropy.
    seed: Option<u64>,
    /// Mounts so far, mixed into the seed so every mount differs.
    mounts: u64,
    /// Last viewport size in cells.
    viewport: Option<(u16, u16)>,
    backdrop: Backdrop,
}

impl Stage {
    pub fn new(
        background: BackgroundKind,
        speed: Speed,
        metrics: CellMetrics,
        seed: Option<u64>,
    ) -> Self {
        let backdrop = Backdrop::mount(background, metrics, mount_rng(seed, 0));
        Self {
            speed,
            metrics,
            seed,
            mounts: 1,
            viewport: None,
            backdrop,
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn faster(&mut self) {
        self.speed = self.speed.faster();
    }

    pub fn slower(&mut self) {
        self.speed = self.speed.slower();
    }

    pub fn background(&self) -> BackgroundKind {
        self.backdrop.kind()
    }

    /// Mount `kind`, discarding the current backdrop. Selecting the already
    /// mounted background keeps it as is.
    pub fn set_background(&mut self, kind: BackgroundKind) {
        if kind == self.backdrop.kind() {
            return;
        }
        let rng = mount_rng(self.seed, self.mounts);
        self.mounts += 1;
        // Assigning drops the old backdrop, which cancels its frames.
        self.backdrop = Backdrop::mount(kind, self.metrics, rng);
        if let Some((cols, rows)) = self.viewport {
            self.backdrop.resize(cols, rows);
        }
    }

    pub fn toggle_background(&mut self) {
        self.set_background(self.background().toggle());
    }

    /// The terminal is now `cols` x `rows` cells.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Some((cols, rows));
        self.backdrop.resize(cols, rows);
    }

    /// Run one frame of the mounted backdrop at the current speed.
    pub fn tick(&mut self) -> FrameStatus {
        self.backdrop.tick(self.speed)
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }
}

fn mount_rng(seed: Option<u64>, mount: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(mount)),
        None => StdRng::from_os_rng(),
    }
}

/// Renders the mounted backdrop. Draw this before any foreground widgets so
/// they layer on top of it.
impl Widget for &Stage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(surface) = self.backdrop.surface() {
            surface.render(area, buf);
        }
    }
}
