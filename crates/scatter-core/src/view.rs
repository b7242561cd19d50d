// File: crates/scatter-core/src/view.rs
// Pan/zoom view state: a uniform scale plus pixel translation applied to the whole scene.

/// Allowed zoom factors.
pub const SCALE_EXTENT: (f64, f64) = (1.0, 5.0);

/// How a wheel delta is measured, mirroring DOM `deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    Pixel,
    Line,
    Page,
}

impl WheelMode {
    /// Multiplier turning a raw `deltaY` into a log2 zoom step.
    fn factor(self) -> f64 {
        match self {
            WheelMode::Pixel => 0.002,
            WheelMode::Line => 0.05,
            WheelMode::Page => 1.0,
        }
    }
}

/// Screen = scene * k + (x, y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub k: f64,
    pub x: f64,
    pub y: f64,
    /// Surface size; both the viewport and the translate extent are [[0,0],[w,h]].
    pub width: f64,
    pub height: f64,
}

impl ViewState {
    pub fn identity(width: i32, height: i32) -> Self {
        Self { k: 1.0, x: 0.0, y: 0.0, width: width.max(1) as f64, height: height.max(1) as f64 }
    }

    pub fn is_identity(&self) -> bool {
        self.k == 1.0 && self.x == 0.0 && self.y == 0.0
    }

    pub fn reset(&mut self) {
        self.k = 1.0;
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Scene position -> screen position.
    #[inline]
    pub fn apply(&self, p: (f64, f64)) -> (f64, f64) {
        (p.0 * self.k + self.x, p.1 * self.k + self.y)
    }

    /// Screen position -> scene position.
    #[inline]
    pub fn invert(&self, p: (f64, f64)) -> (f64, f64) {
        ((p.0 - self.x) / self.k, (p.1 - self.y) / self.k)
    }

    /// Drag by a pixel delta.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.constrain();
    }

    /// Wheel zoom keeping the scene point under the cursor fixed.
    pub fn zoom_at_pixel(&mut self, delta_y: f64, mode: WheelMode, cursor_x: f64, cursor_y: f64) {
        let k = self.k * 2f64.powf(-delta_y * mode.factor());
        self.scale_to(k, cursor_x, cursor_y);
    }

    /// Set the zoom factor (clamped to `SCALE_EXTENT`) around a screen anchor.
    pub fn scale_to(&mut self, k: f64, anchor_x: f64, anchor_y: f64) {
        let k = k.clamp(SCALE_EXTENT.0, SCALE_EXTENT.1);
        let (sx, sy) = self.invert((anchor_x, anchor_y));
        self.k = k;
        self.x = anchor_x - sx * k;
        self.y = anchor_y - sy * k;
        self.constrain();
    }

    /// Shift the translation so the visible window never leaves the translate extent.
    fn constrain(&mut self) {
        let (w, h) = (self.width, self.height);
        let dx0 = self.invert((0.0, 0.0)).0;
        let dx1 = self.invert((w, 0.0)).0 - w;
        let dy0 = self.invert((0.0, 0.0)).1;
        let dy1 = self.invert((0.0, h)).1 - h;
        let tx = constrain_axis(dx0, dx1);
        let ty = constrain_axis(dy0, dy1);
        self.x += self.k * tx;
        self.y += self.k * ty;
    }
}

/// Scene-space correction along one axis. `lo`/`hi` are how far the visible
/// window's near/far edges sit past the extent's near/far edges.
fn constrain_axis(lo: f64, hi: f64) -> f64 {
    if hi > lo {
        (lo + hi) / 2.0
    } else if lo < 0.0 {
        lo
    } else {
        hi.max(0.0)
    }
}
