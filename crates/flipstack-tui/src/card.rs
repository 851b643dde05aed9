use flipstack_core::{PageSize, PageTarget};
use ratatui::layout::Rect;

/// Terminal card as a transform target
///
/// A card covers the whole stack area before transformation. The pager's
/// natural layout offset (`position * D` along the stacking axis) is added
/// on top of the transform, the way a paging container lays its pages out
/// side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    size: PageSize,
    offset: (f64, f64),
    pub scale_x: f64,
    pub scale_y: f64,
    pub translation_x: f64,
    pub translation_y: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
    pub alpha: f64,
}

impl CardView {
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            offset: (0.0, 0.0),
            scale_x: 1.0,
            scale_y: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            pivot_x: size.width / 2.0,
            pivot_y: size.height / 2.0,
            alpha: 1.0,
        }
    }

    /// Natural position of the page inside the container, before transforms
    pub fn set_layout_offset(&mut self, x: f64, y: f64) {
        self.offset = (x, y);
    }

    /// Transformed bounds `(left, top, right, bottom)` in container units
    ///
    /// Rotation is drawn as foreshortening toward the pivot; `None` when the
    /// card is transparent or collapsed.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if self.alpha <= 0.0 {
            return None;
        }

        let fold_x = self.rotation_y.to_radians().cos().abs();
        let fold_y = self.rotation_x.to_radians().cos().abs();

        let project = |edge: f64, pivot: f64, scale: f64, fold: f64, shift: f64| {
            pivot + (edge - pivot) * scale * fold + shift
        };

        let dx = self.offset.0 + self.translation_x;
        let dy = self.offset.1 + self.translation_y;
        let left = project(0.0, self.pivot_x, self.scale_x, fold_x, dx);
        let right = project(self.size.width, self.pivot_x, self.scale_x, fold_x, dx);
        let top = project(0.0, self.pivot_y, self.scale_y, fold_y, dy);
        let bottom = project(self.size.height, self.pivot_y, self.scale_y, fold_y, dy);

        let (left, right) = (left.min(right), left.max(right));
        let (top, bottom) = (top.min(bottom), top.max(bottom));
        if right - left < f64::EPSILON || bottom - top < f64::EPSILON {
            return None;
        }
        Some((left, top, right, bottom))
    }

    /// Transformed bounds in terminal cells, clipped to `area`
    pub fn to_rect(&self, area: Rect) -> Option<Rect> {
        let (left, top, right, bottom) = self.bounds()?;

        let clip = |v: f64, max: u16| v.round().clamp(0.0, max as f64) as u16;
        let x0 = clip(left, area.width);
        let x1 = clip(right, area.width);
        let y0 = clip(top, area.height);
        let y1 = clip(bottom, area.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Rect::new(area.x + x0, area.y + y0, x1 - x0, y1 - y0))
    }
}

impl PageTarget for CardView {
    fn size(&self) -> PageSize {
        self.size
    }

    fn set_scale_x(&mut self, scale: f64) {
        self.scale_x = scale;
    }

    fn set_scale_y(&mut self, scale: f64) {
        self.scale_y = scale;
    }

    fn set_translation_x(&mut self, translation: f64) {
        self.translation_x = translation;
    }

    fn set_translation_y(&mut self, translation: f64) {
        self.translation_y = translation;
    }

    fn set_rotation_x(&mut self, degrees: f64) {
        self.rotation_x = degrees;
    }

    fn set_rotation_y(&mut self, degrees: f64) {
        self.rotation_y = degrees;
    }

    fn set_pivot_x(&mut self, pivot: f64) {
        self.pivot_x = pivot;
    }

    fn set_pivot_y(&mut self, pivot: f64) {
        self.pivot_y = pivot;
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}
