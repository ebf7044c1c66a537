/// Identity of an entity on the court, assigned once at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u8);

/// Top left corner of a bounding box, in court units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn location(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Anything the ball can bounce off.
pub trait Collider {
    fn id(&self) -> EntityId;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// `(x, y)` of the top left point of the collision box.
    fn location(&self) -> (f64, f64);
}

/// Inclusive overlap of the spans `[a, a + a_len]` and `[b, b + b_len]`.
pub fn spans_touch(a: f64, a_len: f64, b: f64, b_len: f64) -> bool {
    a + a_len >= b && a <= b + b_len
}

/// Whether `[inner, inner + inner_len]` lies within `[outer, outer + outer_len]`.
pub fn span_within(inner: f64, inner_len: f64, outer: f64, outer_len: f64) -> bool {
    inner >= outer && inner + inner_len <= outer + outer_len
}
