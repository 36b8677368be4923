use derive_more::{From, Into};

/// 2D position in the widget's local space, origin at the carousel center.
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector from the origin, in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Position on the arc layout circle.
pub fn arc_position(angle_degrees: f64, radius: f64) -> Point {
    let angle = angle_degrees.to_radians();
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// Position on the star layout circle. The x axis is mirrored so the star's
/// angle convention lines up visually with the arc layout.
pub fn star_position(angle_degrees: f64, radius: f64) -> Point {
    let angle = angle_degrees.to_radians();
    Point::new(-radius * angle.cos(), radius * angle.sin())
}

/// Signed angular difference `to - from`, normalized to [-180, 180].
pub fn shortest_arc_delta(from_degrees: f64, to_degrees: f64) -> f64 {
    (to_degrees - from_degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Interpolates between two points along a circular path: radius linearly,
/// angle along the shortest signed arc. Items swing around the center
/// instead of cutting a straight chord, and the interpolated radius stays
/// between the endpoint radii.
pub fn lerp_circular(start: Point, end: Point, t: f64) -> Point {
    if t <= 0.0 {
        return start;
    }
    if t >= 1.0 {
        return end;
    }

    let start_angle = start.angle_degrees();
    let delta = shortest_arc_delta(start_angle, end.angle_degrees());

    let radius = lerp(start.magnitude(), end.magnitude(), t);
    arc_position(start_angle + delta * t, radius)
}
