//! Conversions into `glam` vectors for rendering.
//!
//! Grid cells usually stand for tiles of some fixed size on screen, so the
//! scaled forms multiply by a tile size as they convert.

use glam::{DVec2, IVec2, Vec2, Vec3, dvec2, vec2, vec3};

use crate::types::{Coord, Dimen};

impl Coord {
    pub fn to_vec2(self) -> Vec2 {
        vec2(self.x as f32, self.y as f32)
    }

    /// `z` is zero.
    pub fn to_vec3(self) -> Vec3 {
        vec3(self.x as f32, self.y as f32, 0.0)
    }

    pub fn to_dvec2(self) -> DVec2 {
        dvec2(f64::from(self.x), f64::from(self.y))
    }

    /// Position of the cell's top-left corner when cells are `scale` wide.
    pub fn to_vec2_scaled(self, scale: f32) -> Vec2 {
        self.to_vec2() * scale
    }
}

impl Dimen {
    pub fn to_vec2(self) -> Vec2 {
        vec2(self.w as f32, self.h as f32)
    }

    pub fn to_vec3(self) -> Vec3 {
        vec3(self.w as f32, self.h as f32, 0.0)
    }

    pub fn to_dvec2(self) -> DVec2 {
        dvec2(f64::from(self.w), f64::from(self.h))
    }

    pub fn to_vec2_scaled(self, scale: f32) -> Vec2 {
        self.to_vec2() * scale
    }
}

impl From<Coord> for IVec2 {
    fn from(c: Coord) -> IVec2 {
        IVec2::new(c.x, c.y)
    }
}

impl From<IVec2> for Coord {
    fn from(v: IVec2) -> Coord {
        Coord::new(v.x, v.y)
    }
}

impl From<Dimen> for IVec2 {
    fn from(d: Dimen) -> IVec2 {
        IVec2::new(d.w, d.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_converts_componentwise() {
        let c = Coord::new(3, -2);
        assert_eq!(c.to_vec2(), vec2(3.0, -2.0));
        assert_eq!(c.to_vec3(), vec3(3.0, -2.0, 0.0));
        assert_eq!(c.to_dvec2(), dvec2(3.0, -2.0));
    }

    #[test]
    fn scaled_conversion_multiplies_by_tile_size() {
        assert_eq!(Coord::new(2, 5).to_vec2_scaled(16.0), vec2(32.0, 80.0));
        assert_eq!(Dimen::new(4, 1).to_vec2_scaled(0.5), vec2(2.0, 0.5));
    }

    #[test]
    fn integer_vectors_round_trip() {
        let v: IVec2 = Coord::new(-7, 9).into();
        assert_eq!(v, IVec2::new(-7, 9));
        assert_eq!(Coord::from(v), Coord::new(-7, 9));
        assert_eq!(IVec2::from(Dimen::new(2, 3)), IVec2::new(2, 3));
        assert_eq!(Dimen::new(2, 3).to_vec3(), vec3(2.0, 3.0, 0.0));
    }
}
