mod clip;
mod intersect;

pub use clip::polygon_intersect;
pub use intersect::intersections;
