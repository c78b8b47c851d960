mod angle;
mod arc;
mod circle;
mod line;
mod polygon;
mod rect;
mod shape;

pub use angle::Angle;
pub use arc::Arc;
pub use circle::Circle;
pub use line::{Line, Ray, Segment};
pub use polygon::{Polygon, Polyline};
pub use rect::Rect;
pub use shape::Shape;
