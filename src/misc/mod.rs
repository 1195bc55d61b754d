pub mod circle;
pub mod floating_point;
pub mod line;
pub mod plane;
pub mod segment;
pub mod trigonometry;

pub use circle::*;
pub use floating_point::*;
pub use line::*;
pub use plane::*;
pub use segment::*;
pub use trigonometry::*;
