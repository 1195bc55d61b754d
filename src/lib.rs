mod misc;
mod polyline;
mod simplify;
mod smoothing;

pub mod prelude {
    pub use crate::misc::*;
    pub use crate::polyline::*;
    pub use crate::simplify::*;
    pub use crate::smoothing::*;
}
