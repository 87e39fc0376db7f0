mod plane;
mod route;

pub use plane::PlaneMarker;
pub use route::Route;
