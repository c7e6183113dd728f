pub mod box_shape;
pub mod cone;
pub mod points;
pub mod sphere;

pub use box_shape::create_box;
pub use cone::create_cone;
pub use points::create_points;
pub use sphere::{SphereOptions, create_sphere};
