pub mod builders;
pub mod drawable;
pub mod error;
pub mod projected;
pub mod style;

pub use drawable::{Composite, Disc, Drawable, PathShape, PointMarker};
pub use error::SceneError;
pub use projected::{ProjectedDrawable, ProjectedShape};
pub use style::{Color, Style};
