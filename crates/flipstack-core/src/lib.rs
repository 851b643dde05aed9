pub mod axis;
pub mod binder;
pub mod config;
pub mod curves;
pub mod error;
pub mod geometry;
pub mod pager;
pub mod target;
pub mod transform;

pub use axis::{Axis, PageSize};
pub use binder::{BoundGeometry, GeometryBinder};
pub use config::{AnimationConfig, AppConfig, EasingType, StackConfig};
pub use error::{Error, InvalidConfiguration, Result};
pub use geometry::{FlipEasing, GeometryConfig, Gravity};
pub use pager::StackPager;
pub use target::PageTarget;
pub use transform::{PageTransform, Pivot, Regime, Scale, StackTransformer};
