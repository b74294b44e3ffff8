//! Surface-hosting layer: drawing-surface identity and resize subscriptions.

mod resize_bus;
mod surface;

pub use resize_bus::{ResizeBus, ResizeSubscription};
pub use surface::{Surface, SurfaceId};
