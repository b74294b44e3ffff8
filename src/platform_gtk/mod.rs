use gtk4 as gtk;
use gtk4::prelude::*;

use crate::core::{DisplayOptions, Viewport};
use crate::platform::{ResizeBus, Surface, SurfaceId};

/// Hosts a chart surface on a `gtk4::DrawingArea`.
///
/// The area's `resize` signal is forwarded into a [`ResizeBus`], which a
/// [`ChartRenderer`](crate::api::ChartRenderer) subscribes to on mount.
pub struct GtkSurfaceHost {
    area: gtk::DrawingArea,
    id: SurfaceId,
    bus: ResizeBus,
}

impl GtkSurfaceHost {
    #[must_use]
    pub fn new(area: gtk::DrawingArea, id: impl Into<SurfaceId>) -> Self {
        let bus = ResizeBus::new();
        let forward = bus.clone();
        area.connect_resize(move |_, width, height| {
            forward.emit(Viewport::new(to_px(width), to_px(height)));
        });
        Self {
            area,
            id: id.into(),
            bus,
        }
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        Surface::new(
            self.id.clone(),
            Viewport::new(to_px(self.area.width()), to_px(self.area.height())),
        )
    }

    #[must_use]
    pub fn resize_bus(&self) -> &ResizeBus {
        &self.bus
    }

    /// Applies a request's container height and CSS class to the area.
    pub fn apply_display(&self, display: &DisplayOptions) {
        if let Some(height) = display.height_px() {
            self.area
                .set_content_height(i32::try_from(height).unwrap_or(i32::MAX));
        }
        if !display.container_class.is_empty() {
            let classes: Vec<&str> = display.container_class.split_whitespace().collect();
            self.area.set_css_classes(&classes);
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.area
    }
}

fn to_px(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
