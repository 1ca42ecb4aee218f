//! Partitioning of the render surface into one region per camera.

use glam::{UVec2, Vec3};

/// The three fixed viewpoints on the creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraView {
    Side,
    Top,
    Front,
}

impl CameraView {
    /// Render order. The first view clears the surface for everyone.
    pub const ALL: [CameraView; 3] = [CameraView::Side, CameraView::Top, CameraView::Front];

    pub fn index(self) -> usize {
        match self {
            CameraView::Side => 0,
            CameraView::Top => 1,
            CameraView::Front => 2,
        }
    }

    pub fn eye(self) -> Vec3 {
        match self {
            CameraView::Side => Vec3::new(0.0, 1.0, 3.0),
            CameraView::Top => Vec3::new(0.0, 2.0, 0.0),
            CameraView::Front => Vec3::new(1.0, 0.2, 0.0),
        }
    }

    /// The top camera looks straight down, so +Y cannot be its up vector.
    pub fn up(self) -> Vec3 {
        match self {
            CameraView::Top => Vec3::NEG_Z,
            CameraView::Side | CameraView::Front => Vec3::Y,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraView::Side => "side",
            CameraView::Top => "top",
            CameraView::Front => "front",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Narrow surfaces: three stacked full-width bands.
    Compact,
    /// Main view on the left, two small views stacked on the right.
    Wide,
}

impl DeviceClass {
    pub fn classify(surface_width: u32, compact_breakpoint: u32) -> Self {
        if surface_width < compact_breakpoint {
            DeviceClass::Compact
        } else {
            DeviceClass::Wide
        }
    }
}

/// A rectangle in physical pixels, origin at the top-left of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRegion {
    pub position: UVec2,
    pub size: UVec2,
}

impl ViewRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            position: UVec2::new(x, y),
            size: UVec2::new(width, height),
        }
    }

    pub fn area(&self) -> u64 {
        self.size.x as u64 * self.size.y as u64
    }

    /// Zero-width or zero-height regions cannot be rendered into.
    pub fn is_drawable(&self) -> bool {
        self.size.x > 0 && self.size.y > 0
    }

    pub fn aspect(&self) -> f32 {
        if self.size.y == 0 {
            return 1.0;
        }
        self.size.x as f32 / self.size.y as f32
    }

    pub fn overlaps(&self, other: &ViewRegion) -> bool {
        let a_min = self.position;
        let a_max = self.position + self.size;
        let b_min = other.position;
        let b_max = other.position + other.size;
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSlot {
    pub view: CameraView,
    pub region: ViewRegion,
    pub aspect: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportLayout {
    pub device_class: DeviceClass,
    /// One slot per camera, top-to-bottom then left-to-right.
    pub slots: Vec<ViewSlot>,
}

impl ViewportLayout {
    /// Lays out `surface` (physical px) starting at `origin`. Returns `None`
    /// for a zero-sized surface; the frame is then skipped.
    pub fn compute(surface: UVec2, origin: UVec2, compact_breakpoint: u32) -> Option<Self> {
        let UVec2 { x: width, y: height } = surface;
        if width == 0 || height == 0 {
            return None;
        }

        let device_class = DeviceClass::classify(width, compact_breakpoint);
        let slots = match device_class {
            DeviceClass::Compact => {
                let band = height / 3;
                let last = height - band * 2;
                [
                    (CameraView::Front, 0, band),
                    (CameraView::Top, band, band),
                    (CameraView::Side, band * 2, last),
                ]
                .into_iter()
                .map(|(view, y, h)| {
                    let region = ViewRegion::new(origin.x, origin.y + y, width, h);
                    ViewSlot {
                        view,
                        region,
                        aspect: region.aspect(),
                    }
                })
                .collect()
            }
            DeviceClass::Wide => {
                let main_width = width * 2 / 3;
                let side_width = width - main_width;
                let upper = height / 2;
                let lower = height - upper;
                let main = ViewRegion::new(origin.x, origin.y, main_width, height);
                let top = ViewRegion::new(origin.x + main_width, origin.y, side_width, upper);
                let front =
                    ViewRegion::new(origin.x + main_width, origin.y + upper, side_width, lower);
                vec![
                    ViewSlot {
                        view: CameraView::Side,
                        region: main,
                        aspect: main.aspect(),
                    },
                    // The secondary views keep a square projection in wide mode.
                    ViewSlot {
                        view: CameraView::Top,
                        region: top,
                        aspect: 1.0,
                    },
                    ViewSlot {
                        view: CameraView::Front,
                        region: front,
                        aspect: 1.0,
                    },
                ]
            }
        };

        Some(Self {
            device_class,
            slots,
        })
    }

    pub fn slot(&self, view: CameraView) -> Option<&ViewSlot> {
        self.slots.iter().find(|slot| slot.view == view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BREAKPOINT: u32 = 1024;

    fn assert_tiles(layout: &ViewportLayout, surface: UVec2, origin: UVec2) {
        let total: u64 = layout.slots.iter().map(|slot| slot.region.area()).sum();
        assert_eq!(total, surface.x as u64 * surface.y as u64);

        for (i, a) in layout.slots.iter().enumerate() {
            assert!(a.region.position.x >= origin.x && a.region.position.y >= origin.y);
            let end = a.region.position + a.region.size;
            assert!(end.x <= origin.x + surface.x && end.y <= origin.y + surface.y);
            for b in layout.slots.iter().skip(i + 1) {
                assert!(!a.region.overlaps(&b.region), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[rstest]
    #[case(1023, DeviceClass::Compact)]
    #[case(1024, DeviceClass::Wide)]
    #[case(375, DeviceClass::Compact)]
    #[case(1920, DeviceClass::Wide)]
    fn test_classification(#[case] width: u32, #[case] expected: DeviceClass) {
        assert_eq!(DeviceClass::classify(width, BREAKPOINT), expected);
    }

    #[test]
    fn test_compact_stacks_three_equal_bands() {
        let surface = UVec2::new(600, 900);
        let layout = ViewportLayout::compute(surface, UVec2::ZERO, BREAKPOINT).unwrap();

        assert_eq!(layout.device_class, DeviceClass::Compact);
        let views: Vec<_> = layout.slots.iter().map(|slot| slot.view).collect();
        assert_eq!(views, vec![CameraView::Front, CameraView::Top, CameraView::Side]);
        for (i, slot) in layout.slots.iter().enumerate() {
            assert_eq!(slot.region, ViewRegion::new(0, 300 * i as u32, 600, 300));
            assert_eq!(slot.aspect, 2.0);
        }
        assert_tiles(&layout, surface, UVec2::ZERO);
    }

    #[test]
    fn test_wide_main_and_side_column() {
        let surface = UVec2::new(1500, 900);
        let layout = ViewportLayout::compute(surface, UVec2::ZERO, BREAKPOINT).unwrap();

        assert_eq!(layout.device_class, DeviceClass::Wide);
        let side = layout.slot(CameraView::Side).unwrap();
        let top = layout.slot(CameraView::Top).unwrap();
        let front = layout.slot(CameraView::Front).unwrap();

        assert_eq!(side.region, ViewRegion::new(0, 0, 1000, 900));
        assert_eq!(top.region, ViewRegion::new(1000, 0, 500, 450));
        assert_eq!(front.region, ViewRegion::new(1000, 450, 500, 450));
        assert!((side.aspect - 1000.0 / 900.0).abs() < 1e-6);
        assert_eq!(top.aspect, 1.0);
        assert_eq!(front.aspect, 1.0);
        assert_tiles(&layout, surface, UVec2::ZERO);
    }

    #[rstest]
    #[case(1025, 767)]
    #[case(1031, 1)]
    #[case(1000, 901)]
    #[case(1, 2)]
    #[case(333, 1000)]
    fn test_uneven_sizes_still_tile_exactly(#[case] width: u32, #[case] height: u32) {
        let surface = UVec2::new(width, height);
        let layout = ViewportLayout::compute(surface, UVec2::ZERO, BREAKPOINT).unwrap();
        assert_eq!(layout.slots.len(), 3);
        assert_tiles(&layout, surface, UVec2::ZERO);
    }

    #[test]
    fn test_origin_offsets_every_region() {
        let surface = UVec2::new(500, 600);
        let origin = UVec2::new(0, 240);
        let layout = ViewportLayout::compute(surface, origin, BREAKPOINT).unwrap();

        assert_eq!(layout.slots[0].region.position, UVec2::new(0, 240));
        assert_tiles(&layout, surface, origin);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(0, 600)]
    #[case(800, 0)]
    fn test_zero_sized_surface_has_no_layout(#[case] width: u32, #[case] height: u32) {
        assert!(ViewportLayout::compute(UVec2::new(width, height), UVec2::ZERO, BREAKPOINT).is_none());
    }

    #[test]
    fn test_tiny_surface_yields_undrawable_regions() {
        let layout = ViewportLayout::compute(UVec2::new(10, 2), UVec2::ZERO, BREAKPOINT).unwrap();
        assert!(!layout.slots[0].region.is_drawable());
        assert!(layout.slots[2].region.is_drawable());
    }
}
