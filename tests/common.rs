use euclid::{point2, rect, vec2};
use planoverlay::defs::*;
use planoverlay::*;

/// One call recorded off a [`RecordingContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Save,
    Restore,
    Concat([f64; 6]),
    FillRect { rect: [f64; 4], color: Color },
    DrawPage(PageIndex),
}

/// Paint sink that records every command for inspection instead of
/// touching pixels.
#[derive(Default)]
pub struct RecordingContext {
    pub commands: Vec<Command>,
    depth: usize,
}

impl RecordingContext {
    /// Current save-stack depth. Zero once a draw call has cleaned up.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn fills(&self) -> Vec<([f64; 4], Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl PaintContext for RecordingContext {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(Command::Save);
    }

    fn restore(&mut self) {
        assert!(self.depth > 0, "restore without matching save");
        self.depth -= 1;
        self.commands.push(Command::Restore);
    }

    fn concat(&mut self, xform: &DocumentToDevice) {
        self.commands.push(Command::Concat(to_coeffs(*xform)));
    }

    fn fill_rect(&mut self, r: DocumentRect, color: Color) {
        self.commands.push(Command::FillRect {
            rect: [r.origin.x, r.origin.y, r.size.width, r.size.height],
            color,
        });
    }

    fn draw_page(&mut self, page: PageIndex) {
        self.commands.push(Command::DrawPage(page));
    }
}

/// A plan drawn at 100 units per meter, georeferenced with two anchors.
pub fn sample_asset() -> OverlayAsset {
    let document_to_map = DocumentToMapPlane::scale(0.5, -0.5).then_translate(vec2(10.0, 20.0));
    let map_bounds: MapPlaneRect = rect(10.0, -380.0, 400.0, 400.0);
    let anchors = [
        AnchorPoint {
            document: point2(100.0, 200.0),
            geo: GeoPoint {
                lon: 8.5402,
                lat: 47.3782,
            },
        },
        AnchorPoint {
            document: point2(400.0, 600.0),
            geo: GeoPoint {
                lon: 8.5419,
                lat: 47.3768,
            },
        },
    ];
    OverlayAsset::new(PageIndex(3), document_to_map, map_bounds, 0.01, anchors)
}

/// A request covering the sample asset's bounds with a 512x512 tile.
pub fn sample_request(asset: &OverlayAsset) -> DrawRequest {
    DrawRequest {
        map_rect: asset.map_bounds(),
        device_rect: rect(0.0, 0.0, 512.0, 512.0),
    }
}

pub fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
