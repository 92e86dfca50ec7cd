//! Kartenfläche: OSM-Kacheln, Overlays, Klick- und Drag-Interaktion.

use crate::app::{AppIntent, AppState};
use crate::core::mercator::{self, TILE_SIZE};
use crate::core::Coordinate;
use crate::net::TileStore;
use crate::shared::options::{
    MARKER_RADIUS_PX, OVERLAY_FILL_COLOR, OVERLAY_STROKE_COLOR, OVERLAY_STROKE_WIDTH,
    POLYLINE_HOVER_RADIUS_PX,
};

fn overlay_stroke() -> egui::Stroke {
    let [r, g, b, a] = OVERLAY_STROKE_COLOR;
    egui::Stroke::new(
        OVERLAY_STROKE_WIDTH,
        egui::Color32::from_rgba_unmultiplied(r, g, b, a),
    )
}

fn overlay_fill() -> egui::Color32 {
    let [r, g, b, a] = OVERLAY_FILL_COLOR;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Rendert die Kartenfläche und gibt erzeugte Events zurück.
pub fn render_map_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    tiles: &mut TileStore,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    let viewport_size = [rect.width(), rect.height()];
    if viewport_size != state.view.viewport_size {
        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });
    }

    let painter = ui.painter().with_clip_rect(rect);
    let zoom = state.view.zoom;
    let center = state.view.center;
    let center_x = mercator::lon_to_x(center.longitude, zoom);
    let center_y = mercator::lat_to_y(center.latitude, zoom);

    // ── Kacheln ─────────────────────────────────────────────────────
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(40));
    for placement in mercator::visible_tiles(center, zoom, viewport_size) {
        let min = rect.center()
            + egui::vec2(placement.offset_px[0] as f32, placement.offset_px[1] as f32);
        let tile_rect =
            egui::Rect::from_min_size(min, egui::vec2(TILE_SIZE as f32, TILE_SIZE as f32));

        if let Some(texture) = tiles.texture(placement.coords) {
            painter.image(
                texture.id(),
                tile_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else {
            painter.rect_filled(tile_rect, 0.0, egui::Color32::from_gray(50));
        }
    }

    let to_screen = |c: Coordinate| -> egui::Pos2 {
        let dx = (mercator::lon_to_x(c.longitude, zoom) - center_x) as f32;
        let dy = (mercator::lat_to_y(c.latitude, zoom) - center_y) as f32;
        rect.center() + egui::vec2(dx, dy)
    };

    let hover_pos = response.hover_pos();
    let mut tooltip: Option<(egui::Pos2, String)> = None;

    // ── Kachel-Overlays des Read-only-Layers ────────────────────────
    for tile_overlay in state.overlays.tiles() {
        let bounds = tile_overlay.bounds;
        let screen_rect = egui::Rect::from_two_pos(
            to_screen(Coordinate::new(bounds.north, bounds.west)),
            to_screen(Coordinate::new(bounds.south, bounds.east)),
        );
        painter.rect_filled(screen_rect, 0.0, overlay_fill());
        painter.rect_stroke(screen_rect, 0.0, overlay_stroke(), egui::StrokeKind::Inside);

        if let Some(pos) = hover_pos {
            if screen_rect.contains(pos) {
                tooltip = Some((
                    pos,
                    format!(
                        "center_lat: {:.5}\ncenter_long: {:.5}",
                        tile_overlay.center.latitude, tile_overlay.center.longitude
                    ),
                ));
            }
        }
    }

    // ── Rechteck-Vorschau ───────────────────────────────────────────
    if let Some(rectangle) = state.overlays.rectangle() {
        let bounds = rectangle.bounds;
        let screen_rect = egui::Rect::from_two_pos(
            to_screen(Coordinate::new(bounds.north, bounds.west)),
            to_screen(Coordinate::new(bounds.south, bounds.east)),
        );
        painter.rect_filled(screen_rect, 0.0, overlay_fill());
        painter.rect_stroke(screen_rect, 0.0, overlay_stroke(), egui::StrokeKind::Inside);
    }

    // ── Polyline-Vorschau ───────────────────────────────────────────
    if let Some(polyline) = state.overlays.polyline() {
        let screen_points: Vec<egui::Pos2> = polyline
            .path
            .waypoints
            .iter()
            .map(|c| to_screen(*c))
            .collect();

        for pair in screen_points.windows(2) {
            painter.line_segment([pair[0], pair[1]], overlay_stroke());
        }

        // Hover auf der Linie zeigt die Großkreis-Länge
        if let Some(pos) = hover_pos {
            let near = screen_points
                .windows(2)
                .any(|pair| point_segment_distance(pos, pair[0], pair[1]) <= POLYLINE_HOVER_RADIUS_PX);
            if near {
                tooltip = Some((pos, format!("Distance: {}", polyline.path.length_label())));
            }
        }
    }

    // ── Punkt-Marker ────────────────────────────────────────────────
    for point in &state.workflow.points {
        let pos = to_screen(*point);
        painter.circle_filled(pos, MARKER_RADIUS_PX, egui::Color32::from_rgb(220, 30, 30));
        painter.circle_stroke(pos, MARKER_RADIUS_PX, egui::Stroke::new(1.5, egui::Color32::WHITE));
    }

    if let Some((pos, text)) = tooltip {
        draw_tooltip(&painter, pos, &text);
    }

    // Attribution des Kachel-Servers
    painter.text(
        rect.right_bottom() - egui::vec2(4.0, 2.0),
        egui::Align2::RIGHT_BOTTOM,
        "© OpenStreetMap",
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(200),
    );

    // ── Interaktion ─────────────────────────────────────────────────
    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::MapPanned {
                delta_px: [delta.x, delta.y],
            });
        }
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let world = mercator::world_size_px(zoom);
            let dx = (pos - rect.center()).x as f64;
            let dy = (pos - rect.center()).y as f64;
            let coordinate = Coordinate::new(
                mercator::y_to_lat((center_y + dy).clamp(0.0, world), zoom),
                mercator::x_to_lon((center_x + dx).rem_euclid(world), zoom),
            );
            events.push(AppIntent::MapClicked { coordinate });
        }
    }

    if response.hovered() {
        let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
        if scroll_y > 0.0 {
            events.push(AppIntent::ZoomInRequested);
        } else if scroll_y < 0.0 {
            events.push(AppIntent::ZoomOutRequested);
        }
    }

    events
}

/// Abstand eines Punkts zu einer Strecke in Screen-Pixeln.
fn point_segment_distance(p: egui::Pos2, a: egui::Pos2, b: egui::Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let nearest = a + ab * t;
    (p - nearest).length()
}

/// Kleines Tooltip-Kästchen neben dem Mauszeiger.
fn draw_tooltip(painter: &egui::Painter, pos: egui::Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(13.0),
        egui::Color32::BLACK,
    );

    let padding = egui::vec2(6.0, 4.0);
    let anchor = pos + egui::vec2(12.0, 12.0);
    let bg = egui::Rect::from_min_size(anchor, galley.size() + padding * 2.0);

    painter.rect_filled(bg, 3.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 235));
    painter.rect_stroke(
        bg,
        3.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
        egui::StrokeKind::Inside,
    );
    painter.galley(anchor + padding, galley, egui::Color32::BLACK);
}
