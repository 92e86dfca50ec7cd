//! Wire-DTOs der Hub-API und Konvertierung in Core-Typen.
//!
//! Die Feldnamen entsprechen exakt dem Backend-Schema; die Umbenennung in
//! die Core-Welt passiert ausschließlich hier an der Adapter-Grenze.

use serde::{Deserialize, Serialize};

use crate::core::{
    Coordinate, GeoBounds, ImportMapLayerCommand, ImportMode, LayerDetail, LayerSummary,
    ProfileArgs, Tile,
};

// ── Import-Kommando (ausgehend) ─────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ImportMapLayerCommandDto {
    import_profile_type: &'static str,
    import_profile_args: ProfileArgsDto,
    layer_name: String,
    zoom_lvl: u8,
    actions: ImportActionsDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ProfileArgsDto {
    Rectangle {
        start: Coordinate,
        end: Coordinate,
    },
    Polyline {
        waypoints: Vec<Coordinate>,
        load_distance_m: f64,
    },
}

#[derive(Debug, Serialize)]
struct ImportActionsDto {
    save_img: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    compute_surf: Option<SurfActionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compute_fast: Option<FastActionDto>,
}

#[derive(Debug, Serialize)]
struct SurfActionDto {
    #[serde(rename = "hessianThreshold")]
    hessian_threshold: f64,
}

#[derive(Debug, Serialize)]
struct FastActionDto {
    threshold: i32,
    #[serde(rename = "nonmaxSuppression")]
    nonmax_suppression: bool,
}

impl From<&ImportMapLayerCommand> for ImportMapLayerCommandDto {
    fn from(command: &ImportMapLayerCommand) -> Self {
        let import_profile_args = match &command.profile_args {
            ProfileArgs::Rectangle { start, end } => ProfileArgsDto::Rectangle {
                start: *start,
                end: *end,
            },
            ProfileArgs::Polyline {
                waypoints,
                load_distance_m,
            } => ProfileArgsDto::Polyline {
                waypoints: waypoints.clone(),
                load_distance_m: *load_distance_m,
            },
        };

        Self {
            import_profile_type: command.profile_type().as_type_label(),
            import_profile_args,
            layer_name: command.layer_name.clone(),
            zoom_lvl: command.zoom_lvl,
            actions: ImportActionsDto {
                save_img: command.actions.save_img,
                compute_surf: command.actions.compute_surf.map(|s| SurfActionDto {
                    hessian_threshold: s.hessian_threshold,
                }),
                compute_fast: command.actions.compute_fast.map(|f| FastActionDto {
                    threshold: f.threshold,
                    nonmax_suppression: f.nonmax_suppression,
                }),
            },
            description: command.description.clone(),
        }
    }
}

/// Antwort auf `POST /mapLayers/import`; weitere Felder sind hier egal.
#[derive(Debug, Deserialize)]
pub struct ImportResponseDto {
    pub id: i64,
}

// ── Layer-Liste und -Details (eingehend) ────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListMapLayerDto {
    id: i64,
    name: String,
    import_type: String,
}

impl From<ListMapLayerDto> for LayerSummary {
    fn from(dto: ListMapLayerDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            import_type: ImportMode::from_type_label(&dto.import_type),
        }
    }
}

/// Kachel im Detail-Response. Das Backend liefert alle vier Ecken;
/// konsumiert werden die vier Begrenzungswerte und das Zentrum.
#[derive(Debug, Deserialize)]
pub struct MapLayerTileDto {
    center_lat: f64,
    center_long: f64,
    nw_lat: f64,
    se_lat: f64,
    ne_long: f64,
    sw_long: f64,
}

impl From<MapLayerTileDto> for Tile {
    fn from(dto: MapLayerTileDto) -> Self {
        Self {
            bounds: GeoBounds {
                north: dto.nw_lat,
                south: dto.se_lat,
                east: dto.ne_long,
                west: dto.sw_long,
            },
            center: Coordinate::new(dto.center_lat, dto.center_long),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MapLayerDetailsDto {
    id: i64,
    name: String,
    import_type: String,
    tiles: Vec<MapLayerTileDto>,
}

impl From<MapLayerDetailsDto> for LayerDetail {
    fn from(dto: MapLayerDetailsDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            import_type: ImportMode::from_type_label(&dto.import_type),
            tiles: dto.tiles.into_iter().map(Tile::from).collect(),
        }
    }
}

// ── Routen-Optimierung ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptimizeRouteRequestDto {
    pub polyline_points: Vec<Coordinate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_import_command, ImportForm};

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn rectangle_command_serializes_with_wire_names() {
        let form = ImportForm {
            layer_name: "Kyiv".to_string(),
            zoom_level: 19,
            threshold: 120,
            nonmax_suppression: true,
            load_distance_m: 50.0,
            save_img: true,
            description: None,
        };
        let command =
            build_import_command(ImportMode::Rectangle, &[c(10.0, 100.0), c(20.0, 80.0)], &form)
                .unwrap();

        let value = serde_json::to_value(ImportMapLayerCommandDto::from(&command)).unwrap();

        assert_eq!(value["import_profile_type"], "rectangle");
        assert_eq!(value["import_profile_args"]["start"]["latitude"], 10.0);
        assert_eq!(value["import_profile_args"]["start"]["longitude"], 100.0);
        assert_eq!(value["import_profile_args"]["end"]["latitude"], 20.0);
        assert_eq!(value["layer_name"], "Kyiv");
        assert_eq!(value["zoom_lvl"], 19);
        assert_eq!(value["actions"]["save_img"], true);
        assert_eq!(value["actions"]["compute_fast"]["threshold"], 120);
        assert_eq!(value["actions"]["compute_fast"]["nonmaxSuppression"], true);
        // Nie von diesem Workflow befüllt bzw. leer → nicht serialisiert
        assert!(value["actions"].get("compute_surf").is_none());
        assert!(value.get("description").is_none());
    }

    #[test]
    fn polyline_command_serializes_waypoints_in_order() {
        let form = ImportForm {
            load_distance_m: 75.5,
            layer_name: "Route".to_string(),
            ..ImportForm::default()
        };
        let points = [c(1.0, 2.0), c(3.0, 4.0), c(5.0, 6.0)];
        let command = build_import_command(ImportMode::Polyline, &points, &form).unwrap();

        let value = serde_json::to_value(ImportMapLayerCommandDto::from(&command)).unwrap();

        assert_eq!(value["import_profile_type"], "polyline");
        let waypoints = value["import_profile_args"]["waypoints"].as_array().unwrap();
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[1]["latitude"], 3.0);
        assert_eq!(value["import_profile_args"]["load_distance_m"], 75.5);
    }

    #[test]
    fn tile_dto_maps_corners_to_bounds() {
        let json = r#"{
            "id": 1,
            "center_lat": 49.5, "center_long": 31.5,
            "nw_lat": 50.0, "nw_long": 31.0,
            "ne_lat": 50.0, "ne_long": 32.0,
            "se_lat": 49.0, "se_long": 32.0,
            "sw_lat": 49.0, "sw_long": 31.0
        }"#;
        let tile: Tile = serde_json::from_str::<MapLayerTileDto>(json).unwrap().into();

        assert_eq!(tile.bounds.north, 50.0);
        assert_eq!(tile.bounds.south, 49.0);
        assert_eq!(tile.bounds.east, 32.0);
        assert_eq!(tile.bounds.west, 31.0);
        assert_eq!(tile.center, c(49.5, 31.5));
    }

    #[test]
    fn details_dto_converts_import_type() {
        let json = r#"{"id": 3, "name": "L", "import_type": "polyline", "tiles": []}"#;
        let detail: LayerDetail =
            serde_json::from_str::<MapLayerDetailsDto>(json).unwrap().into();

        assert_eq!(detail.id, 3);
        assert_eq!(detail.import_type, ImportMode::Polyline);
        assert!(detail.tiles.is_empty());
    }

    #[test]
    fn list_dto_converts_rows() {
        let json = r#"[{"id": 1, "name": "A", "import_type": "rectangle"}]"#;
        let rows: Vec<LayerSummary> = serde_json::from_str::<Vec<ListMapLayerDto>>(json)
            .unwrap()
            .into_iter()
            .map(LayerSummary::from)
            .collect();

        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].import_type, ImportMode::Rectangle);
    }

    #[test]
    fn optimize_request_uses_polyline_points_field() {
        let dto = OptimizeRouteRequestDto {
            polyline_points: vec![c(1.0, 2.0)],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["polyline_points"][0]["latitude"], 1.0);
        assert_eq!(value["polyline_points"][0]["longitude"], 2.0);
    }
}
