use map_import_editor::{
    AppController, AppIntent, AppState, Coordinate, GeoBounds, ImportForm, ImportMode,
    LayerDetail, LayerSummary, PendingRequest, ProfileArgs, Tile,
};
use map_import_editor::app::Severity;

fn c(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng)
}

fn click(controller: &mut AppController, state: &mut AppState, lat: f64, lng: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::MapClicked {
                coordinate: c(lat, lng),
            },
        )
        .expect("MapClicked sollte ohne Fehler durchlaufen");
}

fn set_mode(controller: &mut AppController, state: &mut AppState, mode: ImportMode) {
    controller
        .handle_intent(state, AppIntent::ImportModeChanged { mode })
        .expect("ImportModeChanged sollte ohne Fehler durchlaufen");
}

fn tile(lat: f64, lng: f64) -> Tile {
    Tile {
        bounds: GeoBounds {
            north: lat + 0.1,
            south: lat - 0.1,
            east: lng + 0.1,
            west: lng - 0.1,
        },
        center: c(lat, lng),
    }
}

fn form() -> ImportForm {
    ImportForm {
        layer_name: "L".to_string(),
        zoom_level: 18,
        threshold: 120,
        nonmax_suppression: true,
        load_distance_m: 50.0,
        save_img: true,
        description: None,
    }
}

// ═══════════════════════════════════════════════════════════════════
// Punkte sammeln: Kardinalität, Duplikate, Modus-Wechsel
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_rectangle_mode_never_exceeds_two_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for i in 0..6 {
        click(&mut controller, &mut state, 10.0 + i as f64, 20.0);
        assert!(state.workflow.points.len() <= 2);
    }

    assert_eq!(
        state.workflow.points,
        vec![c(10.0, 20.0), c(11.0, 20.0)]
    );
}

#[test]
fn test_duplicate_click_is_silent_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 10.0, 20.0);
    click(&mut controller, &mut state, 10.0, 20.0);

    assert_eq!(state.workflow.points, vec![c(10.0, 20.0)]);
    // Keine Fehler-Meldung für Validierungs-Abweisungen
    assert!(state.ui.notification.is_none());
}

#[test]
fn test_typed_insert_behaves_like_click() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    controller
        .handle_intent(
            &mut state,
            AppIntent::TypedCoordinateInserted {
                coordinate: c(49.05, 31.48),
            },
        )
        .expect("TypedCoordinateInserted sollte funktionieren");

    assert_eq!(state.workflow.points, vec![c(49.05, 31.48)]);
    assert_eq!(state.workflow.last_coordinate, Some(c(49.05, 31.48)));
}

#[test]
fn test_mode_switch_clears_points_and_overlays() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 20.0);
    click(&mut controller, &mut state, 12.0, 22.0);
    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();
    assert!(state.overlays.rectangle().is_some());

    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    assert!(state.workflow.points.is_empty());
    assert!(state.workflow.last_coordinate.is_none());
    assert!(state.overlays.is_empty());
}

#[test]
fn test_switch_to_same_mode_also_clears() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 20.0);
    set_mode(&mut controller, &mut state, ImportMode::Rectangle);

    assert!(state.workflow.points.is_empty());
}

#[test]
fn test_clear_removes_points_and_previews() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 2.0);
    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();
    assert!(state.overlays.polyline().is_some());

    controller
        .handle_intent(&mut state, AppIntent::ClearCoordinatesRequested)
        .expect("Clear sollte funktionieren");

    assert!(state.workflow.points.is_empty());
    assert!(state.overlays.is_empty());
}

// ═══════════════════════════════════════════════════════════════════
// Vorschau: Normalisierung vs. Klick-Reihenfolge, kein Auto-Preview
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_clicks_do_not_auto_preview() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 100.0);
    click(&mut controller, &mut state, 20.0, 80.0);

    // Vorschau erst nach explizitem Preview-Event
    assert!(state.overlays.rectangle().is_none());
}

#[test]
fn test_rectangle_preview_normalizes_while_command_keeps_click_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 100.0);
    click(&mut controller, &mut state, 20.0, 80.0);

    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();

    let bounds = state.overlays.rectangle().expect("Vorschau erwartet").bounds;
    assert_eq!(
        bounds,
        GeoBounds {
            north: 20.0,
            south: 10.0,
            east: 100.0,
            west: 80.0,
        }
    );

    controller
        .handle_intent(&mut state, AppIntent::ImportSubmitted { form: form() })
        .unwrap();

    let pending = state.net.pending();
    let command = match pending {
        [PendingRequest::Import { command }] => command,
        other => panic!("Unerwartete Warteschlange: {other:?}"),
    };
    match &command.profile_args {
        ProfileArgs::Rectangle { start, end } => {
            assert_eq!(*start, c(10.0, 100.0));
            assert_eq!(*end, c(20.0, 80.0));
        }
        other => panic!("Unerwartete Profil-Argumente: {other:?}"),
    }
}

#[test]
fn test_preview_with_single_point_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 100.0);
    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();

    assert!(state.overlays.rectangle().is_none());
}

#[test]
fn test_preview_replaces_previous_overlay() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 2.0);
    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();
    let first_len = state.overlays.polyline().unwrap().path.length_m;

    click(&mut controller, &mut state, 3.0, 3.0);
    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();

    // Genau ein Polyline-Overlay, mit dem neuen Pfad
    let path = &state.overlays.polyline().unwrap().path;
    assert_eq!(path.waypoints.len(), 3);
    assert!(path.length_m > first_len);
}

// ═══════════════════════════════════════════════════════════════════
// Routen-Optimierung: Permutation übernehmen, veraltete verwerfen
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_optimize_round_trip_adopts_permutation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 2.0);

    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .expect("OptimizeRequested sollte funktionieren");

    let seq = match state.net.pending() {
        [PendingRequest::Optimize { seq, points }] => {
            assert_eq!(points, &vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)]);
            *seq
        }
        other => panic!("Unerwartete Warteschlange: {other:?}"),
    };

    let optimized = vec![c(2.0, 2.0), c(0.0, 0.0), c(1.0, 1.0)];
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeCompleted {
                seq,
                result: Ok(optimized.clone()),
            },
        )
        .expect("OptimizeCompleted sollte funktionieren");

    // Gleiche drei Koordinaten, neue Reihenfolge — und die Vorschau folgt
    assert_eq!(state.workflow.points, optimized);
    assert_eq!(
        state.overlays.polyline().expect("Vorschau erwartet").path.waypoints,
        optimized
    );
}

#[test]
fn test_stale_optimize_response_is_discarded_after_clear() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .unwrap();
    let seq = match state.net.drain().as_slice() {
        [PendingRequest::Optimize { seq, .. }] => *seq,
        other => panic!("Unerwartete Warteschlange: {other:?}"),
    };

    // Clear entwertet die ausstehende Anfrage
    controller
        .handle_intent(&mut state, AppIntent::ClearCoordinatesRequested)
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeCompleted {
                seq,
                result: Ok(vec![c(1.0, 1.0), c(0.0, 0.0)]),
            },
        )
        .unwrap();

    assert!(state.workflow.points.is_empty());
    assert!(state.overlays.polyline().is_none());
}

#[test]
fn test_second_optimize_invalidates_first_response() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .unwrap();

    let seqs: Vec<u64> = state
        .net
        .drain()
        .into_iter()
        .map(|r| match r {
            PendingRequest::Optimize { seq, .. } => seq,
            other => panic!("Unerwartete Anfrage: {other:?}"),
        })
        .collect();
    assert_eq!(seqs.len(), 2);

    // Antwort der ERSTEN Anfrage kommt zu spät
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeCompleted {
                seq: seqs[0],
                result: Ok(vec![c(1.0, 1.0), c(0.0, 0.0)]),
            },
        )
        .unwrap();
    assert_eq!(state.workflow.points, vec![c(0.0, 0.0), c(1.0, 1.0)]);

    // Antwort der ZWEITEN Anfrage wird angewendet
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeCompleted {
                seq: seqs[1],
                result: Ok(vec![c(1.0, 1.0), c(0.0, 0.0)]),
            },
        )
        .unwrap();
    assert_eq!(state.workflow.points, vec![c(1.0, 1.0), c(0.0, 0.0)]);
}

#[test]
fn test_optimize_failure_keeps_order_and_notifies() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .unwrap();
    let seq = match state.net.drain().as_slice() {
        [PendingRequest::Optimize { seq, .. }] => *seq,
        other => panic!("Unerwartete Warteschlange: {other:?}"),
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptimizeCompleted {
                seq,
                result: Err("service down".to_string()),
            },
        )
        .unwrap();

    assert_eq!(state.workflow.points, vec![c(0.0, 0.0), c(1.0, 1.0)]);
    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Error);
}

#[test]
fn test_optimize_requires_two_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 0.0, 0.0);
    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .unwrap();

    assert!(state.net.pending().is_empty());
}

// ═══════════════════════════════════════════════════════════════════
// Import: Kommando-Bau, Erfolgs- und Fehlerpfad
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_polyline_import_end_to_end_command_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    set_mode(&mut controller, &mut state, ImportMode::Polyline);

    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 2.0);
    click(&mut controller, &mut state, 3.0, 3.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportSubmitted { form: form() },
        )
        .expect("ImportSubmitted sollte funktionieren");

    // Info-Meldung beim Absenden
    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Info);

    let command = match state.net.pending() {
        [PendingRequest::Import { command }] => command,
        other => panic!("Unerwartete Warteschlange: {other:?}"),
    };

    assert_eq!(command.profile_type(), ImportMode::Polyline);
    match &command.profile_args {
        ProfileArgs::Polyline {
            waypoints,
            load_distance_m,
        } => {
            assert_eq!(waypoints, &vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)]);
            assert_eq!(*load_distance_m, 50.0);
        }
        other => panic!("Unerwartete Profil-Argumente: {other:?}"),
    }
    assert_eq!(command.layer_name, "L");
    assert_eq!(command.zoom_lvl, 18);
    let fast = command.actions.compute_fast.expect("FAST-Parameter erwartet");
    assert_eq!(fast.threshold, 120);
    assert!(fast.nonmax_suppression);
}

#[test]
fn test_import_with_too_few_points_builds_no_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 1.0, 1.0);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportSubmitted { form: form() },
        )
        .unwrap();

    assert!(state.net.pending().is_empty());
}

#[test]
fn test_import_success_transitions_to_readonly_view() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 2.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportCompleted { result: Ok(42) },
        )
        .expect("ImportCompleted sollte funktionieren");

    assert!(state.workflow.readonly);
    assert_eq!(state.workflow.layer_id, Some(42));
    assert!(state.workflow.points.is_empty());
    assert!(state.overlays.is_empty());

    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Success);

    // Details des neuen Layers werden direkt angefragt
    assert!(matches!(
        state.net.pending(),
        [PendingRequest::LayerDetails { layer_id: 42 }]
    ));
}

#[test]
fn test_import_failure_leaves_state_unchanged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 1.0, 1.0);
    click(&mut controller, &mut state, 2.0, 2.0);
    controller
        .handle_intent(&mut state, AppIntent::PreviewRequested)
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportCompleted {
                result: Err("500".to_string()),
            },
        )
        .unwrap();

    // Kein teilweiser Abbau von Punkten oder Overlays
    assert!(!state.workflow.readonly);
    assert_eq!(state.workflow.points.len(), 2);
    assert!(state.overlays.rectangle().is_some());

    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Error);
}

// ═══════════════════════════════════════════════════════════════════
// Read-only-Ansicht: Kacheln, Zentrum, Sperren, Rückkehr
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_layer_details_render_tiles_and_center_viewport() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ViewLayerRequested { layer_id: 7 })
        .expect("ViewLayerRequested sollte funktionieren");

    assert!(state.workflow.readonly);
    assert!(matches!(
        state.net.drain().as_slice(),
        [PendingRequest::LayerDetails { layer_id: 7 }]
    ));

    let detail = LayerDetail {
        id: 7,
        name: "Kyiv".to_string(),
        import_type: ImportMode::Polyline,
        tiles: vec![tile(10.0, 10.0), tile(20.0, 20.0)],
    };
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerDetailsLoaded {
                layer_id: 7,
                result: Ok(detail),
            },
        )
        .expect("LayerDetailsLoaded sollte funktionieren");

    assert_eq!(state.overlays.tiles().len(), 2);
    // Viewport springt auf das aggregierte Kachel-Zentrum
    assert_eq!(state.view.center, c(15.0, 15.0));
    assert_eq!(state.view.zoom, state.options.detail_zoom);
    // Modus folgt dem gespeicherten Profil-Typ
    assert_eq!(state.workflow.mode, ImportMode::Polyline);
}

#[test]
fn test_readonly_view_disables_all_mutations() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ViewLayerRequested { layer_id: 7 })
        .unwrap();
    state.net.drain();

    click(&mut controller, &mut state, 1.0, 1.0);
    controller
        .handle_intent(
            &mut state,
            AppIntent::TypedCoordinateInserted {
                coordinate: c(2.0, 2.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::OptimizeRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportSubmitted { form: form() },
        )
        .unwrap();

    assert!(state.workflow.points.is_empty());
    assert!(state.net.pending().is_empty());
    assert_eq!(state.workflow.mode, ImportMode::Rectangle);
}

#[test]
fn test_details_failure_notifies_and_keeps_empty_view() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ViewLayerRequested { layer_id: 9 })
        .unwrap();
    state.net.drain();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerDetailsLoaded {
                layer_id: 9,
                result: Err("404".to_string()),
            },
        )
        .unwrap();

    assert!(state.overlays.tiles().is_empty());
    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Error);
}

#[test]
fn test_back_to_edit_resets_to_defaults() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ViewLayerRequested { layer_id: 7 })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerDetailsLoaded {
                layer_id: 7,
                result: Ok(LayerDetail {
                    id: 7,
                    name: "Kyiv".to_string(),
                    import_type: ImportMode::Polyline,
                    tiles: vec![tile(10.0, 10.0)],
                }),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::BackToEditRequested)
        .expect("BackToEditRequested sollte funktionieren");

    assert!(!state.workflow.readonly);
    assert!(state.workflow.layer_id.is_none());
    assert_eq!(state.workflow.mode, ImportMode::Rectangle);
    assert!(state.overlays.is_empty());
    assert_eq!(state.view.zoom, state.options.default_zoom);

    // Danach ist der Workflow wieder editierbar
    click(&mut controller, &mut state, 1.0, 1.0);
    assert_eq!(state.workflow.points.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Layer-Liste: Laden, Löschen, Aktualisieren
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_layers_page_loads_list() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::LayersPageRequested)
        .expect("LayersPageRequested sollte funktionieren");

    assert!(matches!(
        state.net.drain().as_slice(),
        [PendingRequest::ListLayers]
    ));

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerListLoaded {
                result: Ok(vec![LayerSummary {
                    id: 1,
                    name: "A".to_string(),
                    import_type: ImportMode::Rectangle,
                }]),
            },
        )
        .unwrap();

    assert_eq!(state.ui.layer_rows.len(), 1);
    assert_eq!(state.ui.layer_rows[0].name, "A");
}

#[test]
fn test_delete_success_notifies_and_refreshes_list() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::DeleteLayerRequested { layer_id: 3 })
        .unwrap();
    assert!(matches!(
        state.net.drain().as_slice(),
        [PendingRequest::DeleteLayer { layer_id: 3 }]
    ));

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerDeleted {
                layer_id: 3,
                result: Ok(()),
            },
        )
        .unwrap();

    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Success);
    assert!(matches!(
        state.net.pending(),
        [PendingRequest::ListLayers]
    ));
}

#[test]
fn test_delete_failure_notifies_without_refresh() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerDeleted {
                layer_id: 3,
                result: Err("409".to_string()),
            },
        )
        .unwrap();

    let notification = state.ui.notification.as_ref().expect("Meldung erwartet");
    assert_eq!(notification.severity, Severity::Error);
    assert!(state.net.pending().is_empty());
}

// ═══════════════════════════════════════════════════════════════════
// Viewport: Suche, Zoom-Klemmung
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_coordinate_search_jumps_viewport() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::TypedCoordinateSearched {
                coordinate: c(50.45, 30.52),
            },
        )
        .expect("TypedCoordinateSearched sollte funktionieren");

    assert_eq!(state.view.center, c(50.45, 30.52));
    assert_eq!(state.view.zoom, state.options.search_zoom);
    // Suche fügt keinen Punkt hinzu
    assert!(state.workflow.points.is_empty());
}

#[test]
fn test_zoom_steps_are_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..40 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .unwrap();
    }
    assert_eq!(state.view.zoom, 19);

    for _ in 0..40 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomOutRequested)
            .unwrap();
    }
    assert_eq!(state.view.zoom, 1);
}

#[test]
fn test_map_page_navigation_starts_fresh() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 1.0, 1.0);
    controller
        .handle_intent(&mut state, AppIntent::LayersPageRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::MapPageRequested)
        .expect("MapPageRequested sollte funktionieren");

    // Die Kartenseite kommt ohne alten Zustand zurück
    assert!(state.workflow.points.is_empty());
    assert!(!state.workflow.readonly);
    assert!(state.overlays.is_empty());
}

#[test]
fn test_notification_can_be_dismissed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportCompleted {
                result: Err("x".to_string()),
            },
        )
        .unwrap();
    assert!(state.ui.notification.is_some());

    controller
        .handle_intent(&mut state, AppIntent::NotificationDismissed)
        .unwrap();
    assert!(state.ui.notification.is_none());
}

#[test]
fn test_command_log_records_executed_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 1.0, 1.0);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    assert!(matches!(
        last,
        map_import_editor::AppCommand::AddCoordinate { .. }
    ));
}
