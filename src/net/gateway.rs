//! Gateway zwischen UI-Thread und Hub-API.
//!
//! Jede ausstehende Anfrage läuft auf einem eigenen Worker-Thread; der
//! Abschluss wandert über einen mpsc-Kanal zurück und wird vom Host pro
//! Frame als Intent in den Controller gespeist. Mehrere Anfragen dürfen
//! gleichzeitig unterwegs sein; eine Reihenfolge der Abschlüsse ist nicht
//! garantiert (Optimierungen sichert die Sequenznummer ab).

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::app::state::PendingRequest;
use crate::app::AppIntent;
use crate::core::{Coordinate, LayerDetail, LayerSummary};

use super::client::HubClient;

/// Abschluss einer Gateway-Anfrage.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    LayerList(Result<Vec<LayerSummary>, String>),
    LayerDetails {
        layer_id: i64,
        result: Result<LayerDetail, String>,
    },
    ImportFinished(Result<i64, String>),
    LayerDeleted {
        layer_id: i64,
        result: Result<(), String>,
    },
    OptimizeFinished {
        seq: u64,
        result: Result<Vec<Coordinate>, String>,
    },
}

impl GatewayEvent {
    /// Übersetzt den Abschluss in den passenden Intent.
    pub fn into_intent(self) -> AppIntent {
        match self {
            GatewayEvent::LayerList(result) => AppIntent::LayerListLoaded { result },
            GatewayEvent::LayerDetails { layer_id, result } => {
                AppIntent::LayerDetailsLoaded { layer_id, result }
            }
            GatewayEvent::ImportFinished(result) => AppIntent::ImportCompleted { result },
            GatewayEvent::LayerDeleted { layer_id, result } => {
                AppIntent::LayerDeleted { layer_id, result }
            }
            GatewayEvent::OptimizeFinished { seq, result } => {
                AppIntent::OptimizeCompleted { seq, result }
            }
        }
    }
}

/// Führt ausstehende Anfragen auf Worker-Threads aus.
pub struct Gateway {
    client: HubClient,
    tx: Sender<GatewayEvent>,
    rx: Receiver<GatewayEvent>,
}

impl Gateway {
    /// Erstellt ein Gateway über dem gegebenen Client.
    pub fn new(client: HubClient) -> Self {
        let (tx, rx) = channel();
        Self { client, tx, rx }
    }

    /// Startet eine Anfrage auf einem Worker-Thread.
    pub fn dispatch(&self, request: PendingRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let event = run_request(&client, request);
            // Empfänger weg heißt: Anwendung beendet sich gerade.
            let _ = tx.send(event);
        });
    }

    /// Sammelt alle bisher eingetroffenen Abschlüsse ein.
    pub fn poll(&self) -> Vec<GatewayEvent> {
        self.rx.try_iter().collect()
    }
}

fn run_request(client: &HubClient, request: PendingRequest) -> GatewayEvent {
    match request {
        PendingRequest::ListLayers => {
            GatewayEvent::LayerList(client.list_layers().map_err(describe))
        }
        PendingRequest::LayerDetails { layer_id } => GatewayEvent::LayerDetails {
            layer_id,
            result: client.layer_details(layer_id).map_err(describe),
        },
        PendingRequest::Import { command } => {
            GatewayEvent::ImportFinished(client.import_layer(&command).map_err(describe))
        }
        PendingRequest::DeleteLayer { layer_id } => GatewayEvent::LayerDeleted {
            layer_id,
            result: client.delete_layer(layer_id).map_err(describe),
        },
        PendingRequest::Optimize { seq, points } => GatewayEvent::OptimizeFinished {
            seq,
            result: client.optimize_route(&points).map_err(describe),
        },
    }
}

fn describe(error: anyhow::Error) -> String {
    format!("{error:#}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimize_event_keeps_sequence_number() {
        let event = GatewayEvent::OptimizeFinished {
            seq: 7,
            result: Ok(vec![]),
        };
        match event.into_intent() {
            AppIntent::OptimizeCompleted { seq, result } => {
                assert_eq!(seq, 7);
                assert_eq!(result, Ok(vec![]));
            }
            other => panic!("Unerwarteter Intent: {other:?}"),
        }
    }

    #[test]
    fn delete_event_carries_layer_id() {
        let event = GatewayEvent::LayerDeleted {
            layer_id: 3,
            result: Err("offline".to_string()),
        };
        match event.into_intent() {
            AppIntent::LayerDeleted { layer_id, result } => {
                assert_eq!(layer_id, 3);
                assert!(result.is_err());
            }
            other => panic!("Unerwarteter Intent: {other:?}"),
        }
    }
}
