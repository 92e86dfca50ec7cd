//! Blocking HTTP-Client für Hub-API und Optimierungs-Service.
//!
//! Läuft ausschließlich auf Gateway-Worker-Threads, nie auf dem UI-Thread.

use std::time::Duration;

use anyhow::Context;

use crate::core::{Coordinate, ImportMapLayerCommand, LayerDetail, LayerSummary};

use super::protocol::{
    ImportMapLayerCommandDto, ImportResponseDto, ListMapLayerDto, MapLayerDetailsDto,
    OptimizeRouteRequestDto,
};

/// Client für die REST-Endpunkte des Map-Storage-Hubs.
#[derive(Clone)]
pub struct HubClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HubClient {
    /// Erstellt einen Client für die gegebene Basis-URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET /mapLayers`
    pub fn list_layers(&self) -> anyhow::Result<Vec<LayerSummary>> {
        let url = format!("{}/mapLayers", self.base_url);
        let rows: Vec<ListMapLayerDto> = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("GET {url}"))?
            .into_json()?;

        Ok(rows.into_iter().map(LayerSummary::from).collect())
    }

    /// `GET /mapLayers/{id}`
    pub fn layer_details(&self, layer_id: i64) -> anyhow::Result<LayerDetail> {
        let url = format!("{}/mapLayers/{}", self.base_url, layer_id);
        let dto: MapLayerDetailsDto = self
            .agent
            .get(&url)
            .call()
            .with_context(|| format!("GET {url}"))?
            .into_json()?;

        Ok(dto.into())
    }

    /// `POST /mapLayers/import`
    pub fn import_layer(&self, command: &ImportMapLayerCommand) -> anyhow::Result<i64> {
        let url = format!("{}/mapLayers/import", self.base_url);
        let response: ImportResponseDto = self
            .agent
            .post(&url)
            .send_json(ImportMapLayerCommandDto::from(command))
            .with_context(|| format!("POST {url}"))?
            .into_json()?;

        Ok(response.id)
    }

    /// `DELETE /mapLayers/{id}`
    pub fn delete_layer(&self, layer_id: i64) -> anyhow::Result<()> {
        let url = format!("{}/mapLayers/{}", self.base_url, layer_id);
        self.agent
            .delete(&url)
            .call()
            .with_context(|| format!("DELETE {url}"))?;

        Ok(())
    }

    /// `POST /optimizeRoute/antColony`
    pub fn optimize_route(&self, points: &[Coordinate]) -> anyhow::Result<Vec<Coordinate>> {
        let url = format!("{}/optimizeRoute/antColony", self.base_url);
        let ordered: Vec<Coordinate> = self
            .agent
            .post(&url)
            .send_json(OptimizeRouteRequestDto {
                polyline_points: points.to_vec(),
            })
            .with_context(|| format!("POST {url}"))?
            .into_json()?;

        Ok(ordered)
    }
}
