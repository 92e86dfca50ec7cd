//! Kachel-Beschaffung für die Slippy-Map: LRU-Cache über Hintergrund-Fetch.
//!
//! Der UI-Thread fragt pro Frame Texturen an; fehlende Kacheln werden auf
//! Worker-Threads geladen und dekodiert, fertige Bilder pro Frame als
//! Texturen übernommen. Fehlgeschlagene Kacheln werden nicht erneut
//! angefragt, bis der Cache rotiert.

use std::collections::HashSet;
use std::io::Read;
use std::num::NonZeroUsize;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use lru::LruCache;

use crate::core::TileCoords;
use crate::shared::options::TILE_CACHE_CAPACITY;

const TILE_USER_AGENT: &str = concat!("Map-Import-Editor/", env!("CARGO_PKG_VERSION"));

/// Maximale Bytegröße einer Kachel (Schutz gegen kaputte Server-Antworten).
const MAX_TILE_BYTES: u64 = 4 * 1024 * 1024;

/// Hält geladene Kachel-Texturen und verwaltet laufende Downloads.
pub struct TileStore {
    cache: LruCache<TileCoords, egui::TextureHandle>,
    pending: HashSet<TileCoords>,
    failed: HashSet<TileCoords>,
    tx: Sender<(TileCoords, Result<egui::ColorImage, String>)>,
    rx: Receiver<(TileCoords, Result<egui::ColorImage, String>)>,
    agent: ureq::Agent,
    url_template: String,
}

impl TileStore {
    /// Erstellt einen leeren Store für das gegebene URL-Template.
    pub fn new(url_template: String) -> Self {
        let (tx, rx) = channel();
        Self {
            cache: LruCache::new(
                NonZeroUsize::new(TILE_CACHE_CAPACITY).expect("Kapazität ist statisch > 0"),
            ),
            pending: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(20))
                .user_agent(TILE_USER_AGENT)
                .build(),
            url_template,
        }
    }

    /// Übernimmt fertig geladene Kacheln als Texturen.
    /// Gibt `true` zurück, wenn mindestens eine Kachel angekommen ist.
    pub fn drain_ready(&mut self, ctx: &egui::Context) -> bool {
        let mut any = false;
        for (coords, result) in self.rx.try_iter() {
            self.pending.remove(&coords);
            match result {
                Ok(color_image) => {
                    let name = format!("tile_{}_{}_{}", coords.z, coords.x, coords.y);
                    let handle =
                        ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR);
                    self.cache.put(coords, handle);
                    any = true;
                }
                Err(e) => {
                    log::warn!("Kachel {:?} nicht ladbar: {}", coords, e);
                    self.failed.insert(coords);
                }
            }
        }
        any
    }

    /// Textur einer Kachel, falls geladen; stößt sonst den Download an.
    pub fn texture(&mut self, coords: TileCoords) -> Option<egui::TextureHandle> {
        if let Some(handle) = self.cache.get(&coords) {
            return Some(handle.clone());
        }

        if !self.pending.contains(&coords) && !self.failed.contains(&coords) {
            self.spawn_fetch(coords);
        }
        None
    }

    /// `true`, solange Downloads laufen (Host soll weiter repainten).
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn spawn_fetch(&mut self, coords: TileCoords) {
        self.pending.insert(coords);

        let url = coords.url(&self.url_template);
        let agent = self.agent.clone();
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let result = fetch_tile(&agent, &url).map_err(|e| format!("{e:#}"));
            let _ = tx.send((coords, result));
        });
    }
}

fn fetch_tile(agent: &ureq::Agent, url: &str) -> anyhow::Result<egui::ColorImage> {
    let response = agent.get(url).call()?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_TILE_BYTES)
        .read_to_end(&mut bytes)?;

    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
