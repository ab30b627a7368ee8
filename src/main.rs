//! PointMap Session Replay.
//!
//! Headless-Treiber: spielt ein Szenario (JSON) gegen die Session ab und
//! gibt den resultierenden Viewport samt Render-Szene aus. Dient der
//! Diagnose von Fit- und Modus-Verhalten ohne Render-Surface.

use anyhow::Context;
use pointmap_session::{
    LngLat, MapSession, PointerButton, RenderScene, SessionOptions, StoreSnapshot, Viewport,
};
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "PointMap Session Replay v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let path = std::env::args()
            .nth(1)
            .context("Aufruf: pointmap-replay <szenario.json>")?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Szenario-Datei nicht lesbar: {path}"))?;
        let scenario: Scenario = serde_json::from_str(&content)
            .with_context(|| format!("Szenario-Datei fehlerhaft: {path}"))?;

        let mut options = SessionOptions::load_from_file(&SessionOptions::config_path());
        if let Ok(token) = std::env::var("POINTMAP_ACCESS_TOKEN") {
            options.access_token = token;
        }

        let outcome = replay(options, scenario)?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);

        Ok(())
    }
}

/// Abspielbares Szenario: Store-Snapshot plus Event-Skript.
#[derive(Debug, Deserialize)]
struct Scenario {
    /// Reale Surface-Größe für das Ready-Event [Breite, Höhe]
    surface_size: [f64; 2],
    /// Initialer Store-Snapshot
    #[serde(default)]
    snapshot: StoreSnapshot,
    /// Snapshot-Updates nach dem Ready-Event, in Reihenfolge
    #[serde(default)]
    updates: Vec<StoreSnapshot>,
    /// Klick-Skript nach allen Updates
    #[serde(default)]
    clicks: Vec<ClickSpec>,
}

/// Einzelner Klick im Szenario-Skript.
#[derive(Debug, Deserialize)]
struct ClickSpec {
    /// "primary", "secondary" oder "middle"
    button: String,
    longitude: f64,
    latitude: f64,
}

impl ClickSpec {
    fn button(&self) -> anyhow::Result<PointerButton> {
        match self.button.as_str() {
            "primary" => Ok(PointerButton::Primary),
            "secondary" => Ok(PointerButton::Secondary),
            "middle" => Ok(PointerButton::Middle),
            other => anyhow::bail!("Unbekannte Pointer-Taste im Szenario: {other}"),
        }
    }
}

/// Replay-Ergebnis für die JSON-Ausgabe.
#[derive(Debug, serde::Serialize)]
struct Outcome {
    viewport: Viewport,
    popup_location: Option<LngLat>,
    scene: RenderScene,
}

fn replay(options: SessionOptions, scenario: Scenario) -> anyhow::Result<Outcome> {
    let mut session = MapSession::new(options, scenario.snapshot);

    session.on_surface_ready(scenario.surface_size[0], scenario.surface_size[1])?;

    for snapshot in scenario.updates {
        session.on_inputs_changed(snapshot)?;
    }

    for click in &scenario.clicks {
        session.on_pointer_click(
            click.button()?,
            LngLat::new(click.longitude, click.latitude),
        )?;
    }

    log::info!(
        "Replay abgeschlossen, Modus: {:?}, Kamera: ({:.4}, {:.4}) zoom {:.2}",
        session.mode(),
        session.viewport().latitude,
        session.viewport().longitude,
        session.viewport().zoom
    );

    Ok(Outcome {
        viewport: session.viewport().clone(),
        popup_location: session.popup_location(),
        scene: session.render_scene()?,
    })
}
