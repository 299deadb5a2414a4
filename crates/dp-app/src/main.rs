//! Main application entry point
//!
//! A living-room launcher driven entirely by directional input: arrow keys,
//! Enter and Escape on a keyboard, or JSON remote-control events piped on
//! stdin (one per line, e.g. `{"DPad":"Down"}`).

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use dp_core::{NavigationEngine, NavigatorSettings, RemoteControlEvent};
use dp_layout::LayoutConfig;
use dp_ui::{EguiFocusSink, KeyBindings, Theme};
use eframe::egui::{self, Context};
use tracing::info;

mod launcher;
mod remote;
mod todo;
mod view;

use launcher::Launcher;

/// Environment variable holding navigator settings as JSON
const SETTINGS_ENV: &str = "DPAD_NAV_SETTINGS";

/// Main application state
struct LauncherApp {
    launcher: Launcher,
    sink: Arc<EguiFocusSink>,
    key_bindings: KeyBindings,
    remote: Option<Receiver<RemoteControlEvent>>,
}

impl LauncherApp {
    fn new(cc: &eframe::CreationContext<'_>, layout: LayoutConfig, settings: NavigatorSettings) -> Self {
        dp_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let engine = Arc::new(NavigationEngine::with_settings(settings));
        let sink = Arc::new(EguiFocusSink::new(cc.egui_ctx.clone()));
        engine.set_sink(sink.clone());

        let launcher = Launcher::new(engine, layout);

        let ctx = cc.egui_ctx.clone();
        let remote = remote::spawn_stdin_reader(move || ctx.request_repaint());

        Self {
            launcher,
            sink,
            key_bindings: KeyBindings::default(),
            remote,
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Some(remote) = &self.remote {
            for event in remote.try_iter() {
                self.launcher.handle_remote(&event);
            }
        }

        for direction in self.key_bindings.directions(ctx) {
            self.launcher.navigate(direction);
        }

        egui::TopBottomPanel::top("greeting").show(ctx, |ui| {
            view::greeting(ui, &self.launcher.layout().name);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            view::status_bar(ui, &self.launcher);
        });

        egui::SidePanel::left("menu")
            .resizable(false)
            .show(ctx, |ui| view::menu(ui, &self.launcher, &self.sink));

        egui::CentralPanel::default().show(ctx, |ui| {
            view::home_page(ui, &self.launcher, &self.sink);
        });
    }
}

fn load_settings() -> Result<NavigatorSettings> {
    match std::env::var(SETTINGS_ENV) {
        Ok(json) => serde_json::from_str(&json).with_context(|| format!("Invalid {}", SETTINGS_ENV)),
        Err(_) => Ok(NavigatorSettings::default()),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let layout = match args.next().as_deref() {
        Some("--print-default-layout") => {
            println!("{}", LayoutConfig::default().to_json()?);
            return Ok(());
        }
        Some(path) => LayoutConfig::load(path).with_context(|| format!("Failed to load layout {}", path))?,
        None => LayoutConfig::default(),
    };
    let settings = load_settings()?;

    info!(pages = layout.pages.len(), ?settings, "Starting launcher");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "D-Pad Launcher",
        options,
        Box::new(move |cc| Box::new(LauncherApp::new(cc, layout, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
