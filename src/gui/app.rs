//! Main GUI application module
//!
//! Contains the GuiApp struct, the frame loop, and the overlays drawn above the panels
//! (toasts, confirmation overlay, blocking alert, settings window).

use crate::{
    config::{self, Config},
    gateway::{self, Command, GatewayError, Outcome},
    receipt,
    user_settings::UserSettings,
};
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::path::Path;
use std::time::{Duration, Instant};

use super::async_job::AsyncJob;
use super::state::{Intent, Panel, ViewState};
use super::theme::{configure_style, AppTheme};

/// A dispatched gateway call waiting for its response
pub(crate) struct InFlightCall {
    pub(crate) command: Command,
    pub(crate) job: AsyncJob<Outcome>,
}

/// Editing state for the settings window
#[derive(Default)]
pub(crate) struct SettingsFormState {
    pub(crate) backend_url: String,
    pub(crate) receipt_directory: String,
    pub(crate) toast_duration_ms: u64,
    pub(crate) error: Option<String>,
    /// Environment-or-built-in origin shown after "Defaults"; saving it unchanged clears the override
    pub(crate) backend_default: Option<String>,
}

fn normalized_origin(input: &str) -> Result<String> {
    let url = config::validate_backend_url(input)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

impl SettingsFormState {
    pub(crate) fn populate_from(&mut self, settings: &UserSettings, config: &Config) {
        self.backend_url = config.backend_url.clone();
        self.receipt_directory = settings
            .receipt_directory
            .clone()
            .unwrap_or_else(|| config.receipt_directory.clone());
        self.toast_duration_ms = settings.toast_duration_ms;
        self.error = None;
        self.backend_default = None;
    }

    /// Reset the form to what an empty settings file would produce
    pub(crate) fn reset_to_defaults(&mut self) {
        let defaults = UserSettings::default();
        let config = Config::from_settings(&defaults);
        self.populate_from(&defaults, &config);
        self.backend_default = Some(config.backend_url);
    }

    /// Validate the form and write it into `settings`.
    ///
    /// A typed origin is always stored as an explicit override. Only saving right after
    /// "Defaults", with the origin left as shown, hands control back to the environment.
    pub(crate) fn apply_to(&self, settings: &mut UserSettings) -> Result<()> {
        let url = normalized_origin(&self.backend_url)?;
        if self.toast_duration_ms == 0 {
            return Err(anyhow!("Toast duration must be greater than zero"));
        }
        let keep_default = self
            .backend_default
            .as_deref()
            .and_then(|default| normalized_origin(default).ok())
            .is_some_and(|default| default == url);
        if keep_default {
            settings.set_backend_url(String::new());
        } else {
            settings.set_backend_url(url);
        }
        let dir = self.receipt_directory.trim();
        settings.receipt_directory = if dir.is_empty() { None } else { Some(dir.to_string()) };
        settings.toast_duration_ms = self.toast_duration_ms;
        Ok(())
    }
}

pub struct GuiApp {
    pub(crate) config: Config,
    pub(crate) user_settings: UserSettings,
    pub(crate) theme: AppTheme,
    pub(crate) state: ViewState,
    pub(crate) in_flight: Vec<InFlightCall>,
    pub(crate) show_private_keys: bool,
    pub(crate) show_settings: bool,
    pub(crate) settings_form: SettingsFormState,
}

impl GuiApp {
    fn new(config: Config, user_settings: UserSettings, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        let state = ViewState::new(config.toast_duration);

        Self {
            config,
            user_settings,
            theme,
            state,
            in_flight: Vec::new(),
            show_private_keys: false,
            show_settings: false,
            settings_form: SettingsFormState::default(),
        }
    }

    /// Validate an intent and, if it passes, start its gateway call in the background.
    /// Calls are never coalesced: every accepted intent gets its own request.
    pub(crate) fn dispatch(&mut self, intent: Intent) {
        let Some(command) = self.state.request(intent) else {
            return;
        };
        tracing::debug!("Dispatching {}", command.label());

        let base_url = self.config.backend_url.clone();
        let job_command = command.clone();
        let job = AsyncJob::spawn(command.label(), move || async move {
            Ok(gateway::dispatch(&base_url, job_command).await)
        });
        self.in_flight.push(InFlightCall { command, job });
    }

    /// Number of calls with the given label still waiting for a response
    pub(crate) fn in_flight_count(&self, label: &str) -> usize {
        self.in_flight
            .iter()
            .filter(|call| call.command.label() == label)
            .count()
    }

    fn poll_jobs(&mut self) {
        let mut finished = Vec::new();
        self.in_flight.retain_mut(|call| match call.job.poll() {
            Some(Ok(outcome)) => {
                finished.push(outcome);
                false
            }
            Some(Err(e)) => {
                tracing::error!("{} job failed: {}", call.job.label(), e);
                finished.push(call.command.failed(GatewayError::Worker(e.to_string())));
                false
            }
            None => true,
        });

        // Applied in the order the responses were observed
        for outcome in finished {
            self.state.apply(outcome);
        }
    }

    pub(crate) fn print_receipt(&mut self) {
        let dir = Path::new(&self.config.receipt_directory);
        match receipt::print_receipt(dir, self.state.transaction()) {
            Ok(Some(path)) => {
                tracing::info!("Opened receipt {:?}", path);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Error printing receipt: {}", e);
                self.state.notifications.error(format!("Failed to print receipt: {}", e));
            }
        }
    }

    /// Render a consistent section header
    pub(crate) fn render_section_header(&self, ui: &mut egui::Ui, panel: Panel) {
        let header_text = self.theme.section_header_text(panel.icon(), panel.title());
        ui.label(RichText::new(&header_text).size(22.0).strong().color(self.theme.text_primary));
        ui.label(RichText::new("-".repeat(48)).size(12.0).color(self.theme.primary));
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(self.theme.spacing_sm);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("ETH-TX").strong().color(self.theme.primary));
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(12.0)
                        .color(self.theme.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(self.theme.button_small("[*] Settings"))
                        .on_hover_text("Backend and display settings")
                        .clicked()
                    {
                        self.settings_form.populate_from(&self.user_settings, &self.config);
                        self.show_settings = true;
                    }

                    ui.add_space(self.theme.spacing_sm);
                    ui.label(
                        RichText::new(&self.config.backend_url)
                            .monospace()
                            .color(self.theme.text_secondary),
                    )
                    .on_hover_text("Backend origin");

                    let pending = self.in_flight.len();
                    if pending > 0 {
                        ui.label(
                            RichText::new(format!("[..] {} request(s) in flight", pending))
                                .size(12.0)
                                .color(self.theme.accent),
                        );
                    }
                });
            });
            ui.add_space(self.theme.spacing_sm);
        });
    }

    fn render_nav(&mut self, ctx: &egui::Context, enabled: bool) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(190.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.surface)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.add_space(self.theme.spacing_md);
                    for panel in Panel::ALL {
                        let selected = self.state.panel() == panel;
                        ui.horizontal(|ui| {
                            // Left accent indicator for selected item
                            if selected {
                                let (rect, _) =
                                    ui.allocate_exact_size(egui::vec2(3.0, 20.0), egui::Sense::hover());
                                ui.painter().rect_filled(rect, 0.0, self.theme.primary);
                            } else {
                                ui.add_space(3.0 + ui.spacing().item_spacing.x);
                            }
                            let color = if selected {
                                self.theme.text_primary
                            } else {
                                self.theme.text_secondary
                            };
                            let label = format!("{} {}", panel.icon(), panel.title());
                            if ui
                                .add(
                                    egui::Button::new(RichText::new(label).size(14.0).color(color))
                                        .fill(egui::Color32::TRANSPARENT)
                                        .stroke(egui::Stroke::NONE),
                                )
                                .clicked()
                            {
                                self.state.switch_panel(panel);
                            }
                        });
                        ui.add_space(self.theme.spacing_xs);
                    }
                });
            });
    }

    fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.state.notifications.is_empty() {
            return;
        }
        let now = Instant::now();
        let ttl = self.state.notifications.ttl();
        let mut dismissed = Vec::new();

        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 64.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(340.0);
                for entry in self.state.notifications.iter() {
                    let color = self.theme.severity_color(entry.severity);
                    let response = egui::Frame::none()
                        .fill(self.theme.surface)
                        .rounding(4.0)
                        .stroke(egui::Stroke::new(1.0, color))
                        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(entry.severity.tag()).strong().color(color));
                                ui.label(RichText::new(&entry.message).color(self.theme.text_primary));
                            });
                            let remaining = 1.0 - entry.progress(now, ttl);
                            ui.add(egui::ProgressBar::new(remaining).desired_height(2.0).fill(color));
                        })
                        .response
                        .interact(egui::Sense::click())
                        .on_hover_text("Click to dismiss");
                    if response.clicked() {
                        dismissed.push(entry.id);
                    }
                    ui.add_space(self.theme.spacing_xs);
                }
            });

        for id in dismissed {
            self.state.notifications.dismiss(id);
        }
    }

    fn render_overlay(&mut self, ctx: &egui::Context) {
        if !self.state.overlay_visible() {
            return;
        }
        let tx_hash = self
            .state
            .transaction()
            .map(|tx| tx.tx_hash.clone())
            .unwrap_or_default();

        let mut close = false;
        egui::Window::new("Transaction Successful!")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new("Transaction Hash:").color(self.theme.text_secondary));
                ui.monospace(&tx_hash);
                ui.add_space(self.theme.spacing_sm);
                if ui.add(self.theme.button_primary("Close")).clicked() {
                    close = true;
                }
            });
        if close {
            self.state.close_overlay();
        }
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.alert().map(str::to_string) else {
            return;
        };

        let queued = self.state.pending_alerts().saturating_sub(1);
        let mut dismiss = false;
        egui::Window::new("Alert")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, -40.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(&message).color(self.theme.error));
                if queued > 0 {
                    ui.label(
                        RichText::new(format!("{} more after this one", queued))
                            .small()
                            .color(self.theme.text_secondary),
                    );
                }
                ui.add_space(self.theme.spacing_sm);
                if ui.add(self.theme.button_primary("OK")).clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    dismiss = true;
                }
            });
        if dismiss {
            self.state.dismiss_alert();
        }
    }

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = true;
        let mut save = false;
        let mut reset = false;
        egui::Window::new("[*] Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(460.0)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([self.theme.spacing_md, self.theme.spacing_sm])
                    .show(ui, |ui| {
                        ui.label("Backend URL:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings_form.backend_url)
                                .hint_text(config::DEFAULT_BACKEND_URL)
                                .desired_width(300.0),
                        );
                        ui.end_row();

                        ui.label("Receipt folder:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings_form.receipt_directory)
                                .desired_width(300.0),
                        );
                        ui.end_row();

                        ui.label("Toast duration:");
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::DragValue::new(&mut self.settings_form.toast_duration_ms)
                                    .clamp_range(250..=30_000)
                                    .speed(50),
                            );
                            ui.label(RichText::new("ms").color(self.theme.text_secondary));
                        });
                        ui.end_row();
                    });

                if let Some(err) = &self.settings_form.error {
                    ui.add_space(self.theme.spacing_xs);
                    ui.colored_label(self.theme.error, err);
                }

                ui.add_space(self.theme.spacing_sm);
                ui.label(
                    RichText::new(format!("Settings file: {}", UserSettings::settings_path_display()))
                        .small()
                        .color(self.theme.text_secondary),
                );
                ui.add_space(self.theme.spacing_sm);
                ui.horizontal(|ui| {
                    if ui.add(self.theme.button_primary("Save")).clicked() {
                        save = true;
                    }
                    if ui.add(self.theme.button_small("Defaults")).clicked() {
                        reset = true;
                    }
                });
            });

        if reset {
            self.settings_form.reset_to_defaults();
        }
        if save {
            self.save_settings();
        }
        if !open {
            self.show_settings = false;
        }
    }

    fn save_settings(&mut self) {
        let mut settings = self.user_settings.clone();
        if let Err(e) = self.settings_form.apply_to(&mut settings) {
            self.settings_form.error = Some(e.to_string());
            return;
        }
        let saved = settings.save();
        self.commit_settings(settings, saved);
    }

    /// Apply validated settings for this session and report whether they were persisted
    fn commit_settings(&mut self, settings: UserSettings, saved: Result<()>) {
        self.config = Config::from_settings(&settings);
        self.state.notifications.set_ttl(self.config.toast_duration);
        self.user_settings = settings;
        self.settings_form.error = None;
        self.show_settings = false;

        match saved {
            Ok(()) => {
                self.state
                    .notifications
                    .success(format!("Backend set to {}", self.config.backend_url));
            }
            Err(e) => {
                tracing::warn!("Failed to save settings: {}", e);
                self.state.notifications.error(format!(
                    "Settings applied for this session only, saving failed: {}",
                    e
                ));
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();
        self.state.notifications.prune(Instant::now());

        // Panels are inert while a blocking dialog is open
        let blocked = self.state.alert().is_some() || self.state.overlay_visible();

        self.render_top_bar(ctx);
        self.render_nav(ctx, !blocked);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.add_space(self.theme.spacing_md);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.state.panel() {
                        Panel::GenerateWallet => super::views::view_generate_wallet(self, ui),
                        Panel::GetBalance => super::views::view_get_balance(self, ui),
                        Panel::SendTransaction => super::views::view_send_transaction(self, ui),
                    });
            });
        });

        self.render_overlay(ctx);
        self.render_alert(ctx);
        self.render_settings_window(ctx);
        self.render_toasts(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub fn launch(config: Config, user_settings: UserSettings) -> Result<()> {
    tracing::info!("Using backend {}", config.backend_url);

    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), user_settings.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1040.0, 700.0])
        .with_min_inner_size([720.0, 480.0]);

    let native_options = NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native("ETH-TX", native_options, Box::new(app_creator))
        .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
