//! Wallet generation view
//!
//! A single button asks the backend for a fresh wallet; every wallet returned this session
//! is listed below it, numbered in the order the responses arrived.

use eframe::egui::{self, RichText};

use super::super::app::GuiApp;
use super::super::helpers::{abbreviate, format_eth, mask_secret};
use super::super::state::{Intent, Panel};

/// Renders the Generate Wallet view
pub fn view_generate_wallet(app: &mut GuiApp, ui: &mut egui::Ui) {
    app.render_section_header(ui, Panel::GenerateWallet);
    ui.add_space(app.theme.spacing_sm);

    ui.label(
        RichText::new("Ask the backend to create a new wallet. Keys are shown once and never saved.")
            .color(app.theme.text_secondary),
    );
    ui.add_space(app.theme.spacing_md);

    // Each click dispatches its own request, even while earlier ones are in flight
    let pending = app.in_flight_count("generate-wallet");
    let mut clicked = false;
    ui.horizontal(|ui| {
        clicked = ui
            .add(app.theme.button_primary("Generate Wallet"))
            .on_hover_text("GET /generate-wallet")
            .clicked();
        if pending > 0 {
            ui.label(RichText::new(format!("[..] Generating ({})", pending)).color(app.theme.accent));
        }
    });
    if clicked {
        app.dispatch(Intent::GenerateWallet);
    }

    if app.state.wallets().is_empty() {
        return;
    }

    ui.add_space(app.theme.spacing_lg);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Generated Wallets").size(16.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(&mut app.show_private_keys, "Show private keys");
        });
    });
    ui.add_space(app.theme.spacing_xs);

    let mut copied: Option<(String, &'static str)> = None;
    let show_keys = app.show_private_keys;

    for (index, wallet) in app.state.wallets().iter().enumerate() {
        app.theme.frame_panel().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("Wallet Number: {}", index + 1))
                    .strong()
                    .color(app.theme.primary),
            );

            egui::Grid::new(("wallet_grid", index))
                .num_columns(3)
                .spacing([app.theme.spacing_md, app.theme.spacing_xs])
                .show(ui, |ui| {
                    ui.label(RichText::new("Address:").color(app.theme.text_secondary));
                    ui.monospace(&wallet.address);
                    if ui
                        .add(egui::Button::new("[#]").small())
                        .on_hover_text("Copy address")
                        .clicked()
                    {
                        copied = Some((wallet.address.clone(), "address"));
                    }
                    ui.end_row();

                    ui.label(RichText::new("Private Key:").color(app.theme.text_secondary));
                    if show_keys {
                        ui.monospace(&wallet.private_key);
                    } else {
                        ui.monospace(mask_secret(&wallet.private_key));
                    }
                    if ui
                        .add(egui::Button::new("[#]").small())
                        .on_hover_text("Copy private key")
                        .clicked()
                    {
                        copied = Some((wallet.private_key.clone(), "private key"));
                    }
                    ui.end_row();

                    ui.label(RichText::new("Balance:").color(app.theme.text_secondary));
                    ui.label(format_eth(&wallet.balance));
                    ui.end_row();
                });
        });
        ui.add_space(app.theme.spacing_xs);
    }

    if let Some((text, what)) = copied {
        ui.output_mut(|o| o.copied_text = text.clone());
        let shown = if what == "address" { abbreviate(&text) } else { mask_secret(&text) };
        app.state
            .notifications
            .success(format!("Copied {}: {}", what, shown));
    }
}
