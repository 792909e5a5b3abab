//! Balance lookup view
//!
//! This module contains the balance lookup panel rendering including:
//! - Address input with Enter-to-submit
//! - The list of every lookup made this session (duplicates included)

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use super::super::app::GuiApp;
use super::super::helpers::{abbreviate, format_eth};
use super::super::state::{Intent, Panel};

/// Renders the Get Balance view
pub fn view_get_balance(app: &mut GuiApp, ui: &mut egui::Ui) {
    app.render_section_header(ui, Panel::GetBalance);
    ui.add_space(app.theme.spacing_sm);

    ui.label(RichText::new("Check the ETH balance of any address").color(app.theme.text_secondary));
    ui.add_space(app.theme.spacing_md);

    let pending = app.in_flight_count("get-balance");
    let mut submit = false;
    app.theme.frame_panel().show(ui, |ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut app.state.balance_address)
                .hint_text("Enter Ethereum address")
                .desired_width(440.0)
                .font(egui::TextStyle::Monospace),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.add_space(app.theme.spacing_sm);
        ui.horizontal(|ui| {
            if ui
                .add(app.theme.button_primary("Check Balance"))
                .on_hover_text("GET /get-balance")
                .clicked()
            {
                submit = true;
            }

            if pending > 0 {
                ui.label(RichText::new(format!("[..] Checking ({})", pending)).color(app.theme.accent));
            }
        });
    });

    if submit {
        app.dispatch(Intent::FetchBalance);
    }

    if app.state.balances().is_empty() {
        return;
    }

    ui.add_space(app.theme.spacing_lg);
    ui.label(RichText::new("Checked Balances").size(16.0).strong());
    ui.add_space(app.theme.spacing_xs);

    let mut copied: Option<String> = None;
    let records = app.state.balances();

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(70.0))
        .column(Column::remainder().at_least(320.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::exact(40.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Number");
            });
            header.col(|ui| {
                ui.strong("Address");
            });
            header.col(|ui| {
                ui.strong("Balance");
            });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            for (index, record) in records.iter().enumerate() {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label((index + 1).to_string());
                    });
                    row.col(|ui| {
                        ui.monospace(&record.address);
                    });
                    row.col(|ui| {
                        ui.label(format_eth(&record.balance));
                    });
                    row.col(|ui| {
                        if ui
                            .add(egui::Button::new("[#]").small())
                            .on_hover_text("Copy address")
                            .clicked()
                        {
                            copied = Some(record.address.clone());
                        }
                    });
                });
            }
        });

    if let Some(address) = copied {
        ui.output_mut(|o| o.copied_text = address.clone());
        app.state
            .notifications
            .success(format!("Copied: {}", abbreviate(&address)));
    }
}
