//! Send transaction view

use eframe::egui::{self, RichText};

use super::super::app::GuiApp;
use super::super::helpers::abbreviate;
use super::super::state::{Intent, Panel};
use super::super::widgets::ReceiptView;

/// Renders the Send Transaction view
pub fn view_send_transaction(app: &mut GuiApp, ui: &mut egui::Ui) {
    app.render_section_header(ui, Panel::SendTransaction);
    ui.add_space(app.theme.spacing_sm);

    ui.label(
        RichText::new("The backend signs and broadcasts the transfer, then waits for the receipt.")
            .color(app.theme.text_secondary),
    );
    ui.add_space(app.theme.spacing_md);

    let pending = app.in_flight_count("send-transaction");
    let show_key = app.show_private_keys;
    let mut send = false;

    app.theme.frame_panel().show(ui, |ui| {
        egui::Grid::new("send_tx_grid")
            .num_columns(2)
            .spacing([app.theme.spacing_md, app.theme.spacing_sm])
            .show(ui, |ui| {
                ui.label("Sender private key:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.state.sender_private_key)
                        .hint_text("Sender Private Key")
                        .password(!show_key)
                        .desired_width(440.0)
                        .font(egui::TextStyle::Monospace),
                );
                ui.end_row();

                ui.label("Receiver address:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.state.receiver_address)
                        .hint_text("Receiver Address")
                        .desired_width(440.0)
                        .font(egui::TextStyle::Monospace),
                );
                ui.end_row();
            });

        ui.add_space(app.theme.spacing_sm);
        ui.horizontal(|ui| {
            if ui
                .add(app.theme.button_primary("Send Transaction"))
                .on_hover_text("POST /send-transaction")
                .clicked()
            {
                send = true;
            }
            if pending > 0 {
                ui.label(
                    RichText::new(format!("[..] Waiting for receipt ({})", pending)).color(app.theme.accent),
                );
            }
        });
    });
    ui.checkbox(&mut app.show_private_keys, "Show private key");

    if send {
        app.dispatch(Intent::SendTransaction);
    }

    let Some(result) = app.state.transaction().cloned() else {
        return;
    };

    ui.add_space(app.theme.spacing_lg);
    ui.label(RichText::new("Last Transaction").size(16.0).strong());
    ui.add_space(app.theme.spacing_xs);

    let response = ReceiptView::new(&result).show(ui, &app.theme);

    if response.copy_hash_clicked {
        ui.output_mut(|o| o.copied_text = result.tx_hash.clone());
        app.state
            .notifications
            .success(format!("Copied: {}", abbreviate(&result.tx_hash)));
    }
    if response.print_clicked {
        app.print_receipt();
    }
}
