//! Receipt card for the last submitted transaction

use crate::gui::theme::AppTheme;
use crate::receipt::receipt_fields;
use crate::types::TransactionResult;
use eframe::egui::{self, RichText};

/// What the user clicked inside the card this frame
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceiptResponse {
    pub print_clicked: bool,
    pub copy_hash_clicked: bool,
}

/// Displays the transaction hash, the receipt fields when present, and a print button
pub struct ReceiptView<'a> {
    result: &'a TransactionResult,
}

impl<'a> ReceiptView<'a> {
    pub fn new(result: &'a TransactionResult) -> Self {
        Self { result }
    }

    pub fn show(self, ui: &mut egui::Ui, theme: &AppTheme) -> ReceiptResponse {
        let mut response = ReceiptResponse::default();

        theme.frame_panel().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Transaction Hash:").color(theme.text_secondary));
                ui.monospace(&self.result.tx_hash);
                if ui
                    .add(egui::Button::new("[#]").small())
                    .on_hover_text("Copy transaction hash")
                    .clicked()
                {
                    response.copy_hash_clicked = true;
                }
            });

            match &self.result.receipt {
                Some(receipt) => {
                    ui.add_space(theme.spacing_sm);
                    egui::Grid::new("receipt_grid")
                        .num_columns(2)
                        .spacing([theme.spacing_md, theme.spacing_xs])
                        .show(ui, |ui| {
                            for (label, value) in receipt_fields(receipt) {
                                ui.label(RichText::new(format!("{}:", label)).color(theme.text_secondary));
                                let text = RichText::new(value).monospace();
                                let text = if label == "Status" {
                                    let color = if receipt.status.eq_ignore_ascii_case("success") {
                                        theme.success
                                    } else {
                                        theme.error
                                    };
                                    text.color(color)
                                } else {
                                    text
                                };
                                ui.label(text);
                                ui.end_row();
                            }
                        });
                }
                None => {
                    ui.label(
                        RichText::new("The backend returned no receipt for this transaction.")
                            .small()
                            .color(theme.text_secondary),
                    );
                }
            }

            ui.add_space(theme.spacing_sm);
            let can_print = self.result.receipt.is_some();
            if ui
                .add_enabled(can_print, theme.button_primary("Print Receipt"))
                .on_hover_text("Open a printable receipt in your browser")
                .clicked()
            {
                response.print_clicked = true;
            }
        });

        response
    }
}
