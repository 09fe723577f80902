use maud::{html, Markup};

use super::layout::{vertical_layout, Chrome};
use super::pages::{error_page, loading_page};
use crate::models::Bill;
use crate::utils::{display_date, format_amount};

/// 票据图片可显示的扩展名
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// 票据预览弹窗内容
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiptPreview {
    Image { url: String, width: u32 },
    Unavailable { url: Option<String> },
}

impl ReceiptPreview {
    /// 根据链接判断能否直接显示; 图片宽度取弹窗宽度的一半
    pub fn from_url(url: &str, modal_width: u32) -> Self {
        let url = url.trim();
        if url.is_empty() || url == "null" {
            return ReceiptPreview::Unavailable { url: None };
        }

        let path = url.split(&['?', '#'][..]).next().unwrap_or(url);
        let is_image = path
            .rsplit_once('.')
            .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);

        if is_image {
            ReceiptPreview::Image {
                url: url.to_string(),
                width: modal_width / 2,
            }
        } else {
            ReceiptPreview::Unavailable {
                url: Some(url.to_string()),
            }
        }
    }
}

/// 列表页状态; 优先级 loading > error > bills
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillsState {
    pub loading: bool,
    pub error: Option<String>,
    pub bills: Vec<Bill>,
    pub preview: Option<ReceiptPreview>,
}

impl BillsState {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn loaded(bills: Vec<Bill>) -> Self {
        Self {
            bills,
            ..Self::default()
        }
    }
}

/// 员工账单列表页
pub fn bills_ui(state: &BillsState, chrome: &Chrome) -> String {
    if state.loading {
        return loading_page(chrome);
    }
    if let Some(message) = &state.error {
        return error_page(message, chrome);
    }

    html! {
        div.layout {
            (vertical_layout(120, chrome))
            div.content {
                div.content-header {
                    div.content-title { "Mes notes de frais" }
                    button.btn.btn-primary type="button" data-testid="btn-new-bill" {
                        "Nouvelle note de frais"
                    }
                }
                div #data-table {
                    table #example .table.table-striped style="width:100%" {
                        thead {
                            tr {
                                th { "Type" }
                                th { "Nom" }
                                th { "Date" }
                                th { "Montant" }
                                th { "Statut" }
                                th { "Actions" }
                            }
                        }
                        tbody data-testid="tbody" {
                            @for bill in &state.bills {
                                (row(bill))
                            }
                        }
                    }
                }
            }
            (modal(state.preview.as_ref()))
        }
    }
    .into_string()
}

fn row(bill: &Bill) -> Markup {
    html! {
        tr data-bill-id=(bill.id) {
            td { (bill.expense_type.label()) }
            td { (bill.name) }
            td data-testid="bill-date" { (display_date(&bill.date)) }
            td { (format_amount(bill.amount)) }
            td { span class=(bill.status.css_class()) { (bill.status.label()) } }
            td { (actions(bill)) }
        }
    }
}

fn actions(bill: &Bill) -> Markup {
    html! {
        div.icon-actions {
            div #eye data-testid="icon-eye" data-bill-id=(bill.id) data-bill-url=(bill.file_url) {}
        }
    }
}

/// 票据弹窗, 始终存在; 有预览时显示
pub fn modal(preview: Option<&ReceiptPreview>) -> Markup {
    html! {
        div.modal.fade.show[preview.is_some()] #modaleFile
            data-testid="modaleFile"
            tabindex="-1"
            role="dialog"
            style=[preview.map(|_| "display: block;")] {
            div.modal-dialog.modal-dialog-centered.modal-lg role="document" {
                div.modal-content {
                    div.modal-header {
                        h5.modal-title { "Justificatif" }
                        button.close type="button" data-dismiss="modal" aria-label="Close" {
                            span aria-hidden="true" { "×" }
                        }
                    }
                    div.modal-body {
                        @match preview {
                            Some(ReceiptPreview::Image { url, width }) => {
                                div.bill-proof-container style="text-align: center;" {
                                    img width=(width) src=(url) alt="Bill";
                                }
                            }
                            Some(ReceiptPreview::Unavailable { url }) => {
                                div.bill-proof-container.bill-proof-placeholder style="text-align: center;" {
                                    p { "Aperçu indisponible (PDF ou format non image)" }
                                    @if let Some(url) = url {
                                        a href=(url) target="_blank" rel="noopener" { "Ouvrir le justificatif" }
                                    }
                                }
                            }
                            None => {}
                        }
                    }
                }
            }
        }
    }
}
