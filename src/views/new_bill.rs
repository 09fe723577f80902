use maud::{html, Markup};

use super::layout::{vertical_layout, Chrome};
use crate::models::{ExpenseType, NewBillForm};

/// 新账单表单页状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillState {
    pub values: NewBillForm,
    pub file_name: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

pub fn new_bill_ui(state: &NewBillState, chrome: &Chrome) -> String {
    let values = &state.values;
    html! {
        div.layout {
            (vertical_layout(120, chrome))
            div.content {
                div.content-header {
                    div.content-title { "Envoyer une note de frais" }
                }
                div.form-newbill-container.content-inner {
                    form data-testid="form-new-bill" method="post" {
                        div.row {
                            div.col-md-6 {
                                div.col-half {
                                    label.bold-label for="expense-type" { "Type de dépense" }
                                    select.form-control.blue-border #expense-type name="type" required data-testid="expense-type" {
                                        @for t in ExpenseType::ALL {
                                            option selected[values.expense_type == t.label()] { (t.label()) }
                                        }
                                    }
                                }
                                (field("expense-name", "name", "Nom de la dépense", "text", &values.name, "Vol Paris Londres", false))
                                (field("datepicker", "date", "Date", "date", &values.date, "", true))
                                (field("amount", "amount", "Montant TTC", "number", &values.amount, "348", true))
                                div.col-half-row {
                                    (field("vat", "vat", "TVA", "number", &values.vat, "70", false))
                                    (field("pct", "pct", "%", "number", &values.pct, "20", false))
                                }
                            }
                            div.col-md-6 {
                                div.col-half {
                                    label.bold-label for="commentary" { "Commentaire" }
                                    textarea.form-control.blue-border #commentary name="commentary" data-testid="commentary" rows="3" {
                                        (values.commentary)
                                    }
                                }
                                div.col-half {
                                    label.bold-label for="file" { "Justificatif" }
                                    input.form-control.blue-border #file type="file" name="file" required
                                        accept=".jpg,.jpeg,.png"
                                        data-testid="file"
                                        data-file-name=[state.file_name.as_deref()];
                                    @if let Some(warning) = &state.warning {
                                        p.file-warning data-testid="file-warning" { (warning) }
                                    }
                                }
                            }
                        }
                        @if let Some(error) = &state.error {
                            div.form-error data-testid="error-message" { (error) }
                        }
                        div.row {
                            div.col-md-6 {
                                div.col-half {
                                    button.btn.btn-primary #btn-send-bill type="submit" { "Envoyer" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

fn field(
    test_id: &str,
    name: &str,
    label: &str,
    kind: &str,
    value: &str,
    placeholder: &str,
    required: bool,
) -> Markup {
    html! {
        div.col-half {
            label.bold-label for=(test_id) { (label) }
            input.form-control.blue-border id=(test_id) type=(kind) name=(name)
                data-testid=(test_id)
                value=(value)
                placeholder=(placeholder)
                required[required];
        }
    }
}
