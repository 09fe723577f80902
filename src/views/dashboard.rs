use maud::{html, Markup};

use super::bills::{modal, BillsState};
use super::layout::{vertical_layout, Chrome};
use super::pages::{error_page, loading_page};
use crate::models::{Bill, BillStatus};
use crate::utils::{display_date, format_amount};

fn section_title(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Validé",
        BillStatus::Refused => "Refusé",
    }
}

/// 管理员总览: 按状态分组的只读账单卡片
pub fn dashboard_ui(state: &BillsState, chrome: &Chrome) -> String {
    if state.loading {
        return loading_page(chrome);
    }
    if let Some(message) = &state.error {
        return error_page(message, chrome);
    }

    html! {
        div.layout {
            (vertical_layout(120, chrome))
            div.dashboard-content {
                div.bills-feed {
                    @for (idx, status) in BillStatus::ALL.iter().enumerate() {
                        @let bills: Vec<&Bill> = state.bills.iter().filter(|b| b.status == *status).collect();
                        div.status-bills-header data-testid={ "status-bills-header" (idx + 1) } {
                            h3 { (section_title(*status)) " (" (bills.len()) ")" }
                        }
                        div.status-bills-container id={ "status-bills-container" (idx + 1) } {
                            @for bill in bills {
                                (card(bill))
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

fn card(bill: &Bill) -> Markup {
    html! {
        div.bill-card id={ "open-bill" (bill.id) } data-testid={ "open-bill" (bill.id) } {
            div.bill-card-name-container {
                div.bill-card-grey { (bill.email) }
                span.bill-card-grey { "... " }
            }
            div.name-price-container {
                span { (bill.name) }
                span { (format_amount(bill.amount)) }
            }
            div.date-type-container {
                span { (display_date(&bill.date)) }
                span { (bill.expense_type.label()) }
            }
            div.icon-actions {
                div data-testid="icon-eye" data-bill-id=(bill.id) data-bill-url=(bill.file_url) {}
            }
        }
    }
}
