use billed_app::containers::EyeClick;
use billed_app::error::StoreError;
use billed_app::models::{FileSelection, NewBillForm, Role, SessionRecord};
use billed_app::routes::Route;
use billed_app::session::USER_KEY;
use billed_app::store::KeyValueStorage;
use billed_app::views::NavIcon;
use billed_app::{AppConfig, MemoryStorage, MockStore, Router, Session, UiEvent};
use std::sync::Arc;

struct Harness {
    store: Arc<MockStore>,
    storage: Arc<MemoryStorage>,
    router: Router,
}

fn harness(user: Option<&str>) -> Harness {
    let store = Arc::new(MockStore::with_fixtures());
    let storage = Arc::new(MemoryStorage::new());
    if let Some(user) = user {
        storage.set(USER_KEY, user.to_string());
    }
    let router = Router::new(
        store.clone(),
        Session::new(storage.clone()),
        &AppConfig::default(),
    );
    Harness {
        store,
        storage,
        router,
    }
}

fn filled_form() -> NewBillForm {
    NewBillForm {
        expense_type: "Hôtel et logement".to_string(),
        name: "encore".to_string(),
        date: "2004-04-04".to_string(),
        amount: "400".to_string(),
        vat: "80".to_string(),
        pct: "20".to_string(),
        commentary: "séminaire billed".to_string(),
    }
}

#[tokio::test]
async fn employee_bills_page_highlights_window_icon_only() {
    let mut h = harness(Some(r#"{"type":"Employee"}"#));
    let screen = h.router.navigate("#employee/bills").await;

    assert_eq!(screen.location, "#employee/bills");
    assert_eq!(screen.active, Some(NavIcon::Window));
    assert!(screen
        .content
        .contains(r#"<div id="layout-icon1" class="active-icon" data-testid="icon-window""#));
    assert!(screen
        .content
        .contains(r#"<div id="layout-icon2" data-testid="icon-mail""#));
}

#[tokio::test]
async fn employee_new_bill_page_highlights_mail_icon() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    let screen = h.router.navigate("#employee/bill/new").await;

    assert_eq!(screen.active, Some(NavIcon::Mail));
    assert!(screen.content.contains(r#"data-testid="form-new-bill""#));
}

#[tokio::test]
async fn missing_session_redirects_to_login() {
    let mut h = harness(None);
    let screen = h.router.navigate("#employee/bills").await;
    assert_eq!(screen.location, "/");
    assert!(screen.content.contains("form-employee"));
    assert_eq!(h.store.list_calls(), 0);
}

#[tokio::test]
async fn unparseable_session_redirects_to_login() {
    let mut h = harness(Some("{oops"));
    h.router.navigate("#admin/dashboard").await;
    assert_eq!(h.router.current_route(), Route::Login);
}

#[tokio::test]
async fn unknown_path_falls_back_to_home() {
    let mut h = harness(Some(r#"{"type":"Admin","email":"a@a"}"#));
    let screen = h.router.navigate("#nowhere").await;
    assert_eq!(screen.location, "#admin/dashboard");
    assert!(screen.content.contains("bills-feed"));
}

#[tokio::test]
async fn admin_dashboard_fetches_all_bills() {
    let mut h = harness(Some(r#"{"type":"Admin","email":"a@a"}"#));
    let screen = h.router.navigate("#admin/dashboard").await;
    assert_eq!(screen.active, None);
    assert!(screen.content.contains("Refusé (2)"));
    assert!(!screen.content.contains("Loading..."));
    assert_eq!(h.store.list_calls(), 1);
}

#[tokio::test]
async fn employee_list_is_anti_chronological() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    let content = h.router.navigate("#employee/bills").await.content.clone();

    let positions: Vec<usize> = ["4 Avr. 04", "3 Mar. 03", "2 Fév. 02", "1 Jan. 01"]
        .iter()
        .map(|d| content.find(d).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn backend_failures_render_error_pages() {
    let mut h = harness(Some(r#"{"type":"Admin","email":"a@a"}"#));

    h.store.fail_next_list(StoreError::NotFound).await;
    let screen = h.router.navigate("#admin/dashboard").await;
    assert!(screen.content.contains("Erreur 404"));

    h.store
        .fail_next_list(StoreError::ServerError("down".to_string()))
        .await;
    let screen = h.router.navigate("#admin/dashboard").await;
    assert!(screen.content.contains("Erreur 500"));
}

#[tokio::test]
async fn click_new_bill_navigates_to_form() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bills").await;

    let screen = h.router.dispatch(UiEvent::ClickNewBill).await;
    assert_eq!(screen.location, "#employee/bill/new");
}

#[tokio::test]
async fn click_eye_opens_receipt_modal() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bills").await;

    let screen = h
        .router
        .dispatch(UiEvent::ClickIconEye(EyeClick {
            bill_id: "47qAXb6fIm2zOKkLzMro".to_string(),
            file_url: "https://test.storage.tld/preview.jpg".to_string(),
        }))
        .await;
    assert!(screen.content.contains("modaleFile"));
    assert!(screen
        .content
        .contains(r#"<img width="400" src="https://test.storage.tld/preview.jpg" alt="Bill">"#));

    let screen = h.router.dispatch(UiEvent::CloseModal).await;
    assert!(!screen.content.contains("bill-proof-container"));
}

#[tokio::test]
async fn invalid_upload_is_cleared_without_request() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bill/new").await;

    let file = FileSelection::new("image.mp4", "image/mp4", b"content".to_vec());
    let screen = h.router.dispatch(UiEvent::ChangeFile(file)).await;
    assert!(screen.content.contains(r#"data-testid="file-warning""#));
    assert!(!screen.content.contains("data-file-name"));
    assert_eq!(h.store.upload_calls(), 0);
}

#[tokio::test]
async fn valid_upload_is_kept() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bill/new").await;

    let file = FileSelection::new("image.jpg", "image/jpg", b"content".to_vec());
    let screen = h.router.dispatch(UiEvent::ChangeFile(file)).await;
    assert!(screen.content.contains(r#"data-file-name="image.jpg""#));
    assert!(!screen.content.contains("file-warning"));
    assert_eq!(h.store.upload_calls(), 1);
}

#[tokio::test]
async fn submitting_new_bill_creates_once_and_returns_to_list() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bill/new").await;
    let file = FileSelection::new("image.jpg", "image/jpg", b"content".to_vec());
    h.router.dispatch(UiEvent::ChangeFile(file)).await;

    let screen = h.router.dispatch(UiEvent::SubmitNewBill(filled_form())).await;
    assert_eq!(screen.location, "#employee/bills");
    assert_eq!(h.store.create_calls(), 1);
    assert_eq!(h.store.len().await, 5);
}

#[tokio::test]
async fn submitting_empty_form_stays_on_form() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bill/new").await;

    let screen = h
        .router
        .dispatch(UiEvent::SubmitNewBill(NewBillForm::default()))
        .await;
    assert_eq!(screen.location, "#employee/bill/new");
    assert!(screen.content.contains("form-new-bill"));
    assert!(screen.content.contains(r#"data-testid="error-message""#));
    assert_eq!(h.store.create_calls(), 0);
}

#[tokio::test]
async fn failed_creation_keeps_user_on_form() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bill/new").await;
    let file = FileSelection::new("image.png", "image/png", vec![0]);
    h.router.dispatch(UiEvent::ChangeFile(file)).await;

    h.store.fail_next_create(StoreError::NotFound).await;
    let screen = h.router.dispatch(UiEvent::SubmitNewBill(filled_form())).await;
    assert_eq!(screen.location, "#employee/bill/new");
    assert!(screen.content.contains("Erreur 404"));
}

#[tokio::test]
async fn login_stores_record_and_opens_home() {
    let mut h = harness(None);
    h.router.navigate("/").await;

    let screen = h
        .router
        .dispatch(UiEvent::Login {
            role: Role::Employee,
            email: "a@a".to_string(),
        })
        .await;
    assert_eq!(screen.location, "#employee/bills");

    let raw = h.storage.get(USER_KEY).unwrap();
    let record: SessionRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(record, SessionRecord::new(Role::Employee, "a@a"));

    let screen = h.router.dispatch(UiEvent::Logout).await;
    assert_eq!(screen.location, "/");
    assert!(h.storage.get(USER_KEY).is_none());
}

#[tokio::test]
async fn employee_cannot_open_dashboard() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    let screen = h.router.navigate("#admin/dashboard").await;
    assert_eq!(screen.location, "#employee/bills");
}

#[tokio::test]
async fn events_for_unmounted_pages_are_ignored() {
    let mut h = harness(Some(r#"{"type":"Employee","email":"a@a"}"#));
    h.router.navigate("#employee/bill/new").await;
    let screen = h.router.dispatch(UiEvent::ClickNewBill).await;
    assert_eq!(screen.location, "#employee/bill/new");
}
