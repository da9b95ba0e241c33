//! End-to-end tests of the optimistic pick toggle against a scripted
//! wishlist service.

use repick_api::types::ProductListResponseDto;
use repick_api::{ApiError, WishService};
use repick_app::views::{SessionStore, UserProfile, WishStore};
use repick_app::workflows::pick::Screen;
use repick_app::workflows::PickController;
use repick_core::{ProductId, UserId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Scripted wishlist backend: counts calls, optionally fails, optionally
/// holds requests until the test releases them.
#[derive(Default)]
struct ScriptedWish {
    calls: AtomicUsize,
    fail: AtomicBool,
    hold: AtomicBool,
    gate: Notify,
}

impl ScriptedWish {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn hold_requests(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }

    fn release(&self) {
        self.gate.notify_one();
    }

    async fn run(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hold.load(Ordering::SeqCst) {
            self.gate.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            Err(ApiError::network("connection reset"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl WishService for ScriptedWish {
    async fn add_like(&self, _token: &str, _product: ProductId) -> Result<(), ApiError> {
        self.run().await
    }

    async fn remove_like(&self, _token: &str, _product: ProductId) -> Result<(), ApiError> {
        self.run().await
    }

    async fn my_likes(
        &self,
        _token: &str,
        _cursor: Option<&str>,
        _limit: u32,
    ) -> Result<ProductListResponseDto, ApiError> {
        Ok(ProductListResponseDto {
            items: vec![],
            next_cursor: None,
        })
    }

    async fn like_status(&self, _token: &str, _product: ProductId) -> Result<bool, ApiError> {
        Ok(false)
    }
}

const P42: ProductId = ProductId(42);

fn signed_in_session() -> SessionStore {
    let session = SessionStore::new();
    session.log_in(
        UserProfile {
            id: UserId(1),
            nickname: "체리".to_string(),
            email: "fan@example.com".to_string(),
            profile_image: None,
        },
        "tok".to_string(),
    );
    session
}

fn controller(
    session: &SessionStore,
    wishes: &WishStore,
    service: &Arc<ScriptedWish>,
) -> PickController {
    PickController::new(
        P42,
        false,
        Some(10),
        wishes.clone(),
        session.clone(),
        Arc::clone(service) as Arc<dyn WishService>,
    )
}

#[tokio::test]
async fn optimistic_state_is_visible_before_the_request_resolves() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    service.hold_requests();
    let pick = controller(&signed_in_session(), &wishes, &service);

    tokio::join!(pick.toggle_pick(), async {
        // Runs once the toggle is parked on the wire: the optimistic
        // mutation must already be visible.
        assert!(wishes.is_liked(P42));
        assert_eq!(wishes.like_count(P42), Some(11));
        assert!(pick.is_toggling());
        service.release();
    });

    // Success: the optimistic value stands as final.
    assert!(wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(11));
    assert!(!pick.is_toggling());
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn failed_toggle_rolls_back_to_the_pre_toggle_state() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    service.fail_next();
    let pick = controller(&signed_in_session(), &wishes, &service);

    pick.toggle_pick().await;

    assert!(!wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(10));
    assert!(!pick.is_toggling());
}

#[tokio::test]
async fn failed_unlike_rolls_back_to_liked() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    let session = signed_in_session();
    let pick = PickController::new(
        P42,
        true,
        Some(10),
        wishes.clone(),
        session.clone(),
        Arc::clone(&service) as Arc<dyn WishService>,
    );

    service.fail_next();
    pick.toggle_pick().await;

    assert!(wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(10));
}

#[tokio::test]
async fn unauthenticated_toggle_opens_the_login_prompt_without_a_request() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    let session = SessionStore::new();
    let pick = controller(&session, &wishes, &service);

    pick.toggle_pick().await;

    assert!(!wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(10));
    assert!(pick.login_alert_open());
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn login_prompt_close_and_confirm() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    let pick = controller(&SessionStore::new(), &wishes, &service);

    pick.toggle_pick().await;
    assert!(pick.login_alert_open());

    pick.close_login_alert();
    assert!(!pick.login_alert_open());

    pick.toggle_pick().await;
    assert_eq!(pick.confirm_login(), Screen::Login);
    assert!(!pick.login_alert_open());
}

#[tokio::test]
async fn rapid_double_click_issues_exactly_one_request() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    service.hold_requests();
    let pick = controller(&signed_in_session(), &wishes, &service);

    // Both clicks land before the first request resolves; the second is
    // ignored, not queued.
    tokio::join!(pick.toggle_pick(), pick.toggle_pick(), async {
        service.release();
    });

    assert_eq!(service.calls(), 1);
    assert!(wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(11));
}

#[tokio::test]
async fn toggle_works_again_after_the_first_round_trip() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    let pick = controller(&signed_in_session(), &wishes, &service);

    pick.toggle_pick().await;
    assert!(wishes.is_liked(P42));

    pick.toggle_pick().await;
    assert!(!wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(10));
    assert_eq!(service.calls(), 2);
}

#[tokio::test]
async fn two_surfaces_on_the_same_product_share_state() {
    let wishes = WishStore::new();
    let session = signed_in_session();
    let service = Arc::new(ScriptedWish::default());

    // Grid card and detail page mount controllers for the same product.
    let card = controller(&session, &wishes, &service);
    let detail = PickController::new(
        P42,
        false,
        Some(10),
        wishes.clone(),
        session.clone(),
        Arc::clone(&service) as Arc<dyn WishService>,
    );

    card.toggle_pick().await;

    assert!(detail.is_liked());
    assert_eq!(detail.display_count(), Some(11));
}

#[tokio::test]
async fn resolution_applies_even_after_the_owning_surface_is_gone() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    service.fail_next();
    let pick = controller(&signed_in_session(), &wishes, &service);

    let toggle = pick.toggle_pick();
    // The surface unmounting does not cancel the request; the rollback
    // still lands in the shared store.
    toggle.await;
    drop(pick);

    assert!(!wishes.is_liked(P42));
    assert_eq!(wishes.like_count(P42), Some(10));
}

#[tokio::test]
async fn click_binding_consumes_the_event_and_pops_on_like() {
    use repick_app::ui::{ClickOutcome, PickButtonModel, PickVariant, PICK_POP_MS};

    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    let pick = controller(&signed_in_session(), &wishes, &service);
    let mut button = PickButtonModel::new(PickVariant::Counter, false);

    let outcome = button.click(&pick, 1_000).await;
    // The card underneath must not also navigate off this click.
    assert_eq!(outcome, ClickOutcome::Consumed);

    let view = button.render(&pick, 1_000);
    assert!(view.filled);
    assert_eq!(view.count, Some(11));
    assert!(view.popping);

    let view = button.render(&pick, 1_000 + PICK_POP_MS);
    assert!(!view.popping);
}

#[tokio::test]
async fn store_watchers_wake_on_toggle() {
    let wishes = WishStore::new();
    let service = Arc::new(ScriptedWish::default());
    let pick = controller(&signed_in_session(), &wishes, &service);

    let mut watcher = wishes.watch();
    pick.toggle_pick().await;

    let state = watcher.poll().expect("toggle publishes");
    assert!(state.is_liked(P42));
}
