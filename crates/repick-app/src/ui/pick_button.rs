//! Pick Button Binding
//!
//! One binding contract, three visual forms: a bare heart icon, an icon
//! with a counter, and an icon stacked over a label. All bind to the
//! same [`PickController`] surface. A false→true liked transition fires
//! a one-shot ~180 ms "pop" pulse; that pulse is cosmetic state local to
//! the binding and carries no other meaning.
//!
//! Time is caller-supplied milliseconds, so transitions and pulse expiry
//! are deterministic under test.

use crate::workflows::pick::PickController;

/// Pop pulse duration in milliseconds.
pub const PICK_POP_MS: u64 = 180;

/// Default stacked-variant label.
const DEFAULT_LABEL: &str = "픽";

/// Visual form of the affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickVariant {
    /// Bare heart icon
    Icon,
    /// Icon plus like counter
    Counter,
    /// Icon stacked over a short label
    Stacked,
}

/// What a click did with the event.
///
/// A consumed click must not also trigger the enclosing surface's action
/// (a product card navigating to detail): the pick action and the
/// navigation are mutually exclusive per click.
#[must_use = "a consumed click must not be forwarded to the enclosing surface"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The binding handled the click; stop propagation.
    Consumed,
}

/// Render snapshot of the affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickButtonView {
    /// Heart filled (liked)
    pub filled: bool,
    /// Counter to draw, for the counter variant with a seeded count
    pub count: Option<u32>,
    /// Label to draw, for the stacked variant
    pub label: Option<String>,
    /// Pop pulse active
    pub popping: bool,
    /// Interaction disabled while a toggle is in flight
    pub disabled: bool,
}

/// Binding state for one pick affordance.
#[derive(Debug, Clone)]
pub struct PickButtonModel {
    variant: PickVariant,
    label: String,
    last_liked: bool,
    pop_until_ms: Option<u64>,
}

impl PickButtonModel {
    /// Create a binding; `initial_is_liked` arms the transition tracker
    /// so a server-liked product does not pop on first render.
    pub fn new(variant: PickVariant, initial_is_liked: bool) -> Self {
        Self {
            variant,
            label: DEFAULT_LABEL.to_string(),
            last_liked: initial_is_liked,
            pop_until_ms: None,
        }
    }

    /// Override the stacked-variant label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The binding's visual form.
    #[must_use]
    pub fn variant(&self) -> PickVariant {
        self.variant
    }

    /// Record the current liked state, starting a pop pulse on a
    /// false→true transition. Call whenever the observed store value may
    /// have changed (after clicks, and on watcher wakeups for toggles
    /// made from other surfaces).
    pub fn observe(&mut self, is_liked: bool, now_ms: u64) {
        if !self.last_liked && is_liked {
            self.pop_until_ms = Some(now_ms.saturating_add(PICK_POP_MS));
        }
        self.last_liked = is_liked;
    }

    /// Whether the pop pulse is still running.
    #[must_use]
    pub fn is_popping(&self, now_ms: u64) -> bool {
        self.pop_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Handle a click: toggle through the controller and consume the
    /// event so the enclosing card does not also navigate.
    pub async fn click(&mut self, controller: &PickController, now_ms: u64) -> ClickOutcome {
        controller.toggle_pick().await;
        self.observe(controller.is_liked(), now_ms);
        ClickOutcome::Consumed
    }

    /// Snapshot the affordance for rendering.
    #[must_use]
    pub fn render(&self, controller: &PickController, now_ms: u64) -> PickButtonView {
        PickButtonView {
            filled: controller.is_liked(),
            count: match self.variant {
                PickVariant::Counter => controller.display_count(),
                _ => None,
            },
            label: match self.variant {
                PickVariant::Stacked => Some(self.label.clone()),
                _ => None,
            },
            popping: self.is_popping(now_ms),
            disabled: controller.is_toggling(),
        }
    }
}
