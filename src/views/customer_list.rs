//! Customer List View
//!
//! Loads the customer collection once when opened and renders the rows
//! matching the search input:
//! - Loading: indicator only
//! - Loaded: heading, search input, counter, filtered rows
//! - Failed: same as loaded with no rows; the failure only goes to the log

use crate::constants::SEARCH_INPUT_WIDTH;
use crate::domain::{Customer, LoadState};
use crate::services::{CustomerClient, DataLoader, run_in_tokio};
use crate::states::{
    AppSettings, CustomerListState, GlobalStore, i18n_customer_count, i18n_customers,
};
use gpui::{Context, Div, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName,
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Move `state` into `Loading` and build the loader for the configured endpoint
///
/// Returns `None` when a load was already started, or when the endpoint is
/// unusable; the latter is logged and leaves `state` in `Failed`.
fn prepare_load(
    state: &mut CustomerListState,
    settings: &AppSettings,
) -> Option<DataLoader<CustomerClient>> {
    if !state.begin_load() {
        return None;
    }

    match settings.endpoint_url().and_then(CustomerClient::new) {
        Ok(client) => {
            tracing::info!(endpoint = %client.endpoint(), "Loading customers");
            Some(DataLoader::new(client))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching customers");
            state.finish_load(LoadState::Failed(e.to_string().into()));
            None
        }
    }
}

/// Customer list view component
pub struct CustomerListView {
    /// Load lifecycle and query
    state: CustomerListState,
    /// Search input state
    search_state: Entity<InputState>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl CustomerListView {
    /// Create the view and start the customer load
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        // Create search input
        let placeholder = i18n_customers(cx, "search_placeholder");
        let search_state = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        // Every edit recomputes the visible rows
        subscriptions.push(cx.subscribe(&search_state, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let query = state.read(cx).value().to_string();
                this.on_query_change(query, cx);
            }
        }));

        let mut view = Self {
            state: CustomerListState::new(),
            search_state,
            _subscriptions: subscriptions,
        };
        view.start_load(cx);
        view
    }

    /// Whether the loading indicator is shown
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Rows currently visible
    pub fn items(&self) -> Vec<Customer> {
        self.state.items()
    }

    /// Apply a new search query
    pub fn on_query_change(&mut self, query: impl Into<String>, cx: &mut Context<Self>) {
        let query = query.into();
        tracing::debug!(query = %query, "Customer query changed");
        self.state.set_query(query);
        cx.notify();
    }

    /// Issue the one-shot fetch and deliver its outcome back to this view
    fn start_load(&mut self, cx: &mut Context<Self>) {
        let Some(loader) = prepare_load(&mut self.state, GlobalStore::read(cx)) else {
            return;
        };

        cx.spawn(async move |this, cx| {
            let outcome = run_in_tokio(async move { loader.load().await }).await;

            // Fails once the view is released; the outcome is dropped then.
            let _ = this.update(cx, |view, cx| {
                view.state.finish_load(outcome);
                cx.notify();
            });
        })
        .detach();
    }

    /// Render the loading indicator
    fn render_loading(&self, cx: &mut Context<Self>) -> Div {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .bg(cx.theme().background)
            .child(
                h_flex()
                    .gap_2()
                    .child(Icon::new(IconName::Loader).size_4())
                    .child(
                        Label::new(i18n_customers(cx, "loading"))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
    }

    /// Render a single customer row
    fn render_row(&self, index: usize, customer: &Customer, cx: &mut Context<Self>) -> Div {
        let bg = if index % 2 == 0 {
            cx.theme().background
        } else {
            cx.theme().secondary
        };

        div()
            .w_full()
            .px_3()
            .py_2()
            .bg(bg)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                Label::new(customer.display_line())
                    .text_sm()
                    .text_color(cx.theme().foreground),
            )
    }

    /// Render the message shown when nothing matches
    fn render_empty(&self, cx: &mut Context<Self>) -> Div {
        div().w_full().p_4().child(
            Label::new(i18n_customers(cx, "empty"))
                .text_sm()
                .text_color(cx.theme().muted_foreground),
        )
    }
}

impl Render for CustomerListView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.state.is_loading() {
            return self.render_loading(cx).into_any_element();
        }

        let items = self.state.items();
        let total = self.state.total_count();
        let count_label = i18n_customer_count(cx, items.len(), total);

        let list = if items.is_empty() {
            self.render_empty(cx).into_any_element()
        } else {
            let rows: Vec<_> = items
                .iter()
                .enumerate()
                .map(|(index, customer)| self.render_row(index, customer, cx))
                .collect();

            div()
                .id("customer-list-scroll")
                .flex_1()
                .w_full()
                .overflow_y_scroll()
                .border_1()
                .border_color(cx.theme().border)
                .rounded_md()
                .children(rows)
                .into_any_element()
        };

        v_flex()
            .size_full()
            .p_4()
            .gap_3()
            .bg(cx.theme().background)
            // Header
            .child(
                Label::new(i18n_customers(cx, "title"))
                    .text_2xl()
                    .text_color(cx.theme().foreground),
            )
            // Search input
            .child(
                div().w(px(SEARCH_INPUT_WIDTH)).child(
                    Input::new(&self.search_state)
                        .prefix(Icon::new(IconName::Search))
                        .cleanable(true),
                ),
            )
            // Counter
            .child(
                Label::new(count_label)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
            // Rows
            .child(list)
            .into_any_element()
    }
}
