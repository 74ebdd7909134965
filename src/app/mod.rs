mod state;

use crossterm::event::KeyCode;

use crate::types::ProductCategory;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Feed,
    Products,
    ProductDetail,
    Notifications,
    Settings,
    Help,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    TabBar,
    Content,
}

/// Tab bar order.
pub const TABS: [AppView; 5] = [
    AppView::Feed,
    AppView::Products,
    AppView::Notifications,
    AppView::Settings,
    AppView::Help,
];

impl AppView {
    /// Translation key of the tab this view belongs to.
    pub fn tab_key(self) -> &'static str {
        match self {
            AppView::Feed => "tab.feed",
            AppView::Products | AppView::ProductDetail => "tab.products",
            AppView::Notifications => "tab.notifications",
            AppView::Settings => "tab.settings",
            AppView::Help => "tab.help",
        }
    }

    fn tab(self) -> AppView {
        match self {
            AppView::ProductDetail => AppView::Products,
            other => other,
        }
    }
}

/// `None` shows every category. Cycles all -> each category -> all.
pub fn next_category_filter(current: Option<ProductCategory>) -> Option<ProductCategory> {
    match current {
        None => Some(ProductCategory::ALL[0]),
        Some(category) => {
            let index = ProductCategory::ALL
                .iter()
                .position(|c| *c == category)
                .unwrap_or(0);
            ProductCategory::ALL.get(index + 1).copied()
        }
    }
}
