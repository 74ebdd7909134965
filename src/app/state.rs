use crossterm::event::KeyCode;

use crate::db::SqliteStore;
use crate::generator::DataGenerator;
use crate::palette;
use crate::settings::Settings;
use crate::types::{DummyNotification, DummyPost, DummyProduct, DummyReview, ProductCategory};

use super::{AppEvent, AppView, FocusMode, TABS, next_category_filter};

const FEED_PAGE_SIZE: usize = 10;
const PRODUCT_COUNT: usize = 30;
const REVIEW_PAGE_SIZE: usize = 5;
const NOTIFICATION_COUNT: usize = 12;

/// The top-level application state.
pub struct App {
    pub running: bool,
    store: SqliteStore,
    pub settings: Settings,
    generator: DataGenerator,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub focus_mode: FocusMode,
    pub selected_tab_index: usize,
    pub posts: Vec<DummyPost>,
    pub selected_post_index: usize,
    pub products: Vec<DummyProduct>,
    pub selected_product_index: usize,
    pub category_filter: Option<ProductCategory>,
    pub search_query: String,
    pub search_active: bool,
    pub selected_product: Option<DummyProduct>,
    pub reviews: Vec<DummyReview>,
    pub notifications: Vec<DummyNotification>,
    pub selected_notification_index: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new(store: SqliteStore, settings: Settings) -> Self {
        let mut generator = DataGenerator::new();
        let posts = generator.generate_posts(FEED_PAGE_SIZE);
        let products = generator.generate_products(PRODUCT_COUNT);
        let notifications = generator.generate_notifications(NOTIFICATION_COUNT);
        Self {
            running: true,
            store,
            settings,
            generator,
            view: AppView::Feed,
            view_history: Vec::new(),
            focus_mode: FocusMode::Content,
            selected_tab_index: 0,
            posts,
            selected_post_index: 0,
            products,
            selected_product_index: 0,
            category_filter: None,
            search_query: String::new(),
            search_active: false,
            selected_product: None,
            reviews: Vec::new(),
            notifications,
            selected_notification_index: 0,
            status: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self
                .settings
                .set_system_scheme(palette::system_color_scheme()),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.search_active {
            self.handle_search_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Char(ch @ '1'..='5') => {
                let index = ch as usize - '1' as usize;
                self.navigate_to(TABS[index]);
            }
            KeyCode::Tab => {
                self.focus_mode = match self.focus_mode {
                    FocusMode::TabBar => FocusMode::Content,
                    FocusMode::Content => FocusMode::TabBar,
                };
            }
            KeyCode::Left if self.focus_mode == FocusMode::TabBar => self.navigate_tab_left(),
            KeyCode::Right if self.focus_mode == FocusMode::TabBar => self.navigate_tab_right(),
            KeyCode::Up if self.focus_mode == FocusMode::Content => self.move_selection_up(),
            KeyCode::Down if self.focus_mode == FocusMode::Content => self.move_selection_down(),
            KeyCode::Enter => {
                if self.focus_mode == FocusMode::TabBar {
                    self.activate_selected_tab();
                } else {
                    self.open_selected();
                }
            }
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('r') => self.refresh_current_view(),
            KeyCode::Char('m') if self.view == AppView::Feed => self.load_more_posts(),
            KeyCode::Char('f') if self.view == AppView::Products => self.cycle_category_filter(),
            KeyCode::Char('/') if self.view == AppView::Products => self.search_active = true,
            KeyCode::Char(' ') if self.view == AppView::Notifications => {
                self.mark_selected_notification_read()
            }
            KeyCode::Char('a') if self.view == AppView::Notifications => {
                self.mark_all_notifications_read()
            }
            KeyCode::Char('t') if self.view == AppView::Settings => self.cycle_theme(),
            KeyCode::Char('l') if self.view == AppView::Settings => self.cycle_language(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.search_query.clear();
                self.search_active = false;
            }
            KeyCode::Enter => self.search_active = false,
            KeyCode::Backspace | KeyCode::Delete => {
                self.search_query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => self.search_query.push(ch),
            _ => return,
        }
        self.selected_product_index = 0;
        self.status = None;
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view == view {
            return;
        }
        self.view_history.push(self.view);
        self.view = view;
        self.status = None;
        if let Some(index) = TABS.iter().position(|tab| *tab == view.tab()) {
            self.selected_tab_index = index;
        }
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.view_history.pop() {
            self.view = previous;
            if let Some(index) = TABS.iter().position(|tab| *tab == previous.tab()) {
                self.selected_tab_index = index;
            }
        } else if self.view == AppView::Products && !self.search_query.is_empty() {
            self.search_query.clear();
        }
        self.status = None;
    }

    fn navigate_tab_left(&mut self) {
        if self.selected_tab_index == 0 {
            self.selected_tab_index = TABS.len() - 1;
        } else {
            self.selected_tab_index -= 1;
        }
    }

    fn navigate_tab_right(&mut self) {
        self.selected_tab_index = (self.selected_tab_index + 1) % TABS.len();
    }

    fn activate_selected_tab(&mut self) {
        self.navigate_to(TABS[self.selected_tab_index]);
        self.focus_mode = FocusMode::Content;
    }

    fn refresh_current_view(&mut self) {
        match self.view {
            AppView::Feed => {
                self.posts = self.generator.generate_posts(FEED_PAGE_SIZE);
                self.selected_post_index = 0;
            }
            AppView::Products => {
                self.products = self.generator.generate_products(PRODUCT_COUNT);
                self.selected_product_index = 0;
                self.status = None;
            }
            AppView::ProductDetail => {
                if let Some(product) = &self.selected_product {
                    let more = self.generator.generate_reviews(&product.id, REVIEW_PAGE_SIZE);
                    self.reviews.extend(more);
                }
            }
            AppView::Notifications => {
                self.notifications = self.generator.generate_notifications(NOTIFICATION_COUNT);
                self.selected_notification_index = 0;
            }
            AppView::Settings | AppView::Help => {}
        }
    }

    fn load_more_posts(&mut self) {
        let next_page = self.generator.generate_posts(FEED_PAGE_SIZE);
        tracing::debug!(loaded = self.posts.len(), "appending feed page");
        self.posts.extend(next_page);
    }

    fn cycle_category_filter(&mut self) {
        self.category_filter = next_category_filter(self.category_filter);
        self.selected_product_index = 0;
        self.status = None;
    }

    /// Products after the category filter and the name search.
    pub fn filtered_products(&self) -> Vec<&DummyProduct> {
        let query = self.search_query.to_lowercase();
        self.products
            .iter()
            .filter(|p| self.category_filter.is_none_or(|c| p.category == c))
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    fn mark_selected_notification_read(&mut self) {
        if let Some(notification) = self.notifications.get_mut(self.selected_notification_index) {
            notification.read = true;
        }
    }

    fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    fn cycle_theme(&mut self) {
        let next = self.settings.theme_preference().next();
        self.settings.set_theme_preference(&self.store, next);
    }

    fn cycle_language(&mut self) {
        let next = crate::i18n::next_language(self.settings.language());
        self.settings.set_language_preference(&self.store, next);
    }

    fn open_selected(&mut self) {
        if self.view != AppView::Products {
            return;
        }
        let selected = self
            .filtered_products()
            .get(self.selected_product_index)
            .map(|p| (*p).clone());
        let Some(product) = selected else {
            self.status = Some(self.settings.translator().t("products.empty"));
            return;
        };
        self.reviews = self.generator.generate_reviews(&product.id, REVIEW_PAGE_SIZE);
        self.selected_product = Some(product);
        self.navigate_to(AppView::ProductDetail);
    }

    fn move_selection_up(&mut self) {
        if let Some(index) = self.selection_mut() {
            *index = index.saturating_sub(1);
        }
    }

    fn move_selection_down(&mut self) {
        let len = match self.view {
            AppView::Feed => self.posts.len(),
            AppView::Products => self.filtered_products().len(),
            AppView::Notifications => self.notifications.len(),
            _ => 0,
        };
        if let Some(index) = self.selection_mut() {
            if *index + 1 < len {
                *index += 1;
            }
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.view {
            AppView::Feed => Some(&mut self.selected_post_index),
            AppView::Products => Some(&mut self.selected_product_index),
            AppView::Notifications => Some(&mut self.selected_notification_index),
            _ => None,
        }
    }
}
