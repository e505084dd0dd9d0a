use leptos::prelude::*;
use web_sys::window;

/// Screens reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Orders,
    Customers,
    AbandonedCarts,
    Wishlists,
    Returns,
    Distributors,
    Inquiries,
}

impl Screen {
    pub fn all() -> [Screen; 7] {
        [
            Screen::Orders,
            Screen::Customers,
            Screen::AbandonedCarts,
            Screen::Wishlists,
            Screen::Returns,
            Screen::Distributors,
            Screen::Inquiries,
        ]
    }

    /// URL hash and icon name
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Orders => "orders",
            Screen::Customers => "customers",
            Screen::AbandonedCarts => "abandoned_carts",
            Screen::Wishlists => "wishlist",
            Screen::Returns => "returns",
            Screen::Distributors => "distributors",
            Screen::Inquiries => "inquiries",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Orders => "Orders",
            Screen::Customers => "Customers",
            Screen::AbandonedCarts => "Abandoned carts",
            Screen::Wishlists => "Wishlists",
            Screen::Returns => "Returns",
            Screen::Distributors => "Distributors",
            Screen::Inquiries => "Inquiries",
        }
    }

    pub fn from_key(key: &str) -> Option<Screen> {
        let key = key.trim_start_matches('#');
        Screen::all().into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let initial = window()
            .and_then(|w| w.location().hash().ok())
            .and_then(|hash| Screen::from_key(&hash))
            .unwrap_or(Screen::Orders);
        Self {
            active: RwSignal::new(initial),
        }
    }

    pub fn open(&self, screen: Screen) {
        self.active.set(screen);
        if let Some(w) = window() {
            let _ = w.location().set_hash(screen.key());
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
