//! Application shell: auth gate, navigation and the active list screen

use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_abandoned_cart::ui::list::AbandonedCartList;
use crate::domain::a004_wishlist::ui::list::WishlistList;
use crate::domain::a005_return_request::ui::list::ReturnRequestList;
use crate::domain::a006_distributor::ui::list::DistributorList;
use crate::domain::a007_inquiry::ui::list::InquiryList;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

fn screen_view(screen: Screen) -> AnyView {
    match screen {
        Screen::Orders => view! { <OrderList /> }.into_any(),
        Screen::Customers => view! { <CustomerList /> }.into_any(),
        Screen::AbandonedCarts => view! { <AbandonedCartList /> }.into_any(),
        Screen::Wishlists => view! { <WishlistList /> }.into_any(),
        Screen::Returns => view! { <ReturnRequestList /> }.into_any(),
        Screen::Distributors => view! { <DistributorList /> }.into_any(),
        Screen::Inquiries => view! { <InquiryList /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    // each switch drops the previous page and with it its list controller
    view! {
        <Shell>
            {move || screen_view(ctx.active.get())}
        </Shell>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
