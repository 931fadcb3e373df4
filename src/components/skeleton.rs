//! Loading Skeleton
//!
//! Placeholder cards shown while a list is loading.

use leptos::mount::mount_to;
use leptos::prelude::*;
use web_sys::HtmlElement;

pub const DEFAULT_SKELETON_COUNT: usize = 3;

#[component]
pub fn SkeletonCards(count: usize) -> impl IntoView {
    (0..count)
        .map(|_| {
            view! {
                <div class="skeleton-card premium-card p-4 mb-3">
                    <div class="skeleton skeleton-title mb-3"></div>
                    <div class="skeleton skeleton-text mb-2"></div>
                    <div class="skeleton skeleton-text" style="width: 60%;"></div>
                </div>
            }
        })
        .collect_view()
}

/// Replace `container`'s content with `count` skeleton cards.
pub fn show_skeleton(container: HtmlElement, count: usize) {
    container.set_inner_html("");
    mount_to(container, move || view! { <SkeletonCards count=count /> }).forget();
}
