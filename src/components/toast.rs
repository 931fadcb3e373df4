//! Toast Notification
//!
//! Transient banner mounted into `<body>`: fades in, stays for its
//! duration, fades out and unmounts itself.

use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;

use web_motion::sleep;

use crate::models::{Severity, Toast};

/// Delay before the fade-in starts
pub const FADE_IN_DELAY_MS: u32 = 10;
/// Time given to the fade-out transition before the node is removed
pub const REMOVAL_GRACE_MS: u32 = 300;

/// When each phase of a toast happens, in ms after it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    pub fade_in_at: u32,
    pub fade_out_at: u32,
    pub removed_at: u32,
}

impl ToastSchedule {
    pub fn for_duration(duration_ms: u32) -> Self {
        let fade_out_at = duration_ms.max(FADE_IN_DELAY_MS);
        Self {
            fade_in_at: FADE_IN_DELAY_MS,
            fade_out_at,
            removed_at: fade_out_at.saturating_add(REMOVAL_GRACE_MS),
        }
    }
}

#[component]
fn ToastBanner(toast: Toast, visible: ArcRwSignal<bool>) -> impl IntoView {
    let class = format!("toast-notification {}", toast.severity.as_class());
    let icon = format!("fas {} me-2", toast.severity.icon());
    let shown = visible.clone();

    view! {
        <div
            class=class
            style:opacity=move || if visible.get() { "1" } else { "0" }
            style:transform=move || if shown.get() { "translateX(0)" } else { "translateX(100px)" }
        >
            <div class="d-flex align-items-center">
                <i class=icon></i>
                <span>{toast.message}</span>
            </div>
        </div>
    }
}

/// Show `toast` and resolve once it has been removed again.
pub async fn show_toast(toast: Toast) {
    let Some(body) = web_motion::dom::document().and_then(|doc| doc.body()) else {
        return;
    };
    let schedule = ToastSchedule::for_duration(toast.duration_ms);
    log::debug!("toast ({}): {}", toast.severity.as_class(), toast.message);

    let visible = ArcRwSignal::new(false);
    let banner_visible = visible.clone();
    let handle = mount_to(body, move || view! { <ToastBanner toast=toast visible=banner_visible /> });

    sleep(schedule.fade_in_at).await;
    visible.set(true);
    sleep(schedule.fade_out_at - schedule.fade_in_at).await;
    visible.set(false);
    sleep(schedule.removed_at - schedule.fade_out_at).await;
    drop(handle);
}

/// Fire-and-forget toast.
pub fn notify(message: impl Into<String>, severity: Severity, duration_ms: u32) {
    let toast = Toast::new(message, severity).lasting(duration_ms);
    spawn_local(show_toast(toast));
}
