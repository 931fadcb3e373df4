//! Shared Keyframes
//!
//! `shake` (invalid form fields) and `confettiFall` (confetti particles),
//! installed once into the document head.

use web_sys::HtmlElement;

use crate::dom;

pub const MOTION_KEYFRAMES: &str = r#"
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    10%, 30%, 50%, 70%, 90% { transform: translateX(-10px); }
    20%, 40%, 60%, 80% { transform: translateX(10px); }
}
@keyframes confettiFall {
    to {
        transform: translateY(100vh) rotate(var(--confetti-spin, 360deg));
        opacity: 0;
    }
}
"#;

/// Append the motion keyframes to `<head>`.
pub fn inject_keyframes() {
    let Some(doc) = dom::document() else { return };
    let Some(head) = doc.head() else { return };
    match doc.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(MOTION_KEYFRAMES));
            let _ = head.append_child(&style);
        }
        Err(err) => log::warn!("could not install keyframes: {err:?}"),
    }
}

/// Shake `el` sideways once.
pub fn shake(el: &HtmlElement) {
    dom::set_style(el, "animation", "shake 0.5s");
}
