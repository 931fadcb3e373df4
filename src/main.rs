//! Learning Paths Frontend Entry Point

use any_spawner::Executor;
use leptos::task::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    learning_paths_ui::logging::init(log::LevelFilter::Info);
    // Tasks are spawned before anything is mounted
    let _ = Executor::init_wasm_bindgen();
    spawn_local(learning_paths_ui::app::run());
}
