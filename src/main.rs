//! Todos Frontend Entry Point

fn main() {
    console_error_panic_hook::set_once();
    todos::app::start();
}
