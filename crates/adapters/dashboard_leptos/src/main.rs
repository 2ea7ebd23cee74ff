fn main() {
    if let Err(err) = garden_dashboard::start() {
        leptos::logging::error!("failed to start garden dashboard: {err}");
    }
}
