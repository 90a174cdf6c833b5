use dioxus_logger::tracing::{Level, info};

fn main() {
    // Build with OASIS_DEBUG=1 for modal transition logs
    let level = if option_env!("OASIS_DEBUG").is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    info!("Oasis admin starting");

    dioxus::launch(oasis_ui::App);
}
