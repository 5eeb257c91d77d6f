use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod modal;
mod nav;
mod scroll;
mod pages {
    pub mod landing;
}

use config::ScrollConfig;
use modal::LeadModal;
use nav::{Header, NAV_ITEMS};
use pages::landing::Landing;
use scroll::use_scroll_tracker;

#[function_component]
fn App() -> Html {
    let scroll = use_scroll_tracker(NAV_ITEMS, ScrollConfig::default());
    let lead_form_open = use_state(|| false);

    let open_lead_form = {
        let lead_form_open = lead_form_open.clone();
        Callback::from(move |_| {
            if !*lead_form_open {
                info!("Opening lead form");
            }
            lead_form_open.set(true);
        })
    };

    let close_lead_form = {
        let lead_form_open = lead_form_open.clone();
        Callback::from(move |_| {
            if *lead_form_open {
                info!("Closing lead form");
            }
            lead_form_open.set(false);
        })
    };

    html! {
        <>
            <Header scroll={scroll} on_request_quote={open_lead_form.clone()} />
            <Landing on_request_quote={open_lead_form} />
            <LeadModal open={*lead_form_open} on_close={close_lead_form} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("Logging unavailable: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
