use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::ScrollConfig;
use crate::dom;
use crate::scroll::ScrollState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    /// Element id of the section this entry scrolls to.
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "about", label: "About" },
    NavItem { id: "importance", label: "Why Safety" },
    NavItem { id: "courses", label: "Courses" },
    NavItem { id: "process", label: "How It Works" },
    NavItem { id: "documents", label: "Documents" },
    NavItem { id: "contacts", label: "Contacts" },
];

/// Click handler that smooth-scrolls to section `id` instead of jumping to the anchor.
pub fn scroll_to(id: &'static str, config: ScrollConfig) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = dom::scroll_to_section(id, &config) {
            warn!("Failed to scroll to {}: {:?}", id, err);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scroll: ScrollState,
    pub on_request_quote: Callback<()>,
    #[prop_or_default]
    pub config: ScrollConfig,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { scroll, on_request_quote, config } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let request_quote = {
        let on_request_quote = on_request_quote.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_request_quote.emit(());
        })
    };

    html! {
        <header class={classes!("site-header", scroll.is_scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#top" class="brand" onclick={scroll_to("top", *config)}>
                    <span class="brand-mark">{"▲"}</span>
                    {"Safeline Academy"}
                </a>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))} onclick={close_menu}>
                    {
                        for NAV_ITEMS.iter().map(|item| {
                            let active = scroll.active_section == Some(item.id);
                            html! {
                                <a
                                    key={item.id}
                                    href={format!("#{}", item.id)}
                                    class={classes!("nav-link", active.then(|| "active"))}
                                    aria-current={active.then(|| "true")}
                                    onclick={scroll_to(item.id, *config)}
                                >
                                    {item.label}
                                </a>
                            }
                        })
                    }
                    <button class="nav-cta" onclick={request_quote}>
                        {"Request a quote"}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 80px;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(17, 24, 39, 0.85);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.25);
                }
                .header-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .brand-mark {
                    color: #f59e0b;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.75);
                    text-decoration: none;
                    padding: 0.25rem 0;
                    border-bottom: 2px solid transparent;
                    transition: color 0.2s ease, border-color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #fff;
                    border-bottom-color: #f59e0b;
                }
                .nav-cta {
                    background: #f59e0b;
                    color: #111827;
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 860px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 80px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(17, 24, 39, 0.97);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
