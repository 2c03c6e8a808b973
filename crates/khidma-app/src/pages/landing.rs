// SPDX-License-Identifier: MIT
//
// The single landing page: header with section navigation, search box,
// service sections, testimonials carousel, contact footer, scroll-to-top.

use chrono::Datelike;
use dioxus::prelude::*;

use khidma_catalog::data;

use crate::pages::services::{CategorySections, SearchBox};
use crate::pages::testimonials::TestimonialsSection;
use crate::services::view_services::ViewServices;
use crate::state::AppState;

#[component]
pub fn Landing() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<ViewServices>();

    // Start the controllers once mounted, then mirror their published state
    // into the app signal.
    let svc_sync = svc.clone();
    let _sync = use_resource(move || {
        let svc = svc_sync.clone();
        async move {
            svc.start();
            loop {
                tokio::time::sleep(std::time::Duration::from_millis(150)).await;
                let active = svc.active_section();
                let show = svc.show_scroll_top();
                let index = svc.testimonial_index();
                let mut s = state.write();
                s.active_section = active;
                s.show_scroll_top = show;
                s.testimonial_index = index;
            }
        }
    });

    let svc_drop = svc.clone();
    use_drop(move || svc_drop.teardown());

    let svc_sentinel = svc.clone();
    let threshold = svc.config().scroll_top_threshold;

    rsx! {
        div { dir: "rtl",
            style: "font-family: system-ui, -apple-system, sans-serif; color: #1f2937; background: #f8fafc; min-height: 100vh; position: relative;",
            // Any click that reaches the page closes the suggestions
            // dropdown; the search container stops propagation for its own.
            onclick: move |_| {
                let open = state.peek().search_focused;
                if open {
                    state.write().search_focused = false;
                }
            },

            // Sentinel spanning the scroll threshold: once it has left the
            // viewport, the page is scrolled past the threshold.
            div {
                id: "top",
                style: "position: absolute; top: 0; right: 0; width: 1px; height: {threshold}px; pointer-events: none;",
                onvisible: move |evt| {
                    if let Ok(visible) = evt.data().is_intersecting() {
                        svc_sentinel.note_scroll(if visible { 0.0 } else { threshold + 1.0 });
                    }
                },
            }

            Header {}

            main { style: "max-width: 960px; margin: 0 auto; padding: 16px;",
                Hero {}
                SearchBox {}
                CategorySections {}
                TestimonialsSection {}
                ContactSection {}
            }

            Footer {}

            if state.read().show_scroll_top {
                a {
                    href: "#top",
                    style: "position: fixed; bottom: 24px; left: 24px; width: 44px; height: 44px; border-radius: 50%; background: #0284c7; color: white; display: flex; align-items: center; justify-content: center; text-decoration: none; font-size: 20px; box-shadow: 0 4px 12px rgba(0,0,0,0.2);",
                    "↑"
                }
            }
        }
    }
}

/// Sticky header with the office name and section navigation.
#[component]
fn Header() -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        header { style: "position: sticky; top: 0; background: white; border-bottom: 1px solid #e5e7eb; z-index: 10;",
            div { style: "max-width: 960px; margin: 0 auto; padding: 12px 16px; display: flex; justify-content: space-between; align-items: center; gap: 16px;",
                strong { style: "font-size: 18px; color: #0284c7;", "خدمتك أولويتي" }
                nav { style: "display: flex; gap: 4px; flex-wrap: wrap;",
                    for category in data::catalog() {
                        {
                            let is_active = state.read().active_section == category.id;
                            let color = if is_active { category_color(&category.id) } else { "#4b5563" };
                            let weight = if is_active { "700" } else { "400" };
                            rsx! {
                                a {
                                    href: "#{category.id}",
                                    style: "padding: 6px 10px; border-radius: 6px; text-decoration: none; font-size: 14px; color: {color}; font-weight: {weight};",
                                    "{category.title}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Accent color of a category's nav entry; unknown ids fall back to neutral.
fn category_color(id: &str) -> &'static str {
    data::catalog()
        .iter()
        .find(|c| c.id == id)
        .and_then(|c| c.services.first())
        .map(|s| s.accent.color())
        .unwrap_or("#4b5563")
}

#[component]
fn Hero() -> Element {
    let svc = use_context::<ViewServices>();

    rsx! {
        section { style: "text-align: center; padding: 48px 16px 32px;",
            h1 { style: "font-size: 32px; margin-bottom: 8px;", "جميع الخدمات الحكومية في مكان واحد" }
            p { style: "color: #6b7280; font-size: 16px; margin-bottom: 24px;",
                "ننهي معاملاتك الحكومية بسرعة واحترافية — جوازات، تأشيرات، عمل، وسجلات تجارية."
            }
            a {
                href: svc.general_link(),
                target: "_blank",
                style: "display: inline-block; padding: 12px 32px; border-radius: 999px; background: #16a34a; color: white; text-decoration: none; font-size: 16px;",
                "استفسر عبر واتساب"
            }
        }
    }
}

/// Contact block: WhatsApp call to action plus the formatted number.
#[component]
fn ContactSection() -> Element {
    let svc = use_context::<ViewServices>();
    let number = svc.formatted_number();

    rsx! {
        section { id: "contact", style: "text-align: center; padding: 32px 16px; background: white; border-radius: 12px; margin: 24px 0;",
            h2 { "تواصل معنا" }
            p { style: "color: #6b7280;", "فريقنا جاهز للرد على استفساراتك على مدار الساعة." }
            p { dir: "ltr", style: "font-size: 20px; font-weight: 700; margin: 12px 0;",
                "{number}"
            }
            a {
                href: svc.general_link(),
                target: "_blank",
                style: "display: inline-block; padding: 10px 28px; border-radius: 999px; background: #16a34a; color: white; text-decoration: none;",
                "مراسلة واتساب"
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { style: "text-align: center; padding: 24px; color: #9ca3af; font-size: 13px; border-top: 1px solid #e5e7eb;",
            "© {year} خدمتك أولويتي — جميع الحقوق محفوظة"
        }
    }
}
