// SPDX-License-Identifier: MIT
//
// Testimonials carousel: one visible card, prev/next arrows, and a dot
// per slide.  The active index comes from the app state signal, which the
// landing page keeps in sync with the carousel controller.

use dioxus::prelude::*;

use khidma_catalog::data;

use crate::services::view_services::ViewServices;
use crate::state::AppState;

#[component]
pub fn TestimonialsSection() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<ViewServices>();

    let all = data::testimonials();
    if all.is_empty() {
        return rsx! {};
    }

    let index = state.read().testimonial_index.min(all.len() - 1);
    let testimonial = &all[index];

    let initials = testimonial.initials();
    let accent = testimonial.accent();
    let avatar_bg = accent.soft();
    let avatar_fg = accent.contrast();
    let stars: String = "★".repeat(testimonial.rating as usize);

    let svc_prev = svc.clone();
    let svc_next = svc.clone();

    rsx! {
        section { id: "testimonials", style: "margin: 32px 0; scroll-margin-top: 80px;",
            h2 { style: "font-size: 22px; text-align: center; margin-bottom: 16px;", "آراء عملائنا" }

            div { style: "display: flex; align-items: center; gap: 12px; max-width: 640px; margin: 0 auto;",
                button {
                    style: "border: none; background: white; border-radius: 50%; width: 36px; height: 36px; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.1); font-size: 16px;",
                    onclick: move |_| svc_prev.prev_testimonial(),
                    "‹"
                }

                div { style: "flex: 1; background: white; border-radius: 16px; padding: 24px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); text-align: center;",
                    div { style: "width: 56px; height: 56px; border-radius: 50%; background: {avatar_bg}; color: {avatar_fg}; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 18px; margin: 0 auto 12px;",
                        "{initials}"
                    }
                    p { style: "color: #f59e0b; font-size: 18px; letter-spacing: 2px; margin: 0 0 8px;",
                        "{stars}"
                    }
                    p { style: "color: #374151; font-size: 15px; line-height: 1.8; margin: 0 0 12px;",
                        "\u{201c}{testimonial.review}\u{201d}"
                    }
                    p { style: "font-weight: 700; margin: 0;", "{testimonial.name}" }
                    p { style: "color: #9ca3af; font-size: 13px; margin: 0;", "{testimonial.city}" }
                }

                button {
                    style: "border: none; background: white; border-radius: 50%; width: 36px; height: 36px; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.1); font-size: 16px;",
                    onclick: move |_| svc_next.next_testimonial(),
                    "›"
                }
            }

            div { style: "display: flex; justify-content: center; gap: 8px; margin-top: 16px;",
                for i in 0..all.len() {
                    {
                        let svc_dot = svc.clone();
                        let bg = if i == index { "#0284c7" } else { "#d1d5db" };
                        rsx! {
                            button {
                                style: "border: none; width: 10px; height: 10px; border-radius: 50%; padding: 0; cursor: pointer; background: {bg};",
                                onclick: move |_| svc_dot.go_to_testimonial(i),
                            }
                        }
                    }
                }
            }
        }
    }
}
