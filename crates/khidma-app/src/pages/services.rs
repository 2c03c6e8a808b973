// SPDX-License-Identifier: MIT
//
// Search box with a suggestions dropdown, and the per-category service
// sections.  Both render the same filtered view of the catalog, so the
// dropdown and the page always agree on what matches.

use std::time::Duration;

use dioxus::prelude::*;

use khidma_catalog::{data, filter_catalog, highlight, slugify};
use khidma_core::Service;

use crate::services::view_services::ViewServices;
use crate::state::AppState;

/// How long a suggestion's target card stays visually flashed.
const FLASH_DURATION: Duration = Duration::from_millis(1500);

#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let term = state.read().search_term.clone();
    let focused = state.read().search_focused;

    // Flat suggestion list: (category id, service) for every match.
    let suggestions: Vec<(String, Service)> = if focused && !term.trim().is_empty() {
        filter_catalog(data::catalog(), &term)
            .iter()
            .flat_map(|category| {
                category
                    .services
                    .iter()
                    .map(|service| (category.id.clone(), service.clone()))
            })
            .collect()
    } else {
        Vec::new()
    };

    rsx! {
        div { class: "search-container", style: "position: relative; max-width: 560px; margin: 0 auto 24px;",
            // Clicks inside the search container must not reach the page's
            // close-dropdown handler.
            onclick: move |evt| evt.stop_propagation(),
            input {
                r#type: "search",
                placeholder: "ابحث عن خدمة... (تجديد، نقل كفالة، سجل تجاري)",
                value: "{term}",
                style: "width: 100%; padding: 12px 16px; border-radius: 999px; border: 1px solid #d1d5db; font-size: 15px; outline: none; box-sizing: border-box;",
                oninput: move |evt| state.write().search_term = evt.value().to_string(),
                onfocusin: move |_| state.write().search_focused = true,
            }

            if !suggestions.is_empty() {
                div { style: "position: absolute; top: calc(100% + 4px); right: 0; left: 0; background: white; border: 1px solid #e5e7eb; border-radius: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.08); overflow: hidden; z-index: 20;",
                    for (category_id, service) in suggestions {
                        {
                            let card = format!("service-{}-{}", category_id, slugify(&service.name));
                            let target = format!("#{card}");
                            let name = service.name.clone();
                            let term_for_item = term.clone();
                            rsx! {
                                a {
                                    href: "{target}",
                                    style: "display: block; padding: 10px 16px; text-decoration: none; color: #1f2937; border-bottom: 1px solid #f3f4f6; font-size: 14px;",
                                    onclick: move |_| {
                                        {
                                            let mut s = state.write();
                                            s.search_term.clear();
                                            s.search_focused = false;
                                            s.flash_target = Some(card.clone());
                                        }
                                        let card = card.clone();
                                        spawn(async move {
                                            tokio::time::sleep(FLASH_DURATION).await;
                                            let mut s = state.write();
                                            if s.flash_target.as_deref() == Some(card.as_str()) {
                                                s.flash_target = None;
                                            }
                                        });
                                    },
                                    Highlighted { text: name, term: term_for_item }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategorySections() -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<ViewServices>();
    let term = state.read().search_term.clone();
    let categories = filter_catalog(data::catalog(), &term).into_owned();

    rsx! {
        if categories.is_empty() {
            p { style: "text-align: center; color: #9ca3af; padding: 32px;",
                "لا توجد خدمات مطابقة لبحثك."
            }
        }
        for category in categories {
            {
                let id = category.id.clone();
                let vis_id = id.clone();
                let svc_vis = svc.clone();
                rsx! {
                    section {
                        id: "{id}",
                        style: "margin: 32px 0; scroll-margin-top: 80px;",
                        onvisible: move |evt| {
                            let data = evt.data();
                            if let Ok(visible) = data.is_intersecting() {
                                let offset = match (data.get_bounding_client_rect(), data.get_root_bounds()) {
                                    (Ok(rect), Ok(root)) => band_center_offset(
                                        rect.origin.y,
                                        rect.size.height,
                                        root.origin.y,
                                        root.size.height,
                                    ),
                                    _ => 0.0,
                                };
                                svc_vis.note_section_visibility(&vis_id, visible, offset);
                            }
                        },
                        h2 { style: "font-size: 22px; margin-bottom: 12px;", "{category.title}" }
                        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 12px;",
                            for service in category.services {
                                ServiceCard { category_id: id.clone(), service: service.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Signed distance (px) from a section's vertical center to the viewport's,
/// given both bounding rects in viewport coordinates.  Negative means the
/// section center sits above the viewport center.
fn band_center_offset(
    section_top: f64,
    section_height: f64,
    viewport_top: f64,
    viewport_height: f64,
) -> f64 {
    (section_top + section_height / 2.0) - (viewport_top + viewport_height / 2.0)
}

#[component]
fn ServiceCard(category_id: String, service: Service) -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<ViewServices>();
    let term = state.read().search_term.clone();

    let card_id = format!("service-{}-{}", category_id, slugify(&service.name));
    let flashing = state.read().flash_target.as_deref() == Some(card_id.as_str());
    let strong = service.accent.color();
    let dark = service.accent.contrast();
    let link = svc.service_link(&service.name);
    let shadow = if flashing {
        "box-shadow: 0 0 0 3px #fbbf24; transition: box-shadow 0.3s;"
    } else {
        "box-shadow: 0 1px 3px rgba(0,0,0,0.06); transition: box-shadow 0.3s;"
    };

    rsx! {
        div {
            id: "{card_id}",
            style: "background: white; border-radius: 12px; padding: 16px; border-top: 3px solid {strong}; {shadow} scroll-margin-top: 96px;",
            h3 { style: "font-size: 16px; margin: 0 0 6px; color: {dark};",
                Highlighted { text: service.name.clone(), term: term.clone() }
            }
            p { style: "color: #6b7280; font-size: 14px; margin: 0 0 12px; line-height: 1.6;",
                Highlighted { text: service.description.clone(), term: term.clone() }
            }
            a {
                href: link,
                target: "_blank",
                style: "display: inline-block; padding: 8px 16px; border-radius: 8px; background: {strong}; color: white; text-decoration: none; font-size: 14px;",
                "اطلب الخدمة عبر واتساب"
            }
        }
    }
}

/// Text with the first match of the active query wrapped in a `mark`.
#[component]
fn Highlighted(text: String, term: String) -> Element {
    let parts = highlight(&text, &term);

    rsx! {
        span {
            "{parts.prefix}"
            if !parts.matched.is_empty() {
                mark { style: "background: #fef08a; border-radius: 2px; padding: 0 1px;",
                    "{parts.matched}"
                }
            }
            "{parts.suffix}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_spanning_the_viewport_center_has_zero_offset() {
        // Viewport 0..800, section 300..500: both centers at 400.
        assert_eq!(band_center_offset(300.0, 200.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn section_below_the_center_has_a_positive_offset() {
        assert!(band_center_offset(600.0, 400.0, 0.0, 800.0) > 0.0);
    }

    #[test]
    fn section_above_the_center_has_a_negative_offset() {
        assert!(band_center_offset(-300.0, 200.0, 0.0, 800.0) < 0.0);
    }

    #[test]
    fn nearer_section_yields_the_smaller_magnitude() {
        // Two visible sections: the one hugging the center must win the
        // tracker's min-by-magnitude election.
        let near = band_center_offset(350.0, 120.0, 0.0, 800.0);
        let far = band_center_offset(650.0, 400.0, 0.0, 800.0);
        assert!(near.abs() < far.abs());
    }
}
