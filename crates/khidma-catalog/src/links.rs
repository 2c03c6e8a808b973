// SPDX-License-Identifier: MIT
//
// Outbound WhatsApp contact links and phone-number display helpers.
//
// Link format: `https://wa.me/<digits>?text=<encoded message>`.  The
// destination number comes from `SiteConfig`; only the message varies
// between a general inquiry and a named-service inquiry.

use url::Url;

use khidma_core::config::SiteConfig;
use khidma_core::error::Result;

/// Template for the general "tell me about your services" inquiry.
const GENERAL_INQUIRY: &str = "مرحبًا، أرغب في الاستفسار عن خدماتكم بشكل عام.";

/// Prefix for a named-service inquiry; the service name is appended as-is.
const SERVICE_INQUIRY_PREFIX: &str = "مرحبًا، أرغب بالاستفسار عن خدمة: ";

/// Build the general-inquiry WhatsApp link.
pub fn general_contact_link(config: &SiteConfig) -> Result<Url> {
    contact_link(config, GENERAL_INQUIRY)
}

/// Build a WhatsApp link asking about one named service.
///
/// An empty service name is passed through, producing a message with an
/// empty trailing segment rather than an error.
pub fn service_contact_link(config: &SiteConfig, service_name: &str) -> Result<Url> {
    contact_link(config, &format!("{SERVICE_INQUIRY_PREFIX}{service_name}"))
}

fn contact_link(config: &SiteConfig, message: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("https://wa.me/{}", config.whatsapp_number))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}

/// Group raw phone digits for display: `"966598158587"` → `"+966 59 815 8587"`.
///
/// Non-digits are stripped first; short numbers simply produce fewer groups.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut parts: Vec<&str> = Vec::with_capacity(4);
    let mut rest = digits.as_str();
    for width in [3, 2, 3] {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(width.min(rest.len()));
        parts.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        parts.push(rest);
    }

    format!("+{}", parts.join(" "))
}

/// Slug for per-service element ids: lowercase, whitespace runs become a
/// single hyphen, and everything except word characters and Arabic letters
/// is dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() {
            pending_hyphen = !slug.is_empty();
            continue;
        }
        let keep = ch == '-'
            || ch == '_'
            || ch.is_ascii_alphanumeric()
            || ('\u{0600}'..='\u{06FF}').contains(&ch);
        if keep {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_groups_into_fixed_segments() {
        assert_eq!(format_phone_number("966598158587"), "+966 59 815 8587");
    }

    #[test]
    fn phone_number_strips_non_digits() {
        assert_eq!(format_phone_number("+966 59-815-8587"), "+966 59 815 8587");
    }

    #[test]
    fn short_phone_number_produces_fewer_groups() {
        assert_eq!(format_phone_number("96659"), "+966 59");
        assert_eq!(format_phone_number("96"), "+96");
        assert_eq!(format_phone_number(""), "+");
    }

    #[test]
    fn general_link_targets_the_configured_number() {
        let config = SiteConfig::default();
        let url = general_contact_link(&config).expect("link");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/966598158587");
    }

    #[test]
    fn general_link_message_survives_the_encoding_round_trip() {
        let config = SiteConfig::default();
        let url = general_contact_link(&config).expect("link");
        let (key, value) = url.query_pairs().next().expect("text parameter");
        assert_eq!(key, "text");
        assert_eq!(value, GENERAL_INQUIRY);
    }

    #[test]
    fn service_link_embeds_the_service_name() {
        let config = SiteConfig::default();
        let url = service_contact_link(&config, "نقل الكفالة").expect("link");
        let (_, value) = url.query_pairs().next().expect("text parameter");
        assert_eq!(value, "مرحبًا، أرغب بالاستفسار عن خدمة: نقل الكفالة");
    }

    #[test]
    fn empty_service_name_passes_through() {
        let config = SiteConfig::default();
        let url = service_contact_link(&config, "").expect("link");
        let (_, value) = url.query_pairs().next().expect("text parameter");
        assert!(value.ends_with(": "));
    }

    #[test]
    fn slugify_hyphenates_whitespace_runs() {
        assert_eq!(slugify("Passport  Renewal"), "passport-renewal");
    }

    #[test]
    fn slugify_keeps_arabic_letters() {
        assert_eq!(slugify("نقل الكفالة"), "نقل-الكفالة");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Exit / Re-entry (visa)!"), "exit-re-entry-visa");
    }
}
