pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xkovvlpg";

pub const PAYMENT_URL: &str = "https://flutterwave.com/pay/3z2wuuwhavsl";

// Left in place of a real checkout link on staging copies of the site.
const PAYMENT_URL_PLACEHOLDER: &str = "YOUR_PAYMENT_URL";

/// Delay between the success panel appearing and the checkout redirect.
pub const REDIRECT_DELAY_MS: u32 = 2_500;

pub const ENGAGEMENT_PRICE: &str = "3,500";

pub fn get_form_endpoint() -> &'static str {
    FORM_ENDPOINT
}

/// The checkout link, or `None` while it is still the placeholder.
pub fn get_payment_url() -> Option<&'static str> {
    configured_url(PAYMENT_URL)
}

fn configured_url(url: &'static str) -> Option<&'static str> {
    if url.is_empty() || url == PAYMENT_URL_PLACEHOLDER {
        None
    } else {
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_url_is_configured() {
        assert_eq!(get_payment_url(), Some(PAYMENT_URL));
    }

    #[test]
    fn placeholder_payment_url_is_not_used() {
        assert_eq!(configured_url("YOUR_PAYMENT_URL"), None);
        assert_eq!(configured_url(""), None);
    }

    #[test]
    fn checkout_redirect_waits_two_and_a_half_seconds() {
        assert_eq!(REDIRECT_DELAY_MS, 2_500);
    }

    #[test]
    fn endpoints_are_https() {
        assert!(get_form_endpoint().starts_with("https://"));
        assert!(PAYMENT_URL.starts_with("https://"));
    }
}
