//! WhatsApp click-to-chat links.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

/// `https://wa.me/<digits>` for an international number in any notation.
///
/// Returns `None` when the number contains no digits.
pub fn chat_link(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{digits}"))
}
