use crate::templates::escape;
use crate::view::StatSlot;

/// One slot update, addressed by element id.
pub fn render_slot(slot: StatSlot, text: &str) -> String {
    format!(
        r#"<span id="{id}" class="stat-value">{text}</span>"#,
        id = slot.id(),
        text = escape(text),
    )
}
