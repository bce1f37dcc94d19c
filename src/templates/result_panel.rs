use crate::templates::escape;
use crate::view::{ResultView, Tone};

pub fn render(view: &ResultView) -> String {
    format!(
        "{header}\n{details}\n{features}",
        header = render_header(view),
        details = render_details(view),
        features = render_features(view),
    )
}

pub fn render_header(view: &ResultView) -> String {
    format!(
        r#"<div id="urlResultHeader"><div style="background: {bg}; padding: 20px; border-radius: 5px; color: {color}; font-size: 1.2em; font-weight: bold;">{label}</div></div>"#,
        bg = view.tone.background(),
        color = view.tone.color(),
        label = view.label(),
    )
}

pub fn render_details(view: &ResultView) -> String {
    let mut factors = String::new();
    for (title, items) in [
        ("Risk factors", &view.risk_factors),
        ("Trust factors", &view.trust_factors),
    ] {
        if items.is_empty() {
            continue;
        }
        let list: String = items
            .iter()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .collect();
        factors.push_str(&format!(
            r#"
    <div class="result-detail"><label>{title}:</label><ul>{list}</ul></div>"#
        ));
    }

    format!(
        r#"<div id="urlResultDetails">
    <div class="result-detail"><label>URL:</label><value style="word-break: break-all; font-size: 0.9em;">{url}</value></div>
    <div class="result-detail"><label>Legitimate Score:</label><value style="color: {safe}; font-size: 1.2em;">{legit}</value></div>
    <div class="result-detail"><label>Phishing Score:</label><value style="color: {danger}; font-size: 1.2em;">{phish}</value></div>
    <div class="progress-bar" style="margin-top: 10px; height: 30px; background: #f0f0f0; border-radius: 15px; overflow: hidden;">
        <div class="progress-fill legitimate-fill" style="width: {width}%;">{bar_label}</div>
    </div>{factors}
</div>"#,
        url = escape(&view.url),
        safe = Tone::Safe.color(),
        danger = Tone::Danger.color(),
        legit = view.legitimate_text,
        phish = view.phishing_text,
        width = view.bar_width,
        bar_label = view.bar_label,
    )
}

pub fn render_features(view: &ResultView) -> String {
    let items: String = view
        .features
        .iter()
        .map(|row| {
            format!(
                r#"<div class="feature-item"><label>{}</label><value>{}</value></div>"#,
                escape(&row.name),
                escape(&row.value)
            )
        })
        .collect();

    format!(
        r#"<div id="urlFeatures"><h4 style="margin-top: 20px; margin-bottom: 15px;">{heading}</h4><div class="features-list">{items}</div></div>"#,
        heading = view.features_heading(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_check_payload;

    fn view(body: &str) -> ResultView {
        ResultView::from_verdict(&parse_check_payload(body).unwrap(), 15)
    }

    #[test]
    fn bar_width_and_label_share_one_value() {
        let html = render(&view(
            r#"{"success":true,"url":"http://x.test","prediction":1,
                "confidence":{"legitimate":12.5,"phishing":87.5},
                "features":{"len":23,"dots":2}}"#,
        ));

        assert!(html.contains("⚠️ PHISHING"));
        assert!(html.contains("color: #f44336"));
        assert!(html.contains(r#"style="width: 12.5%;">13%</div>"#));
        assert!(html.contains(">12.50%<"));
        assert!(html.contains(">87.50%<"));
        assert!(html.contains("<label>len</label><value>23.00</value>"));
        assert!(html.contains("Extracted Features (showing top 15):"));
    }

    #[test]
    fn echoed_url_and_features_are_escaped() {
        let html = render(&view(
            r#"{"success":true,"url":"http://x.test/<img>","prediction":0,
                "confidence":{"legitimate":99,"phishing":1},
                "features":{"Domain":"<b>x</b>"},"risk_factors":["a & b"]}"#,
        ));

        assert!(!html.contains("<img>"));
        assert!(html.contains("http://x.test/&lt;img&gt;"));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("<li>a &amp; b</li>"));
        assert!(!html.contains("Trust factors"));
    }
}
