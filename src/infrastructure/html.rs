// HTML rendering of page events
use crate::application::streaming_service::PageEvent;
use crate::domain::dashboard::DashboardDescriptor;
use crate::domain::element::{Block, Span, Toast, Tone};
use crate::domain::page::Page;
use html_escape::{encode_double_quoted_attribute, encode_text};

const APP_TITLE: &str = "Agent Analytics Hub";
const APP_ICON: &str = "🕵️";
const FOOTER: &str = "© 2025 Agent Analytics Hub | Powered by Google Cloud";

const STYLE: &str = r#"
    :root { --pico-font-size: 15px; }
    .layout { display: grid; grid-template-columns: 16rem 1fr; gap: 2rem; min-height: 100vh; }
    .layout > aside { padding: 1.5rem 1rem; border-right: 1px solid var(--pico-muted-border-color); }
    .layout > main { padding: 1.5rem 2rem; }
    .hub-title { text-align: center; color: #003366; }
    .hub-intro { text-align: center; color: #e0e0e0; font-size: 18px; }
    .callout { padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
    .callout.info { background: rgba(28, 131, 225, 0.15); }
    .callout.success { background: rgba(33, 195, 84, 0.15); }
    .callout.warning { background: rgba(255, 193, 7, 0.2); }
    .progress span, .caption { color: var(--pico-muted-color); }
    #toasts { position: fixed; top: 1rem; right: 1rem; z-index: 10; display: flex; flex-direction: column; gap: 0.5rem; }
    #toasts .toast { padding: 0.5rem 1rem; border-radius: 0.5rem; background: var(--pico-card-background-color); box-shadow: var(--pico-card-box-shadow); }
"#;

const SCRIPT: &str = r#"
const hub = {
    progress(id, percent, text) {
        const el = document.getElementById('progress-' + id);
        if (!el) return;
        el.querySelector('progress').value = percent;
        el.querySelector('span').textContent = text;
    },
    clear(elementId) {
        const el = document.getElementById(elementId);
        if (el) el.remove();
    },
    toast(icon, text) {
        const box = document.createElement('div');
        box.className = 'toast';
        box.textContent = icon + ' ' + text;
        document.getElementById('toasts').appendChild(box);
        setTimeout(() => box.remove(), 4000);
    },
};
"#;

/// Render one streamed event as an HTML fragment
pub fn render_event(event: &PageEvent) -> String {
    match event {
        PageEvent::DocumentStart { active } => document_start(*active),
        PageEvent::Notify(toast) => toast_script(toast),
        PageEvent::Block(block) => render_block(block),
        PageEvent::ProgressStarted { id, text } => format!(
            r#"<div class="progress" id="progress-{id}"><progress value="0" max="100"></progress><span>{}</span></div>"#,
            encode_text(text)
        ),
        PageEvent::ProgressAdvanced { id, percent, text } => script(&format!(
            "hub.progress({id}, {percent}, {});",
            js_string(text)
        )),
        PageEvent::ProgressCleared { id } => script(&format!("hub.clear('progress-{id}');")),
        PageEvent::SpinnerStarted { id, text } => format!(
            r#"<article id="spinner-{id}" aria-busy="true">{}</article>"#,
            encode_text(text)
        ),
        PageEvent::SpinnerCleared { id } => script(&format!("hub.clear('spinner-{id}');")),
        PageEvent::DocumentEnd => document_end(),
    }
}

fn document_start(active: Page) -> String {
    let nav = nav_html(active);
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{APP_TITLE}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{APP_ICON}</text></svg>">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css">
    <style>{STYLE}</style>
    <script>{SCRIPT}</script>
</head>
<body>
<div id="toasts"></div>
<div class="layout">
    <aside>
        {nav}
    </aside>
    <main>
        <h1 class="hub-title">{APP_TITLE} {APP_ICON}</h1>
        <div class="hub-intro">
            Welcome to the Agent Analytics Hub.<br>
            Analyze customer feedback, monitor social media sentiment, and review complaint trends using interactive dashboards.
        </div>
        <hr>
"#
    )
}

fn document_end() -> String {
    format!(
        r#"
        <hr>
        <small class="caption">{}</small>
    </main>
</div>
</body>
</html>
"#,
        encode_text(FOOTER)
    )
}

/// Sidebar single-select, one entry per page
fn nav_html(active: Page) -> String {
    let items: String = Page::ALL
        .iter()
        .map(|page| {
            let href = page.path();
            let label = encode_text(page.label());
            if *page == active {
                format!(
                    r#"<li><a href="{href}" aria-current="page"><strong>◉ {label}</strong></a></li>"#
                )
            } else {
                format!(r#"<li><a href="{href}">○ {label}</a></li>"#)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<nav>
            <h3>🧭 Navigation</h3>
            <small>Go to</small>
            <ul>{items}</ul>
        </nav>"#
    )
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Header(text) => format!("<h2>{}</h2>\n", encode_text(text)),
        Block::Text(text) => format!("<p>{}</p>\n", encode_text(text)),
        Block::Paragraph(spans) => format!("<p>{}</p>\n", render_spans(spans)),
        Block::List(items) => {
            let items: String = items
                .iter()
                .map(|spans| format!("<li>{}</li>", render_spans(spans)))
                .collect();
            format!("<ul>{items}</ul>\n")
        }
        Block::Callout { tone, text } => format!(
            r#"<div class="callout {}">{}</div>"#,
            tone_class(*tone),
            encode_text(text)
        ) + "\n",
        Block::Progress { percent, text } => format!(
            r#"<div class="progress"><progress value="{percent}" max="100"></progress><span>{}</span></div>"#,
            encode_text(text)
        ) + "\n",
        Block::Embed(descriptor) => iframe(descriptor),
    }
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => encode_text(text).into_owned(),
            Span::Strong(text) => format!("<strong>{}</strong>", encode_text(text)),
        })
        .collect()
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "info",
        Tone::Success => "success",
        Tone::Warning => "warning",
    }
}

fn iframe(descriptor: &DashboardDescriptor) -> String {
    let scrolling = if descriptor.scrolling { "yes" } else { "no" };
    format!(
        r#"<iframe src="{}" width="100%" height="{}" scrolling="{}" style="border: 0;" allowfullscreen></iframe>"#,
        encode_double_quoted_attribute(descriptor.url),
        descriptor.height,
        scrolling
    ) + "\n"
}

fn toast_script(toast: &Toast) -> String {
    script(&format!(
        "hub.toast({}, {});",
        js_string(&toast.icon),
        js_string(&toast.text)
    ))
}

fn script(body: &str) -> String {
    format!("<script>{body}</script>\n")
}

/// Quote `s` as a JS string literal that is safe inside a script element
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_marks_active_page() {
        let nav = nav_html(Page::Complaint);
        assert!(nav.contains(r#"<a href="/pages/complaint" aria-current="page">"#));
        assert_eq!(nav.matches("aria-current").count(), 1);
        assert_eq!(nav.matches("<li>").count(), 5);
    }

    #[test]
    fn test_iframe_attributes() {
        let descriptor = DashboardDescriptor::for_page(Page::Trend).unwrap();
        let html = iframe(&descriptor);
        assert!(html.contains(&format!(r#"src="{}""#, descriptor.url)));
        assert!(html.contains(r#"height="550""#));
        assert!(html.contains(r#"scrolling="yes""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_block(&Block::Text("<b>a & b</b>".to_string()));
        assert_eq!(html, "<p>&lt;b&gt;a &amp; b&lt;/b&gt;</p>\n");
    }

    #[test]
    fn test_toast_cannot_close_script() {
        let html = toast_script(&Toast::new("🔄", "</script><b>"));
        assert!(html.contains(r#"hub.toast("🔄", "<\/script><b>");"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn test_every_streamed_block_renders_markup() {
        use crate::application::navigation_shell::NavigationShell;
        use crate::domain::element::Element;
        use crate::domain::session::SessionState;

        let shell = NavigationShell::new();
        for page in Page::ALL {
            for element in shell.render(SessionState::default(), page).elements {
                if let Element::Block(block) = element {
                    let html = render_event(&PageEvent::Block(block));
                    assert!(html.starts_with('<'), "{}: {}", page, html);
                    assert!(html.ends_with('\n'), "{}: {}", page, html);
                }
            }
        }
    }

    #[test]
    fn test_progress_update() {
        let html = render_event(&PageEvent::ProgressAdvanced {
            id: 3,
            percent: 40,
            text: "Loading Complaint Dashboard... 40%".to_string(),
        });
        assert_eq!(
            html,
            "<script>hub.progress(3, 40, \"Loading Complaint Dashboard... 40%\");</script>\n"
        );
    }

    #[test]
    fn test_document_frame() {
        let start = render_event(&PageEvent::DocumentStart { active: Page::Overview });
        assert!(start.starts_with("<!DOCTYPE html>"));
        assert!(start.contains("Agent Analytics Hub 🕵️"));

        let end = render_event(&PageEvent::DocumentEnd);
        assert!(end.contains("© 2025 Agent Analytics Hub"));
        assert!(end.trim_end().ends_with("</html>"));
    }
}
