use roaster_app::application::ANALYZING_STATUS;
use roaster_app::domain::{CompanyDetails, CompanySize, FormInput, RoastResult, ToolCatalog};

const MISSING_ROAST: &str = "OpenAI sent back a mysterious silence.";
const MISSING_TIP: &str = "No tip this time. Try again for more wisdom.";

const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="icon" href="{FAVICON}">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
{body}
    </main>
</body>
</html>"#,
        title = escape_html(title),
    )
}

/// The stack form, pre-filled from `input` so a rejected visitor keeps what
/// they entered. `status` is the line shown above the submit button, and
/// `detail` an optional second line explaining a failure.
pub fn render_form_page(
    catalog: &ToolCatalog,
    input: &FormInput,
    status: &str,
    detail: Option<&str>,
) -> String {
    let selected_size = input.company_details().size;
    let sections: String = catalog
        .sections()
        .iter()
        .map(|section| {
            let boxes: String = section
                .tools
                .iter()
                .map(|tool| {
                    let checked = checked_attr(input.tools.iter().any(|t| t.trim() == tool.as_str()));
                    let tool = escape_html(tool);
                    format!(
                        r#"<label class="tool"><input type="checkbox" name="tools" value="{tool}"{checked}> {tool}</label>"#
                    )
                })
                .collect();
            format!(
                r#"<fieldset class="tools" id="tools-{id}"><legend>{title}</legend>{boxes}</fieldset>"#,
                id = escape_html(&section.id),
                title = escape_html(&section.title),
            )
        })
        .collect();

    let sizes: String = CompanySize::ALL
        .iter()
        .map(|size| {
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = size.as_str(),
                selected = if selected_size == Some(*size) { " selected" } else { "" },
                label = size.label(),
            )
        })
        .collect();

    let detail = detail
        .map(|d| format!(r#"<p class="status__detail">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let body = format!(
        r#"        <header class="hero">
            <h1 class="hero__title">Roast My Tech Stack</h1>
            <p class="hero__subtitle">Tick the tools you pay for. We will tell you how it looks from the outside.</p>
        </header>
        <form class="stack-form" method="post" action="/roast">
            {sections}
            <label class="field">Anything else?
                <input type="text" name="otherTools" placeholder="Custom CRM, Jira, ..." value="{other_tools}">
            </label>
            <label class="field">Company name
                <input type="text" name="companyName" value="{company_name}">
            </label>
            <label class="field">Company size
                <select name="companySize"><option value="">Select size</option>{sizes}</select>
            </label>
            <label class="field">Work email
                <input type="email" name="companyEmail" value="{email}" required>
            </label>
            <p class="status" role="status">{status}</p>
            {detail}
            <button type="submit" class="stack-form__button">Roast my stack</button>
        </form>
        <script>{SCRIPT}</script>"#,
        other_tools = escape_html(&input.other_tools),
        company_name = escape_html(&input.company_name),
        email = escape_html(&input.email),
        status = escape_html(status),
        SCRIPT = submit_script(),
    );

    page("Roast My Tech Stack", &body)
}

fn checked_attr(checked: bool) -> &'static str {
    if checked {
        " checked"
    } else {
        ""
    }
}

fn submit_script() -> String {
    format!(
        r#"
document.querySelector('.stack-form').addEventListener('submit', function (event) {{
    const form = event.target;
    form.querySelector('.stack-form__button').disabled = true;
    form.querySelector('.status').textContent = '{ANALYZING_STATUS}';
}});
"#
    )
}

fn paragraphs(lines: &[&str], placeholder: &str) -> String {
    if lines.is_empty() {
        return format!(r#"<p class="placeholder">{}</p>"#, escape_html(placeholder));
    }
    lines
        .iter()
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect()
}

pub fn render_result_page(
    result: &RoastResult,
    company: &CompanyDetails,
    share_caption: Option<&str>,
) -> String {
    let score = result.score();
    let badge = match score.value {
        Some(value) => format!(
            r#"<span class="score__value">{value}</span><span class="score__denominator">/{}</span>"#,
            escape_html(&score.denominator)
        ),
        None => format!(
            r#"<span class="score__value">{}</span>"#,
            escape_html(&score.fallback_text)
        ),
    };

    let meta = company.meta_line();
    let meta = if meta.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="roast__meta">{}</p>"#, escape_html(&meta))
    };

    let extras = if result.extras.is_empty() {
        String::new()
    } else {
        let items: String = result
            .extras
            .iter()
            .map(|line| format!("<li>{}</li>", escape_html(line)))
            .collect();
        format!(r#"<section class="roast__extras"><h3>Bonus banter</h3><ul>{items}</ul></section>"#)
    };

    let share = share_caption
        .map(|caption| {
            format!(
                r#"<section class="share"><h3>Share the burn</h3><textarea readonly rows="6">{}</textarea></section>"#,
                escape_html(caption)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"        <article class="roast">
            <div class="score">{badge}</div>
            {meta}
            <section class="roast__content"><h3>The roast</h3>{roast}</section>
            <section class="roast__tip"><h3>Tip</h3>{tip}</section>
            {extras}
            {share}
            <div class="roast__actions">
                <a href="/" class="roast__button--primary">Roast another stack</a>
            </div>
        </article>"#,
        roast = paragraphs(&result.roast_paragraphs(), MISSING_ROAST),
        tip = paragraphs(&result.tip_paragraphs(), MISSING_TIP),
    );

    page("Your tech stack roast", &body)
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: 'Inter', -apple-system, sans-serif; background: var(--base); color: var(--text); min-height: 100vh; }
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--love); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 500px; margin: 0 auto; }
.stack-form { display: flex; flex-direction: column; gap: 1rem; }
.tools { border: 2px solid var(--overlay); border-radius: 8px; padding: 1rem; display: flex; flex-wrap: wrap; gap: 0.5rem 1rem; }
.tools legend { color: var(--pine); font-weight: 600; padding: 0 0.5rem; }
.field { display: flex; flex-direction: column; gap: 0.25rem; font-weight: 600; }
.field input, .field select { padding: 0.75rem 1rem; border: 2px solid var(--overlay); border-radius: 8px; background: var(--surface); color: var(--text); font-size: 1rem; }
.status { min-height: 1.5rem; color: var(--love); font-style: italic; }
.status__detail { color: var(--subtle); }
.stack-form__button { padding: 1rem 2rem; background: var(--love); color: var(--base); border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer; }
.stack-form__button:disabled { background: var(--muted); cursor: wait; }
.roast { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.5rem; margin: 2rem 0; }
.score { font-size: 3rem; font-weight: 800; color: var(--love); }
.score__denominator { font-size: 1.5rem; color: var(--subtle); }
.roast__meta { color: var(--subtle); margin-bottom: 1rem; }
.roast h3 { color: var(--pine); margin: 1rem 0 0.5rem; }
.roast p { line-height: 1.8; margin-bottom: 0.75rem; }
.roast li { margin-left: 1.5rem; list-style: disc; }
.placeholder { font-style: italic; color: var(--muted); }
.share textarea { width: 100%; padding: 0.75rem; border: 2px solid var(--overlay); border-radius: 8px; font-family: inherit; }
.roast__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.roast__button--primary { padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); border-radius: 8px; font-weight: 600; text-decoration: none; display: inline-block; }
"#;
