use dioxus::document::eval;

const PREFERS_DARK_SCRIPT: &str = r#"
    return !!(window.matchMedia && window.matchMedia("(prefers-color-scheme: dark)").matches);
"#;

/// Whether the webview reports a dark color-scheme preference.
pub async fn prefers_dark_scheme() -> bool {
    eval(PREFERS_DARK_SCRIPT).join::<bool>().await.unwrap_or(false)
}

/// Put `text` on the system clipboard, best effort.
pub async fn copy_text(text: &str) {
    let script = copy_text_script(text);
    if let Err(err) = eval(&script).await {
        tracing::debug!(?err, "clipboard script failed");
    }
}

fn copy_text_script(text: &str) -> String {
    let text_literal = js_string_literal(text);
    format!(
        r#"
        const text = {text_literal};
        try {{
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                await navigator.clipboard.writeText(text);
                return;
            }}
        }} catch (_) {{}}
        const area = document.createElement("textarea");
        area.value = text;
        area.setAttribute("readonly", "");
        area.style.position = "fixed";
        area.style.opacity = "0";
        document.body.appendChild(area);
        area.select();
        try {{ document.execCommand("copy"); }} catch (_) {{}}
        document.body.removeChild(area);
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_quotes_and_newlines() {
        assert_eq!(js_string_literal("say \"hi\"\n"), r#""say \"hi\"\n""#);
    }

    #[test]
    fn copy_script_embeds_code_as_literal() {
        let script = copy_text_script("print(\"x\")");
        assert!(script.contains(r#"const text = "print(\"x\")";"#));
        assert!(script.contains("execCommand(\"copy\")"));
    }
}
