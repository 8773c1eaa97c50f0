//! Minimal HTML helpers shared by the page renderers

use crate::strings;

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
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

/// Wrap a rendered body into a standalone document
pub fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ar\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(strings::APP_TITLE),
        style = STYLE,
        body = body
    )
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f8fafc}\
header{background:#1e293b;color:#fff;padding:1.5rem;text-align:center}\
main{max-width:72rem;margin:0 auto;padding:2rem 1rem}\
form{display:flex;gap:.5rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1rem}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px #0002;display:flex;flex-direction:column}\
.card img{width:2.5rem;height:2.5rem;border-radius:50%}\
.badge{font-size:.75rem;padding:.25rem .5rem;border-radius:1rem;background:#e0e7ff}\
.spinner{display:inline-block;width:1rem;height:1rem;border:2px solid currentColor;border-top-color:transparent;border-radius:50%}\
.toast.destructive{color:#b91c1c}";
