use super::view::ViewState;

pub const TITLE: &str = "Frontend App";
pub const DESCRIPTION: &str = "Rust frontend calling the backend API";
const POLL_SECONDS: u8 = 1;
/// Path the loading page polls, whatever URL served it.
pub const POLL_TARGET: &str = "/";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn panel(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "      <p>Loading...</p>\n".to_string(),
        ViewState::Error { message } => format!(
            "      <p class=\"error\" style=\"color: red\">Error: {}</p>\n",
            escape(message)
        ),
        ViewState::Success { data } => {
            let mut out = String::from("      <div class=\"data\">\n");
            for (label, value) in [
                ("Message", &data.message),
                ("Timestamp", &data.timestamp),
                ("Status", &data.status),
            ] {
                out.push_str(&format!(
                    "        <p><strong>{label}:</strong> {}</p>\n",
                    escape(value)
                ));
            }
            out.push_str("      </div>\n");
            out
        }
    }
}

/// Full HTML document for the current view state.
pub fn render(state: &ViewState) -> String {
    let poll = match state {
        ViewState::Loading => format!(
            "    <meta http-equiv=\"refresh\" content=\"{POLL_SECONDS}; url={POLL_TARGET}\">\n"
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{TITLE}</title>
    <meta name="description" content="{DESCRIPTION}">
{poll}  </head>
  <body>
    <main style="padding: 2rem; font-family: sans-serif">
      <h1>Rust Frontend</h1>
      <section style="margin-top: 2rem; padding: 1rem; border: 1px solid #ddd; border-radius: 8px; background-color: #f5f5f5">
      <h2>API Response:</h2>
{panel}      <form method="post" action="/refresh">
        <button type="submit">Refresh Data</button>
      </form>
      </section>
    </main>
  </body>
</html>
"#,
        panel = panel(state),
    )
}

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{TITLE}</title>
  </head>
  <body>
    <main style="padding: 2rem; font-family: sans-serif">
      <h1>Page not found</h1>
      <p>Nothing lives at <code>{}</code>.</p>
      <p><a href="{POLL_TARGET}">Back to the message</a></p>
    </main>
  </body>
</html>
"#,
        escape(path)
    )
}
