//! HTML rendering for the list page.
//!
//! Fragments (rows, notices, the create form) are built here as strings and
//! concatenated into the page's `content`; [`Renderer`] then wraps them in
//! the Tera page template. Titles pass through [`html_escape`] before they
//! reach any fragment, and the template inserts `content` unescaped.

use serde::Serialize;
use std::borrow::Cow;
use tera::{Context, Tera};
use todo_list_core::Todo;

const PAGE_TEMPLATE_NAME: &str = "todo.html";
const PAGE_TEMPLATE: &str = include_str!("../templates/todo.html");

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#39;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
///
/// # Examples
///
/// ```
/// use todo_list_web::html_escape;
///
/// assert_eq!(html_escape("a < b"), "a &lt; b");
/// assert_eq!(html_escape("plain"), "plain");
/// ```
#[must_use]
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// One list row: toggle checkbox, title, delete button.
#[must_use]
pub fn todo_row(todo: &Todo) -> String {
    let (checked, class) = if todo.completed() {
        (" checked", "completed")
    } else {
        ("", "")
    };
    let id = todo.id();
    let title = html_escape(todo.title());

    format!(
        r#"<div class="box" style="display:flex; align-items:center; gap:0.75rem; padding:0.75rem;">
  <form action="/toggle" method="post" style="margin:0;">
    <input type="hidden" name="id" value="{id}">
    <input type="checkbox" aria-label="Toggle"{checked} onchange="this.form.submit()" style="width:1.2em;height:1.2em;">
  </form>
  <span class="{class}" style="flex:1;">{title}</span>
  <form action="/delete" method="post" style="margin:0;">
    <input type="hidden" name="id" value="{id}">
    <button class="button is-small is-danger is-outlined" type="submit">Delete</button>
  </form>
</div>
"#
    )
}

/// Notice shown instead of rows when the list is empty.
#[must_use]
pub const fn empty_notice() -> &'static str {
    "<p><em>No todos yet. Add one below!</em></p>\n"
}

/// Notice shown instead of rows when the list could not be loaded.
#[must_use]
pub fn list_error(message: &str) -> String {
    format!(
        "<p class=\"has-text-danger\">Error listing todos: {}</p>\n",
        html_escape(message)
    )
}

/// Form that posts a new title to `/create`.
#[must_use]
pub const fn create_form() -> &'static str {
    r#"<hr>
<form action="/create" method="post" style="display:flex; gap:0.5rem;">
  <input class="input" type="text" name="title" maxlength="500" placeholder="What needs to be done?" required autofocus>
  <button class="button is-primary" type="submit">Add</button>
</form>
"#
}

/// Page body for a loaded list: rows (or the empty notice) then the create form.
#[must_use]
pub fn list_content(todos: &[Todo]) -> String {
    let mut content = String::new();
    if todos.is_empty() {
        content.push_str(empty_notice());
    } else {
        for todo in todos {
            content.push_str(&todo_row(todo));
        }
    }
    content.push_str(create_form());
    content
}

/// Page body when listing failed: the error notice then the create form.
#[must_use]
pub fn error_content(message: &str) -> String {
    let mut content = list_error(message);
    content.push_str(create_form());
    content
}

/// Values handed to the page template.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Page heading and `<title>`.
    pub title: String,
    /// Pre-rendered, already-escaped HTML body.
    pub content: String,
    /// Number of todos shown.
    pub total: usize,
    /// Number of completed todos shown.
    pub done: usize,
}

impl PageContext {
    /// Context for a successfully loaded list.
    #[must_use]
    pub fn for_list(title: &str, todos: &[Todo]) -> Self {
        Self {
            title: title.to_string(),
            content: list_content(todos),
            total: todos.len(),
            done: todos.iter().filter(|t| t.completed()).count(),
        }
    }

    /// Context for a list that failed to load.
    #[must_use]
    pub fn for_error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            content: error_content(message),
            total: 0,
            done: 0,
        }
    }
}

/// Renders full HTML pages from the embedded Tera template.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
    app_name: String,
}

impl Renderer {
    /// Compile the page template.
    ///
    /// # Errors
    ///
    /// Returns a [`tera::Error`] if the embedded template does not parse.
    pub fn new(app_name: impl Into<String>) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self {
            tera,
            app_name: app_name.into(),
        })
    }

    /// Name shown in the page heading.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Render a page.
    ///
    /// # Errors
    ///
    /// Returns a [`tera::Error`] if rendering fails.
    pub fn render(&self, page: &PageContext) -> Result<String, tera::Error> {
        let context = Context::from_serialize(page)?;
        self.tera.render(PAGE_TEMPLATE_NAME, &context)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use todo_list_core::TodoId;

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo::new(TodoId::new(id), title.to_string(), completed, Utc::now())
    }

    #[test]
    fn test_html_escape_no_special_chars() {
        assert!(matches!(html_escape("Hello World"), Cow::Borrowed("Hello World")));
    }

    #[test]
    fn test_html_escape_all_specials() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_row_escapes_title() {
        let row = todo_row(&todo(3, "<script>alert(1)</script>", false));
        assert!(row.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!row.contains("<script>"));
    }

    #[test]
    fn test_row_reflects_completion() {
        let done = todo_row(&todo(1, "done", true));
        assert!(done.contains(" checked "));
        assert!(done.contains(r#"class="completed""#));

        let open = todo_row(&todo(2, "open", false));
        assert!(!open.contains("checked"));
        assert!(open.contains(r#"name="id" value="2""#));
    }

    #[test]
    fn test_list_content_empty_shows_notice_and_form() {
        let content = list_content(&[]);
        assert!(content.contains("No todos yet"));
        assert!(content.ends_with(create_form()));
    }

    #[test]
    fn test_list_content_keeps_order() {
        let content = list_content(&[todo(1, "First", false), todo(3, "Third", false)]);
        let first = content.find("First").unwrap();
        let third = content.find("Third").unwrap();
        assert!(first < third);
        assert!(!content.contains("No todos yet"));
    }

    #[test]
    fn test_error_content_escapes_message() {
        let content = error_content("near \"<\": syntax error");
        assert!(content.contains("Error listing todos: near &quot;&lt;&quot;: syntax error"));
        assert!(content.contains(r#"action="/create""#));
    }

    #[test]
    fn test_renderer_embeds_content_and_escapes_title() {
        let renderer = Renderer::new("Todo <List>").unwrap();
        let page = PageContext::for_list(renderer.app_name(), &[todo(1, "Milk", true)]);

        let html = renderer.render(&page).unwrap();

        assert!(html.contains("<title>Todo &lt;List&gt;</title>"));
        assert!(html.contains(r#"<div class="box""#));
        assert!(html.contains("1 of 1 done"));
    }

    proptest! {
        #[test]
        fn escaped_output_has_no_raw_specials(s in ".*") {
            let escaped = html_escape(&s);
            prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        }

        #[test]
        fn escape_is_identity_on_safe_text(s in "[a-zA-Z0-9 .,!?-]*") {
            prop_assert_eq!(html_escape(&s), Cow::Borrowed(s.as_str()));
        }
    }
}
