//! Server-rendered HTML pages.
//!
//! Every user-supplied value goes through [`escape`] before it reaches markup.

use std::fmt::Write as _;

use roster_characters::{Character, Field, ValidationFailures, ValidationStrategy};
use roster_core::Entity;

use crate::app::dto::CharacterFormParams;
use crate::app::routes::characters::{CREATE_PATH, CREATE_V1_PATH, CREATE_V2_PATH};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
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

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  .field-error {{ color: #b00020; margin: 0.2em 0 0.6em; }}
  .global-error {{ border: 1px solid #b00020; color: #b00020; padding: 0.5em; }}
  input.invalid {{ border-color: #b00020; }}
  table {{ border-collapse: collapse; }}
  td, th {{ border: 1px solid #ccc; padding: 0.3em 0.6em; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Listing of every stored character.
pub fn character_list(characters: &[Character]) -> String {
    let mut body = String::from("<h1>Characters</h1>\n");
    let _ = writeln!(
        body,
        r#"<p><a href="{CREATE_PATH}">Register</a> | <a href="{CREATE_V1_PATH}">Register (manual checks)</a> | <a href="{CREATE_V2_PATH}">Register (declarative constraints)</a></p>"#
    );

    if characters.is_empty() {
        body.push_str("<p class=\"empty\">No characters registered yet.</p>\n");
        return page("Characters", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>id</th><th>name</th><th>age</th><th>height</th><th>weight</th><th>email</th></tr></thead>\n<tbody>\n",
    );
    for c in characters {
        let _ = writeln!(
            body,
            r#"<tr><td><a href="/characters/{id}">{id}</a></td><td>{name}</td><td>{age}</td><td>{height}</td><td>{weight}</td><td>{email}</td></tr>"#,
            id = c.id(),
            name = escape(c.name()),
            age = c.age(),
            height = c.height(),
            weight = c.weight(),
            email = escape(c.email()),
        );
    }
    body.push_str("</tbody>\n</table>\n");
    page("Characters", &body)
}

/// The create form, optionally annotated with failures from a previous submit.
pub fn character_form(
    action: &str,
    strategy: ValidationStrategy,
    values: &CharacterFormParams,
    failures: &ValidationFailures,
) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<h1>Register a character</h1>\n<p class=\"strategy\">Validation: {strategy}</p>"
    );

    let global: Vec<_> = failures.global().collect();
    if !global.is_empty() {
        body.push_str("<div class=\"global-error\">\n");
        for failure in global {
            let _ = writeln!(
                body,
                r#"<p data-code="{code}">{message}</p>"#,
                code = failure.code(),
                message = escape(&failure.message()),
            );
        }
        body.push_str("</div>\n");
    }

    let _ = writeln!(body, r#"<form action="{}" method="post">"#, escape(action));
    for field in Field::ALL {
        let invalid = failures.has_field_error(field);
        let _ = writeln!(
            body,
            r#"<div><label for="{name}">{label}</label> <input type="{kind}" id="{name}" name="{name}" value="{value}"{class}></div>"#,
            name = field.as_str(),
            label = label(field),
            kind = input_type(field),
            value = escape(values.value(field).unwrap_or_default()),
            class = if invalid { r#" class="invalid""# } else { "" },
        );
        for failure in failures.for_field(field) {
            let _ = writeln!(
                body,
                r#"<p class="field-error" data-field="{name}" data-code="{code}">{label} {message}</p>"#,
                name = field.as_str(),
                code = failure.code(),
                label = label(field),
                message = escape(&failure.message()),
            );
        }
    }
    body.push_str("<button type=\"submit\">Register</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">Back to list</a></p>\n");

    page("Register a character", &body)
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Age => "Age",
        Field::Height => "Height (cm)",
        Field::Weight => "Weight (kg)",
        Field::Email => "Email",
    }
}

// Numbers stay text inputs so the server-side binding errors are reachable.
fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}
