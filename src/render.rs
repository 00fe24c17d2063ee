//! Minimal server-side pages for the visitor form and the admin table.

use std::fmt::Write;

use axum::response::Html;

use crate::models::slot::{Slot, SlotAvailability};

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

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    ))
}

pub fn index_page(slots: &[SlotAvailability]) -> Html<String> {
    let mut options = String::new();
    for slot in slots {
        let name = escape(&slot.name);
        let _ = writeln!(
            options,
            "<label class=\"slot{}\"><input type=\"radio\" name=\"slot\" value=\"{name}\" required{}> \
             {name} (残り {} / {}){}</label><br>",
            if slot.disabled { " full" } else { "" },
            if slot.disabled { " disabled" } else { "" },
            slot.remaining,
            slot.capacity,
            if slot.recommend { " <strong>おすすめ</strong>" } else { "" },
        );
    }

    let body = format!(
        "<form method=\"post\" action=\"/submit\">\n\
         <p><label>名前 <input type=\"text\" name=\"name\" required></label></p>\n\
         <p><label>学年 <input type=\"text\" name=\"grade\" required></label></p>\n\
         <fieldset><legend>参加する回</legend>\n{options}</fieldset>\n\
         <p><button type=\"submit\">申し込む</button></p>\n</form>\n"
    );
    page("参加申し込み", &body)
}

pub fn result_page(message: &str) -> Html<String> {
    let body = format!(
        "<p class=\"message\">{}</p>\n<p><a href=\"/\">戻る</a></p>\n",
        escape(message)
    );
    page("申し込み結果", &body)
}

pub fn admin_page(slots: &[Slot]) -> Html<String> {
    let mut rows = String::new();
    for slot in slots {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&slot.name),
            slot.remaining,
            slot.capacity
        );
    }

    let body = format!(
        "<table>\n<tr><th>回</th><th>残り</th><th>定員</th></tr>\n{rows}</table>\n\
         <form method=\"post\" action=\"/admin/reset\">\n\
         <button type=\"submit\">人数をリセット</button>\n</form>\n"
    );
    page("管理者画面", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_index_marks_full_and_recommended_slots() {
        let slots = vec![
            SlotAvailability {
                name: "第1回".into(),
                remaining: 0,
                capacity: 10,
                disabled: true,
                recommend: false,
            },
            SlotAvailability {
                name: "第2回".into(),
                remaining: 10,
                capacity: 10,
                disabled: false,
                recommend: true,
            },
        ];

        let Html(html) = index_page(&slots);
        assert!(html.contains("value=\"第1回\" required disabled"));
        assert!(html.contains("value=\"第2回\" required>"));
        assert_eq!(html.matches("おすすめ").count(), 1);
    }

    #[test]
    fn test_result_page_escapes_visitor_input() {
        let Html(html) = result_page("<b>Yui</b> さん");
        assert!(html.contains("&lt;b&gt;Yui&lt;/b&gt; さん"));
        assert!(!html.contains("<b>Yui"));
    }
}
