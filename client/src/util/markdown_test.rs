use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown_html("# Title\n\nSome *emphasis*.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<em>emphasis</em>"));
}

#[test]
fn renders_tables_and_strikethrough() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
    assert!(html.contains("<table>"));
    assert!(html.contains("<del>gone</del>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("<script>alert(1)</script>\n\ntext <b>bold</b>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("text"));
}

#[test]
fn empty_source_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

// =============================================================
// Link and image destinations
// =============================================================

#[test]
fn javascript_link_is_neutralized() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r#"<a href="">click</a>"#));
}

#[test]
fn scheme_check_ignores_case_and_embedded_whitespace() {
    let html = render_markdown_html("[a](JaVaScRiPt:alert(1))");
    assert!(!html.to_ascii_lowercase().contains("javascript:"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url("java\nscript:alert(1)"));
}

#[test]
fn vbscript_link_is_neutralized() {
    let html = render_markdown_html("[run](vbscript:msgbox(1))");
    assert!(!html.contains("vbscript:"));
}

#[test]
fn data_link_and_image_are_neutralized() {
    let html = render_markdown_html(
        "[doc](data:text/html;base64,PHNjcmlwdD4=)\n\n![img](data:image/svg+xml;base64,PHN2Zz4=)",
    );
    assert!(!html.contains("data:"));
    assert!(html.contains(r#"<img src="""#));
}

#[test]
fn javascript_image_is_neutralized() {
    let html = render_markdown_html("![x](javascript:alert(1))");
    assert!(!html.contains("javascript:"));
}

#[test]
fn javascript_autolink_is_neutralized() {
    let html = render_markdown_html("<javascript:alert(1)>");
    assert!(!html.contains(r#"href="javascript:"#));
}

#[test]
fn safe_destinations_are_kept() {
    let html = render_markdown_html(
        "[web](https://example.com/a?b=1) [plain](http://example.com) [mail](mailto:me@example.com) \
         [page](/page/rust-notes) [rel](notes/other) [frag](#top)\n\n![pic](https://example.com/p.png)",
    );
    assert!(html.contains(r#"href="https://example.com/a?b=1""#));
    assert!(html.contains(r#"href="http://example.com""#));
    assert!(html.contains(r#"href="mailto:me@example.com""#));
    assert!(html.contains(r#"href="/page/rust-notes""#));
    assert!(html.contains(r#"href="notes/other""#));
    assert!(html.contains(r##"href="#top""##));
    assert!(html.contains(r#"src="https://example.com/p.png""#));
}

#[test]
fn is_safe_url_treats_colon_after_path_as_relative() {
    assert!(is_safe_url("notes/a:b"));
    assert!(is_safe_url("?q=x:y"));
    assert!(!is_safe_url(" javascript:alert(1)"));
    assert!(!is_safe_url("file:///etc/passwd"));
}
