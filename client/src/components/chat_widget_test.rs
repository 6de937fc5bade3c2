use super::*;

// =============================================================
// submits_on_key
// =============================================================

#[test]
fn enter_submits() {
    assert!(submits_on_key("Enter", false, false));
}

#[test]
fn shift_enter_does_not_submit() {
    assert!(!submits_on_key("Enter", true, false));
}

#[test]
fn enter_during_ime_composition_does_not_submit() {
    assert!(!submits_on_key("Enter", false, true));
}

#[test]
fn other_keys_do_not_submit() {
    assert!(!submits_on_key("a", false, false));
    assert!(!submits_on_key("Tab", false, false));
}

// =============================================================
// Classes
// =============================================================

#[test]
fn rows_align_by_role() {
    assert!(row_class(Role::User).ends_with("--user"));
    assert!(row_class(Role::Assistant).ends_with("--assistant"));
    assert_ne!(bubble_class(Role::User), bubble_class(Role::Assistant));
}

#[test]
fn fab_class_marks_open_state() {
    assert_eq!(fab_class(false), "chat-widget__fab");
    assert_eq!(fab_class(true), "chat-widget__fab chat-widget__fab--open");
}

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn markdown_renders_emphasis() {
    let html = render_markdown_html("**Good** structure");
    assert!(html.contains("<strong>Good</strong>"));
}

#[test]
fn markdown_drops_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
}

#[test]
fn markdown_keeps_single_line_breaks() {
    let html = render_markdown_html("첫 줄\n둘째 줄");
    assert!(html.contains("<br />"));
}
