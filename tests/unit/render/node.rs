use super::*;

fn card(text: &str) -> DisplayNode {
    DisplayNode::element(
        "div",
        vec![DisplayNode::element("p", vec![DisplayNode::text(text)])],
    )
    .with_class("person")
}

#[test]
fn html_wraps_text_in_classed_div() {
    assert_eq!(
        card("hi").to_html(),
        r#"<div class="person"><p>hi</p></div>"#
    );
}

#[test]
fn html_escapes_text_content() {
    assert_eq!(
        card("Tom & <Jerry> \"x\" 'y'").to_html(),
        r#"<div class="person"><p>Tom &amp; &lt;Jerry&gt; &quot;x&quot; &#39;y&#39;</p></div>"#
    );
}

#[test]
fn text_content_is_unescaped() {
    let node = card("a < b");
    assert_eq!(node.text_content(), "a < b");
    assert_eq!(node.serialize(OutputFormat::Text), "a < b");
    assert_eq!(node.serialize(OutputFormat::Html), node.to_html());
}

#[test]
fn with_class_leaves_text_alone() {
    assert_eq!(
        DisplayNode::text("x").with_class("person"),
        DisplayNode::text("x")
    );
}
