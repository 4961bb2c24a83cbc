//! Minimal document tree used as the render target
//!
//! A [`Container`] is the single element the gallery draws into. Content is
//! built off-tree in a [`Fragment`] and attached in one batch, or replaced
//! wholesale for status messages. The tree serializes to HTML and to plain
//! text.

use std::fmt::Write as _;

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with children
    Element(Element),
    /// Image with optional one-shot fallback
    Image(Image),
    /// Text node
    Text(String),
}

impl Node {
    /// Text node
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenated text of this node and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Image(_) => {}
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(&escape_html(t)),
            Self::Image(img) => img.write_html(out),
            Self::Element(el) => el.write_html(out),
        }
    }

    fn write_plain(&self, out: &mut String, depth: usize) {
        match self {
            Self::Text(t) => {
                let _ = writeln!(out, "{:indent$}{t}", "", indent = depth * 2);
            }
            Self::Image(img) => {
                let _ = writeln!(out, "{:indent$}[image: {}]", "", img.src, indent = depth * 2);
            }
            Self::Element(el) if el.is_inline_block() => {
                let _ = writeln!(out, "{:indent$}{}", "", el.text(), indent = depth * 2);
            }
            Self::Element(el) => {
                for child in &el.children {
                    child.write_plain(out, depth + usize::from(el.class.is_some()));
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<Image> for Node {
    fn from(img: Image) -> Self {
        Self::Image(img)
    }
}

/// An element such as `div`, `p` or `h3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub tag: &'static str,
    /// CSS class
    pub class: Option<String>,
    /// Inline style
    pub style: Option<String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create empty element
    #[inline]
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            style: None,
            children: Vec::new(),
        }
    }

    /// With CSS class
    #[inline]
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// With inline style
    #[inline]
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// With appended child
    #[inline]
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// With appended text child
    #[inline]
    #[must_use]
    pub fn text_child(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Concatenated descendant text
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Whether the element has the given class
    #[inline]
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class.as_deref() == Some(class)
    }

    /// First image among descendants
    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        self.children.iter().find_map(|child| match child {
            Node::Image(img) => Some(img),
            Node::Element(el) => el.image(),
            Node::Text(_) => None,
        })
    }

    /// First image among descendants, mutably
    pub fn image_mut(&mut self) -> Option<&mut Image> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Image(img) => Some(img),
            Node::Element(el) => el.image_mut(),
            Node::Text(_) => None,
        })
    }

    fn is_inline_block(&self) -> bool {
        matches!(self.tag, "p" | "h3" | "strong")
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(class) = &self.class {
            let _ = write!(out, " class=\"{}\"", escape_html(class));
        }
        if let Some(style) = &self.style {
            let _ = write!(out, " style=\"{}\"", escape_html(style));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Handler run when an image fails to display
///
/// Holds the substitute source. It is consumed on first use, so a failing
/// substitute never triggers another swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    src: String,
}

impl ImageFallback {
    /// Create handler that swaps to `src`
    #[inline]
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    /// Substitute source
    #[inline]
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }
}

/// An image element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    src: String,
    alt: String,
    on_error: Option<ImageFallback>,
}

impl Image {
    /// Create image without a fallback
    #[inline]
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            on_error: None,
        }
    }

    /// With error handler
    #[inline]
    #[must_use]
    pub fn with_fallback(mut self, fallback: ImageFallback) -> Self {
        self.on_error = Some(fallback);
        self
    }

    /// Current source URL
    #[inline]
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Alternative text
    #[inline]
    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Whether an error handler is still attached
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.on_error.is_some()
    }

    /// Report a display failure of the current source
    ///
    /// Detaches the handler, then swaps the source. Returns whether a swap
    /// happened.
    pub fn fail(&mut self) -> bool {
        match self.on_error.take() {
            Some(fallback) => {
                tracing::debug!(from = %self.src, to = %fallback.src, "image failed, using fallback");
                self.src = fallback.src;
                true
            }
            None => false,
        }
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(
            out,
            "<img src=\"{}\" alt=\"{}\"",
            escape_html(&self.src),
            escape_html(&self.alt)
        );
        if let Some(fallback) = &self.on_error {
            let _ = write!(
                out,
                " onerror=\"this.onerror=null; this.src='{}';\"",
                escape_html(&fallback.src)
            );
        }
        out.push_str(" />");
    }
}

/// Off-tree batch of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    /// Create empty fragment
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append node
    #[inline]
    pub fn append(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the fragment is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The element the gallery renders into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<Node>,
    attach_count: usize,
}

impl Container {
    /// Create empty container with element id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
            attach_count: 0,
        }
    }

    /// Element id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove all content
    #[inline]
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Replace all content with a single node
    pub fn replace_with(&mut self, node: impl Into<Node>) {
        self.children.clear();
        self.children.push(node.into());
        self.attach_count += 1;
    }

    /// Attach every node of `fragment` in one operation
    pub fn append_fragment(&mut self, fragment: Fragment) {
        self.children.extend(fragment.nodes);
        self.attach_count += 1;
    }

    /// Top-level children
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of attach operations performed so far
    #[inline]
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    /// Top-level elements carrying `class`
    pub fn elements_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(el) if el.has_class(class) => Some(el),
            _ => None,
        })
    }

    /// Top-level elements carrying `class`, mutably
    pub fn elements_with_class_mut<'a>(
        &'a mut self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> {
        self.children.iter_mut().filter_map(move |node| match node {
            Node::Element(el) if el.has_class(class) => Some(el),
            _ => None,
        })
    }

    /// Concatenated text of all content
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Content as an HTML `div` carrying the container id
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<div id=\"{}\">", escape_html(&self.id));
        for child in &self.children {
            child.write_html(&mut out);
        }
        out.push_str("</div>");
        out
    }

    /// Content as indented plain text, one block per line
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_plain(&mut out, 0);
            if matches!(child, Node::Element(el) if el.class.is_some()) {
                out.push('\n');
            }
        }
        out
    }
}

/// Escape text for use in HTML content and attribute values
#[must_use]
pub fn escape_html(raw: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_fallback_fires_once() {
        let mut img = Image::new("https://cdn/primary.jpg", "Akita")
            .with_fallback(ImageFallback::new("https://placeholder?random=1"));

        assert!(img.is_armed());
        assert!(img.fail());
        assert_eq!(img.src(), "https://placeholder?random=1");
        assert!(!img.is_armed());

        assert!(!img.fail());
        assert_eq!(img.src(), "https://placeholder?random=1");
    }

    #[test]
    fn image_without_fallback_never_swaps() {
        let mut img = Image::new("a.jpg", "a");
        assert!(!img.fail());
        assert_eq!(img.src(), "a.jpg");
    }

    #[test]
    fn fragment_attaches_in_one_batch() {
        let mut container = Container::new("breeds-container");
        let mut fragment = Fragment::new();
        for i in 0..3 {
            fragment.append(Element::new("div").with_class("breed-card").text_child(i.to_string()));
        }
        assert_eq!(fragment.len(), 3);

        container.append_fragment(fragment);
        assert_eq!(container.attach_count(), 1);
        assert_eq!(container.elements_with_class("breed-card").count(), 3);
        assert_eq!(container.text_content(), "012");
    }

    #[test]
    fn replace_with_discards_previous_content() {
        let mut container = Container::new("c");
        container.replace_with(Element::new("p").text_child("first"));
        container.replace_with(Element::new("p").text_child("second"));
        assert_eq!(container.children().len(), 1);
        assert_eq!(container.text_content(), "second");
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let mut container = Container::new("c");
        container.replace_with(
            Element::new("div")
                .with_class("x\"y")
                .text_child("<b>Tom & Jerry</b>")
                .child(Image::new("a.jpg?x=1&y=2", "O'Neil")),
        );
        assert_eq!(
            container.to_html(),
            "<div id=\"c\"><div class=\"x&quot;y\">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;\
             <img src=\"a.jpg?x=1&amp;y=2\" alt=\"O&#39;Neil\" /></div></div>"
        );
    }

    #[test]
    fn html_includes_armed_onerror_only() {
        let mut img = Image::new("p.jpg", "p").with_fallback(ImageFallback::new("f.jpg"));
        let mut armed = String::new();
        img.write_html(&mut armed);
        assert!(armed.contains("onerror=\"this.onerror=null; this.src='f.jpg';\""));

        img.fail();
        let mut disarmed = String::new();
        img.write_html(&mut disarmed);
        assert!(!disarmed.contains("onerror"));
    }

    #[test]
    fn nested_image_lookup() {
        let mut card = Element::new("div")
            .with_class("breed-card")
            .child(Element::new("figure").child(Image::new("a.jpg", "a")));
        assert_eq!(card.image().map(Image::src), Some("a.jpg"));
        assert!(card.image_mut().is_some());
    }
}
