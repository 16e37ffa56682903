/// A simple SVG document builder for the dashboard sink.
///
/// Elements are appended as prebuilt strings; the builder only owns the
/// outer `<svg>` envelope and indentation. Text content goes through
/// [`escape_text`].
pub struct SvgDocument {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Append a raw element (or group) to the document body.
    pub fn push(&mut self, element: impl Into<String>) {
        self.elements.push(element.into());
    }

    /// Append a `<text>` element with escaped content.
    pub fn push_text(&mut self, x: f64, y: f64, attrs: &str, content: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" {}>{}</text>"#,
            x,
            y,
            attrs,
            escape_text(content)
        ));
    }

    /// Render the complete document.
    pub fn render(&self) -> String {
        let mut output = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        output.push('\n');
        for element in &self.elements {
            output.push_str("  ");
            output.push_str(element);
            output.push('\n');
        }
        output.push_str("</svg>\n");
        output
    }
}

/// Escape a string for use as SVG/XML text content.
pub fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_and_elements() {
        let mut doc = SvgDocument::new(640, 440);
        doc.push(r##"<rect width="640" height="440" fill="#0E0E10"/>"##);
        doc.push_text(20.0, 48.0, r##"fill="#FFFFFF""##, "hello");

        let rendered = doc.render();
        assert!(rendered.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"640\""));
        assert!(rendered.contains("<rect"));
        assert!(rendered.contains(">hello</text>"));
        assert!(rendered.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = SvgDocument::new(10, 10);
        doc.push_text(0.0, 0.0, "", "Durov's Cap & <friends>");
        assert!(doc.render().contains("Durov's Cap &amp; &lt;friends&gt;"));
    }
}
