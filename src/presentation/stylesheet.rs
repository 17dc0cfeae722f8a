use super::{DocumentRoot, DARK_CLASS};

pub fn render_stylesheet(root: &DocumentRoot) -> String {
    let mut custom_properties = String::new();
    for (name, value) in root.style_properties() {
        custom_properties.push_str(&format!("  {name}: {value};\n"));
    }

    let color_scheme = if root.has_class(DARK_CLASS) {
        "dark"
    } else {
        "light"
    };
    let font_size = root
        .font_size_px()
        .map(|size| format!("  font-size: {size}px;\n"))
        .unwrap_or_default();
    let font_family = root
        .font_family()
        .map(|family| format!("  font-family: {family};\n"))
        .unwrap_or_default();

    format!(
        ":root {{
{custom_properties}}}
html {{
  direction: {direction};
  color-scheme: {color_scheme};
{font_size}{font_family}}}
",
        direction = root.direction().as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{
        Direction, PresentationSurface, PRIMARY_COLOR_PROPERTY, SIZE_MULTIPLIER_PROPERTY,
    };

    #[test]
    fn empty_root_renders_light_ltr_without_font_rules() {
        let css = render_stylesheet(&DocumentRoot::new());
        assert_eq!(
            css,
            ":root {\n}\nhtml {\n  direction: ltr;\n  color-scheme: light;\n}\n"
        );
    }

    #[test]
    fn stylesheet_reflects_applied_root_state() {
        let mut root = DocumentRoot::new();
        root.set_class(DARK_CLASS, true);
        root.set_direction(Direction::Rtl);
        root.set_font_size_px(18);
        root.set_font_family("Intro");
        root.set_style_property(PRIMARY_COLOR_PROPERTY, "#ff0000");
        root.set_style_property(SIZE_MULTIPLIER_PROPERTY, "1.2");

        let css = root.stylesheet();
        assert!(css.contains("  --primary-color: #ff0000;\n"));
        assert!(css.contains("  --size-multiplier: 1.2;\n"));
        assert!(css.contains("  direction: rtl;\n"));
        assert!(css.contains("  color-scheme: dark;\n"));
        assert!(css.contains("  font-size: 18px;\n"));
        assert!(css.contains("  font-family: Intro, sans-serif;\n"));
    }
}
