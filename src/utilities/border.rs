//! Border utilities - color, width, radius and style

use super::class::utility_class;

utility_class! {
    /// Border color classes, previewed through concrete hex values
    BorderColor, axis = "color", title = "Color", default = Blue600 {
        Red500 => "border-red-500", "red-500", "border-color: #ef4444;", "Error / destructive";
        Blue600 => "border-blue-600", "blue-600", "border-color: #2563eb;", "Primary / action";
        Green500 => "border-green-500", "green-500", "border-color: #22c55e;", "Success / positive";
        Yellow400 => "border-yellow-400", "yellow-400", "border-color: #f59e0b;", "Warning / attention";
        Purple500 => "border-purple-500", "purple-500", "border-color: #a855f7;", "Accent / brand";
        Gray300 => "border-gray-300", "gray-300", "border-color: #d1d5db;", "Neutral / subtle";
        Token => "border-border", "border", "border-color: var(--border, #9ca3af);", "Design token (default)";
        Transparent => "border-transparent", "transparent", "border-color: transparent;", "Invisible frame / layout";
    }
}

utility_class! {
    BorderWidth, axis = "width", title = "Width", default = Thin {
        Thin => "border", "1px", "border-width: 1px;", "1px border on every side";
        Two => "border-2", "2px", "border-width: 2px;", "2px border on every side";
        Four => "border-4", "4px", "border-width: 4px;", "4px border on every side";
        Zero => "border-0", "0", "border-width: 0px;", "Remove the border";
    }
}

utility_class! {
    BorderRadius, axis = "radius", title = "Radius", default = Md {
        Square => "rounded-none", "none", "border-radius: 0px;", "Square corners";
        Base => "rounded", "rounded", "border-radius: 0.25rem;", "0.25rem corners";
        Md => "rounded-md", "md", "border-radius: 0.375rem;", "0.375rem corners";
        Lg => "rounded-lg", "lg", "border-radius: 0.5rem;", "0.5rem corners";
        Full => "rounded-full", "full", "border-radius: 9999px;", "Pill / circle";
    }
}

utility_class! {
    BorderStyle, axis = "style", title = "Style", default = Solid {
        Solid => "border-solid", "solid", "border-style: solid;", "Continuous stroke (default)";
        Dashed => "border-dashed", "dashed", "border-style: dashed;", "Dashed \u{2014} good for placeholders";
        Dotted => "border-dotted", "dotted", "border-style: dotted;", "Dotted \u{2014} subtle decorative";
        Double => "border-double", "double", "border-style: double;", "Double line \u{2014} high emphasis";
        Hidden => "border-none", "none", "border-style: none;", "No visible border";
    }
}

utility_class! {
    /// Raw colors for the border style playground, written as a `style`
    /// attribute instead of a class
    BorderSwatch, axis = "color", title = "Color", default = Blue {
        Blue => "#2563eb", "#2563eb", "border-color: #2563eb;", "Blue";
        Red => "#ef4444", "#ef4444", "border-color: #ef4444;", "Red";
        Green => "#22c55e", "#22c55e", "border-color: #22c55e;", "Green";
        Amber => "#f59e0b", "#f59e0b", "border-color: #f59e0b;", "Amber";
        Purple => "#a855f7", "#a855f7", "border-color: #a855f7;", "Purple";
        Slate => "#94a3b8", "#94a3b8", "border-color: #94a3b8;", "Slate";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::UtilityClass;

    #[test]
    fn color_css_uses_concrete_values() {
        assert_eq!(BorderColor::Blue600.to_css(), "border-color: #2563eb;");
        assert_eq!(BorderColor::Transparent.to_css(), "border-color: transparent;");
    }

    #[test]
    fn style_css_strips_prefix() {
        for s in BorderStyle::ALL {
            let keyword = s.class().trim_start_matches("border-");
            assert_eq!(s.to_css(), format!("border-style: {keyword};"));
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(BorderColor::default().class(), "border-blue-600");
        assert_eq!(BorderWidth::default().class(), "border");
        assert_eq!(BorderRadius::default().class(), "rounded-md");
        assert_eq!(BorderStyle::default().class(), "border-solid");
        assert_eq!(BorderSwatch::default().class(), "#2563eb");
    }
}
