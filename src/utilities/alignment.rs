//! Grid alignment utilities - justify-items and justify-self

use super::class::utility_class;

utility_class! {
    JustifyItems, axis = "justify-items", title = "Justify items", default = Start {
        Start => "justify-items-start", "start", "justify-items: start;", "Align grid items to the start of their cells";
        Center => "justify-items-center", "center", "justify-items: center;", "Center grid items within their cells";
        End => "justify-items-end", "end", "justify-items: end;", "Align grid items to the end of their cells";
        Stretch => "justify-items-stretch", "stretch", "justify-items: stretch;", "Stretch grid items to fill their cells";
    }
}

utility_class! {
    JustifySelf, axis = "justify-self", title = "Justify self", default = Auto {
        Auto => "justify-self-auto", "auto", "justify-self: auto;", "Use the container's justify-items value";
        Start => "justify-self-start", "start", "justify-self: start;", "Align this item to the start of its cell";
        End => "justify-self-end", "end", "justify-self: end;", "Align this item to the end of its cell";
        Center => "justify-self-center", "center", "justify-self: center;", "Center this item within its cell";
        Stretch => "justify-self-stretch", "stretch", "justify-self: stretch;", "Stretch this item to fill its cell";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::UtilityClass;

    #[test]
    fn css_keyword_is_class_suffix() {
        for j in JustifyItems::ALL {
            let keyword = j.class().trim_start_matches("justify-items-");
            assert_eq!(j.to_css(), format!("justify-items: {keyword};"));
        }
        for j in JustifySelf::ALL {
            let keyword = j.class().trim_start_matches("justify-self-");
            assert_eq!(j.to_css(), format!("justify-self: {keyword};"));
        }
    }
}
