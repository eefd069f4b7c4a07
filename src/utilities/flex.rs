//! Flexbox utilities - direction, wrapping, basis and item sizing

use super::class::utility_class;

utility_class! {
    FlexDirection, axis = "direction", title = "Direction", default = Row {
        Row => "flex-row", "row", "flex-direction: row;", "Row direction (left to right)";
        Col => "flex-col", "col", "flex-direction: column;", "Column direction (top to bottom)";
        RowReverse => "flex-row-reverse", "row-reverse", "flex-direction: row-reverse;", "Row reverse (right to left)";
        ColReverse => "flex-col-reverse", "col-reverse", "flex-direction: column-reverse;", "Column reverse (bottom to top)";
    }
}

utility_class! {
    FlexWrap, axis = "wrap", title = "Wrap mode", default = Wrap {
        Wrap => "flex-wrap", "wrap", "flex-wrap: wrap;", "Wrap to multiple lines";
        WrapReverse => "flex-wrap-reverse", "wrap-reverse", "flex-wrap: wrap-reverse;", "Wrap in reverse";
        NoWrap => "flex-nowrap", "nowrap", "flex-wrap: nowrap;", "Keep items on a single line";
    }
}

utility_class! {
    FlexBasis, axis = "basis", title = "Basis", default = Quarter {
        Zero => "basis-0", "0", "flex-basis: 0px;", "flex-basis: 0 \u{2014} starts from zero and grows/shrinks based on flex rules";
        Auto => "basis-auto", "auto", "flex-basis: auto;", "flex-basis: auto \u{2014} item size depends on content";
        Quarter => "basis-1/4", "1/4", "flex-basis: 25%;", "flex-basis: 25% of container width";
        Third => "basis-1/3", "1/3", "flex-basis: 33.333333%;", "flex-basis: 33.33% of container width";
        Half => "basis-1/2", "1/2", "flex-basis: 50%;", "flex-basis: 50% of container width";
        Full => "basis-full", "full", "flex-basis: 100%;", "flex-basis: 100% \u{2014} takes full container width";
    }
}

utility_class! {
    Flex, axis = "flex", title = "Flex", default = One {
        One => "flex-1", "1", "flex: 1 1 0%;", "flex: 1 1 0% \u{2014} Grows equally, shrinks equally";
        Auto => "flex-auto", "auto", "flex: 1 1 auto;", "flex: 1 1 auto \u{2014} Grows and shrinks based on content";
        Initial => "flex-initial", "initial", "flex: 0 1 auto;", "flex: 0 1 auto \u{2014} No growth, can shrink";
        Fixed => "flex-none", "none", "flex: none;", "flex: 0 0 auto \u{2014} No growth, no shrink (fixed size)";
    }
}

utility_class! {
    FlexGrow, axis = "grow", title = "Grow", default = Grow {
        Static => "flex-grow-0", "0", "flex-grow: 0;", "flex-grow: 0 \u{2014} No growth";
        Grow => "flex-grow", "1", "flex-grow: 1;", "flex-grow: 1 \u{2014} Grow proportionally";
    }
}

utility_class! {
    FlexShrink, axis = "shrink", title = "Shrink", default = Shrink {
        Rigid => "flex-shrink-0", "0", "flex-shrink: 0;", "flex-shrink: 0 \u{2014} No shrinking (maintains size)";
        Shrink => "flex-shrink", "1", "flex-shrink: 1;", "flex-shrink: 1 \u{2014} Shrink proportionally";
    }
}

utility_class! {
    AlignItems, axis = "align", title = "Align items", default = Start {
        Start => "items-start", "start", "align-items: flex-start;", "Pack items at the cross-axis start";
        Center => "items-center", "center", "align-items: center;", "Center items on the cross axis";
        End => "items-end", "end", "align-items: flex-end;", "Pack items at the cross-axis end";
        Stretch => "items-stretch", "stretch", "align-items: stretch;", "Stretch items to fill the line";
    }
}

utility_class! {
    JustifyContent, axis = "justify", title = "Justify", default = Start {
        Start => "justify-start", "start", "justify-content: flex-start;", "Pack items at the main-axis start";
        Center => "justify-center", "center", "justify-content: center;", "Center items on the main axis";
        End => "justify-end", "end", "justify-content: flex-end;", "Pack items at the main-axis end";
        Between => "justify-between", "between", "justify-content: space-between;", "Spread items, no outer space";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::UtilityClass;

    #[test]
    fn basis_fractions() {
        assert_eq!(FlexBasis::Quarter.to_css(), "flex-basis: 25%;");
        assert_eq!(FlexBasis::from_class("basis-1/2"), Some(FlexBasis::Half));
    }

    #[test]
    fn direction_css_spells_column() {
        assert_eq!(FlexDirection::Col.to_css(), "flex-direction: column;");
        assert_eq!(FlexDirection::ColReverse.to_css(), "flex-direction: column-reverse;");
    }

    #[test]
    fn sizing_vocabularies() {
        assert_eq!(Flex::ALL.len(), 4);
        assert_eq!(FlexGrow::Static.class(), "flex-grow-0");
        assert_eq!(FlexShrink::Rigid.class(), "flex-shrink-0");
    }
}
