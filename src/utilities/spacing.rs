//! Spacing and container utilities - gaps, layout mode and container width
//!
//! Gap classes are assembled from a mode (`gap`, `gap-x`, `gap-y`) and a size,
//! so `GapMode` carries no CSS of its own; see [`gap_rule`].

use super::class::{utility_class, UtilityClass};

utility_class! {
    GapSize, axis = "gap", title = "Gap", default = Four {
        One => "gap-1", "1", "gap: 0.25rem;", "0.25rem gap";
        Two => "gap-2", "2", "gap: 0.5rem;", "0.5rem gap";
        Three => "gap-3", "3", "gap: 0.75rem;", "0.75rem gap";
        Four => "gap-4", "4", "gap: 1rem;", "1rem gap (default example)";
        Six => "gap-6", "6", "gap: 1.5rem;", "1.5rem gap";
        Eight => "gap-8", "8", "gap: 2rem;", "2rem gap";
    }
}

impl GapSize {
    /// Numeric suffix shared by `gap-N`, `gap-x-N` and `gap-y-N`
    pub fn step(&self) -> &'static str {
        self.label()
    }

    pub fn length(&self) -> &'static str {
        match self {
            Self::One => "0.25rem",
            Self::Two => "0.5rem",
            Self::Three => "0.75rem",
            Self::Four => "1rem",
            Self::Six => "1.5rem",
            Self::Eight => "2rem",
        }
    }
}

utility_class! {
    GapMode, axis = "mode", title = "Gap mode", default = Both {
        Both => "gap", "gap", "", "Gap on both axes";
        Column => "gap-x", "gap-x", "", "Horizontal gap only";
        Row => "gap-y", "gap-y", "", "Vertical gap only";
    }
}

/// Class and declaration for a gap mode at a given size
pub fn gap_rule(mode: GapMode, size: GapSize) -> (String, String) {
    let class = format!("{}-{}", mode.class(), size.step());
    let property = match mode {
        GapMode::Both => "gap",
        GapMode::Column => "column-gap",
        GapMode::Row => "row-gap",
    };
    (class, format!("{property}: {};", size.length()))
}

utility_class! {
    LayoutMode, axis = "layout", title = "Layout", default = Flex {
        Flex => "flex", "flex", "display: flex;", "Flex container";
        Grid => "grid", "grid", "display: grid;", "Grid container";
    }
}

utility_class! {
    /// Main direction for the gap playground; mapped to `flex-row`/`flex-col`
    /// or a grid auto-flow depending on the layout
    FlowDirection, axis = "direction", title = "Direction", default = Row {
        Row => "row", "row", "", "Items flow along rows";
        Col => "col", "col", "", "Items flow along columns";
    }
}

utility_class! {
    ContainerWidth, axis = "container", title = "Container width", default = Full {
        Full => "w-full", "full", "width: 100%;", "Full available width";
        Medium => "w-[640px]", "md (640px)", "width: 640px; max-width: 100%;", "Fixed 640px container";
        Narrow => "w-[420px]", "narrow (420px)", "width: 420px; max-width: 100%;", "Fixed 420px container";
    }
}

utility_class! {
    /// How many tiles the gap playground lays out; not a class of its own
    ItemCount, axis = "items", title = "Number of items", default = Six {
        Three => "3", "3", "", "Three items";
        Four => "4", "4", "", "Four items";
        Six => "6", "6", "", "Six items";
        Eight => "8", "8", "", "Eight items";
    }
}

impl ItemCount {
    pub fn count(&self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_rule_per_mode() {
        assert_eq!(
            gap_rule(GapMode::Both, GapSize::Four),
            ("gap-4".to_string(), "gap: 1rem;".to_string())
        );
        assert_eq!(
            gap_rule(GapMode::Column, GapSize::Six),
            ("gap-x-6".to_string(), "column-gap: 1.5rem;".to_string())
        );
        assert_eq!(
            gap_rule(GapMode::Row, GapSize::One),
            ("gap-y-1".to_string(), "row-gap: 0.25rem;".to_string())
        );
    }

    #[test]
    fn item_count_matches_label() {
        for n in ItemCount::ALL {
            assert_eq!(n.count().to_string(), n.label());
        }
    }

    #[test]
    fn plain_gap_rule_matches_size_table() {
        for size in GapSize::ALL {
            let (class, css) = gap_rule(GapMode::Both, *size);
            assert_eq!(class, size.class());
            assert_eq!(css, size.to_css());
        }
    }
}
