//! Style resolution for the text field
//!
//! Maps variant, size, and interaction state to Tailwind class buckets.
//! Precedence is fixed for every variant: disabled beats error, error beats
//! focus, focus beats hover, hover beats the resting look.

use super::affordance::RightPadding;
use super::config::{FieldSize, FieldVariant};

/// Which chrome the field shows, after precedence has been applied
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Chrome {
    Disabled,
    Error,
    Focused,
    /// Resting look; the only chrome that reacts to hover
    Idle,
}

impl Chrome {
    pub fn resolve(disabled: bool, focused: bool, show_error: bool) -> Self {
        if disabled {
            Chrome::Disabled
        } else if show_error {
            Chrome::Error
        } else if focused {
            Chrome::Focused
        } else {
            Chrome::Idle
        }
    }
}

/// Size-dependent classes, independent of variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SizeClasses {
    pub input: &'static str,
    pub label: &'static str,
    pub helper: &'static str,
    pub icon: &'static str,
}

impl SizeClasses {
    pub fn for_size(size: FieldSize) -> Self {
        match size {
            FieldSize::Small => SizeClasses {
                input: "px-2.5 py-1.5 text-sm",
                label: "text-xs mb-1",
                helper: "text-[11px] mt-1",
                icon: "w-3.5 h-3.5",
            },
            FieldSize::Medium => SizeClasses {
                input: "px-3 py-2 text-base",
                label: "text-sm mb-1.5",
                helper: "text-xs mt-1.5",
                icon: "w-4 h-4",
            },
            FieldSize::Large => SizeClasses {
                input: "px-4 py-3 text-lg",
                label: "text-base mb-2",
                helper: "text-sm mt-2",
                icon: "w-5 h-5",
            },
        }
    }
}

/// Resolved style for one render pass
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StyleBucket {
    pub variant: FieldVariant,
    pub chrome: Chrome,
    pub size: SizeClasses,
}

pub fn resolve_style(
    variant: FieldVariant,
    size: FieldSize,
    disabled: bool,
    focused: bool,
    show_error: bool,
) -> StyleBucket {
    StyleBucket {
        variant,
        chrome: Chrome::resolve(disabled, focused, show_error),
        size: SizeClasses::for_size(size),
    }
}

const INPUT_BASE: &str =
    "w-full text-gray-300 placeholder-gray-500 focus:outline-none transition-colors";

impl StyleBucket {
    /// Variant chrome for the current state
    pub fn chrome_class(&self) -> &'static str {
        match (self.variant, self.chrome) {
            (FieldVariant::Filled, Chrome::Idle) => {
                "rounded-lg border border-transparent bg-gray-800 hover:bg-gray-700/80"
            }
            (FieldVariant::Filled, Chrome::Focused) => {
                "rounded-lg border border-transparent bg-gray-700 ring-2 ring-accent/50"
            }
            (FieldVariant::Filled, Chrome::Error) => {
                "rounded-lg border border-transparent bg-red-950/40 ring-2 ring-red-500/60"
            }
            (FieldVariant::Filled, Chrome::Disabled) => {
                "rounded-lg border border-transparent bg-gray-800 opacity-50 cursor-not-allowed"
            }
            (FieldVariant::Outlined, Chrome::Idle) => {
                "rounded-lg border bg-transparent border-gray-600 hover:border-gray-500"
            }
            (FieldVariant::Outlined, Chrome::Focused) => {
                "rounded-lg border bg-transparent border-accent ring-1 ring-accent/50"
            }
            (FieldVariant::Outlined, Chrome::Error) => {
                "rounded-lg border bg-transparent border-red-500 ring-1 ring-red-500/50"
            }
            (FieldVariant::Outlined, Chrome::Disabled) => {
                "rounded-lg border bg-transparent border-gray-700 opacity-50 cursor-not-allowed"
            }
            (FieldVariant::Ghost, Chrome::Idle) => {
                "rounded-none border-0 border-b-2 bg-transparent border-gray-600 hover:border-gray-500"
            }
            (FieldVariant::Ghost, Chrome::Focused) => {
                "rounded-none border-0 border-b-2 bg-transparent border-accent"
            }
            (FieldVariant::Ghost, Chrome::Error) => {
                "rounded-none border-0 border-b-2 bg-transparent border-red-500"
            }
            (FieldVariant::Ghost, Chrome::Disabled) => {
                "rounded-none border-0 border-b-2 bg-transparent border-gray-700 opacity-50 cursor-not-allowed"
            }
        }
    }

    pub fn input_class(&self, padding: RightPadding) -> String {
        let chrome = self.chrome_class();
        let size = self.size.input;
        match padding.class() {
            "" => format!("{INPUT_BASE} {size} {chrome}"),
            pad => format!("{INPUT_BASE} {size} {pad} {chrome}"),
        }
    }

    pub fn label_class(&self) -> String {
        let color = match self.chrome {
            Chrome::Error => "text-red-400",
            Chrome::Disabled => "text-gray-500",
            Chrome::Focused | Chrome::Idle => "text-gray-300",
        };
        format!("block font-medium {} {color}", self.size.label)
    }

    pub fn helper_class(&self) -> String {
        format!("{} text-gray-500", self.size.helper)
    }

    pub fn error_class(&self) -> String {
        format!("{} text-red-400", self.size.helper)
    }

    pub fn icon_class(&self) -> &'static str {
        self.size.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_beats_focus_for_every_variant() {
        for variant in FieldVariant::ALL {
            let style = resolve_style(variant, FieldSize::Medium, false, true, true);
            assert_eq!(style.chrome, Chrome::Error, "{variant}");
            assert!(style.chrome_class().contains("red-500"), "{variant}");
            assert!(!style.chrome_class().contains("accent"), "{variant}");
        }
    }

    #[test]
    fn disabled_beats_everything() {
        for variant in FieldVariant::ALL {
            let style = resolve_style(variant, FieldSize::Small, true, true, true);
            assert_eq!(style.chrome, Chrome::Disabled);
            assert!(style.chrome_class().contains("opacity-50"));
            assert!(!style.chrome_class().contains("hover:"));
        }
    }

    #[test]
    fn focus_beats_hover() {
        for variant in FieldVariant::ALL {
            let focused = resolve_style(variant, FieldSize::Medium, false, true, false);
            assert_eq!(focused.chrome, Chrome::Focused);
            assert!(focused.chrome_class().contains("accent"));
            assert!(!focused.chrome_class().contains("hover:"));
        }
    }

    #[test]
    fn only_idle_reacts_to_hover() {
        for variant in FieldVariant::ALL {
            let idle = resolve_style(variant, FieldSize::Medium, false, false, false);
            assert_eq!(idle.chrome, Chrome::Idle);
            assert!(idle.chrome_class().contains("hover:"));
        }
    }

    #[test]
    fn ghost_styles_only_the_bottom_border() {
        for chrome_state in [(false, false), (true, false), (false, true)] {
            let style = resolve_style(
                FieldVariant::Ghost,
                FieldSize::Medium,
                false,
                chrome_state.0,
                chrome_state.1,
            );
            let class = style.chrome_class();
            assert!(class.contains("border-0 border-b-2"));
            assert!(class.contains("bg-transparent"));
            assert!(!class.contains("ring"));
        }
    }

    #[test]
    fn filled_has_no_visible_border() {
        let style = resolve_style(FieldVariant::Filled, FieldSize::Large, false, false, false);
        assert!(style.chrome_class().contains("border-transparent"));
        assert!(style.chrome_class().contains("bg-gray-800"));
    }

    #[test]
    fn sizes_are_distinct_in_every_slot() {
        let buckets: Vec<_> = FieldSize::ALL.iter().map(|s| SizeClasses::for_size(*s)).collect();
        for (i, a) in buckets.iter().enumerate() {
            for b in buckets.iter().skip(i + 1) {
                assert_ne!(a.input, b.input);
                assert_ne!(a.label, b.label);
                assert_ne!(a.helper, b.helper);
                assert_ne!(a.icon, b.icon);
            }
        }
    }

    #[test]
    fn size_is_independent_of_variant() {
        for size in FieldSize::ALL {
            let sizes: Vec<_> = FieldVariant::ALL
                .iter()
                .map(|v| resolve_style(*v, size, false, false, false).size)
                .collect();
            assert!(sizes.windows(2).all(|pair| pair[0] == pair[1]));
        }
    }

    #[test]
    fn input_class_carries_padding_bucket() {
        let style = resolve_style(FieldVariant::Outlined, FieldSize::Medium, false, false, false);
        assert!(!style.input_class(RightPadding::None).contains("pr-"));
        assert!(style.input_class(RightPadding::Single).contains("pr-10"));
        assert!(style.input_class(RightPadding::Double).contains("pr-16"));
    }

    #[test]
    fn label_turns_red_on_error() {
        let style = resolve_style(FieldVariant::Filled, FieldSize::Small, false, true, true);
        assert!(style.label_class().contains("text-red-400"));
        assert!(style.label_class().contains("text-xs"));
    }
}
