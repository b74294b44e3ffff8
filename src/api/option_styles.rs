use crate::core::Theme;
use crate::option::{
    Axis, AxisLabel, AxisStroke, Legend, Orient, TextStyle, Title, Tooltip, TooltipFormatter,
    TooltipTrigger,
};

/// Inputs every per-kind builder reads besides its payload.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OptionContext<'a> {
    pub theme: &'a Theme,
    pub viewport_width: u32,
    pub responsive_breakpoint_px: u32,
}

impl OptionContext<'_> {
    pub(crate) fn is_narrow(&self) -> bool {
        self.viewport_width < self.responsive_breakpoint_px
    }
}

pub(crate) fn centered_title(title: Option<&str>, theme: &Theme) -> Option<Title> {
    title.map(|text| Title {
        text: text.to_owned(),
        left: Some("center".to_owned()),
        text_style: TextStyle::colored(&theme.text),
    })
}

pub(crate) fn themed_tooltip(theme: &Theme, trigger: Option<TooltipTrigger>) -> Tooltip {
    Tooltip {
        trigger,
        axis_pointer: None,
        position: None,
        background_color: theme.tooltip_background.clone(),
        border_color: theme.tooltip_border.clone(),
        text_style: TextStyle::colored(&theme.text),
        formatter: TooltipFormatter::Default,
    }
}

pub(crate) fn bottom_legend(theme: &Theme) -> Legend {
    Legend {
        bottom: Some("0".to_owned()),
        text_style: TextStyle::colored(&theme.muted_text),
        ..Legend::default()
    }
}

/// Legend to the right, stacked vertically; a centered bottom strip on narrow viewports.
pub(crate) fn responsive_legend(context: &OptionContext<'_>) -> Legend {
    let text_style = TextStyle::colored(&context.theme.muted_text);
    if context.is_narrow() {
        Legend {
            orient: Some(Orient::Horizontal),
            left: Some("center".to_owned()),
            bottom: Some("0%".to_owned()),
            text_style,
            ..Legend::default()
        }
    } else {
        Legend {
            orient: Some(Orient::Vertical),
            right: Some("10%".to_owned()),
            top: Some("center".to_owned()),
            text_style,
            ..Legend::default()
        }
    }
}

pub(crate) fn themed_category_axis(labels: Vec<String>, theme: &Theme) -> Axis {
    Axis {
        axis_line: Some(AxisStroke::colored(&theme.axis_line)),
        axis_label: Some(AxisLabel::colored(&theme.muted_text)),
        ..Axis::category(labels)
    }
}

pub(crate) fn themed_value_axis(theme: &Theme) -> Axis {
    Axis {
        axis_line: Some(AxisStroke::colored(&theme.axis_line)),
        axis_label: Some(AxisLabel::colored(&theme.muted_text)),
        split_line: Some(AxisStroke::colored(&theme.split_line)),
        ..Axis::value()
    }
}
