//! Terminal rendering of a [`RenderPlan`] as a single styled line.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::window::{Affordance, ButtonDescriptor, RenderPlan};

/// Styles used by the page strip
#[derive(Debug, Clone)]
pub struct StripStyle {
    /// Style for the current page
    pub current_page_style: Style,

    /// Style for other pages
    pub page_style: Style,

    /// Style for skip markers
    pub skip_style: Style,

    /// Style for enabled arrows
    pub navigation_style: Style,

    /// Style for disabled arrows
    pub disabled_style: Style,

    /// Style for the range label
    pub text_style: Style,
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            current_page_style: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            page_style: Style::default().fg(Color::Blue),
            skip_style: Style::default().fg(Color::Cyan),
            navigation_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_style: Style::default().fg(Color::DarkGray),
            text_style: Style::default().fg(Color::White),
        }
    }
}

/// `« ‹ 1 … 5 [6] 7 … 100 › »`
pub fn render_strip(plan: &RenderPlan, style: &StripStyle) -> Line<'static> {
    let mut spans = Vec::with_capacity(plan.buttons.len() + 4);
    let affordances = &plan.affordances;

    if let Some(first) = affordances.first {
        spans.push(arrow("«", first, style));
    }
    spans.push(arrow("‹", affordances.previous, style));

    for button in &plan.buttons {
        spans.push(Span::raw(" "));
        let span = match button {
            ButtonDescriptor::Page { current: true, .. } => {
                Span::styled(format!("[{}]", button.label()), style.current_page_style)
            }
            ButtonDescriptor::Page { .. } => Span::styled(button.label(), style.page_style),
            ButtonDescriptor::Skip { .. } => Span::styled(button.label(), style.skip_style),
        };
        spans.push(span);
    }

    spans.push(Span::raw(" "));
    spans.push(arrow("›", affordances.next, style));
    if let Some(last) = affordances.last {
        spans.push(arrow("»", last, style));
    }

    Line::from(spans)
}

/// The strip followed by the range label
pub fn render_with_label(plan: &RenderPlan, style: &StripStyle) -> Line<'static> {
    let mut line = render_strip(plan, style);
    line.spans.push(Span::raw("  "));
    line.spans
        .push(Span::styled(plan.range_label.clone(), style.text_style));
    line
}

/// Unstyled text of a rendered line
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn arrow(symbol: &'static str, affordance: Affordance, style: &StripStyle) -> Span<'static> {
    if affordance.enabled {
        Span::styled(symbol, style.navigation_style)
    } else {
        Span::styled(symbol, style.disabled_style)
    }
}
