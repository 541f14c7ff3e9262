use raylib::prelude::*;

use crate::constants::*;
use crate::controller::CurrentSlide;
use crate::input::NavButton;
use crate::slide::Slide;

/// Screen geometry for one window size. Pure, so it can be computed and
/// hit-tested without a window.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
    pub header: Rectangle,
    pub card: Rectangle,
    pub indicator: Rectangle,
    pub previous_button: Vector2,
    pub next_button: Vector2,
    pub button_radius: f32,
    pub footer: Rectangle,
}

impl Layout {
    pub fn compute(width: i32, height: i32) -> Self {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;
        let scale = (height / REFERENCE_HEIGHT)
            .min(width / WINDOW_WIDTH as f32)
            .clamp(0.5, 3.0);

        let header = Rectangle::new(0.0, 0.0, width, HEADER_HEIGHT * scale);
        let footer_height = FOOTER_HEIGHT * scale;
        let footer = Rectangle::new(0.0, height - footer_height, width, footer_height);

        // Navigation sits at the bottom of the main area, under the card
        let nav_height = NAV_BAR_HEIGHT * scale;
        let nav_center_y = footer.y - nav_height / 2.0;
        let center_x = width / 2.0;

        let indicator_width = NAV_INDICATOR_WIDTH * scale;
        let indicator = Rectangle::new(
            center_x - indicator_width / 2.0,
            nav_center_y - nav_height / 2.0,
            indicator_width,
            nav_height,
        );

        let button_radius = NAV_BUTTON_RADIUS * scale;
        let button_offset = indicator_width / 2.0 + NAV_SPACING * scale + button_radius;
        let previous_button = Vector2::new(center_x - button_offset, nav_center_y);
        let next_button = Vector2::new(center_x + button_offset, nav_center_y);

        let margin = CARD_MARGIN * scale;
        let card_width = (width - 2.0 * margin).min(CARD_MAX_WIDTH * scale).max(1.0);
        let card_top = header.height + margin;
        let card_bottom = indicator.y;
        let card = Rectangle::new(
            center_x - card_width / 2.0,
            card_top,
            card_width,
            (card_bottom - card_top).max(1.0),
        );

        Self {
            width,
            height,
            scale,
            header,
            card,
            indicator,
            previous_button,
            next_button,
            button_radius,
            footer,
        }
    }

    /// Which navigation button, if any, sits under `point`.
    pub fn button_at(&self, point: Vector2) -> Option<NavButton> {
        let hit = |center: Vector2| {
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            dx * dx + dy * dy <= self.button_radius * self.button_radius
        };

        if hit(self.previous_button) {
            Some(NavButton::Previous)
        } else if hit(self.next_button) {
            Some(NavButton::Next)
        } else {
            None
        }
    }

    /// Font size for a size authored at the reference height.
    pub fn font(&self, size: f32) -> i32 {
        ((size * self.scale).round() as i32).max(MIN_FONT)
    }

    /// Area available to slide content inside the card.
    pub fn content(&self) -> Rectangle {
        let padding = CARD_PADDING * self.scale;
        Rectangle::new(
            self.card.x + padding,
            self.card.y + padding,
            (self.card.width - 2.0 * padding).max(1.0),
            (self.card.height - 2.0 * padding).max(1.0),
        )
    }
}

pub struct Viewer {
    layout: Layout,
}

impl Viewer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            layout: Layout::compute(width, height),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Recompute geometry when the window size changed.
    pub fn resize(&mut self, width: i32, height: i32) {
        if self.layout.width != width.max(1) as f32 || self.layout.height != height.max(1) as f32 {
            self.layout = Layout::compute(width, height);
        }
    }

    pub fn render_frame(
        &self,
        d: &mut RaylibDrawHandle,
        current: &CurrentSlide<'_, Slide>,
        mouse: Vector2,
    ) {
        let layout = &self.layout;
        d.clear_background(BACKGROUND);

        // --- Header ---
        d.draw_rectangle_rec(layout.header, SURFACE);
        d.draw_line_ex(
            Vector2::new(0.0, layout.header.height),
            Vector2::new(layout.width, layout.header.height),
            1.0,
            BORDER,
        );
        let title_size = layout.font(FONT_APP_TITLE);
        d.draw_text(
            APP_TITLE,
            (16.0 * layout.scale) as i32,
            ((layout.header.height - title_size as f32) / 2.0) as i32,
            title_size,
            ACCENT,
        );

        // --- Slide card ---
        d.draw_rectangle_rounded(layout.card, 0.04, 12, SURFACE);
        d.draw_rectangle_lines_ex(layout.card, 1.0, BORDER);
        current.slide.draw(d, layout.content(), layout);

        // --- Navigation ---
        let hovered = layout.button_at(mouse);
        draw_nav_button(d, layout, NavButton::Previous, hovered == Some(NavButton::Previous));
        draw_nav_button(d, layout, NavButton::Next, hovered == Some(NavButton::Next));

        let indicator = current.indicator();
        let indicator_size = layout.font(FONT_INDICATOR);
        draw_text_centered(
            d,
            &indicator,
            layout.indicator.x + layout.indicator.width / 2.0,
            layout.indicator.y + (layout.indicator.height - indicator_size as f32) / 2.0,
            indicator_size,
            TEXT_MUTED,
        );

        if let Some(button) = hovered {
            let label_size = layout.font(FONT_SMALL);
            let anchor = match button {
                NavButton::Previous => layout.previous_button,
                NavButton::Next => layout.next_button,
            };
            draw_text_centered(
                d,
                button.label(),
                anchor.x,
                anchor.y - layout.button_radius - label_size as f32 - 6.0,
                label_size,
                TEXT_SOFT,
            );
        }

        // --- Footer ---
        let footer_size = layout.font(FONT_FOOTER);
        draw_text_centered(
            d,
            FOOTER_HINT,
            layout.width / 2.0,
            layout.footer.y + (layout.footer.height - footer_size as f32) / 2.0,
            footer_size,
            TEXT_FAINT,
        );
    }
}

fn draw_nav_button(d: &mut RaylibDrawHandle, layout: &Layout, button: NavButton, hovered: bool) {
    let center = match button {
        NavButton::Previous => layout.previous_button,
        NavButton::Next => layout.next_button,
    };
    let fill = if hovered { ACCENT_HOVER } else { BUTTON };
    d.draw_circle_v(center, layout.button_radius, fill);

    // Chevron drawn as two strokes meeting at the tip
    let arm = layout.button_radius * 0.35;
    let direction = match button {
        NavButton::Previous => -1.0,
        NavButton::Next => 1.0,
    };
    let tip = Vector2::new(center.x + direction * arm * 0.5, center.y);
    let tail_x = tip.x - direction * arm;
    let thick = 2.5 * layout.scale;
    d.draw_line_ex(Vector2::new(tail_x, center.y - arm), tip, thick, TEXT);
    d.draw_line_ex(Vector2::new(tail_x, center.y + arm), tip, thick, TEXT);
}

/// Draw `text` horizontally centered on `center_x`, top edge at `y`.
pub fn draw_text_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    center_x: f32,
    y: f32,
    size: i32,
    color: Color,
) {
    let width = measure_text(text, size);
    d.draw_text(text, center_x as i32 - width / 2, y as i32, size, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_scale_is_one() {
        let layout = Layout::compute(WINDOW_WIDTH, WINDOW_HEIGHT);
        assert!((layout.scale - 1.0).abs() < f32::EPSILON);
        assert_eq!(layout.font(FONT_BODY), 18);
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let layout = Layout::compute(1280, 720);
        assert!(layout.header.y + layout.header.height <= layout.card.y);
        assert!(layout.card.y + layout.card.height <= layout.indicator.y + 0.5);
        assert!(layout.indicator.y + layout.indicator.height <= layout.footer.y + 0.5);
    }

    #[test]
    fn test_buttons_flank_indicator() {
        let layout = Layout::compute(1280, 720);
        assert!(layout.previous_button.x < layout.indicator.x);
        assert!(layout.next_button.x > layout.indicator.x + layout.indicator.width);
        assert_eq!(layout.previous_button.y, layout.next_button.y);
    }

    #[test]
    fn test_button_hit_testing() {
        let layout = Layout::compute(1280, 720);
        assert_eq!(layout.button_at(layout.previous_button), Some(NavButton::Previous));
        assert_eq!(layout.button_at(layout.next_button), Some(NavButton::Next));

        let edge = Vector2::new(
            layout.next_button.x + layout.button_radius - 1.0,
            layout.next_button.y,
        );
        assert_eq!(layout.button_at(edge), Some(NavButton::Next));

        let outside = Vector2::new(
            layout.next_button.x + layout.button_radius + 1.0,
            layout.next_button.y,
        );
        assert_eq!(layout.button_at(outside), None);
        assert_eq!(layout.button_at(Vector2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_indicator_is_not_a_button() {
        let layout = Layout::compute(1280, 720);
        let center = Vector2::new(
            layout.indicator.x + layout.indicator.width / 2.0,
            layout.indicator.y + layout.indicator.height / 2.0,
        );
        assert_eq!(layout.button_at(center), None);
    }

    #[test]
    fn test_card_width_is_capped() {
        let layout = Layout::compute(3840, 720);
        assert!(layout.card.width <= CARD_MAX_WIDTH * layout.scale + 0.5);
        let middle = layout.card.x + layout.card.width / 2.0;
        assert!((middle - 1920.0).abs() < 0.5);
    }

    #[test]
    fn test_tiny_window_keeps_positive_geometry() {
        let layout = Layout::compute(0, 0);
        assert!(layout.card.width >= 1.0);
        assert!(layout.card.height >= 1.0);
        assert!(layout.font(FONT_FOOTER) >= MIN_FONT);
        let content = layout.content();
        assert!(content.width >= 1.0 && content.height >= 1.0);
    }

    #[test]
    fn test_resize_recomputes_layout() {
        let mut viewer = Viewer::new(1280, 720);
        viewer.resize(1920, 1080);
        assert_eq!(viewer.layout().width, 1920.0);
        assert!((viewer.layout().scale - 1.5).abs() < 1e-4);
    }
}
