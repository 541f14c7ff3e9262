use raylib::prelude::*;

use crate::constants::*;
use crate::viewer::{Layout, draw_text_centered};

const LINE_SPACING: f32 = 1.25;
const BLOCK_GAP: f32 = 16.0;

/// One pre-authored slide: a title used for listings plus the blocks drawn
/// top to bottom inside the card.
pub struct Slide {
    title: &'static str,
    blocks: Vec<Block>,
}

pub enum Block {
    Title(&'static str),
    Subtitle(&'static str),
    Caption(&'static str),
    Bullets(Vec<&'static str>),
    Definitions(Vec<Definition>),
    Exchange(Exchange),
    Roles(Roles),
    ConceptMap(ConceptMap),
}

pub struct Definition {
    pub term: &'static str,
    pub text: &'static str,
    pub wide: bool, // spans both columns
}

pub struct Party {
    pub name: &'static str,
    pub example: &'static str,
    pub fill: Color,
    pub accent: Color,
}

pub struct Message {
    pub caption: &'static str,
    pub fields: Vec<&'static str>,
    pub color: Color,
    pub highlight: Option<usize>, // field drawn in the message colour
}

/// Requester and responder trading a request and a response.
pub struct Exchange {
    pub requester: Party,
    pub responder: Party,
    pub request: Message,
    pub response: Message,
}

#[derive(Clone, Copy)]
pub enum Icon {
    Server,
    Chip,
}

pub struct Role {
    pub icon: Icon,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Roles {
    pub left: Role,
    pub link: &'static str,
    pub right: Role,
}

pub enum PanelDetail {
    Text(&'static str),
    Stack(Vec<(&'static str, Color)>),
}

pub struct Panel {
    pub heading: &'static str,
    pub name: &'static str,
    pub detail: PanelDetail,
}

/// Four panels in reading order (top-left, top-right, bottom-left,
/// bottom-right) joined by the labelled steps 1->2, 2->3 and 3->4.
pub struct ConceptMap {
    pub panels: [Panel; 4],
    pub steps: [&'static str; 3],
}

impl Slide {
    pub fn new(title: &'static str, blocks: Vec<Block>) -> Self {
        Self { title, blocks }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Draw every block inside `area`, the stack vertically centered.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, layout: &Layout) {
        let gap = BLOCK_GAP * layout.scale;
        let heights: Vec<f32> = self
            .blocks()
            .iter()
            .map(|block| block.height(area.width, layout))
            .collect();
        let total: f32 = heights.iter().sum::<f32>() + gap * heights.len().saturating_sub(1) as f32;

        let mut y = area.y + ((area.height - total) / 2.0).max(0.0);
        for (block, height) in self.blocks().iter().zip(heights) {
            block.draw(d, Rectangle::new(area.x, y, area.width, height), layout);
            y += height + gap;
        }
    }
}

impl Block {
    fn height(&self, width: f32, layout: &Layout) -> f32 {
        let s = layout.scale;
        match self {
            Block::Title(text) => text_height(text, width, layout.font(FONT_TITLE)),
            Block::Subtitle(text) => text_height(text, width, layout.font(FONT_SUBTITLE)),
            Block::Caption(text) => text_height(text, width, layout.font(FONT_SMALL)),
            Block::Bullets(items) => {
                let size = layout.font(FONT_BODY);
                let text_width = bullet_width(width, layout) - BULLET_INDENT * s;
                items.iter().map(|item| text_height(item, text_width, size)).sum::<f32>()
                    + BULLET_GAP * s * items.len().saturating_sub(1) as f32
            }
            Block::Definitions(entries) => definition_rows(entries, width, layout)
                .iter()
                .map(|row| row.height)
                .sum(),
            Block::Exchange(_) => EXCHANGE_HEIGHT * s,
            Block::Roles(roles) => {
                let column = role_column_width(width, layout);
                let size = layout.font(FONT_SMALL);
                let tallest = text_height(roles.left.description, column, size)
                    .max(text_height(roles.right.description, column, size));
                ROLE_ICON * s + 12.0 * s + layout.font(FONT_SUBTITLE) as f32 * LINE_SPACING + 6.0 * s + tallest
            }
            Block::ConceptMap(_) => CONCEPT_MAP_HEIGHT * s,
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle, layout: &Layout) {
        match self {
            Block::Title(text) => {
                draw_wrapped_centered(d, text, area, layout.font(FONT_TITLE), ACCENT);
            }
            Block::Subtitle(text) => {
                draw_wrapped_centered(d, text, area, layout.font(FONT_SUBTITLE), TEXT_SOFT);
            }
            Block::Caption(text) => {
                draw_wrapped_centered(d, text, area, layout.font(FONT_SMALL), TEXT_MUTED);
            }
            Block::Bullets(items) => draw_bullets(d, items, area, layout),
            Block::Definitions(entries) => draw_definitions(d, entries, area, layout),
            Block::Exchange(exchange) => draw_exchange(d, exchange, area, layout),
            Block::Roles(roles) => draw_roles(d, roles, area, layout),
            Block::ConceptMap(map) => draw_concept_map(d, map, area, layout),
        }
    }
}

// --- Text helpers ---

/// Greedy word wrap. A single word wider than `max_width` keeps its own line.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn line_height(size: i32) -> f32 {
    size as f32 * LINE_SPACING
}

fn wrap(text: &str, width: f32, size: i32) -> Vec<String> {
    wrap_text(text, width as i32, |s| measure_text(s, size))
}

fn text_height(text: &str, width: f32, size: i32) -> f32 {
    wrap(text, width, size).len() as f32 * line_height(size)
}

fn draw_wrapped_centered(d: &mut RaylibDrawHandle, text: &str, area: Rectangle, size: i32, color: Color) -> f32 {
    let center_x = area.x + area.width / 2.0;
    let mut y = area.y;
    for line in wrap(text, area.width, size) {
        draw_text_centered(d, &line, center_x, y, size, color);
        y += line_height(size);
    }
    y - area.y
}

fn draw_wrapped_left(d: &mut RaylibDrawHandle, text: &str, area: Rectangle, size: i32, color: Color) -> f32 {
    let mut y = area.y;
    for line in wrap(text, area.width, size) {
        d.draw_text(&line, area.x as i32, y as i32, size, color);
        y += line_height(size);
    }
    y - area.y
}

// --- Bullets ---

const BULLET_MAX_WIDTH: f32 = 900.0;
const BULLET_INDENT: f32 = 24.0;
const BULLET_GAP: f32 = 16.0;

fn bullet_width(width: f32, layout: &Layout) -> f32 {
    width.min(BULLET_MAX_WIDTH * layout.scale)
}

fn draw_bullets(d: &mut RaylibDrawHandle, items: &[&str], area: Rectangle, layout: &Layout) {
    let s = layout.scale;
    let size = layout.font(FONT_BODY);
    let width = bullet_width(area.width, layout);
    let x = area.x + (area.width - width) / 2.0;
    let indent = BULLET_INDENT * s;

    let mut y = area.y;
    for item in items {
        d.draw_circle_v(
            Vector2::new(x + indent / 3.0, y + size as f32 / 2.0),
            3.0 * s,
            TEXT_SOFT,
        );
        let text_area = Rectangle::new(x + indent, y, width - indent, 0.0);
        y += draw_wrapped_left(d, item, text_area, size, TEXT_SOFT) + BULLET_GAP * s;
    }
}

// --- Definitions ---

struct DefinitionRow<'a> {
    entries: Vec<&'a Definition>,
    height: f32,
}

const DEFINITION_GAP: f32 = 24.0;
const DEFINITION_ROW_GAP: f32 = 10.0;

fn definition_text(entry: &Definition) -> String {
    format!("{}: {}", entry.term, entry.text)
}

fn definition_rows<'a>(entries: &'a [Definition], width: f32, layout: &Layout) -> Vec<DefinitionRow<'a>> {
    let s = layout.scale;
    let size = layout.font(FONT_SMALL);
    let column = (width - DEFINITION_GAP * s) / 2.0;

    let mut rows: Vec<DefinitionRow<'a>> = Vec::new();
    let mut pending: Vec<&'a Definition> = Vec::new();
    let flush = |pending: &mut Vec<&'a Definition>, rows: &mut Vec<DefinitionRow<'a>>| {
        if pending.is_empty() {
            return;
        }
        let height = pending
            .iter()
            .map(|entry| text_height(&definition_text(entry), column, size))
            .fold(0.0, f32::max);
        rows.push(DefinitionRow {
            entries: std::mem::take(pending),
            height: height + DEFINITION_ROW_GAP * s,
        });
    };

    for entry in entries {
        if entry.wide {
            flush(&mut pending, &mut rows);
            let height = text_height(&definition_text(entry), width, size);
            rows.push(DefinitionRow {
                entries: vec![entry],
                height: height + DEFINITION_ROW_GAP * s,
            });
        } else {
            pending.push(entry);
            if pending.len() == 2 {
                flush(&mut pending, &mut rows);
            }
        }
    }
    flush(&mut pending, &mut rows);
    rows
}

fn draw_definitions(d: &mut RaylibDrawHandle, entries: &[Definition], area: Rectangle, layout: &Layout) {
    let s = layout.scale;
    let size = layout.font(FONT_SMALL);
    let column = (area.width - DEFINITION_GAP * s) / 2.0;

    let mut y = area.y;
    for row in definition_rows(entries, area.width, layout) {
        for (i, entry) in row.entries.iter().enumerate() {
            let (x, width) = if entry.wide {
                (area.x, area.width)
            } else {
                (area.x + i as f32 * (column + DEFINITION_GAP * s), column)
            };
            draw_wrapped_left(d, &definition_text(entry), Rectangle::new(x, y, width, 0.0), size, TEXT_SOFT);
            // Same font and origin, so the term lands exactly over the first line
            d.draw_text(&format!("{}:", entry.term), x as i32, y as i32, size, ACCENT);
        }
        y += row.height;
    }
}

// --- Message exchange diagram ---

const EXCHANGE_HEIGHT: f32 = 170.0;
const PARTY_WIDTH: f32 = 160.0;
const PARTY_HEIGHT: f32 = 72.0;

fn draw_party(d: &mut RaylibDrawHandle, party: &Party, center_x: f32, top: f32, layout: &Layout) {
    let s = layout.scale;
    let width = PARTY_WIDTH * s;
    let height = PARTY_HEIGHT * s;
    let rect = Rectangle::new(center_x - width / 2.0, top, width, height);
    d.draw_rectangle_rounded(rect, 0.2, 8, party.fill);

    let name_size = layout.font(FONT_SUBTITLE);
    draw_text_centered(d, party.name, center_x, top + (height - name_size as f32) / 2.0, name_size, TEXT);

    let small = layout.font(FONT_SMALL);
    let mut y = top + height + 6.0 * s;
    draw_text_centered(d, party.example, center_x, y, small, TEXT_MUTED);
    y += line_height(small);
    draw_text_centered(d, "A PLDM Terminus", center_x, y, small, party.accent);
}

fn draw_message(d: &mut RaylibDrawHandle, message: &Message, area: Rectangle, layout: &Layout) {
    let s = layout.scale;
    let caption = layout.font(FONT_SMALL);
    draw_text_centered(d, message.caption, area.x + area.width / 2.0, area.y, caption, message.color);

    let strip = Rectangle::new(
        area.x,
        area.y + line_height(caption),
        area.width,
        area.height - line_height(caption),
    );
    d.draw_rectangle_rec(strip, SURFACE_RAISED);
    d.draw_rectangle_lines_ex(strip, 2.0 * s, message.color);

    // Fixed fields are sized to their text, the last field takes the rest
    let size = layout.font(FONT_MONO);
    let pad = 8.0 * s;
    let mut x = strip.x;
    for (i, field) in message.fields.iter().enumerate() {
        let last = i + 1 == message.fields.len();
        let width = if last {
            strip.x + strip.width - x
        } else {
            measure_text(field, size) as f32 + 2.0 * pad
        };
        let color = if message.highlight == Some(i) { message.color } else { TEXT_SOFT };
        d.draw_text(
            field,
            (x + pad) as i32,
            (strip.y + (strip.height - size as f32) / 2.0) as i32,
            size,
            color,
        );
        if !last {
            d.draw_line_ex(
                Vector2::new(x + width, strip.y),
                Vector2::new(x + width, strip.y + strip.height),
                1.0,
                message.color.fade(0.5),
            );
        }
        x += width;
    }
}

fn draw_exchange(d: &mut RaylibDrawHandle, exchange: &Exchange, area: Rectangle, layout: &Layout) {
    let s = layout.scale;
    let side = PARTY_WIDTH * s / 2.0 + 16.0 * s;
    let top = area.y + 10.0 * s;
    draw_party(d, &exchange.requester, area.x + side, top, layout);
    draw_party(d, &exchange.responder, area.x + area.width - side, top, layout);

    let lane_x = area.x + 2.0 * side + 8.0 * s;
    let lane_width = (area.width - 4.0 * side - 16.0 * s).max(1.0);
    let lane_height = 56.0 * s;
    draw_message(
        d,
        &exchange.request,
        Rectangle::new(lane_x, area.y, lane_width, lane_height),
        layout,
    );
    draw_message(
        d,
        &exchange.response,
        Rectangle::new(lane_x, area.y + lane_height + 24.0 * s, lane_width, lane_height),
        layout,
    );
}

// --- Roles diagram ---

const ROLE_ICON: f32 = 96.0;
const ROLE_COLUMN: f32 = 300.0;

fn role_column_width(width: f32, layout: &Layout) -> f32 {
    (ROLE_COLUMN * layout.scale).min(width / 3.0)
}

fn draw_icon(d: &mut RaylibDrawHandle, icon: Icon, center: Vector2, size: f32, color: Color) {
    let thick = (size / 24.0).max(1.5);
    match icon {
        Icon::Server => {
            let unit = size / 3.4;
            for i in 0..3 {
                let rect = Rectangle::new(
                    center.x - size / 2.0,
                    center.y - size / 2.0 + i as f32 * (unit + size * 0.05),
                    size,
                    unit,
                );
                d.draw_rectangle_lines_ex(rect, thick, color);
                d.draw_circle_v(
                    Vector2::new(rect.x + rect.width - unit / 2.0, rect.y + unit / 2.0),
                    unit / 8.0,
                    color,
                );
            }
        }
        Icon::Chip => {
            let body = size * 0.6;
            let rect = Rectangle::new(center.x - body / 2.0, center.y - body / 2.0, body, body);
            d.draw_rectangle_lines_ex(rect, thick, color);
            let core = body * 0.45;
            d.draw_rectangle_lines_ex(
                Rectangle::new(center.x - core / 2.0, center.y - core / 2.0, core, core),
                thick,
                color,
            );
            let pin = (size - body) / 2.0;
            for i in 0..4 {
                let offset = -body / 2.0 + body * (i as f32 + 0.5) / 4.0;
                // top, bottom, left, right pins
                d.draw_line_ex(
                    Vector2::new(center.x + offset, rect.y - pin),
                    Vector2::new(center.x + offset, rect.y),
                    thick,
                    color,
                );
                d.draw_line_ex(
                    Vector2::new(center.x + offset, rect.y + body),
                    Vector2::new(center.x + offset, rect.y + body + pin),
                    thick,
                    color,
                );
                d.draw_line_ex(
                    Vector2::new(rect.x - pin, center.y + offset),
                    Vector2::new(rect.x, center.y + offset),
                    thick,
                    color,
                );
                d.draw_line_ex(
                    Vector2::new(rect.x + body, center.y + offset),
                    Vector2::new(rect.x + body + pin, center.y + offset),
                    thick,
                    color,
                );
            }
        }
    }
}

fn draw_role(d: &mut RaylibDrawHandle, role: &Role, center_x: f32, top: f32, layout: &Layout) {
    let s = layout.scale;
    let icon = ROLE_ICON * s;
    draw_icon(d, role.icon, Vector2::new(center_x, top + icon / 2.0), icon * 0.8, ACCENT);

    let name_size = layout.font(FONT_SUBTITLE);
    let mut y = top + icon + 12.0 * s;
    draw_text_centered(d, role.name, center_x, y, name_size, TEXT);
    y += line_height(name_size) + 6.0 * s;

    let width = role_column_width(layout.content().width, layout);
    draw_wrapped_centered(
        d,
        role.description,
        Rectangle::new(center_x - width / 2.0, y, width, 0.0),
        layout.font(FONT_SMALL),
        TEXT_MUTED,
    );
}

fn draw_roles(d: &mut RaylibDrawHandle, roles: &Roles, area: Rectangle, layout: &Layout) {
    let s = layout.scale;
    let column = role_column_width(area.width, layout);
    let left_x = area.x + area.width / 2.0 - column - 40.0 * s;
    let right_x = area.x + area.width / 2.0 + column + 40.0 * s;
    draw_role(d, &roles.left, left_x, area.y, layout);
    draw_role(d, &roles.right, right_x, area.y, layout);

    let mid_y = area.y + ROLE_ICON * s / 2.0;
    let from = Vector2::new(left_x + column / 2.0 + 8.0 * s, mid_y);
    let to = Vector2::new(right_x - column / 2.0 - 8.0 * s, mid_y);
    draw_arrow(d, from, to, 3.0 * s, ACCENT);
    let size = layout.font(FONT_SMALL);
    draw_text_centered(d, roles.link, (from.x + to.x) / 2.0, mid_y - size as f32 - 10.0 * s, size, ACCENT);
}

// --- Concept map diagram ---

const CONCEPT_MAP_HEIGHT: f32 = 370.0;

fn draw_panel(d: &mut RaylibDrawHandle, panel: &Panel, rect: Rectangle, layout: &Layout) {
    let s = layout.scale;
    d.draw_rectangle_rounded(rect, 0.08, 8, SURFACE_RAISED.fade(0.5));
    d.draw_rectangle_lines_ex(rect, 1.0, BORDER_MUTED.fade(0.6));

    let heading = layout.font(FONT_SUBTITLE);
    let name = layout.font(FONT_BODY);
    let small = layout.font(FONT_SMALL);
    let center_x = rect.x + rect.width / 2.0;
    let inner = rect.width - 24.0 * s;

    let detail_height = match &panel.detail {
        PanelDetail::Text(text) => text_height(text, inner, small),
        PanelDetail::Stack(rows) => rows.len() as f32 * line_height(small) + 12.0 * s,
    };
    let content = line_height(heading) + line_height(name) + 8.0 * s + detail_height;
    let mut y = rect.y + ((rect.height - content) / 2.0).max(6.0 * s);

    draw_text_centered(d, panel.heading, center_x, y, heading, ACCENT);
    y += line_height(heading);
    draw_text_centered(d, panel.name, center_x, y, name, TEXT);
    y += line_height(name) + 8.0 * s;

    match &panel.detail {
        PanelDetail::Text(text) => {
            draw_wrapped_centered(
                d,
                text,
                Rectangle::new(center_x - inner / 2.0, y, inner, 0.0),
                small,
                TEXT_MUTED,
            );
        }
        PanelDetail::Stack(rows) => {
            let width = inner.min(260.0 * s);
            let frame = Rectangle::new(center_x - width / 2.0, y, width, detail_height);
            d.draw_rectangle_rec(frame, BACKGROUND.fade(0.3));
            d.draw_rectangle_lines_ex(frame, 1.0, BORDER_MUTED);
            let mut row_y = y + 6.0 * s;
            for (i, (text, color)) in rows.iter().enumerate() {
                draw_text_centered(d, text, center_x, row_y, small, *color);
                row_y += line_height(small);
                // Rule between the header row and the rest, like a package layout
                if i == 0 && rows.len() > 1 {
                    d.draw_line_ex(
                        Vector2::new(frame.x + 4.0 * s, row_y - 3.0 * s),
                        Vector2::new(frame.x + frame.width - 4.0 * s, row_y - 3.0 * s),
                        1.0,
                        BORDER_MUTED,
                    );
                }
            }
        }
    }
}

fn draw_concept_map(d: &mut RaylibDrawHandle, map: &ConceptMap, area: Rectangle, layout: &Layout) {
    let s = layout.scale;
    let gap_x = 64.0 * s;
    let gap_y = 40.0 * s;
    let width = (area.width - gap_x) / 2.0;
    let height = (area.height - gap_y) / 2.0;

    let cells = [
        Rectangle::new(area.x, area.y, width, height),
        Rectangle::new(area.x + width + gap_x, area.y, width, height),
        Rectangle::new(area.x, area.y + height + gap_y, width, height),
        Rectangle::new(area.x + width + gap_x, area.y + height + gap_y, width, height),
    ];
    for (panel, cell) in map.panels.iter().zip(cells.iter()) {
        draw_panel(d, panel, *cell, layout);
    }

    let size = layout.font(FONT_SMALL);
    let thick = 2.0 * s;

    // 1 -> 2 across the top row
    let top_y = cells[0].y + height / 2.0;
    let from = Vector2::new(cells[0].x + width + 4.0 * s, top_y);
    let to = Vector2::new(cells[1].x - 4.0 * s, top_y);
    draw_arrow(d, from, to, thick, ACCENT);
    draw_text_centered(d, map.steps[0], from.x - 90.0 * s, top_y - size as f32 - 8.0 * s, size, TEXT_MUTED);

    // 2 -> 3 doubling back through the gap between the rows
    let lane_y = cells[0].y + height + gap_y / 2.0;
    let start = Vector2::new(cells[1].x + width / 2.0, cells[1].y + height);
    let corner_a = Vector2::new(start.x, lane_y);
    let corner_b = Vector2::new(cells[2].x + width / 2.0, lane_y);
    let end = Vector2::new(corner_b.x, cells[2].y);
    let dash = 8.0 * s;
    draw_dashed(d, start, corner_a, dash, thick, ACCENT);
    draw_dashed(d, corner_a, corner_b, dash, thick, ACCENT);
    draw_dashed(d, corner_b, end, dash, thick, ACCENT);
    draw_arrow_head(d, corner_b, end, thick, ACCENT);
    draw_text_centered(
        d,
        map.steps[1],
        area.x + area.width / 2.0,
        lane_y - size as f32 - 4.0 * s,
        size,
        TEXT_MUTED,
    );

    // 3 -> 4 across the bottom row
    let bottom_y = cells[2].y + height / 2.0;
    let from = Vector2::new(cells[2].x + width + 4.0 * s, bottom_y);
    let to = Vector2::new(cells[3].x - 4.0 * s, bottom_y);
    draw_arrow(d, from, to, thick, ACCENT);
    draw_text_centered(d, map.steps[2], from.x - 90.0 * s, bottom_y - size as f32 - 8.0 * s, size, TEXT_MUTED);
}

// --- Arrows ---

fn draw_arrow(d: &mut RaylibDrawHandle, from: Vector2, to: Vector2, thick: f32, color: Color) {
    d.draw_line_ex(from, to, thick, color);
    draw_arrow_head(d, from, to, thick, color);
}

fn draw_arrow_head(d: &mut RaylibDrawHandle, from: Vector2, to: Vector2, thick: f32, color: Color) {
    let [left, right] = arrow_head(from, to, thick * 4.0);
    d.draw_line_ex(left, to, thick, color);
    d.draw_line_ex(right, to, thick, color);
}

/// The two barb endpoints of an arrow pointing from `from` to `to`.
pub fn arrow_head(from: Vector2, to: Vector2, length: f32) -> [Vector2; 2] {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        return [to, to];
    }
    let (ux, uy) = (dx / norm, dy / norm);
    // Barbs sit 30 degrees either side of the shaft
    let (sin, cos) = (0.5_f32, 0.866_025_4_f32);
    let back_x = -ux * length;
    let back_y = -uy * length;
    [
        Vector2::new(to.x + back_x * cos - back_y * sin, to.y + back_x * sin + back_y * cos),
        Vector2::new(to.x + back_x * cos + back_y * sin, to.y - back_x * sin + back_y * cos),
    ]
}

fn draw_dashed(d: &mut RaylibDrawHandle, from: Vector2, to: Vector2, dash: f32, thick: f32, color: Color) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 || dash <= 0.0 {
        return;
    }
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        d.draw_line_ex(
            Vector2::new(from.x + dx * t / length, from.y + dy * t / length),
            Vector2::new(from.x + dx * end / length, from.y + dy * end / length),
            thick,
            color,
        );
        t += dash * 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Monospace stand-in: every character is 10 pixels wide
    fn mono(s: &str) -> i32 {
        s.len() as i32 * 10
    }

    #[test]
    fn test_wrap_fits_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 100, mono);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|line| mono(line) <= 100));
    }

    #[test]
    fn test_wrap_single_line_when_it_fits() {
        assert_eq!(wrap_text("What is PLDM?", 500, mono), vec!["What is PLDM?"]);
    }

    #[test]
    fn test_wrap_empty_and_blank() {
        assert!(wrap_text("", 100, mono).is_empty());
        assert!(wrap_text("   ", 100, mono).is_empty());
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap_text("a DSP0267-compliant device", 50, mono);
        assert_eq!(lines, vec!["a", "DSP0267-compliant", "device"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_text("Update   Agent\n(UA)", 500, mono), vec!["Update Agent (UA)"]);
    }

    #[test]
    fn test_arrow_head_points_back_along_shaft() {
        let [left, right] = arrow_head(Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0), 10.0);
        assert!(left.x < 100.0 && right.x < 100.0);
        assert!((left.y + right.y).abs() < 1e-4);
        assert!((left.x - right.x).abs() < 1e-4);
    }

    #[test]
    fn test_arrow_head_degenerate() {
        let p = Vector2::new(5.0, 5.0);
        assert_eq!(arrow_head(p, p, 10.0), [p, p]);
    }

    #[test]
    fn test_slide_exposes_title_and_blocks() {
        let slide = Slide::new("Intro", vec![Block::Title("Intro"), Block::Caption("hello")]);
        assert_eq!(slide.title(), "Intro");
        assert_eq!(slide.blocks().len(), 2);
    }
}
