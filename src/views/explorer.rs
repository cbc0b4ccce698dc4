//! 项目树浏览器视图（纯渲染）

use crate::app::theme::UiTheme;
use crate::tree::{NodeKey, TreeNode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use rustc_hash::FxHashSet;

pub struct ExplorerView {
    area: Option<Rect>,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn view_height(&self) -> Option<usize> {
        let area = self.area?;
        Some(area.height as usize)
    }

    /// Maps a screen position to a row index, honoring the scroll window.
    /// `None` outside the rendered tree area.
    pub fn hit_test_row(&self, column: u16, row: u16, scroll_offset: usize) -> Option<usize> {
        let area = self.area?;
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        if row < area.y || row >= area.y + area.height {
            return None;
        }

        Some((row - area.y) as usize + scroll_offset)
    }

    fn render_row(
        &self,
        row: &TreeNode,
        is_expanded: bool,
        is_selected: bool,
        theme: &UiTheme,
    ) -> Line<'static> {
        let indent = "  ".repeat(row.depth as usize);
        let is_dir = row.kind.is_directory();
        let icon = if is_dir {
            if is_expanded {
                "▼ "
            } else {
                "▶ "
            }
        } else {
            "  "
        };

        let text = format!("{}{}{}", indent, icon, row.title());

        let style = if is_selected {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
        } else if is_dir {
            Style::default().fg(theme.accent_fg)
        } else {
            Style::default().fg(theme.popup_fg)
        };

        Line::from(Span::styled(text, style))
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[TreeNode],
        expanded: &FxHashSet<NodeKey>,
        selected: Option<usize>,
        scroll_offset: usize,
        theme: &UiTheme,
    ) {
        self.area = Some(area);

        let visible_height = area.height as usize;
        let visible_end = (scroll_offset + visible_height).min(rows.len());
        let scroll_offset = scroll_offset.min(visible_end);

        let lines: Vec<Line> = rows[scroll_offset..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                let index = scroll_offset + offset;
                let is_expanded = expanded.contains(&row.key());
                self.render_row(row, is_expanded, selected == Some(index), theme)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
