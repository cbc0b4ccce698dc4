use super::Workbench;
use crate::panel::Action;
use crate::tree::Origin;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

mod dialogs;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);

    let header_area = chunks[0];
    let tree_area = chunks[1];
    let status_area = chunks[2];

    workbench.render_header(frame, header_area);
    workbench.render_tree(frame, tree_area);
    workbench.render_status(frame, status_area);

    dialogs::render_picker(workbench, frame, area);
    dialogs::render_input_dialog(workbench, frame, area);
    dialogs::render_confirm_dialog(workbench, frame, area);
    dialogs::render_context_menu(workbench, frame, area);

    if let Some((x, y)) = cursor_position(workbench) {
        frame.set_cursor_position((x, y));
    }
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    if workbench.store.state().ui.input_dialog.visible {
        return dialogs::input_dialog_cursor(workbench);
    }
    None
}

impl Workbench {
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "njwaptree - NJWAP Project Explorer",
            Style::default().fg(self.theme.header_fg),
        )];
        let roots = match self.store.state().config.as_ref() {
            Some(config) => format!(
                "client {} | server {}",
                config.client_root.display(),
                config.server_root.display()
            ),
            None => "roots not configured".to_string(),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(roots, Style::default().fg(self.theme.muted_fg)));
        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn render_tree(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // The reducer needs the viewport height for paging and scroll clamps.
        let _ = self.dispatch_kernel(Action::ExplorerSetViewHeight {
            height: area.height as usize,
        });

        let Workbench {
            store,
            explorer,
            theme,
            ..
        } = self;
        let state = store.state();
        explorer.render(
            frame,
            area,
            &state.explorer.rows,
            &state.explorer.expanded,
            state.explorer.selected,
            state.explorer.scroll_offset,
            theme,
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some(status) = self.store.state().ui.status.as_deref() {
            let message = Paragraph::new(Span::styled(
                status.to_string(),
                Style::default().fg(self.theme.error_fg),
            ));
            frame.render_widget(message, area);
            return;
        }

        let state = self.store.state();
        let text = match (state.config.as_ref(), state.explorer.selected_row()) {
            (Some(config), Some(row)) => {
                let origin = match row.origin {
                    Origin::Project => "project",
                    Origin::Server => "server",
                };
                format!("{} | {} | m menu", row.project_path(config), origin)
            }
            _ => format!("{} items | m menu", state.explorer.rows.len()),
        };
        frame.render_widget(Paragraph::new(text), area);
    }
}
