use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Create a single line for a task
/// Format: [x] Buy milk   🗑 d
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    if task.done {
        spans.push(Span::raw("[x] ".to_string()));
        spans.push(Span::styled(task.title.clone(), done_style()));
        // Delete is only offered once a task is done
        spans.push(Span::styled("   🗑 d".to_string(), hint_style()));
    } else {
        spans.push(Span::raw("[ ] ".to_string()));
        spans.push(Span::raw(task.title.clone()));
    }

    Line::from(spans)
}

/// Render the task list in display order, scrolled to keep the selection visible
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = &app.state().tasks;

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_task_line(task)).style(style)
        })
        .collect();

    let open = tasks.len() - tasks.done_count();
    let title = format!(" Tasks ({} open, {} done) ", open, tasks.done_count());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    let mut list_state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_open_task_line() {
        let task = Task::new("Buy milk");
        let text = line_text(&create_task_line(&task));
        assert_eq!(text, "[ ] Buy milk");
    }

    #[test]
    fn test_done_task_line_offers_delete() {
        let task = Task::new("Buy milk").toggled();
        let line = create_task_line(&task);
        let text = line_text(&line);

        assert!(text.starts_with("[x] Buy milk"));
        assert!(text.contains("🗑"));
        assert_eq!(line.spans[1].style, done_style());
    }
}
