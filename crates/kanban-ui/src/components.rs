mod dashboard;
mod detail_modal;
mod kanban_board;
mod kanban_card;
mod kanban_column;
mod page_header;
mod sidebar;
mod task_card_body;
mod task_modal;

use kanban_shared::TaskPriority;

pub use dashboard::Dashboard;
pub use detail_modal::DetailModal;
pub use kanban_board::KanbanBoard;
use kanban_card::KanbanCard;
use kanban_column::KanbanColumn;
pub use page_header::PageHeader;
pub use sidebar::Sidebar;
use task_card_body::TaskCardBody;
pub use task_modal::TaskModal;

fn priority_class(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::High => "priority-high",
    | TaskPriority::Medium => {
      "priority-medium"
    }
    | TaskPriority::Low => "priority-low",
    | TaskPriority::Unrecognized => {
      "priority-unknown"
    }
  }
}
