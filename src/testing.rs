//! In-memory backend for unit tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{CreateTodoArgs, UpdateOrderArgs};
use crate::error::{ApiError, ApiResult};
use crate::models::{CurrentUser, Item, Priority};
use crate::reorder::TodoBackend;
use crate::session::SessionBackend;

pub fn make_item(id: u32, priority: Priority, order: u32) -> Item {
    Item {
        id,
        user_id: 1,
        username: String::new(),
        title: format!("Item {}", id),
        completed: false,
        deleted: false,
        priority,
        order,
    }
}

#[derive(Default)]
pub struct MockBackend {
    todos: Vec<Item>,
    user: Option<CurrentUser>,
    fail: Cell<bool>,
    calls: RefCell<Vec<String>>,
    orders: RefCell<Vec<UpdateOrderArgs>>,
}

impl MockBackend {
    pub fn with_todos(todos: Vec<Item>) -> Self {
        Self { todos, ..Default::default() }
    }

    pub fn with_user(user: Option<CurrentUser>) -> Self {
        Self { user, ..Default::default() }
    }

    /// Make every mutating call answer 500
    pub fn fail_mutations(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn orders(&self) -> Vec<UpdateOrderArgs> {
        self.orders.borrow().clone()
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            Err(ApiError::from_status(500, "boom"))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl TodoBackend for MockBackend {
    async fn list_todos(&self) -> ApiResult<Vec<Item>> {
        self.calls.borrow_mut().push("list".to_string());
        Ok(self.todos.clone())
    }

    async fn list_completed_todos(&self) -> ApiResult<Vec<Item>> {
        self.calls.borrow_mut().push("list-completed".to_string());
        Ok(self.todos.iter().filter(|i| i.deleted).cloned().collect())
    }

    async fn create_todo(&self, args: &CreateTodoArgs<'_>) -> ApiResult<Item> {
        self.record(format!("create {} {}", args.title, args.priority as u8))?;
        let mut item = make_item(100, args.priority, 0);
        item.title = args.title.to_string();
        Ok(item)
    }

    async fn toggle_todo(&self, id: u32) -> ApiResult<()> {
        self.record(format!("toggle {}", id))
    }

    async fn mark_todo_deleted(&self, id: u32) -> ApiResult<()> {
        self.record(format!("mark-deleted {}", id))
    }

    async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        self.record(format!("delete {}", id))
    }

    async fn update_todo_order(&self, args: &UpdateOrderArgs) -> ApiResult<()> {
        self.orders.borrow_mut().push(args.clone());
        self.record(format!("update-order {} {}", args.todo_id, args.order))
    }
}

#[async_trait(?Send)]
impl SessionBackend for MockBackend {
    async fn current_user(&self) -> ApiResult<CurrentUser> {
        self.calls.borrow_mut().push("current-user".to_string());
        self.user
            .clone()
            .ok_or_else(|| ApiError::from_status(401, "unauthorized"))
    }
}
