//! Application Context
//!
//! The board signal plus the plumbing that runs handlers against storage and
//! schedules their delayed work. Built once in `App` and shared via the
//! Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::board::BoardState;
use crate::handlers;
use crate::models::Deferred;
use crate::storage::{BrowserStorage, MemoryStorage, StorageBackend, TodoStore};

#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Everything the page renders
    board: RwSignal<BoardState>,
    /// Session-only storage used when localStorage cannot be opened
    fallback: StoredValue<MemoryStorage>,
}

impl TodoContext {
    pub fn new() -> Self {
        Self {
            board: RwSignal::new(BoardState::new()),
            fallback: StoredValue::new(MemoryStorage::new()),
        }
    }

    pub fn board(&self) -> RwSignal<BoardState> {
        self.board
    }

    /// Run a handler against the board and storage, then schedule whatever
    /// it deferred
    fn dispatch<F>(&self, handler: F)
    where
        F: FnOnce(&mut BoardState, &mut TodoStore<&mut dyn StorageBackend>) -> Vec<Deferred>,
    {
        let deferred = match BrowserStorage::open() {
            Ok(mut browser) => self.run(handler, &mut browser),
            Err(err) => {
                log::warn!(target: "storage", "{}; keeping todos for this session only", err);
                let mut memory = self.fallback.get_value();
                let deferred = self.run(handler, &mut memory);
                self.fallback.set_value(memory);
                deferred
            }
        };

        for action in deferred {
            self.schedule(action);
        }
    }

    fn run<F>(&self, handler: F, backend: &mut dyn StorageBackend) -> Vec<Deferred>
    where
        F: FnOnce(&mut BoardState, &mut TodoStore<&mut dyn StorageBackend>) -> Vec<Deferred>,
    {
        let mut store = TodoStore::new(backend);
        self.board
            .try_update(|board| handler(board, &mut store))
            .unwrap_or_default()
    }

    /// Fire-and-forget timer. Once the board is disposed `try_update` does
    /// nothing, and each action re-checks its target itself.
    fn schedule(&self, action: Deferred) {
        let board = self.board;
        Timeout::new(action.delay_ms(), move || {
            board.try_update(|board| board.run_deferred(action));
        })
        .forget();
    }

    // ========================
    // Intents
    // ========================

    pub fn load(&self) {
        self.dispatch(|board, store| handlers::load(board, store));
    }

    pub fn submit(&self) {
        self.dispatch(|board, store| handlers::submit(board, store));
    }

    pub fn delete(&self, row_id: u64) {
        self.dispatch(move |board, store| handlers::delete_row(board, store, row_id));
    }

    pub fn clear_all(&self) {
        self.dispatch(|board, store| handlers::clear_all(board, store));
    }

    pub fn filter(&self, value: String) {
        self.board.update(|board| handlers::filter(board, &value));
    }

    pub fn set_input(&self, value: String) {
        self.board.update(|board| board.set_input(value));
    }
}

pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
