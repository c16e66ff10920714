//! Headless interaction logic shared by the `ui_kit` component library.
//!
//! This crate owns the parts of the component set that are real state machines rather than
//! markup: sortable table derivation, single-active selection with deferred close, and the
//! keyboard mapping shared by tab strips, dropdown triggers, and disclosure groups. Nothing
//! here touches the DOM or a timer; the selection controller returns effects that a host
//! executes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod keyboard;
pub mod selection;
pub mod table;

pub use keyboard::{map_key, wrap_index, KeyAction, NavKey, SelectionBehavior};
pub use selection::{
    CloseTicket, SelectionConfig, SelectionController, SelectionEffect, SelectionError,
    SelectionEvent, SelectionMode, TransitionDirection, DEFAULT_CLOSE_DELAY,
};
pub use table::{
    BodyRow, CellValue, Column, HeaderCell, Row, RowError, SortDirection, SortKey, SortState,
    TableModel, EMPTY_MESSAGE, MISSING_PLACEHOLDER, UNSORTED_INDICATOR,
};
