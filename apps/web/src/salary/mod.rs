// Salary conversion core.
// Pure, request-scoped functions shared by the HTML pages and the calculator widget API.
// Nothing in here touches I/O or application state.

pub mod content;
pub mod converter;
pub mod format;
pub mod jobs;
pub mod page;
pub mod related;
pub mod slug;
pub mod widget;
